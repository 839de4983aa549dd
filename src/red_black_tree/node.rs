use crate::arena::Handle;
use crate::entry::Entry;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing a slot of a red black tree. Real nodes carry an entry; the sentinel
/// does not.
pub struct Node<T, U> {
    pub entry: Option<Entry<T, U>>,
    pub color: Color,
    pub left: Handle,
    pub right: Handle,
    pub parent: Handle,
}

impl<T, U> Node<T, U> {
    /// Creates a red leaf whose links all point at `nil`.
    pub fn new(key: T, value: U, nil: Handle) -> Self {
        Node {
            entry: Some(Entry { key, value }),
            color: Color::Red,
            left: nil,
            right: nil,
            parent: nil,
        }
    }

    /// Creates the black, keyless node that stands in for every absent child.
    pub fn sentinel(nil: Handle) -> Self {
        Node {
            entry: None,
            color: Color::Black,
            left: nil,
            right: nil,
            parent: nil,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn entry(&self) -> &Entry<T, U> {
        self.entry
            .as_ref()
            .expect("Expected a real node, found the sentinel.")
    }

    pub fn entry_mut(&mut self) -> &mut Entry<T, U> {
        self.entry
            .as_mut()
            .expect("Expected a real node, found the sentinel.")
    }
}
