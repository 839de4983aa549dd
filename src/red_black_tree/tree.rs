use crate::arena::{Handle, TypedArena};
use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

/// The arena-backed red black tree shared by `RedBlackMap` and `RedBlackSet`.
///
/// Every slot's `left`, `right`, and `parent` name another slot. Absent links name `nil`, a black
/// sentinel slot allocated with the tree whose own links point at itself. The sentinel is never
/// written to after construction, so it can be read freely from any fixup case.
pub struct Tree<T, U> {
    nodes: TypedArena<Node<T, U>>,
    root: Handle,
    nil: Handle,
    len: usize,
}

impl<T, U> Tree<T, U> {
    pub fn new(chunk_size: usize) -> Self {
        let mut nodes = TypedArena::new(chunk_size);
        let nil = nodes.allocate_with(Node::sentinel);
        Tree {
            nodes,
            root: nil,
            nil,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn chunk_size(&self) -> usize {
        self.nodes.chunk_size()
    }

    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len);
        *self = Tree::new(self.chunk_size());
    }

    pub fn root(&self) -> Handle {
        self.root
    }

    pub fn nil(&self) -> Handle {
        self.nil
    }

    pub fn left(&self, handle: Handle) -> Handle {
        self[handle].left
    }

    pub fn right(&self, handle: Handle) -> Handle {
        self[handle].right
    }

    pub fn parent(&self, handle: Handle) -> Handle {
        self[handle].parent
    }

    pub fn is_red(&self, handle: Handle) -> bool {
        self[handle].is_red()
    }

    pub fn set_color(&mut self, handle: Handle, color: Color) {
        assert!(handle != self.nil, "Error: attempting to recolor the sentinel.");
        self[handle].color = color;
    }

    pub fn entry(&self, handle: Handle) -> &Entry<T, U> {
        self[handle].entry()
    }

    pub fn entry_mut(&mut self, handle: Handle) -> &mut Entry<T, U> {
        self[handle].entry_mut()
    }

    pub fn key(&self, handle: Handle) -> &T {
        &self.entry(handle).key
    }

    pub(super) fn allocate(&mut self, key: T, value: U) -> Handle {
        let nil = self.nil;
        self.len += 1;
        self.nodes.allocate(Node::new(key, value, nil))
    }

    pub(super) fn free(&mut self, handle: Handle) -> Node<T, U> {
        assert!(handle != self.nil, "Error: attempting to free the sentinel.");
        self.len -= 1;
        self.nodes.free(&handle)
    }

    /// Makes `new` take the place of `old` under `parent`. `parent` may be `nil`, in which case
    /// `new` becomes the root.
    pub(super) fn replace_child(&mut self, parent: Handle, old: Handle, new: Handle) {
        if parent == self.nil {
            trace!("root moves from {:?} to {:?}", old, new);
            self.root = new;
        } else if self[parent].left == old {
            self[parent].left = new;
        } else {
            self[parent].right = new;
        }

        if new != self.nil {
            self[new].parent = parent;
        }
    }

    // precondition: `node` has a real right child
    pub fn rotate_left(&mut self, node: Handle) {
        let child = self.right(node);
        assert!(child != self.nil, "Expected right child node to be a real node.");
        trace!("rotating left at {:?}", node);

        let inner = self.left(child);
        self[node].right = inner;
        if inner != self.nil {
            self[inner].parent = node;
        }

        let parent = self.parent(node);
        self.replace_child(parent, node, child);
        self[child].left = node;
        self[node].parent = child;
    }

    // precondition: `node` has a real left child
    pub fn rotate_right(&mut self, node: Handle) {
        let child = self.left(node);
        assert!(child != self.nil, "Expected left child node to be a real node.");
        trace!("rotating right at {:?}", node);

        let inner = self.right(child);
        self[node].left = inner;
        if inner != self.nil {
            self[inner].parent = node;
        }

        let parent = self.parent(node);
        self.replace_child(parent, node, child);
        self[child].right = node;
        self[node].parent = child;
    }

    /// Returns the leftmost slot of the subtree rooted at `handle`, or `nil` for an empty subtree.
    pub fn minimum(&self, mut handle: Handle) -> Handle {
        if handle == self.nil {
            return handle;
        }
        while self.left(handle) != self.nil {
            handle = self.left(handle);
        }
        handle
    }

    /// Returns the rightmost slot of the subtree rooted at `handle`, or `nil` for an empty
    /// subtree.
    pub fn maximum(&self, mut handle: Handle) -> Handle {
        if handle == self.nil {
            return handle;
        }
        while self.right(handle) != self.nil {
            handle = self.right(handle);
        }
        handle
    }

    /// Returns the in-order successor of a real slot, or `nil` if it holds the largest key.
    pub fn next(&self, handle: Handle) -> Handle {
        if self.right(handle) != self.nil {
            return self.minimum(self.right(handle));
        }
        let mut child = handle;
        let mut parent = self.parent(handle);
        while parent != self.nil && self.right(parent) == child {
            child = parent;
            parent = self.parent(parent);
        }
        parent
    }

    /// Returns the in-order predecessor of a real slot, or `nil` if it holds the smallest key.
    pub fn prev(&self, handle: Handle) -> Handle {
        if self.left(handle) != self.nil {
            return self.maximum(self.left(handle));
        }
        let mut child = handle;
        let mut parent = self.parent(handle);
        while parent != self.nil && self.left(parent) == child {
            child = parent;
            parent = self.parent(parent);
        }
        parent
    }

    pub fn search<V>(&self, key: &V) -> Handle
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while curr != self.nil {
            match key.cmp(self.key(curr).borrow()) {
                Ordering::Less => curr = self.left(curr),
                Ordering::Greater => curr = self.right(curr),
                Ordering::Equal => break,
            }
        }
        curr
    }

    pub fn floor<V>(&self, key: &V) -> Handle
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut best = self.nil;
        while curr != self.nil {
            match key.cmp(self.key(curr).borrow()) {
                Ordering::Less => curr = self.left(curr),
                Ordering::Greater => {
                    best = curr;
                    curr = self.right(curr);
                },
                Ordering::Equal => return curr,
            }
        }
        best
    }

    pub fn ceil<V>(&self, key: &V) -> Handle
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut best = self.nil;
        while curr != self.nil {
            match key.cmp(self.key(curr).borrow()) {
                Ordering::Greater => curr = self.right(curr),
                Ordering::Less => {
                    best = curr;
                    curr = self.left(curr);
                },
                Ordering::Equal => return curr,
            }
        }
        best
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.root, 0)];
        while let Some((handle, depth)) = stack.pop() {
            if handle == self.nil {
                height = height.max(depth);
            } else {
                stack.push((self.left(handle), depth + 1));
                stack.push((self.right(handle), depth + 1));
            }
        }
        height
    }

    /// Number of black nodes on the leftmost root-to-leaf path, not counting the sentinel.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut curr = self.root;
        while curr != self.nil {
            if !self.is_red(curr) {
                count += 1;
            }
            curr = self.left(curr);
        }
        count
    }
}

impl<T, U> Index<Handle> for Tree<T, U> {
    type Output = Node<T, U>;

    fn index(&self, handle: Handle) -> &Self::Output {
        &self.nodes[handle]
    }
}

impl<T, U> IndexMut<Handle> for Tree<T, U> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        &mut self.nodes[handle]
    }
}
