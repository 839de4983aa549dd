use crate::arena::Handle;
use crate::entry::Entry;
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::Tree;
use log::trace;
use std::borrow::Borrow;

impl<T, U> Tree<T, U> {
    pub fn remove<V>(&mut self, key: &V) -> Option<Entry<T, U>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let node = self.search(key);
        if node == self.nil() {
            return None;
        }
        Some(self.remove_at(node))
    }

    /// Removes the entry held in a real slot and rebalances. When the slot has two children its
    /// entry is exchanged with its successor's and the successor's slot is the one freed.
    pub fn remove_at(&mut self, node: Handle) -> Entry<T, U> {
        let nil = self.nil();
        assert!(node != nil, "Error: attempting to remove the sentinel.");

        let mut spliced = node;
        if self.left(node) != nil && self.right(node) != nil {
            spliced = self.minimum(self.right(node));
            trace!("promoting successor {:?} into {:?}", spliced, node);
            let successor_entry = self[spliced].entry.take();
            let doomed_entry = std::mem::replace(&mut self[node].entry, successor_entry);
            self[spliced].entry = doomed_entry;
        }

        let child = if self.left(spliced) != nil {
            self.left(spliced)
        } else {
            self.right(spliced)
        };
        let parent = self.parent(spliced);
        self.replace_child(parent, spliced, child);

        let removed = self.free(spliced);
        if removed.is_red() || self.is_red(child) {
            if child != nil {
                self.set_color(child, Color::Black);
            }
        } else {
            self.remove_fixup(child, parent);
        }

        removed
            .entry
            .expect("Expected removed node to hold an entry.")
    }

    // `node` carries an extra black. It may be the sentinel, so its parent is tracked here rather
    // than read from the sentinel's links.
    fn remove_fixup(&mut self, mut node: Handle, mut parent: Handle) {
        let nil = self.nil();
        loop {
            if parent == nil {
                trace!("remove case 1: {:?} is the root", node);
                break;
            }
            if self.is_red(node) {
                break;
            }

            let node_is_left = self.left(parent) == node;
            let mut sibling = self.sibling(parent, node_is_left);

            if self.is_red(sibling) {
                trace!("remove case 2: sibling {:?} is red", sibling);
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate_toward(parent, node_is_left);
                sibling = self.sibling(parent, node_is_left);
            }
            assert!(sibling != nil, "Expected a double black node to have a real sibling.");

            let (near, far) = if node_is_left {
                (self.left(sibling), self.right(sibling))
            } else {
                (self.right(sibling), self.left(sibling))
            };

            if !self.is_red(near) && !self.is_red(far) {
                trace!("remove case 3: nephews of {:?} are black", node);
                self.set_color(sibling, Color::Red);
                node = parent;
                parent = self.parent(node);
                continue;
            }

            if !self.is_red(far) {
                trace!("remove case 5: near nephew {:?} is red", near);
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate_toward(sibling, !node_is_left);
                sibling = self.sibling(parent, node_is_left);
            }

            trace!("remove case 6: rotating parent {:?}", parent);
            let far = if node_is_left {
                self.right(sibling)
            } else {
                self.left(sibling)
            };
            let parent_color = self[parent].color;
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            self.set_color(far, Color::Black);
            self.rotate_toward(parent, node_is_left);
            return;
        }

        if node != nil {
            self.set_color(node, Color::Black);
        }
    }

    fn sibling(&self, parent: Handle, node_is_left: bool) -> Handle {
        if node_is_left {
            self.right(parent)
        } else {
            self.left(parent)
        }
    }

    // rotates so that `handle` moves down on the left side if `left` is set
    fn rotate_toward(&mut self, handle: Handle, left: bool) {
        if left {
            self.rotate_left(handle);
        } else {
            self.rotate_right(handle);
        }
    }
}
