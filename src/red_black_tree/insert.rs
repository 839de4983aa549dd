use crate::arena::Handle;
use crate::entry::Entry;
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::Tree;
use log::trace;
use std::cmp::Ordering;

impl<T, U> Tree<T, U>
where
    T: Ord,
{
    /// Inserts a key-value pair as a new red leaf and rebalances. If the key is already present
    /// the tree is left untouched and the slot holding the key is returned together with the
    /// rejected entry.
    pub fn insert(&mut self, key: T, value: U) -> Result<Handle, (Handle, Entry<T, U>)> {
        let nil = self.nil();
        let mut parent = nil;
        let mut curr = self.root();
        let mut ordering = Ordering::Equal;
        while curr != nil {
            parent = curr;
            ordering = key.cmp(self.key(curr));
            match ordering {
                Ordering::Less => curr = self.left(curr),
                Ordering::Greater => curr = self.right(curr),
                Ordering::Equal => return Err((curr, Entry { key, value })),
            }
        }

        let node = self.allocate(key, value);
        self[node].parent = parent;
        if parent == nil {
            self.replace_child(nil, nil, node);
        } else if ordering == Ordering::Less {
            self[parent].left = node;
        } else {
            self[parent].right = node;
        }

        self.insert_fixup(node);
        Ok(node)
    }

    fn insert_fixup(&mut self, mut node: Handle) {
        let nil = self.nil();
        loop {
            let parent = self.parent(node);
            if parent == nil {
                trace!("insert case 1: {:?} is the root", node);
                self.set_color(node, Color::Black);
                return;
            }

            if !self.is_red(parent) {
                trace!("insert case 2: parent {:?} is black", parent);
                return;
            }

            // a red parent is never the root, so the grandparent is a real node
            let grandparent = self.parent(parent);
            let parent_is_left = self.left(grandparent) == parent;
            let uncle = if parent_is_left {
                self.right(grandparent)
            } else {
                self.left(grandparent)
            };

            if self.is_red(uncle) {
                trace!("insert case 3: uncle {:?} is red", uncle);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            let node_is_left = self.left(parent) == node;
            if parent_is_left && !node_is_left {
                trace!("insert case 4: {:?} is an inner right child", node);
                self.rotate_left(parent);
                node = parent;
            } else if !parent_is_left && node_is_left {
                trace!("insert case 4: {:?} is an inner left child", node);
                self.rotate_right(parent);
                node = parent;
            }

            trace!("insert case 5: rotating grandparent {:?}", grandparent);
            let parent = self.parent(node);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            if parent_is_left {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::red_black_tree::node::Color;
    use crate::red_black_tree::tree::Tree;

    #[test]
    fn test_insert_root_is_black() {
        let mut tree = Tree::new(16);
        let node = tree.insert(1, ()).unwrap();
        assert_eq!(tree.root(), node);
        assert_eq!(tree[node].color, Color::Black);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_insert_black_parent() {
        let mut tree = Tree::new(16);
        let root = tree.insert(2, ()).unwrap();
        let left = tree.insert(1, ()).unwrap();
        let right = tree.insert(3, ()).unwrap();

        assert_eq!(tree.left(root), left);
        assert_eq!(tree.right(root), right);
        assert_eq!(tree[left].color, Color::Red);
        assert_eq!(tree[right].color, Color::Red);
    }

    #[test]
    fn test_insert_outer_case() {
        let mut tree = Tree::new(16);
        tree.insert(10, ()).unwrap();
        tree.insert(20, ()).unwrap();
        tree.insert(30, ()).unwrap();

        let root = tree.root();
        assert_eq!(*tree.key(root), 20);
        assert_eq!(tree[root].color, Color::Black);
        assert_eq!(*tree.key(tree.left(root)), 10);
        assert_eq!(*tree.key(tree.right(root)), 30);
        assert_eq!(tree[tree.left(root)].color, Color::Red);
        assert_eq!(tree[tree.right(root)].color, Color::Red);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_insert_inner_case() {
        let mut tree = Tree::new(16);
        tree.insert(30, ()).unwrap();
        tree.insert(10, ()).unwrap();
        tree.insert(20, ()).unwrap();

        let root = tree.root();
        assert_eq!(*tree.key(root), 20);
        assert_eq!(*tree.key(tree.left(root)), 10);
        assert_eq!(*tree.key(tree.right(root)), 30);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_insert_red_uncle() {
        let mut tree = Tree::new(16);
        for key in &[20, 10, 30, 5] {
            tree.insert(*key, ()).unwrap();
        }

        let root = tree.root();
        let left = tree.left(root);
        let right = tree.right(root);
        assert_eq!(tree[root].color, Color::Black);
        assert_eq!(tree[left].color, Color::Black);
        assert_eq!(tree[right].color, Color::Black);
        assert_eq!(tree[tree.left(left)].color, Color::Red);
        assert_eq!(tree.black_height(), 2);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = Tree::new(16);
        let node = tree.insert(1, 'a').unwrap();
        let (existing, rejected) = tree.insert(1, 'b').unwrap_err();

        assert_eq!(existing, node);
        assert_eq!(rejected.value, 'b');
        assert_eq!(tree.entry(node).value, 'a');
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_insert_ascending_stays_balanced() {
        let mut tree = Tree::new(16);
        for key in 0..1024 {
            tree.insert(key, ()).unwrap();
            assert!(tree.validate().is_ok());
        }
        assert!(tree.height() <= 20);
    }
}
