use crate::arena::Handle;
use crate::red_black_tree::tree::Tree;
use thiserror::Error;

/// A broken red black tree invariant, as reported by `validate`.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("the root is red")]
    RedRoot,
    #[error("the sentinel is not a black, keyless, self-linked node")]
    CorruptSentinel,
    #[error("red node in slot {slot} has a red child")]
    RedRedEdge { slot: usize },
    #[error("black heights below slot {slot} differ: {left} on the left, {right} on the right")]
    BlackHeightMismatch {
        slot: usize,
        left: usize,
        right: usize,
    },
    #[error("key in slot {slot} is not greater than its in-order predecessor")]
    OutOfOrder { slot: usize },
    #[error("slot {slot} does not link back to its parent")]
    BrokenParentLink { slot: usize },
    #[error("expected {expected} reachable nodes, found {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

struct Walk {
    count: usize,
    prev: Option<Handle>,
}

impl<T, U> Tree<T, U>
where
    T: Ord,
{
    /// Checks every structural invariant and returns the first violation found.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let nil = self.nil();
        let sentinel = &self[nil];
        if sentinel.is_red()
            || sentinel.entry.is_some()
            || sentinel.left != nil
            || sentinel.right != nil
            || sentinel.parent != nil
        {
            return Err(InvariantViolation::CorruptSentinel);
        }

        let root = self.root();
        if self.is_red(root) {
            return Err(InvariantViolation::RedRoot);
        }
        if root != nil && self.parent(root) != nil {
            return Err(InvariantViolation::BrokenParentLink { slot: root.slot() });
        }

        let mut walk = Walk {
            count: 0,
            prev: None,
        };
        self.validate_subtree(root, &mut walk)?;
        if walk.count != self.len() {
            return Err(InvariantViolation::SizeMismatch {
                expected: self.len(),
                actual: walk.count,
            });
        }
        Ok(())
    }

    // returns the black height of the subtree, counting the sentinel
    fn validate_subtree(
        &self,
        handle: Handle,
        walk: &mut Walk,
    ) -> Result<usize, InvariantViolation> {
        let nil = self.nil();
        if handle == nil {
            return Ok(1);
        }

        walk.count += 1;
        // also stops a walk that would loop forever on a cyclic tree
        if walk.count > self.len() {
            return Err(InvariantViolation::SizeMismatch {
                expected: self.len(),
                actual: walk.count,
            });
        }

        let node = &self[handle];
        for &child in &[node.left, node.right] {
            if child != nil && self.parent(child) != handle {
                return Err(InvariantViolation::BrokenParentLink { slot: child.slot() });
            }
        }
        if node.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(InvariantViolation::RedRedEdge {
                slot: handle.slot(),
            });
        }

        let left = self.validate_subtree(node.left, walk)?;
        if let Some(prev) = walk.prev {
            if self.entry(prev) >= node.entry() {
                return Err(InvariantViolation::OutOfOrder {
                    slot: handle.slot(),
                });
            }
        }
        walk.prev = Some(handle);
        let right = self.validate_subtree(node.right, walk)?;

        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                slot: handle.slot(),
                left,
                right,
            });
        }
        Ok(if node.is_red() { left } else { left + 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::InvariantViolation;
    use crate::arena::Handle;
    use crate::red_black_tree::node::Color;
    use crate::red_black_tree::tree::Tree;

    fn build(keys: &[u32]) -> Tree<u32, ()> {
        let mut tree = Tree::new(16);
        for key in keys {
            tree.insert(*key, ()).unwrap();
        }
        tree
    }

    // black height along the leftmost and the rightmost descending paths from `handle`
    fn path_black_heights(tree: &Tree<u32, ()>, handle: Handle) -> (usize, usize) {
        let count = |step: &dyn Fn(Handle) -> Handle| {
            let mut blacks = 0;
            let mut curr = handle;
            while curr != tree.nil() {
                if !tree.is_red(curr) {
                    blacks += 1;
                }
                curr = step(curr);
            }
            blacks
        };
        (count(&|h| tree.left(h)), count(&|h| tree.right(h)))
    }

    #[test]
    fn test_validate_empty() {
        let tree: Tree<u32, ()> = Tree::new(16);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn test_path_black_heights_agree() {
        let keys: Vec<u32> = (0..500).map(|i| (i * 211) % 500).collect();
        let mut tree = build(&keys);
        for key in keys.iter().step_by(3) {
            tree.remove(key).unwrap();
        }

        let mut stack = vec![tree.root()];
        while let Some(handle) = stack.pop() {
            if handle == tree.nil() {
                continue;
            }
            let (left, right) = path_black_heights(&tree, handle);
            assert_eq!(left, right);
            stack.push(tree.left(handle));
            stack.push(tree.right(handle));
        }
    }

    #[test]
    fn test_detect_red_root() {
        let mut tree = build(&[1, 2, 3]);
        let root = tree.root();
        tree.set_color(root, Color::Red);
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn test_detect_red_red_edge() {
        let mut tree = build(&[2, 1, 3, 4]);
        let three = tree.search(&3);
        tree.set_color(three, Color::Red);
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::RedRedEdge { slot: three.slot() }),
        );
    }

    #[test]
    fn test_detect_black_height_mismatch() {
        let mut tree = build(&[2, 1, 3]);
        let one = tree.search(&1);
        tree.set_color(one, Color::Black);
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::BlackHeightMismatch {
                slot: tree.root().slot(),
                left: 2,
                right: 1,
            }),
        );
    }

    #[test]
    fn test_detect_out_of_order() {
        let mut tree = build(&[2, 1, 3]);
        let one = tree.search(&1);
        tree.entry_mut(one).key = 5;
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::OutOfOrder {
                slot: tree.root().slot(),
            }),
        );
    }

    #[test]
    fn test_detect_broken_parent_link() {
        let mut tree = build(&[2, 1, 3]);
        let one = tree.search(&1);
        let three = tree.search(&3);
        tree[one].parent = three;
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::BrokenParentLink { slot: one.slot() }),
        );
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(InvariantViolation::RedRoot.to_string(), "the root is red");
        assert_eq!(
            InvariantViolation::SizeMismatch {
                expected: 2,
                actual: 3,
            }
            .to_string(),
            "expected 2 reachable nodes, found 3",
        );
    }
}
