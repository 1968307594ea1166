use std::cmp::Ordering;

use crate::keys::KeyTrait;
use crate::node::Node;
use crate::partials::Partial;

/// Depth-first lexicographic iterator over a tree's key-value pairs.
///
/// The traversal visits a node's own value before its children and walks children in
/// ascending branch-byte order, so full keys come out in strict lexicographic order. All
/// traversal state lives here: a stack of per-node cursors plus the accumulated key bytes
/// for the current path.
pub struct Iter<'a, K: KeyTrait<PartialType = P>, P: Partial + 'a, V> {
    node_stack: Vec<Frame<'a, P, V>>,
    key_bytes: Vec<u8>,
    _marker: std::marker::PhantomData<K>,
}

struct Frame<'a, P: Partial, V> {
    node: &'a Node<P, V>,
    /// Length of the accumulated key up to and including this node's prefix.
    depth: usize,
    yielded_value: bool,
    /// Next branch byte candidate; anything above `u8::MAX` means exhausted.
    next_child: u16,
}

impl<'a, K: KeyTrait<PartialType = P>, P: Partial + 'a, V> Iter<'a, K, P, V> {
    pub(crate) fn new(root: Option<&'a Node<P, V>>) -> Self {
        let Some(root) = root else {
            return Self::empty();
        };

        let key_bytes = root.prefix.to_slice().to_vec();
        Self {
            node_stack: vec![Frame {
                node: root,
                depth: key_bytes.len(),
                yielded_value: false,
                next_child: 0,
            }],
            key_bytes,
            _marker: Default::default(),
        }
    }

    /// Build an iterator positioned at the smallest key >= `key`.
    ///
    /// Descends while the seek key and node prefixes agree. A node whose prefix orders
    /// before the corresponding seek bytes is pruned wholesale; one that orders after
    /// contributes its entire subtree, starting with its leftmost key.
    pub(crate) fn seek(root: Option<&'a Node<P, V>>, key: &K) -> Self {
        let Some(mut node) = root else {
            return Self::empty();
        };

        let mut node_stack: Vec<Frame<'a, P, V>> = Vec::new();
        let mut key_bytes = Vec::new();
        let mut depth = 0;

        loop {
            let prefix_len = node.prefix.len();
            let remaining = key.length_at(depth);

            let mut ord = Ordering::Equal;
            for i in 0..std::cmp::min(prefix_len, remaining) {
                ord = node.prefix.at(i).cmp(&key.at(depth + i));
                if ord != Ordering::Equal {
                    break;
                }
            }

            if ord == Ordering::Less {
                // Every key below this node precedes the seek key. The subtree is skipped;
                // the cursor already pushed for the parent resumes at the next sibling.
                break;
            }

            if ord == Ordering::Greater || remaining <= prefix_len {
                // Every key below this node follows the seek key (or equals it, when the
                // seek key ends exactly here), so the whole subtree is in range.
                key_bytes.extend_from_slice(node.prefix.to_slice());
                node_stack.push(Frame {
                    node,
                    depth: key_bytes.len(),
                    yielded_value: false,
                    next_child: 0,
                });
                break;
            }

            // The seek key continues below this node. The node's own key is a strict prefix
            // of the seek key, so its value is out of range; children below the next seek
            // byte are too.
            let branch = key.at(depth + prefix_len);
            key_bytes.extend_from_slice(node.prefix.to_slice());
            node_stack.push(Frame {
                node,
                depth: key_bytes.len(),
                yielded_value: true,
                next_child: branch as u16 + 1,
            });

            match node.seek_child(branch) {
                Some(child) => {
                    key_bytes.push(branch);
                    depth += prefix_len + 1;
                    node = child;
                }
                None => break,
            }
        }

        Self {
            node_stack,
            key_bytes,
            _marker: Default::default(),
        }
    }

    fn empty() -> Self {
        Self {
            node_stack: Vec::new(),
            key_bytes: Vec::new(),
            _marker: Default::default(),
        }
    }
}

impl<'a, K: KeyTrait<PartialType = P>, P: Partial + 'a, V> Iterator for Iter<'a, K, P, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.node_stack.last_mut()?;

            if !top.yielded_value {
                top.yielded_value = true;
                if let Some(value) = top.node.value.as_ref() {
                    return Some((K::new_from_slice(&self.key_bytes), value));
                }
            }

            let next = if top.next_child > u8::MAX as u16 {
                None
            } else {
                top.node.next_key(top.next_child as u8)
            };

            match next {
                Some(k) => {
                    top.next_child = k as u16 + 1;
                    let parent_depth = top.depth;
                    let child = top
                        .node
                        .seek_child(k)
                        .expect("corruption: enumerated child is missing");

                    self.key_bytes.truncate(parent_depth);
                    self.key_bytes.push(k);
                    self.key_bytes.extend_from_slice(child.prefix.to_slice());
                    self.node_stack.push(Frame {
                        node: child,
                        depth: self.key_bytes.len(),
                        yielded_value: false,
                        next_child: 0,
                    });
                }
                None => {
                    self.node_stack.pop();
                    if let Some(parent) = self.node_stack.last() {
                        self.key_bytes.truncate(parent.depth);
                    }
                }
            }
        }
    }
}
