use crate::mapping::direct_mapping::DirectMapping;
use crate::mapping::indexed_mapping::IndexedMapping;
use crate::mapping::sorted_keyed_mapping::SortedKeyedMapping;
use crate::mapping::NodeMapping;
use crate::partials::Partial;

/// A single tree node: a compressed prefix, an optional value for the key terminating here,
/// and a branch map from the next key byte to a child node. The value slot is independent of
/// the branch map, so a key and its strict prefixes can all be bound at once.
pub struct Node<P: Partial, V> {
    pub(crate) prefix: P,
    pub(crate) value: Option<V>,
    pub(crate) children: Children<P, V>,
}

/// Branch storage, graded by width. Nodes start `Empty` and climb the ladder one rung per
/// grow; deletes descend it again so that every node sits in the smallest form that holds
/// its children.
pub(crate) enum Children<P: Partial, V> {
    Empty,
    Node4(SortedKeyedMapping<Node<P, V>, 4>),
    Node16(SortedKeyedMapping<Node<P, V>, 16>),
    Node48(IndexedMapping<Node<P, V>, 48>),
    Node256(DirectMapping<Node<P, V>>),
}

impl<P: Partial, V> Node<P, V> {
    #[inline]
    pub(crate) fn new_leaf(prefix: P, value: V) -> Self {
        Self {
            prefix,
            value: Some(value),
            children: Children::Empty,
        }
    }

    #[inline]
    pub(crate) fn new_inner(prefix: P) -> Self {
        Self {
            prefix,
            value: None,
            children: Children::Node4(SortedKeyedMapping::new()),
        }
    }

    pub(crate) fn num_children(&self) -> usize {
        match &self.children {
            Children::Empty => 0,
            Children::Node4(m) => m.num_children(),
            Children::Node16(m) => m.num_children(),
            Children::Node48(m) => m.num_children(),
            Children::Node256(m) => m.num_children(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        match &self.children {
            Children::Empty => 0,
            Children::Node4(_) => 4,
            Children::Node16(_) => 16,
            Children::Node48(_) => 48,
            Children::Node256(_) => 256,
        }
    }

    pub(crate) fn seek_child(&self, key: u8) -> Option<&Self> {
        match &self.children {
            Children::Empty => None,
            Children::Node4(m) => m.seek_child(key),
            Children::Node16(m) => m.seek_child(key),
            Children::Node48(m) => m.seek_child(key),
            Children::Node256(m) => m.seek_child(key),
        }
    }

    pub(crate) fn seek_child_mut(&mut self, key: u8) -> Option<&mut Self> {
        match &mut self.children {
            Children::Empty => None,
            Children::Node4(m) => m.seek_child_mut(key),
            Children::Node16(m) => m.seek_child_mut(key),
            Children::Node48(m) => m.seek_child_mut(key),
            Children::Node256(m) => m.seek_child_mut(key),
        }
    }

    /// Attach `node` under `key`, climbing to the next branch width first when the current
    /// one is at capacity.
    pub(crate) fn add_child(&mut self, key: u8, node: Self) {
        if self.is_full() {
            self.grow();
        }

        match &mut self.children {
            Children::Node4(m) => m.add_child(key, node),
            Children::Node16(m) => m.add_child(key, node),
            Children::Node48(m) => m.add_child(key, node),
            Children::Node256(m) => m.add_child(key, node),
            Children::Empty => unreachable!("empty branch map grows before a child attaches"),
        }
    }

    /// Detach and return the child under `key`, shrinking the branch map when the child
    /// count falls to the capacity of the width below.
    pub(crate) fn delete_child(&mut self, key: u8) -> Option<Self> {
        let deleted = match &mut self.children {
            Children::Empty => None,
            Children::Node4(m) => m.delete_child(key),
            Children::Node16(m) => m.delete_child(key),
            Children::Node48(m) => m.delete_child(key),
            Children::Node256(m) => m.delete_child(key),
        }?;

        let shrunk = match &mut self.children {
            Children::Node4(m) if m.num_children() == 0 => Some(Children::Empty),
            Children::Node16(m) if m.num_children() <= 4 => {
                Some(Children::Node4(SortedKeyedMapping::from_resized(m)))
            }
            Children::Node48(m) if m.num_children() <= 16 => {
                Some(Children::Node16(SortedKeyedMapping::from_indexed(m)))
            }
            Children::Node256(m) if m.num_children() <= 48 => {
                Some(Children::Node48(IndexedMapping::from_direct(m)))
            }
            _ => None,
        };
        if let Some(children) = shrunk {
            self.children = children;
        }

        Some(deleted)
    }

    /// Smallest present branch byte >= `key`.
    pub(crate) fn next_key(&self, key: u8) -> Option<u8> {
        match &self.children {
            Children::Empty => None,
            Children::Node4(m) => m.next_key(key),
            Children::Node16(m) => m.next_key(key),
            Children::Node48(m) => m.next_key(key),
            Children::Node256(m) => m.next_key(key),
        }
    }

    pub(crate) fn first_key(&self) -> Option<u8> {
        self.next_key(0)
    }

    /// Detach the node's only child, returning it with the branch byte that led to it. The
    /// branch map collapses back to `Empty`.
    pub(crate) fn take_sole_child(&mut self) -> (u8, Self) {
        debug_assert_eq!(self.num_children(), 1);
        let key = self
            .first_key()
            .expect("corruption: sole-child lookup on a childless node");
        let child = self
            .delete_child(key)
            .expect("corruption: enumerated child is missing");
        (key, child)
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.num_children() >= self.capacity()
    }

    fn grow(&mut self) {
        let grown = match &mut self.children {
            Children::Empty => Children::Node4(SortedKeyedMapping::new()),
            Children::Node4(m) => Children::Node16(SortedKeyedMapping::from_resized(m)),
            Children::Node16(m) => Children::Node48(IndexedMapping::from_sorted(m)),
            Children::Node48(m) => Children::Node256(DirectMapping::from_indexed(m)),
            Children::Node256(_) => unreachable!("a 256-wide branch map cannot grow"),
        };
        self.children = grown;
    }
}
