//! Search nodes and the per-step [`Snapshot`] handed to the renderer.
//!
//! Nodes live in a [`NodeArena`] owned by the search process; everything
//! else refers to them through [`NodeId`]. Parent links form a forest: the
//! chain from any node to the node with no parent is the reconstructed walk.

use crate::geom::Point;

// ---------------------------------------------------------------------------
// NodeId / SearchNode / NodeArena
// ---------------------------------------------------------------------------

/// Identifier of a node inside a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

/// A search node: a grid position plus a back-link to the node it was
/// expanded from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub pos: Point,
    pub parent: Option<NodeId>,
}

/// Append-only node storage, owned by the search process.
///
/// The renderer only ever reads from the arena, for the duration of a
/// single draw pass.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its id.
    pub fn insert(&mut self, pos: Point, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode { pos, parent });
        id
    }

    /// Look up a node, or `None` for an id this arena never produced.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Mutable lookup, for re-parenting when the search relaxes a node.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SearchNode> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes inserted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One algorithm step's worth of search state.
///
/// Replaced wholesale on every update; the renderer never mutates it and a
/// draw pass reads exactly one snapshot value from start to finish. If
/// `start` is `None` the search has not begun and the remaining fields are
/// ignored for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Head of the walk: the node the search most recently expanded.
    pub start: Option<NodeId>,
    /// Where the search is heading. When absent, the renderer falls back to
    /// the map's gateway tile.
    pub destination: Option<NodeId>,
    /// Frontier nodes, in expansion order.
    pub open: Vec<NodeId>,
    /// Already-expanded nodes, in expansion order.
    pub closed: Vec<NodeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_insert_and_get() {
        let mut arena = NodeArena::new();
        let a = arena.insert(Point::new(0, 0), None);
        let b = arena.insert(Point::new(1, 1), Some(a));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).unwrap().pos, Point::new(0, 0));
        assert_eq!(arena.get(b).unwrap().parent, Some(a));
        assert!(arena.get(NodeId(99)).is_none());
    }

    #[test]
    fn parent_chain_walks_to_root() {
        let mut arena = NodeArena::new();
        let root = arena.insert(Point::new(0, 0), None);
        let mid = arena.insert(Point::new(1, 1), Some(root));
        let head = arena.insert(Point::new(2, 2), Some(mid));

        let mut walked = Vec::new();
        let mut cur = Some(head);
        while let Some(id) = cur {
            let node = arena.get(id).unwrap();
            walked.push(node.pos);
            cur = node.parent;
        }
        assert_eq!(
            walked,
            [Point::new(2, 2), Point::new(1, 1), Point::new(0, 0)]
        );
    }

    #[test]
    fn snapshot_default_is_not_started() {
        let snap = Snapshot::default();
        assert!(snap.start.is_none());
        assert!(snap.open.is_empty() && snap.closed.is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn snapshot_round_trip() {
        let snap = Snapshot {
            start: Some(NodeId(2)),
            destination: None,
            open: vec![NodeId(0), NodeId(1)],
            closed: vec![NodeId(2)],
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
