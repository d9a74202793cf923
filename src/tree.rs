//! A game tree stored as an arena of nodes
//!
//! Nodes refer to each other by [`NodeId`] rather than by reference: the tree
//! owns every node, children are listed by index and the parent index is only
//! followed upwards to measure depth.

use std::collections::VecDeque;

use crate::{board::BoardState, error::EngineError, minimax::Score};

/// Index of a node inside its [`SearchTree`]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    state: BoardState,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    // unset until the tree has been evaluated
    pub(crate) score: Option<Score>,
}

impl Node {
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }
}

/// A depth-limited game tree rooted at the position being decided
#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
    depth_limit: usize,
}

impl SearchTree {
    /// The root is always the first node of the arena
    pub const ROOT: NodeId = NodeId(0);

    /// Expands the tree breadth-first from `root_state` down to `depth_limit` moves
    ///
    /// Nodes at the depth limit are never expanded. Empty boards have no
    /// successors, so they end their branch early.
    pub fn build(root_state: BoardState, depth_limit: i32) -> Result<Self, EngineError> {
        if depth_limit < 0 {
            return Err(EngineError::InvalidParameter { depth: depth_limit });
        }
        let mut tree = Self {
            nodes: vec![Node {
                state: root_state,
                parent: None,
                children: Vec::new(),
                score: None,
            }],
            depth_limit: depth_limit as usize,
        };

        let mut queue = VecDeque::new();
        queue.push_back(Self::ROOT);
        while let Some(current) = queue.pop_front() {
            if tree.depth(current) >= tree.depth_limit {
                continue;
            }
            let next_states = tree.nodes[current.0].state.next_states();
            for child_state in next_states {
                let child = tree.add_node(child_state, current);
                queue.push_back(child);
            }
        }
        Ok(tree)
    }

    fn add_node(&mut self, state: BoardState, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            state,
            parent: Some(parent),
            children: Vec::new(),
            score: None,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    /// Total number of nodes in the tree, root included
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of parent links between `id` and the root
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Iterates over every node id in breadth-first order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }
}
