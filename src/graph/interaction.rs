//! Compressed undirected interaction graph

use std::collections::HashMap;

/// Compressed sparse representation of the undirected interaction graph.
///
/// Each undirected edge is stored in both endpoints' adjacency lists, and
/// every list is sorted and free of duplicates.
#[derive(Debug, Clone)]
pub struct InteractionGraph {
    /// Number of users in the graph
    pub node_count: usize,

    /// Offset array: offsets[i] to offsets[i+1] is the neighbour range of node i
    pub offsets: Vec<u32>,

    /// Concatenated neighbour lists
    pub edges: Vec<u32>,

    /// Node index to user handle, in first-appearance order
    pub node_ids: Vec<String>,

    /// Raw interactions recorded per user, duplicates included
    pub interaction_counts: Vec<u32>,

    pub(crate) id_to_index: HashMap<String, u32>,
}

impl InteractionGraph {
    /// Neighbours of a node
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Check if two nodes interacted
    pub fn has_edge(&self, src: usize, dst: u32) -> bool {
        self.neighbors(src).binary_search(&dst).is_ok()
    }

    /// Number of distinct users a node interacted with
    pub fn degree(&self, node: usize) -> usize {
        (self.offsets[node + 1] - self.offsets[node]) as usize
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Node index of a user handle
    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.id_to_index.get(id).copied()
    }
}
