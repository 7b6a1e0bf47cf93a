//! Graph construction module

use crate::data::InteractionSet;
use crate::graph::InteractionGraph;
use std::collections::HashMap;

/// Builder for incrementally constructing an InteractionGraph
pub struct InteractionGraphBuilder {
    /// Number of nodes
    node_count: usize,

    /// Mapping from user handles to node indices
    id_to_index: HashMap<String, u32>,

    /// Node handles
    node_ids: Vec<String>,

    /// Adjacency lists for each node
    adjacency_lists: Vec<Vec<u32>>,

    /// Raw interaction counts
    interaction_counts: Vec<u32>,
}

impl InteractionGraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            node_count: 0,
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
            interaction_counts: Vec::with_capacity(capacity),
        }
    }

    /// Build the graph for a normalized interaction set
    pub fn from_interactions(interactions: &InteractionSet) -> InteractionGraph {
        let mut builder = Self::with_capacity(interactions.len());
        for (user_a, user_b) in &interactions.pairs {
            builder.add_interaction(user_a, user_b);
        }
        builder.build()
    }

    /// Get or create a node index for the given handle
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.node_count as u32;
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());
        self.adjacency_lists.push(Vec::new());
        self.interaction_counts.push(0);
        self.node_count += 1;

        idx
    }

    /// Record an undirected interaction
    pub fn add_interaction(&mut self, user_a: &str, user_b: &str) {
        let a = self.get_or_create_node(user_a);
        let b = self.get_or_create_node(user_b);

        self.interaction_counts[a as usize] += 1;
        if a == b {
            return;
        }
        self.interaction_counts[b as usize] += 1;

        self.adjacency_lists[a as usize].push(b);
        self.adjacency_lists[b as usize].push(a);
    }

    /// Build the compressed graph
    pub fn build(mut self) -> InteractionGraph {
        for list in &mut self.adjacency_lists {
            // Sorted for binary search, deduplicated for repeat interactions
            list.sort_unstable();
            list.dedup();
        }

        let edge_count: usize = self.adjacency_lists.iter().map(Vec::len).sum();

        let mut offsets = Vec::with_capacity(self.node_count + 1);
        offsets.push(0);

        let mut offset = 0;
        for list in &self.adjacency_lists {
            offset += list.len() as u32;
            offsets.push(offset);
        }

        let mut edges = Vec::with_capacity(edge_count);
        for list in &self.adjacency_lists {
            edges.extend_from_slice(list);
        }

        log::debug!(
            "Built interaction graph with {} users and {} distinct edges",
            self.node_count,
            edge_count / 2
        );

        InteractionGraph {
            node_count: self.node_count,
            offsets,
            edges,
            node_ids: self.node_ids,
            interaction_counts: self.interaction_counts,
            id_to_index: self.id_to_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_follow_first_appearance() {
        let interactions = InteractionSet {
            pairs: vec![
                ("carol".into(), "alice".into()),
                ("alice".into(), "bob".into()),
            ],
        };
        let graph = InteractionGraphBuilder::from_interactions(&interactions);
        assert_eq!(graph.node_ids, vec!["carol", "alice", "bob"]);
        assert_eq!(graph.offsets, vec![0, 1, 3, 4]);
    }

    #[test]
    fn self_interaction_adds_no_edge() {
        let mut builder = InteractionGraphBuilder::with_capacity(1);
        builder.add_interaction("solo", "solo");
        let graph = builder.build();
        assert_eq!(graph.node_count, 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.interaction_counts, vec![1]);
    }
}
