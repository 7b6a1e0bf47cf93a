//! Graph algorithms for analysis

use crate::graph::InteractionGraph;
use petgraph::graph::{NodeIndex, UnGraph};

/// Convert to a petgraph undirected graph, node weights are user handles
pub fn to_petgraph(graph: &InteractionGraph) -> UnGraph<&str, ()> {
    let mut pg = UnGraph::with_capacity(graph.node_count, graph.edge_count());

    for id in &graph.node_ids {
        pg.add_node(id.as_str());
    }

    for src in 0..graph.node_count {
        for &dst in graph.neighbors(src) {
            // Only add in one direction
            if (src as u32) < dst {
                pg.add_edge(NodeIndex::new(src), NodeIndex::new(dst as usize), ());
            }
        }
    }

    pg
}

/// Count connected components with a graph traversal independent of union-find
pub fn component_count(graph: &InteractionGraph) -> usize {
    petgraph::algo::connected_components(&to_petgraph(graph))
}
