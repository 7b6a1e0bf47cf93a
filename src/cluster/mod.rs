//! Cluster analysis module

pub mod detection;
pub mod disjoint_set;
pub mod metrics;

pub use disjoint_set::DisjointSetUnion;

use serde::{Deserialize, Serialize};

use metrics::ClusterSummary;

/// A viral cluster: a connected community of interacting users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// 1-based identifier, assigned in descending size order
    pub id: u32,

    /// User handles, sorted
    pub members: Vec<String>,

    /// Size of the cluster
    pub size: usize,

    /// Distinct interactions between members
    pub interactions: usize,

    /// Density: interactions / potential undirected edges
    pub density: f64,
}

impl Cluster {
    /// First `count` members followed by an ellipsis when truncated
    pub fn preview(&self, count: usize) -> String {
        let shown = self.members.iter().take(count).map(String::as_str).collect::<Vec<_>>();
        let mut preview = shown.join(", ");
        if self.members.len() > count {
            preview.push_str("...");
        }
        preview
    }
}

/// Result of a clustering run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterReport {
    /// Clusters sorted by size, largest first
    pub clusters: Vec<Cluster>,

    /// Aggregate statistics
    pub summary: ClusterSummary,
}

impl ClusterReport {
    /// The most viral cluster, if any
    pub fn largest(&self) -> Option<&Cluster> {
        self.clusters.first()
    }
}
