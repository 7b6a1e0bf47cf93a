//! Cluster statistics and metrics

use crate::cluster::Cluster;
use crate::graph::InteractionGraph;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::collections::HashSet;

/// Aggregate statistics over the reported clusters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub total_users: usize,
    pub total_interactions: usize,
    pub cluster_count: usize,
    pub largest_cluster_size: usize,
    pub smallest_cluster_size: usize,
    pub avg_cluster_size: f64,
    pub cluster_size_std_dev: f64,
    pub avg_density: f64,
    pub size_distribution: Vec<SizeBucket>,
}

/// Number of clusters whose size falls in a range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBucket {
    pub range: String,
    pub count: usize,
}

/// One row of the per-user export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRow {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Cluster_ID")]
    pub cluster_id: u32,
    #[serde(rename = "Cluster_Size")]
    pub cluster_size: usize,
}

impl ClusterSummary {
    /// Summarize clusters that are already sorted largest first
    pub fn from_clusters(total_users: usize, total_interactions: usize, clusters: &[Cluster]) -> Self {
        let sizes: Vec<f64> = clusters.iter().map(|c| c.size as f64).collect();

        // Empty input must not divide by zero
        let avg_cluster_size = if sizes.is_empty() { 0.0 } else { sizes.iter().mean() };
        let cluster_size_std_dev = if sizes.len() < 2 { 0.0 } else { sizes.iter().std_dev() };
        let avg_density = if clusters.is_empty() {
            0.0
        } else {
            clusters.iter().map(|c| c.density).mean()
        };

        Self {
            total_users,
            total_interactions,
            cluster_count: clusters.len(),
            largest_cluster_size: clusters.first().map_or(0, |c| c.size),
            smallest_cluster_size: clusters.last().map_or(0, |c| c.size),
            avg_cluster_size,
            cluster_size_std_dev,
            avg_density,
            size_distribution: size_distribution(clusters),
        }
    }
}

/// Bucket cluster sizes: 1-9, 10-19, ..., 90-99, 100+
pub fn size_distribution(clusters: &[Cluster]) -> Vec<SizeBucket> {
    let mut counts = [0usize; 11];

    for cluster in clusters {
        let bucket = if cluster.size >= 100 {
            10
        } else {
            cluster.size / 10
        };
        counts[bucket] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let range = match i {
                0 => "1-9".to_string(),
                10 => "100+".to_string(),
                _ => format!("{}-{}", i * 10, i * 10 + 9),
            };
            SizeBucket { range, count }
        })
        .collect()
}

/// Count distinct interactions between members of one cluster
pub fn count_internal_edges(graph: &InteractionGraph, members: &[String]) -> usize {
    let member_set: HashSet<u32> = members.iter().filter_map(|m| graph.index_of(m)).collect();

    member_set
        .iter()
        .map(|&node| {
            graph
                .neighbors(node as usize)
                .iter()
                // Count each undirected edge once
                .filter(|&&dst| node < dst && member_set.contains(&dst))
                .count()
        })
        .sum()
}

/// Density (actual edges / potential undirected edges)
pub fn calculate_density(size: usize, interactions: usize) -> f64 {
    if size <= 1 {
        return 1.0; // By convention, singleton clusters have density 1
    }

    let potential_edges = size * (size - 1) / 2;
    interactions as f64 / potential_edges as f64
}

/// Per-user export rows, sorted by cluster id then user
pub fn membership_rows(clusters: &[Cluster]) -> Vec<MembershipRow> {
    clusters
        .iter()
        .flat_map(|cluster| {
            cluster.members.iter().map(move |user| MembershipRow {
                user: user.clone(),
                cluster_id: cluster.id,
                cluster_size: cluster.size,
            })
        })
        .sorted_by(|a, b| a.cluster_id.cmp(&b.cluster_id).then_with(|| a.user.cmp(&b.user)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::InteractionGraphBuilder;

    fn cluster(id: u32, members: &[&str], density: f64) -> Cluster {
        Cluster {
            id,
            members: members.iter().map(|m| m.to_string()).collect(),
            size: members.len(),
            interactions: 0,
            density,
        }
    }

    #[test]
    fn summary_of_two_clusters() {
        let clusters = vec![
            cluster(1, &["A", "B", "C"], 2.0 / 3.0),
            cluster(2, &["D", "E"], 1.0),
        ];
        let summary = ClusterSummary::from_clusters(5, 3, &clusters);

        assert_eq!(summary.cluster_count, 2);
        assert_eq!(summary.largest_cluster_size, 3);
        assert_eq!(summary.smallest_cluster_size, 2);
        assert!((summary.avg_cluster_size - 2.5).abs() < 1e-9);
        assert!(summary.cluster_size_std_dev > 0.0);
        assert_eq!(summary.size_distribution[0].count, 2);
    }

    #[test]
    fn empty_summary_is_all_zero() {
        let summary = ClusterSummary::from_clusters(0, 0, &[]);
        assert_eq!(summary.cluster_count, 0);
        assert_eq!(summary.largest_cluster_size, 0);
        assert_eq!(summary.avg_cluster_size, 0.0);
        assert_eq!(summary.avg_density, 0.0);
        assert!(summary.size_distribution.iter().all(|b| b.count == 0));
    }

    #[test]
    fn distribution_buckets() {
        let big: Vec<String> = (0..120).map(|i| format!("u{}", i)).collect();
        let mid: Vec<String> = (0..15).map(|i| format!("v{}", i)).collect();
        let clusters = vec![
            Cluster { id: 1, size: big.len(), members: big, interactions: 0, density: 0.0 },
            Cluster { id: 2, size: mid.len(), members: mid, interactions: 0, density: 0.0 },
        ];

        let dist = size_distribution(&clusters);
        assert_eq!(dist.len(), 11);
        assert_eq!(dist[1].range, "10-19");
        assert_eq!(dist[1].count, 1);
        assert_eq!(dist[10].range, "100+");
        assert_eq!(dist[10].count, 1);
    }

    #[test]
    fn internal_edges_and_density() {
        let mut builder = InteractionGraphBuilder::with_capacity(4);
        builder.add_interaction("A", "B");
        builder.add_interaction("B", "C");
        builder.add_interaction("C", "B");
        builder.add_interaction("D", "E");
        let graph = builder.build();

        let members: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let edges = count_internal_edges(&graph, &members);
        assert_eq!(edges, 2);
        assert!((calculate_density(3, edges) - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(calculate_density(1, 0), 1.0);
    }

    #[test]
    fn membership_rows_are_ordered() {
        let clusters = vec![cluster(1, &["C", "A"], 1.0), cluster(2, &["B"], 1.0)];
        let rows = membership_rows(&clusters);
        let users: Vec<_> = rows.iter().map(|r| (r.user.as_str(), r.cluster_id, r.cluster_size)).collect();
        assert_eq!(users, vec![("A", 1, 2), ("C", 1, 2), ("B", 2, 1)]);
    }
}
