//! Cluster detection

use anyhow::Result;
use itertools::Itertools;
use rayon::prelude::*;

use crate::cluster::metrics::{calculate_density, count_internal_edges, ClusterSummary};
use crate::cluster::{Cluster, ClusterReport, DisjointSetUnion};
use crate::config::Config;
use crate::data::InteractionSet;
use crate::graph::{algorithms, InteractionGraph};

/// Group users into disjoint clusters, one union per interaction
pub fn cluster_users(interactions: &InteractionSet) -> Result<Vec<Vec<String>>> {
    let users = interactions.users();
    let mut sets: DisjointSetUnion<&str> = users.iter().map(String::as_str).collect();

    log::debug!("Applying {} unions over {} users", interactions.len(), sets.len());

    for (user_a, user_b) in &interactions.pairs {
        sets.union(user_a.as_str(), user_b.as_str())?;
    }

    let groups = sets
        .get_clusters()
        .into_iter()
        .map(|group| group.into_iter().map(str::to_owned).collect())
        .collect();

    Ok(groups)
}

/// Find viral clusters and compute their statistics
pub fn find_viral_clusters(
    interactions: &InteractionSet,
    graph: &InteractionGraph,
    config: &Config,
) -> Result<ClusterReport> {
    log::info!("Finding viral clusters using union-find");

    let groups = cluster_users(interactions)?;
    let total_users: usize = groups.iter().map(Vec::len).sum();

    let traversal_count = algorithms::component_count(graph);
    if traversal_count != groups.len() {
        log::warn!(
            "Union-find produced {} clusters but graph traversal found {}",
            groups.len(),
            traversal_count
        );
    }

    // Stable sort keeps discovery order among equal sizes
    let groups: Vec<Vec<String>> = groups
        .into_iter()
        .sorted_by(|a, b| b.len().cmp(&a.len()))
        .filter(|members| members.len() >= config.min_cluster_size)
        .collect();

    log::info!(
        "Creating {} clusters with {} or more members",
        groups.len(),
        config.min_cluster_size
    );

    let clusters: Vec<Cluster> = groups
        .into_par_iter()
        .enumerate()
        .map(|(idx, mut members)| {
            members.sort_unstable();
            let interactions = count_internal_edges(graph, &members);
            Cluster {
                id: idx as u32 + 1,
                size: members.len(),
                density: calculate_density(members.len(), interactions),
                interactions,
                members,
            }
        })
        .collect();

    let summary = ClusterSummary::from_clusters(total_users, interactions.len(), &clusters);

    log::info!(
        "Found {} viral clusters, largest has {} users",
        summary.cluster_count,
        summary.largest_cluster_size
    );

    Ok(ClusterReport { clusters, summary })
}
