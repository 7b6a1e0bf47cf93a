//! Visualization generation module

use anyhow::Result;
use crate::cluster::ClusterReport;
use crate::config::Config;
use crate::graph::InteractionGraph;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const LARGEST_COLOR: &str = "orange";
const DEFAULT_COLOR: &str = "skyblue";

/// Generate visualizations from analysis results
pub fn generate_visualizations(
    report: &ClusterReport,
    graph: &InteractionGraph,
    config: &Config,
    output_dir: &str,
) -> Result<()> {
    log::info!("Generating visualizations for {} clusters", report.clusters.len());

    let viz_dir = Path::new(output_dir).join("visualizations");
    fs::create_dir_all(&viz_dir)?;

    generate_network_graphml(report, graph, &viz_dir)?;
    generate_size_chart_data(report, &viz_dir)?;
    generate_html_report(report, config, &viz_dir)?;

    log::info!("Visualizations generated successfully");

    Ok(())
}

/// Write the interaction network as GraphML with the largest cluster highlighted
fn generate_network_graphml(
    report: &ClusterReport,
    graph: &InteractionGraph,
    viz_dir: &Path,
) -> Result<()> {
    log::info!("Generating network GraphML");

    let largest: HashSet<&str> = report
        .largest()
        .map(|c| c.members.iter().map(String::as_str).collect())
        .unwrap_or_default();

    let mut file = File::create(viz_dir.join("network.graphml"))?;

    writeln!(file, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(file, "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">")?;
    writeln!(file, "  <key id=\"label\" for=\"node\" attr.name=\"label\" attr.type=\"string\"/>")?;
    writeln!(file, "  <key id=\"color\" for=\"node\" attr.name=\"color\" attr.type=\"string\"/>")?;
    writeln!(file, "  <key id=\"interactions\" for=\"node\" attr.name=\"interactions\" attr.type=\"int\"/>")?;
    writeln!(file, "  <graph id=\"G\" edgedefault=\"undirected\">")?;

    for (node_id, label) in graph.node_ids.iter().enumerate() {
        let color = if largest.contains(label.as_str()) {
            LARGEST_COLOR
        } else {
            DEFAULT_COLOR
        };

        writeln!(
            file,
            "    <node id=\"n{}\">\n      <data key=\"label\">{}</data>\n      <data key=\"color\">{}</data>\n      <data key=\"interactions\">{}</data>\n    </node>",
            node_id,
            escape_xml(label),
            color,
            graph.interaction_counts[node_id]
        )?;
    }

    let mut edge_id = 0;
    for src in 0..graph.node_count {
        for &dst in graph.neighbors(src) {
            // Only write in one direction
            if (src as u32) < dst {
                writeln!(file, "    <edge id=\"e{}\" source=\"n{}\" target=\"n{}\"/>", edge_id, src, dst)?;
                edge_id += 1;
            }
        }
    }

    writeln!(file, "  </graph>")?;
    writeln!(file, "</graphml>")?;

    Ok(())
}

/// Cluster sizes for bar and bubble charts
fn generate_size_chart_data(report: &ClusterReport, viz_dir: &Path) -> Result<()> {
    log::info!("Generating cluster size chart data");

    let mut file = File::create(viz_dir.join("cluster_sizes.csv"))?;

    writeln!(file, "cluster_id,label,size,interactions,density")?;
    for cluster in &report.clusters {
        writeln!(
            file,
            "{},C{},{},{},{:.6}",
            cluster.id, cluster.id, cluster.size, cluster.interactions, cluster.density
        )?;
    }

    Ok(())
}

/// Generate the HTML report
fn generate_html_report(report: &ClusterReport, config: &Config, viz_dir: &Path) -> Result<()> {
    log::info!("Generating HTML report");

    let mut index_file = File::create(viz_dir.join("index.html"))?;
    let summary = &report.summary;

    writeln!(index_file, "<!DOCTYPE html>")?;
    writeln!(index_file, "<html lang=\"en\">")?;
    writeln!(index_file, "<head>")?;
    writeln!(index_file, "  <meta charset=\"UTF-8\">")?;
    writeln!(index_file, "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
    writeln!(index_file, "  <title>Social Media Virality Analysis</title>")?;
    writeln!(index_file, "  <style>")?;
    writeln!(index_file, "    body {{ font-family: Arial, sans-serif; margin: 20px; }}")?;
    writeln!(index_file, "    h1, h2 {{ color: #333; }}")?;
    writeln!(index_file, "    .cluster-list {{ display: flex; flex-wrap: wrap; }}")?;
    writeln!(index_file, "    .cluster-card {{ border: 1px solid #ddd; margin: 10px; padding: 15px; border-radius: 5px; width: 300px; }}")?;
    writeln!(index_file, "    .cluster-card.viral {{ border-color: {}; }}", LARGEST_COLOR)?;
    writeln!(index_file, "    .stats {{ margin-top: 20px; background-color: #f9f9f9; padding: 15px; border-radius: 5px; }}")?;
    writeln!(index_file, "  </style>")?;
    writeln!(index_file, "</head>")?;
    writeln!(index_file, "<body>")?;
    writeln!(index_file, "  <h1>Viral Clusters</h1>")?;

    writeln!(index_file, "  <div class=\"stats\">")?;
    writeln!(index_file, "    <h2>Cluster Insights</h2>")?;
    writeln!(index_file, "    <p>Total Users: {}</p>", summary.total_users)?;
    writeln!(index_file, "    <p>Total Interactions: {}</p>", summary.total_interactions)?;
    writeln!(index_file, "    <p>Number of Clusters: {}</p>", summary.cluster_count)?;

    if !report.clusters.is_empty() {
        writeln!(index_file, "    <p>Largest Cluster Size: {}</p>", summary.largest_cluster_size)?;
        writeln!(index_file, "    <p>Average Cluster Size: {:.1}</p>", summary.avg_cluster_size)?;
    }

    writeln!(index_file, "  </div>")?;

    writeln!(index_file, "  <h2>Clusters</h2>")?;
    writeln!(index_file, "  <div class=\"cluster-list\">")?;

    for (idx, cluster) in report.clusters.iter().take(config.max_html_clusters).enumerate() {
        let viral = idx == 0;
        writeln!(
            index_file,
            "    <div class=\"cluster-card{}\">",
            if viral { " viral" } else { "" }
        )?;
        writeln!(
            index_file,
            "      <h3>Cluster {} - {} users{}</h3>",
            cluster.id,
            cluster.size,
            if viral { " (Most Viral)" } else { "" }
        )?;
        writeln!(index_file, "      <p>Interactions: {}</p>", cluster.interactions)?;
        writeln!(index_file, "      <p>Density: {:.4}</p>", cluster.density)?;
        writeln!(index_file, "      <p>{}</p>", escape_xml(&cluster.members.join(", ")))?;
        writeln!(index_file, "    </div>")?;
    }

    writeln!(index_file, "  </div>")?;
    writeln!(index_file, "</body>")?;
    writeln!(index_file, "</html>")?;

    Ok(())
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
