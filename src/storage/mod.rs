//! Results persistence module

use anyhow::Result;
use crate::cluster::metrics::membership_rows;
use crate::cluster::ClusterReport;
use crate::config::Config;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde_json::{json, to_string_pretty};

/// Save analysis results to the specified directory
pub fn save_results(report: &ClusterReport, config: &Config, output_dir: &str) -> Result<()> {
    log::info!("Saving {} clusters to {}", report.clusters.len(), output_dir);

    fs::create_dir_all(output_dir)?;

    save_summary(report, output_dir)?;
    save_clusters(report, config, output_dir)?;
    save_membership(report, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save summary information
fn save_summary(report: &ClusterReport, output_dir: &str) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let summary = json!({
        "cluster_stats": report.summary,
        "most_viral_cluster": report.largest().map(|c| json!({
            "id": c.id,
            "size": c.size,
            "members": c.members,
        })),
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save the cluster table
fn save_clusters(report: &ClusterReport, config: &Config, output_dir: &str) -> Result<()> {
    log::info!("Saving cluster table");

    let path = Path::new(output_dir).join("all_clusters.json");
    let mut file = File::create(path)?;

    let clusters_json = json!({
        "clusters": report.clusters.iter().map(|c| {
            json!({
                "id": c.id,
                "size": c.size,
                "interactions": c.interactions,
                "density": c.density,
                "users": c.preview(config.preview_members),
                "members": c.members,
            })
        }).collect::<Vec<_>>()
    });

    file.write_all(to_string_pretty(&clusters_json)?.as_bytes())?;

    Ok(())
}

/// Save the per-user cluster assignment
fn save_membership(report: &ClusterReport, output_dir: &str) -> Result<()> {
    log::info!("Saving per-user cluster membership");

    let path = Path::new(output_dir).join("viral_clusters.csv");
    let mut file = File::create(path)?;

    writeln!(file, "User,Cluster_ID,Cluster_Size")?;
    for row in membership_rows(&report.clusters) {
        writeln!(file, "{},{},{}", csv_field(&row.user), row.cluster_id, row.cluster_size)?;
    }

    Ok(())
}

/// Quote a field when it carries a delimiter, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::metrics::ClusterSummary;
    use crate::cluster::Cluster;

    fn report() -> ClusterReport {
        let clusters = vec![
            Cluster {
                id: 1,
                members: vec!["A".into(), "B".into(), "C".into()],
                size: 3,
                interactions: 2,
                density: 2.0 / 3.0,
            },
            Cluster {
                id: 2,
                members: vec!["D, Jr.".into(), "E".into()],
                size: 2,
                interactions: 1,
                density: 1.0,
            },
        ];
        let summary = ClusterSummary::from_clusters(5, 3, &clusters);
        ClusterReport { clusters, summary }
    }

    #[test]
    fn writes_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        save_results(&report(), &Config::default(), out).unwrap();

        let csv = fs::read_to_string(dir.path().join("viral_clusters.csv")).unwrap();
        assert_eq!(
            csv,
            "User,Cluster_ID,Cluster_Size\nA,1,3\nB,1,3\nC,1,3\n\"D, Jr.\",2,2\nE,2,2\n"
        );

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["cluster_stats"]["cluster_count"], 2);
        assert_eq!(summary["most_viral_cluster"]["size"], 3);

        let clusters: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("all_clusters.json")).unwrap()).unwrap();
        assert_eq!(clusters["clusters"][0]["users"], "A, B, C");
        assert_eq!(clusters["clusters"][1]["interactions"], 1);
    }

    #[test]
    fn csv_field_escapes_quotes() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
