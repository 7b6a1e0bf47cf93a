use std::fs;
use std::io::Write;

use virality_analyzer::cluster::detection::find_viral_clusters;
use virality_analyzer::config::Config;
use virality_analyzer::graph::InteractionGraphBuilder;
use virality_analyzer::{data, storage, viz, AnalyzerError};

fn write_input(dir: &tempfile::TempDir, contents: &str) -> String {
    let path = dir.path().join("interactions.csv");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn csv_to_reports() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "user_a,user_b,timestamp\n\
         Alice,Bob,1\n\
         Bob,Charlie,2\n\
         Dave, Erin,3\n\
         Frank,Frank,4\n\
         Charlie,Alice,5\n",
    );
    let out = dir.path().join("out");
    let out = out.to_str().unwrap();
    let config = Config::default();

    let interactions = data::load_interactions(&input, &config).unwrap();
    assert_eq!(interactions.len(), 4);

    let graph = InteractionGraphBuilder::from_interactions(&interactions);
    let report = find_viral_clusters(&interactions, &graph, &config).unwrap();

    assert_eq!(report.summary.total_users, 5);
    assert_eq!(report.summary.cluster_count, 2);
    assert_eq!(report.summary.largest_cluster_size, 3);
    assert!((report.summary.avg_cluster_size - 2.5).abs() < 1e-9);

    let largest = report.largest().unwrap();
    assert_eq!(largest.members, vec!["Alice", "Bob", "Charlie"]);
    assert_eq!(largest.interactions, 3);
    assert_eq!(largest.density, 1.0);

    storage::save_results(&report, &config, out).unwrap();
    viz::generate_visualizations(&report, &graph, &config, out).unwrap();

    let export = fs::read_to_string(dir.path().join("out/viral_clusters.csv")).unwrap();
    assert_eq!(
        export,
        "User,Cluster_ID,Cluster_Size\nAlice,1,3\nBob,1,3\nCharlie,1,3\nDave,2,2\nErin,2,2\n"
    );
    assert!(dir.path().join("out/summary.json").exists());
    assert!(dir.path().join("out/visualizations/index.html").exists());
}

#[test]
fn input_of_only_self_pairs_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "a,b\nx,x\ny, y\n");

    let err = data::load_interactions(&input, &Config::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnalyzerError>(),
        Some(AnalyzerError::NoValidInteractions)
    ));
}
