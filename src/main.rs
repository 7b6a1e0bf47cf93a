use anyhow::Result;
use clap::Parser;

use virality_analyzer::config::Config;
use virality_analyzer::{cluster, data, graph, storage, viz};

#[derive(Parser, Debug)]
#[clap(
    name = "virality-analyzer",
    about = "Detect viral clusters in social media interaction data"
)]
struct Cli {
    /// Path to input CSV or Parquet file
    #[clap(long)]
    input: String,

    /// Output directory for results
    #[clap(long, default_value = "viral_clusters")]
    output_dir: String,

    /// Minimum cluster size to report
    #[clap(long, default_value = "1")]
    min_cluster_size: usize,

    /// Treat the first CSV row as data
    #[clap(long)]
    no_header: bool,

    /// Skip visualizations
    #[clap(long)]
    skip_viz: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = Config::new(args.min_cluster_size, !args.no_header);

    log::info!("Starting virality analysis");
    log::info!("Input: {}", args.input);
    log::info!("Output: {}", args.output_dir);

    std::fs::create_dir_all(&args.output_dir)?;

    // 1. Load and normalize interactions
    let interactions = data::load_interactions(&args.input, &config)?;

    // 2. Build the interaction graph
    let graph = graph::InteractionGraphBuilder::from_interactions(&interactions);

    log::info!(
        "Built graph with {} users and {} distinct interactions",
        graph.node_count,
        graph.edge_count()
    );

    // 3. Find clusters
    let report = cluster::detection::find_viral_clusters(&interactions, &graph, &config)?;

    // 4. Save results
    storage::save_results(&report, &config, &args.output_dir)?;

    // 5. Generate visualizations if requested
    if !args.skip_viz {
        viz::generate_visualizations(&report, &graph, &config, &args.output_dir)?;
    }

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}
