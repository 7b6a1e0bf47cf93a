//! Viral cluster detection over pairwise user interactions

pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod storage;
pub mod viz;

pub use anyhow::{Result, anyhow};
pub use cluster::{Cluster, ClusterReport, DisjointSetUnion};
pub use error::{AnalyzerError, ClusterError};
