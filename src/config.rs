//! Configuration management for the virality analyzer

/// Default configuration for the virality analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Clusters smaller than this are left out of reports
    pub min_cluster_size: usize,

    /// Whether the first CSV row is a header
    pub has_header: bool,

    /// Members listed in each cluster's preview
    pub preview_members: usize,

    /// Clusters rendered on the HTML report
    pub max_html_clusters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_cluster_size: 1,
            has_header: true,
            preview_members: 3,
            max_html_clusters: 50,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(min_cluster_size: usize, has_header: bool) -> Self {
        Self {
            min_cluster_size,
            has_header,
            ..Self::default()
        }
    }
}
