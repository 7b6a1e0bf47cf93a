//! Error types for the virality analyzer

use thiserror::Error;

/// Errors raised by the disjoint-set structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// The element was not supplied when the structure was constructed
    #[error("element {element} is not part of the universe")]
    UnknownElement {
        /// Debug rendering of the offending element
        element: String,
    },
}

impl ClusterError {
    pub(crate) fn unknown<Q: std::fmt::Debug + ?Sized>(element: &Q) -> Self {
        Self::UnknownElement {
            element: format!("{:?}", element),
        }
    }
}

/// Errors raised while loading and normalizing interaction data
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Input path does not exist
    #[error("file not found: {0}")]
    InputNotFound(String),

    /// The table does not carry two interaction columns
    #[error("input must have at least 2 columns, found {found}")]
    TooFewColumns { found: usize },

    /// Every row was empty, incomplete, or a self-interaction
    #[error("no valid interactions found in the input")]
    NoValidInteractions,
}
