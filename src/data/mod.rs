//! Interaction data loading module

pub mod csv;
pub mod parquet;
pub mod preprocessing;

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use polars::prelude::*;

use crate::config::Config;
use crate::error::AnalyzerError;

/// Normalized interaction pairs in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionSet {
    pub pairs: Vec<(String, String)>,
}

impl InteractionSet {
    /// Number of interactions
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Every distinct user from either column, in first-appearance order
    pub fn users(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.pairs.len() * 2);
        let mut users = Vec::new();

        for (user_a, user_b) in &self.pairs {
            for user in [user_a, user_b] {
                if seen.insert(user.as_str()) {
                    users.push(user.clone());
                }
            }
        }

        users
    }
}

/// Load interactions from a CSV or Parquet file
pub fn load_interactions(path: &str, config: &Config) -> Result<InteractionSet> {
    if !Path::new(path).exists() {
        return Err(AnalyzerError::InputNotFound(path.to_string()).into());
    }

    let is_parquet = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));

    let interactions = if is_parquet {
        parquet::load_interactions(path)?
    } else {
        csv::load_interactions(path, config.has_header)?
    };

    log::info!("Loaded {} valid interactions", interactions.len());

    Ok(interactions)
}

/// Take the first two columns of a frame as interaction pairs
pub(crate) fn interactions_from_frame(df: &DataFrame) -> Result<InteractionSet> {
    let columns = df.get_columns();
    if columns.len() < 2 {
        return Err(AnalyzerError::TooFewColumns {
            found: columns.len(),
        }
        .into());
    }

    log::debug!(
        "Using columns {:?} and {:?} as interactions",
        columns[0].name(),
        columns[1].name()
    );

    let user_a = columns[0].cast(&DataType::String)?;
    let user_b = columns[1].cast(&DataType::String)?;
    let user_a = user_a.as_materialized_series().str()?;
    let user_b = user_b.as_materialized_series().str()?;

    let interactions = preprocessing::normalize_pairs(user_a.into_iter().zip(user_b.into_iter()))?;

    Ok(interactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_are_collected_from_both_columns() {
        let set = InteractionSet {
            pairs: vec![
                ("bob".into(), "alice".into()),
                ("alice".into(), "carol".into()),
                ("dave".into(), "bob".into()),
            ],
        };
        assert_eq!(set.users(), vec!["bob", "alice", "carol", "dave"]);
    }

    #[test]
    fn frame_with_one_column_is_rejected() {
        let df = df!("user_a" => ["a", "b"]).unwrap();
        let err = interactions_from_frame(&df).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalyzerError>(),
            Some(AnalyzerError::TooFewColumns { found: 1 })
        ));
    }

    #[test]
    fn numeric_columns_are_cast_to_handles() {
        let df = df!(
            "src" => [1i64, 2, 3],
            "dst" => [2i64, 3, 3],
            "weight" => [0.5f64, 0.1, 0.9]
        )
        .unwrap();
        let set = interactions_from_frame(&df).unwrap();
        assert_eq!(
            set.pairs,
            vec![
                ("1".to_string(), "2".to_string()),
                ("2".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_interactions("no/such/file.csv", &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalyzerError>(),
            Some(AnalyzerError::InputNotFound(_))
        ));
    }
}
