//! Interaction normalization before clustering

use crate::data::InteractionSet;
use crate::error::AnalyzerError;

/// Normalize raw interaction rows.
///
/// Rows with a missing value are dropped, handles are trimmed, and empty or
/// self-interactions are discarded. Surviving pairs keep their input order.
pub fn normalize_pairs<'a, I>(rows: I) -> Result<InteractionSet, AnalyzerError>
where
    I: IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
{
    let mut pairs = Vec::new();
    let mut dropped = 0usize;

    for row in rows {
        let (Some(user_a), Some(user_b)) = row else {
            dropped += 1;
            continue;
        };

        let user_a = user_a.trim();
        let user_b = user_b.trim();

        if user_a.is_empty() || user_b.is_empty() || user_a == user_b {
            dropped += 1;
            continue;
        }

        pairs.push((user_a.to_string(), user_b.to_string()));
    }

    if dropped > 0 {
        log::debug!("Dropped {} incomplete or self-referencing rows", dropped);
    }

    if pairs.is_empty() {
        return Err(AnalyzerError::NoValidInteractions);
    }

    Ok(InteractionSet { pairs })
}
