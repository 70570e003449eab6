//! Uniform sampling without replacement.

use anyhow::Result;
use rand::seq::index;
use rand::Rng;

use crate::error::QuizError;
use crate::model::VocabularyRecord;

/// Draw `min(count, records.len())` distinct records uniformly at random.
///
/// Every subset of that size is equally likely and the returned order is
/// shuffled. The random source is passed in so callers can seed it.
pub fn sample<R: Rng + ?Sized>(
    records: &[VocabularyRecord],
    count: usize,
    rng: &mut R,
) -> Result<Vec<VocabularyRecord>> {
    if records.is_empty() {
        return Err(QuizError::EmptyPool.into());
    }

    let amount = count.min(records.len());
    if amount < count {
        tracing::debug!(
            requested = count,
            available = records.len(),
            "sample size capped at pool size"
        );
    }

    Ok(index::sample(rng, records.len(), amount)
        .into_iter()
        .map(|i| records[i].clone())
        .collect())
}
