use crate::domain::model::Combination;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence sink for generated result sets.
///
/// Implementations must treat one `persist` call as a single atomic unit:
/// one item row per item occurrence (duplicates across combinations are kept,
/// not deduplicated), one row for the serialized result set, and one row for
/// the serialized response envelope. All three succeed or none do.
#[async_trait]
pub trait CombinationStore: Send + Sync {
    /// Stores one result set and returns the generated combination row id.
    async fn persist(&self, combinations: &[Combination]) -> Result<u64>;
}
