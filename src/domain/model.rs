use serde::{Deserialize, Serialize};

/// One generated combination: item labels in flat-list order.
pub type Combination = Vec<String>;

/// Wire payload for `POST /generate`. Both fields are optional so that a
/// missing field is reported as an invalid payload rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    pub items: Option<Vec<u32>>,
    pub length: Option<u32>,
}

/// Response envelope: the generated row id plus the full result set. The
/// same serialized form is stored in the `responses` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub id: u64,
    pub combination: Vec<Combination>,
}
