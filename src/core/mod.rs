pub mod generator;
pub mod service;

pub use crate::domain::model::{Combination, GenerateRequest, GenerateResponse};
pub use crate::domain::ports::CombinationStore;
pub use crate::utils::error::Result;
