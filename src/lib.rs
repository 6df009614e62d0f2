pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::MySqlStore;
pub use crate::config::ServiceConfig;
pub use crate::core::service::GenerationService;
pub use crate::domain::model::{Combination, GenerateRequest, GenerateResponse};
pub use crate::utils::error::{Result, ServiceError};
