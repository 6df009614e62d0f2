// Adapters layer: concrete implementations for external systems.

pub mod mysql;

pub use mysql::MySqlStore;
