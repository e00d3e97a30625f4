pub mod config;
pub mod database;
pub mod entities;
pub mod error;
pub mod import;
pub mod metrics;
pub mod migrator;
pub mod telemetry;

pub use sea_orm;
