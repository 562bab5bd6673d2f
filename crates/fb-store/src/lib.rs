pub mod config;
pub mod error;
pub mod json_bridge;
pub mod schema;
pub mod store;

pub use config::{Config, db_path, default_base_dir};
pub use error::{Result, StoreError};
pub use json_bridge::{EXPORT_VERSION, HouseholdExport};
pub use store::{Household, Key, Store};
