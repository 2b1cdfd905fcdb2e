//! Core module - storage, configuration, and session state

pub mod config;
pub mod session;
pub mod store;

pub use config::Config;
pub use session::Session;
pub use store::{Store, StoreError};
