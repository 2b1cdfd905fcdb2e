//! Command implementations

pub mod analyze;
pub mod chat;
pub mod citation;
pub mod init;
pub mod profile;
pub mod project;
pub mod report;
pub mod settings;
