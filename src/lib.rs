//! MRT: Meridian Research Toolkit
//!
//! A Unix-style toolkit for managing research projects, citations, dataset
//! statistics, and plain-text research reports stored as flat files.

pub mod analysis;
pub mod chat;
pub mod cli;
pub mod core;
pub mod entities;
pub mod report;
