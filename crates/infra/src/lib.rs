//! # commitgrid Infra
//!
//! Infrastructure implementations for the contribution pipeline:
//! - GitHub events client implementing the core `ActivitySource` port
//! - HTTP failure classification into the domain error taxonomy
//! - Configuration loading from environment variables or files
//!
//! ## Architecture
//! - Depends on domain, common, and core
//! - All external I/O of the pipeline lives here

pub mod config;
pub mod errors;
pub mod github;

pub use github::GithubClient;
