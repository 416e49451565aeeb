//! GitHub events integration

mod client;
mod types;

pub use client::{GithubClient, GITHUB_API_URL};
