//! GitHub API access for the author traversal.
//!
//! The traversal only talks to the [`traits::GithubApi`] trait; the
//! octocrab backed [`github::Github`] client is the production implementation.

/// Connection and authentication settings for the GitHub API.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Trait abstraction over the GitHub API.
pub mod traits;

/// Repository, branch and commit types returned by the API.
pub mod types;
