//! Traits related to the remote GitHub API
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::ApiResult,
    forge::types::{
        Branch, CommitPage, ListCommitsRequest, RepositoryInfo, RepositoryRef,
    },
};

/// Read operations the author traversal needs from GitHub.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Fetch metadata for a single repository.
    async fn get_repository(
        &self,
        repo: RepositoryRef,
    ) -> ApiResult<RepositoryInfo>;

    /// List every fork of a repository, following all pages.
    async fn list_forks(
        &self,
        repo: RepositoryRef,
    ) -> ApiResult<Vec<RepositoryRef>>;

    /// List every branch of a repository, following all pages.
    async fn list_branches(
        &self,
        repo: RepositoryRef,
    ) -> ApiResult<Vec<Branch>>;

    /// Fetch a single page of commits reachable from a SHA.
    async fn list_commits(
        &self,
        req: ListCommitsRequest,
    ) -> ApiResult<CommitPage>;
}
