use std::fmt;

use serde::Deserialize;

/// Identifies one repository, either a tracked original or one of its forks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub repo: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Repository metadata, reported for diagnostics only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub full_name: String,
    pub description: Option<String>,
    pub stars: u32,
    pub forks: u32,
}

/// A branch and the SHA of its tip commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub sha: String,
}

/// The commit fields needed to derive an author identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub sha: String,
    /// Login of the linked GitHub account, absent for unlinked authors
    pub author_login: Option<String>,
    /// Free-text author name from the git commit itself
    pub author_name: String,
}

/// Request for one page of commits reachable from `sha`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommitsRequest {
    pub repo: RepositoryRef,
    pub sha: String,
    /// Zero requests the first page
    pub page: u32,
}

/// One page of commits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitPage {
    pub commits: Vec<CommitRecord>,
    /// Zero when there are no further pages
    pub next_page: u32,
}

// Wire shapes of the REST responses. Only the fields the traversal reads are
// declared; everything else in the payload is ignored.

#[derive(Debug, Deserialize)]
pub(crate) struct GithubAccount {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GithubRepository {
    pub name: String,
    pub full_name: String,
    pub owner: GithubAccount,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GithubBranchCommit {
    pub sha: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GithubBranch {
    pub name: String,
    pub commit: GithubBranchCommit,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GithubGitAuthor {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GithubGitCommit {
    pub author: Option<GithubGitAuthor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GithubCommit {
    pub sha: String,
    pub author: Option<GithubAccount>,
    pub commit: GithubGitCommit,
}

impl From<GithubRepository> for RepositoryInfo {
    fn from(repo: GithubRepository) -> Self {
        Self {
            full_name: repo.full_name,
            description: repo.description,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
        }
    }
}

impl From<GithubRepository> for RepositoryRef {
    fn from(repo: GithubRepository) -> Self {
        Self {
            owner: repo.owner.login,
            repo: repo.name,
        }
    }
}

impl From<GithubBranch> for Branch {
    fn from(branch: GithubBranch) -> Self {
        Self {
            name: branch.name,
            sha: branch.commit.sha,
        }
    }
}

impl From<GithubCommit> for CommitRecord {
    fn from(commit: GithubCommit) -> Self {
        Self {
            sha: commit.sha,
            author_login: commit.author.map(|a| a.login),
            author_name: commit
                .commit
                .author
                .map(|a| a.name)
                .unwrap_or_default(),
        }
    }
}
