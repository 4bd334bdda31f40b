//! Traversal of tracked repositories, their forks, branches and commits.
use log::*;

use crate::{
    authors::{AuthorSet, author_identity},
    config::TrackedRepository,
    error::ApiResult,
    forge::{
        traits::GithubApi,
        types::{ListCommitsRequest, RepositoryRef},
    },
    retry::RetryPolicy,
};


/// Traversal options.
#[derive(Debug, Clone)]
pub struct CollectorOptions {
    /// Also walk every fork of each tracked repository.
    pub include_forks: bool,
    pub retry: RetryPolicy,
}

impl Default for CollectorOptions {
    fn default() -> Self {
        Self {
            include_forks: true,
            retry: RetryPolicy::default(),
        }
    }
}

/// Collects unique commit authors across repositories, forks and branches.
/// Every API call goes through the configured [`RetryPolicy`].
pub struct Collector {
    api: Box<dyn GithubApi>,
    options: CollectorOptions,
}

impl Collector {
    pub fn new(api: Box<dyn GithubApi>, options: CollectorOptions) -> Self {
        Self { api, options }
    }

    /// Collects the authors of every tracked repository and all of its forks.
    pub async fn run(
        &self,
        tracked: &[TrackedRepository],
    ) -> ApiResult<AuthorSet> {
        let mut authors = AuthorSet::new();

        for entry in tracked {
            info!(
                "Enabler name: {}    Owner: {}    Repo: {}",
                entry.label, entry.owner, entry.repo
            );

            let repo = entry.repository_ref();
            self.report_repository(&repo).await?;

            for target in self.list_all_repos(&repo).await? {
                authors.merge(self.collect_authors(&target).await?);
            }

            debug!("{} unique authors so far", authors.len());
        }

        Ok(authors)
    }

    /// Returns the original repository followed by all of its forks in the
    /// order GitHub lists them.
    pub async fn list_all_repos(
        &self,
        repo: &RepositoryRef,
    ) -> ApiResult<Vec<RepositoryRef>> {
        let mut repos = vec![repo.clone()];

        if !self.options.include_forks {
            return Ok(repos);
        }

        let api = self.api.as_ref();
        let forks = self
            .options
            .retry
            .call("listing forks", || api.list_forks(repo.clone()))
            .await?;

        info!("found {} forks of {repo}", forks.len());

        repos.extend(forks);

        Ok(repos)
    }

    /// Walks every branch of a repository and returns the authors of all
    /// commits reachable from the branch tips.
    pub async fn collect_authors(
        &self,
        repo: &RepositoryRef,
    ) -> ApiResult<AuthorSet> {
        info!("Owner: {}      Repo: {}", repo.owner, repo.repo);

        let api = self.api.as_ref();
        let retry = &self.options.retry;

        let branches = retry
            .call("listing branches", || api.list_branches(repo.clone()))
            .await?;

        let mut authors = AuthorSet::new();

        for branch in branches {
            info!(
                "    Branch sha: {}        name: {}",
                branch.sha, branch.name
            );

            let mut page = 0;

            loop {
                let req = ListCommitsRequest {
                    repo: repo.clone(),
                    sha: branch.sha.clone(),
                    page,
                };

                let result = retry
                    .call("listing commits", || api.list_commits(req.clone()))
                    .await?;

                debug!(
                    "page {page} of {} returned {} commits",
                    branch.name,
                    result.commits.len()
                );

                authors.extend(result.commits.iter().map(author_identity));

                if result.next_page == 0 {
                    break;
                }

                page = result.next_page;
            }
        }

        Ok(authors)
    }

    async fn report_repository(&self, repo: &RepositoryRef) -> ApiResult<()> {
        let api = self.api.as_ref();
        let info = self
            .options
            .retry
            .call("getting repository information", || {
                api.get_repository(repo.clone())
            })
            .await?;

        info!("{}", info.full_name);
        if let Some(description) = info.description.as_deref()
            && !description.is_empty()
        {
            info!("    {description}");
        }
        info!("    stars: {}    forks: {}", info.stars, info.forks);

        Ok(())
    }
}
