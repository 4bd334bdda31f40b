//! Implements the GithubApi trait for GitHub
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, Page};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::{
    error::{ApiError, ApiResult},
    forge::{
        config::RemoteConfig,
        traits::GithubApi,
        types::{
            Branch, CommitPage, GithubBranch, GithubCommit, GithubRepository,
            ListCommitsRequest, RepositoryInfo, RepositoryRef,
        },
    },
    result::Result,
};

#[derive(Debug, Serialize)]
struct PageParams<'a> {
    per_page: u8,
    page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

/// GitHub client using Octocrab for REST API interactions with repositories,
/// forks, branches and commits.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with optional personal access token
    /// authentication and API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().base_uri(config.api_url.clone())?;

        if let Some(token) = &config.token {
            builder = builder.personal_token(token.expose_secret().to_string());
        } else {
            warn!(
                "no GitHub token configured: using unauthenticated access with stricter rate limits"
            );
        }

        let instance = builder.build()?;

        Ok(Self { config, instance })
    }

    /// Fetches one page of a collection and returns its items along with the
    /// number of the next page, zero when there is none.
    async fn get_page<T>(
        &self,
        route: &str,
        page: u32,
        sha: Option<&str>,
    ) -> ApiResult<(Vec<T>, u32)>
    where
        T: DeserializeOwned + Send,
    {
        let params = PageParams {
            per_page: self.config.per_page,
            page: page.max(1),
            sha,
        };

        debug!("requesting {route} page {}", params.page);

        let mut result: Page<T> =
            self.instance.get(route, Some(&params)).await?;

        let next = next_page_from_link(
            result.next.as_ref().map(|uri| uri.to_string()).as_deref(),
        )?;

        Ok((result.take_items(), next))
    }

    /// Follows every page of a collection.
    async fn get_all_pages<T>(&self, route: &str) -> ApiResult<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let mut items = vec![];
        let mut page = 1;

        loop {
            let (batch, next) = self.get_page(route, page, None).await?;
            items.extend(batch);

            if next == 0 {
                break;
            }

            page = next;
        }

        Ok(items)
    }
}

/// Extracts the `page` query parameter from a `rel="next"` link.
fn next_page_from_link(next: Option<&str>) -> ApiResult<u32> {
    let Some(next) = next else {
        return Ok(0);
    };

    let url = Url::parse(next)?;

    let page = url
        .query_pairs()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| {
            ApiError::other(format!("next link without page: {next}"))
        })?;

    page.parse::<u32>().map_err(|err| {
        ApiError::other(format!("invalid page in next link {next}: {err}"))
    })
}

#[async_trait]
impl GithubApi for Github {
    async fn get_repository(
        &self,
        repo: RepositoryRef,
    ) -> ApiResult<RepositoryInfo> {
        let route = format!("/repos/{}/{}", repo.owner, repo.repo);
        let result: GithubRepository =
            self.instance.get(route, None::<&()>).await?;
        Ok(result.into())
    }

    async fn list_forks(
        &self,
        repo: RepositoryRef,
    ) -> ApiResult<Vec<RepositoryRef>> {
        let route = format!("/repos/{}/{}/forks", repo.owner, repo.repo);
        let forks: Vec<GithubRepository> = self.get_all_pages(&route).await?;
        Ok(forks.into_iter().map(RepositoryRef::from).collect())
    }

    async fn list_branches(
        &self,
        repo: RepositoryRef,
    ) -> ApiResult<Vec<Branch>> {
        let route = format!("/repos/{}/{}/branches", repo.owner, repo.repo);
        let branches: Vec<GithubBranch> = self.get_all_pages(&route).await?;
        Ok(branches.into_iter().map(Branch::from).collect())
    }

    async fn list_commits(
        &self,
        req: ListCommitsRequest,
    ) -> ApiResult<CommitPage> {
        let route =
            format!("/repos/{}/{}/commits", req.repo.owner, req.repo.repo);

        let (commits, next_page) = self
            .get_page::<GithubCommit>(&route, req.page, Some(&req.sha))
            .await?;

        Ok(CommitPage {
            commits: commits.into_iter().map(Into::into).collect(),
            next_page,
        })
    }
}
