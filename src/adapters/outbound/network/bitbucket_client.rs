use crate::ports::outbound::{ProgressReporter, RepositoryHost};
use crate::sbom_harvest::domain::{CloneLink, Credentials, RepositoryDescriptor};
use crate::shared::error::HarvestError;
use crate::shared::Result;
use serde::Deserialize;
use std::time::Duration;

/// Number of body characters echoed to the log
const BODY_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Deserialize)]
struct RepositoryPage {
    #[serde(default)]
    values: Vec<RepositoryEntry>,
}

#[derive(Debug, Deserialize)]
struct RepositoryEntry {
    name: String,
    #[serde(default)]
    links: RepositoryLinks,
}

#[derive(Debug, Default, Deserialize)]
struct RepositoryLinks {
    #[serde(default)]
    clone: Vec<CloneEntry>,
}

#[derive(Debug, Deserialize)]
struct CloneEntry {
    name: String,
    href: String,
}

/// BitbucketRepositoryHost adapter for the Bitbucket Cloud REST API
///
/// Lists `GET {api_base_url}/repositories/{workspace}` with HTTP basic
/// authentication. Only the first page of results is read.
pub struct BitbucketRepositoryHost<PR> {
    client: reqwest::blocking::Client,
    api_base_url: String,
    credentials: Credentials,
    progress_reporter: PR,
}

impl<PR: ProgressReporter> BitbucketRepositoryHost<PR> {
    pub fn new(
        api_base_url: impl Into<String>,
        credentials: Credentials,
        progress_reporter: PR,
    ) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bitbucket-sbom/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            credentials,
            progress_reporter,
        })
    }

    fn listing_url(&self, workspace: &str) -> String {
        format!(
            "{}/repositories/{}",
            self.api_base_url,
            urlencoding::encode(workspace)
        )
    }
}

/// Parses one page of the repository listing
pub(crate) fn parse_listing(body: &str) -> Result<Vec<RepositoryDescriptor>> {
    let page: RepositoryPage = serde_json::from_str(body)?;
    Ok(page
        .values
        .into_iter()
        .map(|entry| {
            let links = entry
                .links
                .clone
                .into_iter()
                .map(|link| CloneLink::new(link.name, link.href))
                .collect();
            RepositoryDescriptor::new(entry.name, links)
        })
        .collect())
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}

impl<PR: ProgressReporter> RepositoryHost for BitbucketRepositoryHost<PR> {
    fn list_repositories(&self, workspace: &str) -> Result<Vec<RepositoryDescriptor>> {
        let url = self.listing_url(workspace);
        self.progress_reporter
            .report(&format!("🌐 Fetching repositories from: {}", url));

        let listing_error = |status: Option<u16>, details: String| HarvestError::RepositoryListing {
            workspace: workspace.to_string(),
            status,
            details,
        };

        let response = self
            .client
            .get(&url)
            .basic_auth(self.credentials.username(), Some(self.credentials.secret()))
            .send()
            .map_err(|e| listing_error(None, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| listing_error(Some(status.as_u16()), e.to_string()))?;

        self.progress_reporter
            .report(&format!("   Response status code: {}", status.as_u16()));
        self.progress_reporter
            .report(&format!("   Response content: {}", preview(&body)));

        if status != reqwest::StatusCode::OK {
            return Err(listing_error(Some(status.as_u16()), preview(&body).to_string()).into());
        }

        parse_listing(&body).map_err(|e| {
            listing_error(
                Some(status.as_u16()),
                format!("Unexpected response body: {}", e),
            )
            .into()
        })
    }
}
