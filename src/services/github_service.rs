use reqwest::header;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ServiceError;
use crate::models::github::{CreateIssueRequest, GitHubIssue, GitHubRepo, GitHubUser};

const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("github-relay/", env!("CARGO_PKG_VERSION"));

/// Error body shape used by the GitHub API for non-2xx responses.
#[derive(Debug, Deserialize)]
struct GitHubApiError {
    message: String,
}

/// Client for the GitHub REST API, bound to one account.
///
/// Holds only immutable configuration, so a single instance is shared
/// across requests without locking.
pub struct GitHubService {
    client: Client,
    base_url: String,
    username: String,
    token: String,
}

impl GitHubService {
    pub fn new(client: Client, username: String, token: String) -> Self {
        Self::with_base_url(client, username, token, GITHUB_API_URL.to_string())
    }

    /// Like [`new`](Self::new) but against a caller-chosen endpoint.
    pub fn with_base_url(client: Client, username: String, token: String, base_url: String) -> Self {
        GitHubService {
            client,
            base_url,
            username,
            token,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub async fn user_profile(&self) -> Result<GitHubUser, ServiceError> {
        let url = format!("{}/users/{}", self.base_url, self.username);
        self.send("fetch user profile", self.client.get(url)).await
    }

    pub async fn repositories(&self) -> Result<Vec<GitHubRepo>, ServiceError> {
        let url = format!("{}/users/{}/repos", self.base_url, self.username);
        self.send("fetch repositories", self.client.get(url)).await
    }

    pub async fn repository(&self, name: &str) -> Result<GitHubRepo, ServiceError> {
        let url = format!("{}/repos/{}/{}", self.base_url, self.username, name);
        self.send("fetch repository", self.client.get(url)).await
    }

    /// Creates an issue on the remote repository. Not idempotent; never
    /// retried.
    pub async fn create_issue(
        &self,
        name: &str,
        request: &CreateIssueRequest,
    ) -> Result<GitHubIssue, ServiceError> {
        let url = format!("{}/repos/{}/{}/issues", self.base_url, self.username, name);
        self.send("create issue", self.client.post(url).json(request))
            .await
    }

    /// Attaches the fixed headers, dispatches, and normalizes every failure
    /// into [`ServiceError::RemoteCallFailed`]. The GitHub `message` field is
    /// preferred over the raw body when the error body parses.
    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ServiceError> {
        let response = request
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|err| ServiceError::RemoteCallFailed {
                operation,
                status: None,
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GitHubApiError>(&body)
                .map(|api_error| api_error.message)
                .unwrap_or(body);
            tracing::error!(
                "GitHub responded {} while trying to {}: {}",
                status,
                operation,
                message
            );
            return Err(ServiceError::RemoteCallFailed {
                operation,
                status: Some(status.as_u16()),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ServiceError::RemoteCallFailed {
                operation,
                status: Some(status.as_u16()),
                message: err.to_string(),
            })
    }
}
