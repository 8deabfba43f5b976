use serde::{Deserialize, Serialize};

/// Account profile as returned by `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    pub name: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

/// Repository as returned by the repos endpoints. Timestamps stay
/// string-encoded; this server relays them untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub watchers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Issue as returned after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssue {
    pub html_url: String,
    pub number: u64,
    pub title: String,
    pub state: String,
    pub body: String,
}

/// Body sent to `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub body: String,
}

/// Inbound issue payload. Fields are optional so the controller can reject
/// an incomplete body with 400 instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateIssuePayload {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Combined response for the profile-and-repositories endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileWithRepos {
    pub profile: GitHubUser,
    pub repositories: Vec<GitHubRepo>,
}
