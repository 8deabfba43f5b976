use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use crate::models::github::{
    CreateIssuePayload, CreateIssueRequest, GitHubIssue, GitHubRepo, ProfileWithRepos,
};
use crate::AppState;

/// Fetches the profile and the repository list concurrently. The join is
/// fail-fast: if either call fails, the whole response is the generic 500
/// and no partial result leaks out.
#[axum_macros::debug_handler]
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProfileWithRepos>, ApiError> {
    let service = &state.github_service;
    let (profile, repositories) =
        tokio::try_join!(service.user_profile(), service.repositories())
            .map_err(ApiError::internal)?;

    Ok(Json(ProfileWithRepos {
        profile,
        repositories,
    }))
}

pub async fn get_repository(
    Path(repo_name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<GitHubRepo>, ApiError> {
    let repo = state
        .github_service
        .repository(&repo_name)
        .await
        .map_err(ApiError::from_remote)?;

    Ok(Json(repo))
}

pub async fn post_issue(
    Path(repo_name): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateIssuePayload>,
) -> Result<(StatusCode, Json<GitHubIssue>), ApiError> {
    let request = validate_issue(payload)?;
    let issue = state
        .github_service
        .create_issue(&repo_name, &request)
        .await
        .map_err(ApiError::from_remote)?;

    Ok((StatusCode::CREATED, Json(issue)))
}

/// Rejects an incomplete issue body before anything reaches GitHub.
fn validate_issue(payload: CreateIssuePayload) -> Result<CreateIssueRequest, ApiError> {
    let title = payload.title.filter(|title| !title.is_empty());
    let body = payload.body.filter(|body| !body.is_empty());
    match (title, body) {
        (Some(title), Some(body)) => Ok(CreateIssueRequest { title, body }),
        _ => Err(ApiError::InvalidRequest("title and body are required")),
    }
}
