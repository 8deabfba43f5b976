use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
    sync::Arc,
};

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use reqwest::Client;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

use controllers::{github, index};
use services::github_service::GitHubService;

// Command line interface
#[derive(Parser, Debug)]
#[clap(name = "github-relay", about = "JSON relay in front of the GitHub API!")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "3001")]
    port: u16,
}

pub struct AppState {
    pub github_service: GitHubService,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index::get_index))
        .route("/github", get(github::get_overview))
        .route("/github/:repo_name", get(github::get_repository))
        .route("/github/:repo_name/issues", post(github::post_issue))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Fetch console arguments
    let opt = Opt::parse();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level));
    }
    // Enable console logging
    tracing_subscriber::fmt::init();

    // Both settings are fatal here, before the listener binds: no request is
    // ever served with a missing credential.
    let username = std::env::var("GITHUB_USERNAME").ok().filter(|v| !v.is_empty());
    let username = username.unwrap_or_else(|| {
        panic!("GITHUB_USERNAME environment variable is required");
    });
    let token = std::env::var("GITHUB_TOKEN").ok().filter(|v| !v.is_empty());
    let token = token.unwrap_or_else(|| {
        panic!("GITHUB_TOKEN environment variable is required");
    });

    // Create reqwest client
    let client = Client::new();

    // Setup services
    let github_service = GitHubService::new(client, username, token);
    tracing::info!(
        "Relaying GitHub API calls for account {}",
        github_service.username()
    );

    // Setup controller routes and inject app state
    let state = Arc::new(AppState { github_service });
    let app = app(state);

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        opt.port,
    ));
    tracing::info!("Now listening on http://{}", sock_addr);

    axum::Server::bind(&sock_addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
