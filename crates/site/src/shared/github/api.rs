//! GitHub REST client for the repository star badge.

use gloo_net::http::Request;
use serde::Deserialize;

pub const REPO_SLUG: &str = "trellis-ml/trellis";
pub const REPO_URL: &str = "https://github.com/trellis-ml/trellis";

#[derive(Debug, Clone, Deserialize)]
struct RepoInfo {
    stargazers_count: u64,
}

/// Fetch the current star count for the project repository.
pub async fn fetch_star_count() -> Result<u64, String> {
    let info: RepoInfo = Request::get(&format!("https://api.github.com/repos/{REPO_SLUG}"))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    Ok(info.stargazers_count)
}
