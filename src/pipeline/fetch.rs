// src/pipeline/fetch.rs
// =============================================================================
// This module downloads a GitHub repository branch as a ZIP archive.
//
// Strategy:
// - Parse the GitHub URL from the registry to extract owner and repo name
// - Hit GitHub's zipball endpoint: /repos/{owner}/{repo}/zipball/{branch}
// - Write the whole response body to a temp file named {repo}_{branch}.zip
//
// Why the API zipball endpoint?
// - It works for private repositories when a token is supplied
// - It packages the full branch tree server-side, so one request is enough
//
// Rust concepts:
// - async functions: For network I/O
// - Result with a typed error: Callers match on the failure kind
// - PathBuf: Owned filesystem paths
// =============================================================================

use reqwest::{header, redirect, Client, StatusCode};
use std::path::PathBuf;
use std::time::Duration;

use super::error::PipelineError;
use anyhow::{anyhow, Result};

/// GitHub's REST API base; tests substitute a local mock server for it
pub const GITHUB_API_BASE: &str = "https://api.github.com";

// How long we wait for the whole download before giving up
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Identifies the remote template source: one branch of one repository
//
// Built once from a registry record and never mutated afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    /// Repository owner (user or organization), e.g. "rust-lang"
    pub owner: String,
    /// Repository name, e.g. "rust"
    pub name: String,
    /// Branch to snapshot, e.g. "main"
    pub branch: String,
}

impl RepositoryRef {
    // Parses a GitHub URL plus a branch name into a RepositoryRef
    //
    // Supported formats:
    //   - https://github.com/owner/repo
    //   - https://github.com/owner/repo.git
    //   - github.com/owner/repo
    //
    // Example:
    //   ("https://github.com/rust-lang/rust", "main")
    //     -> RepositoryRef { owner: "rust-lang", name: "rust", branch: "main" }
    pub fn from_repo_url(repo_url: &str, branch: &str) -> Result<Self> {
        // Remove common prefixes
        let url = repo_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.");

        // Should start with github.com
        if !url.starts_with("github.com/") {
            return Err(anyhow!("Not a GitHub URL: {}", repo_url));
        }

        // Remove "github.com/" prefix and any trailing slash
        let path = url.trim_start_matches("github.com/").trim_end_matches('/');

        // Split by '/' to get owner and repo
        let parts: Vec<&str> = path.split('/').collect();

        if parts.len() < 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(anyhow!("Invalid GitHub URL format: {}", repo_url));
        }

        let owner = parts[0].to_string();
        let mut name = parts[1].to_string();

        // Remove .git suffix if present
        if name.ends_with(".git") {
            name = name.trim_end_matches(".git").to_string();
        }

        Ok(RepositoryRef {
            owner,
            name,
            branch: branch.to_string(),
        })
    }

    // The deterministic temp-file location for this repository's archive
    //
    // Named from repo and branch, so a later run for the same template
    // simply overwrites an earlier stale download
    pub fn archive_path(&self) -> PathBuf {
        std::env::temp_dir().join(format!("{}_{}.zip", self.name, self.branch))
    }
}

// The product of a successful fetch: a ZIP file sitting in the temp dir
//
// The pipeline owns this file until the extractor consumes it. On
// extraction success the file is deleted; on extraction failure it is
// left in place so the user can inspect or retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    /// Where the downloaded archive was written
    pub archive_path: PathBuf,
}

// Downloads a repository branch snapshot as a ZIP file
//
// Parameters:
//   repo: which repository and branch to download
//   token: optional GitHub token for private repositories
//
// Returns: DownloadResult with the temp-file path, or a PipelineError:
//   - NotFound for HTTP 404 (missing repo, or private without a token)
//   - Transfer for any other HTTP or network failure
//
// No retries: every error is terminal for this pipeline run.
pub async fn fetch(repo: &RepositoryRef, token: Option<&str>) -> Result<DownloadResult, PipelineError> {
    fetch_from(GITHUB_API_BASE, repo, token).await
}

// The real implementation, parameterized over the API base URL so tests
// can point it at a local mock server instead of api.github.com
pub(crate) async fn fetch_from(
    api_base: &str,
    repo: &RepositoryRef,
    token: Option<&str>,
) -> Result<DownloadResult, PipelineError> {
    let download_url = format!(
        "{}/repos/{}/{}/zipball/{}",
        api_base, repo.owner, repo.name, repo.branch
    );

    // Create an HTTP client with reasonable settings
    // GitHub's API rejects requests without a User-Agent, so we set one
    let client = Client::builder()
        .user_agent(concat!("mvpbuilder/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT) // Bounds worst-case hang time
        .redirect(redirect::Policy::limited(10)) // zipball answers with a redirect to codeload
        .build()
        .expect("Failed to create HTTP client");

    let mut request = client.get(&download_url);

    // Attach the token when we have one; unauthenticated otherwise
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("token {}", token));
    }

    // Network-level failures (DNS, connection refused, timeout) have no
    // HTTP status - map them to Transfer with the transport detail
    let response = request.send().await.map_err(PipelineError::transport)?;

    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        // 404 covers both "no such repo" and "private repo, no access";
        // the CLI layer adds the token tip when printing this
        return Err(PipelineError::NotFound);
    }

    if !status.is_success() {
        // Carry the status and whatever detail the server sent back
        let detail = response.text().await.unwrap_or_default();
        return Err(PipelineError::Transfer {
            status: Some(status.as_u16()),
            detail: format!("HTTP {}: {}", status.as_u16(), detail.trim()),
        });
    }

    // Read the full body into memory, then write it out in one go.
    // Template archives are small (kilobytes), so no streaming needed.
    let body = response.bytes().await.map_err(PipelineError::transport)?;

    let archive_path = repo.archive_path();
    std::fs::write(&archive_path, &body).map_err(|e| PipelineError::Transfer {
        status: None,
        detail: format!("could not write {}: {}", archive_path.display(), e),
    })?;

    Ok(DownloadResult { archive_path })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is the ? operator?
//    - Shorthand for error propagation
//    - If Result is Ok(value), extracts value
//    - If Result is Err(e), returns early with the error
//
// 2. Why map_err before ??
//    - send() fails with reqwest::Error, but this function returns
//      PipelineError
//    - map_err converts the error type so ? can propagate it
//
// 3. Why &str for parameters but String in the struct?
//    - &str = borrowed string slice, no allocation
//    - String = owned string, allocated on heap
//    - Take &str when you just need to read
//    - Store String when the struct must own its data
//
// 4. What is concat! + env!?
//    - env!("CARGO_PKG_VERSION") reads the version from Cargo.toml at
//      compile time
//    - concat! glues string literals together, also at compile time
//    - Result: a "mvpbuilder/0.1.0" User-Agent with no runtime cost
// -----------------------------------------------------------------------------
