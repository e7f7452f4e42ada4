//! GitHub username lookup

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;

const API_URL: &str = "https://api.github.com";

pub trait AccountLookup {
    /// Resolves a hosting account username for the email address
    fn lookup(&self, email: &str) -> Result<String>;
}

/// Looks up usernames through the GitHub user search API.
pub struct GithubLookup {
    base_url: String,
    http: HttpClient,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    login: String,
}

impl GithubLookup {
    pub fn new() -> Result<Self> {
        GithubLookup::with_base_url(API_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(GithubLookup {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http,
        })
    }
}

impl AccountLookup for GithubLookup {
    fn lookup(&self, email: &str) -> Result<String> {
        let url = format!("{}/search/users", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", format!("{email} in:email"))])
            .send()
            .with_context(|| format!("Failed to connect to {}", self.base_url))?;

        if !response.status().is_success() {
            bail!("GitHub returned status: {}", response.status());
        }

        let result: SearchResponse = response
            .json()
            .context("Failed to parse GitHub search response")?;

        match result.items.into_iter().next() {
            Some(item) => Ok(item.login),
            None => bail!("Couldn't find a username for the supplied email"),
        }
    }
}

/// Lookup used with `--offline`, never touches the network and never
/// suggests an account.
pub struct OfflineLookup;

impl AccountLookup for OfflineLookup {
    fn lookup(&self, _email: &str) -> Result<String> {
        log::debug!("Offline mode, skipping GitHub username lookup");
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response() -> Result<()> {
        let body = r#"{"total_count": 1, "items": [{"login": "acct", "id": 1}]}"#;
        let response: SearchResponse = serde_json::from_str(body)?;
        assert_eq!(response.items[0].login, "acct");
        Ok(())
    }

    #[test]
    fn offline_lookup_suggests_nothing() -> Result<()> {
        assert_eq!(OfflineLookup.lookup("dev@example.com")?, "");
        Ok(())
    }

    #[test]
    fn trims_base_url() -> Result<()> {
        let lookup = GithubLookup::with_base_url("http://localhost:1/")?;
        assert_eq!(lookup.base_url, "http://localhost:1");
        Ok(())
    }
}
