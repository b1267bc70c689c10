//! Blocking client for the status-posting API.
//!
//! The chain core never touches the network; this module is the only place that does.
//! Credentials come from the environment so tokens stay out of shell history.

use std::env;
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;

use crate::error::{Error, Result};

const URL_VAR: &str = "MAGPIE_API_URL";
const TOKEN_VAR: &str = "MAGPIE_API_TOKEN";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Where to post and who we claim to be.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub base_url: String,
    pub token: String,
}

impl Credentials {
    /// Reads `MAGPIE_API_URL` and `MAGPIE_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(URL_VAR).map_err(|_| Error::MissingCredential(URL_VAR))?;
        let token = env::var(TOKEN_VAR).map_err(|_| Error::MissingCredential(TOKEN_VAR))?;
        Ok(Self { base_url, token })
    }
}

/// Publishes generated sentences as statuses, reusing one blocking client.
pub struct StatusPoster {
    client: Client,
    credentials: Credentials,
}

impl StatusPoster {
    pub fn new(credentials: Credentials) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            credentials,
        })
    }

    /// Checks the credentials against the API. Run once before the first post.
    pub fn verify(&self) -> Result<()> {
        let url = endpoint(&self.credentials.base_url, "verify");
        self.client
            .get(&url)
            .bearer_auth(&self.credentials.token)
            .send()?
            .error_for_status()?;
        debug!("credentials verified against {url}");
        Ok(())
    }

    /// Publishes `text` as a new status.
    pub fn publish(&self, text: &str) -> Result<()> {
        let url = endpoint(&self.credentials.base_url, "statuses");
        self.client
            .post(&url)
            .bearer_auth(&self.credentials.token)
            .json(&serde_json::json!({ "status": text }))
            .send()?
            .error_for_status()?;
        info!("posted {} bytes", text.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_and_without_trailing_slash() {
        assert_eq!(
            endpoint("https://api.example.com", "statuses"),
            "https://api.example.com/statuses"
        );
        assert_eq!(
            endpoint("https://api.example.com/", "verify"),
            "https://api.example.com/verify"
        );
    }
}
