//! HTTP fetcher backed by ureq

use crate::config::schema::FetchConfig;
use crate::fetch::{FetchOutcome, Fetcher};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

/// Fetches locators over HTTP(S)
///
/// ureq is blocking, so each request runs on tokio's blocking pool.
/// Non-success statuses come back as values, not errors.
#[derive(Clone)]
pub struct HttpFetcher {
    agent: Agent,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build();

        Self {
            agent: Agent::new_with_config(agent_config),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> FetchOutcome {
        let agent = self.agent.clone();
        let user_agent = self.user_agent.clone();
        let url = locator.to_string();

        match tokio::task::spawn_blocking(move || get(&agent, &url, &user_agent)).await {
            Ok(outcome) => outcome,
            Err(e) => FetchOutcome::TransportError(format!("fetch task failed: {}", e)),
        }
    }
}

fn get(agent: &Agent, url: &str, user_agent: &str) -> FetchOutcome {
    debug!("GET {}", url);

    let mut response = match agent.get(url).header("User-Agent", user_agent).call() {
        Ok(response) => response,
        Err(e) => return FetchOutcome::TransportError(e.to_string()),
    };

    let status = response.status();
    if !status.is_success() {
        debug!("GET {} -> {}", url, status);
        return FetchOutcome::HttpError(status.as_u16());
    }

    match response.body_mut().read_to_string() {
        Ok(body) => FetchOutcome::Ok(body),
        Err(e) => FetchOutcome::TransportError(format!("reading body: {}", e)),
    }
}
