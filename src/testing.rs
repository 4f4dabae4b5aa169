//! In-memory fetcher for unit tests

use crate::fetch::{FetchOutcome, Fetcher};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Answers from a script; unknown locators get HTTP 404
#[derive(Default)]
pub struct ScriptedFetcher {
    script: Mutex<HashMap<String, (FetchOutcome, Duration)>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `locator` with `body`
    pub fn ok(self, locator: &str, body: &str) -> Self {
        self.set(locator, FetchOutcome::Ok(body.to_string()));
        self
    }

    /// Answer `locator` with `body` after `delay_ms`
    pub fn ok_after(self, locator: &str, body: &str, delay_ms: u64) -> Self {
        self.lock_script().insert(
            locator.to_string(),
            (
                FetchOutcome::Ok(body.to_string()),
                Duration::from_millis(delay_ms),
            ),
        );
        self
    }

    /// Answer `locator` with a status code
    pub fn status(self, locator: &str, status: u16) -> Self {
        self.set(locator, FetchOutcome::HttpError(status));
        self
    }

    /// Replace the answer for `locator`
    pub fn set(&self, locator: &str, outcome: FetchOutcome) {
        self.lock_script()
            .insert(locator.to_string(), (outcome, Duration::ZERO));
    }

    /// How many times `locator` was fetched
    pub fn calls_to(&self, locator: &str) -> usize {
        let calls = self.calls.lock().unwrap();
        calls.iter().filter(|l| *l == locator).count()
    }

    /// Every fetch in the order it was issued
    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, HashMap<String, (FetchOutcome, Duration)>> {
        self.script.lock().unwrap()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, locator: &str) -> FetchOutcome {
        self.calls.lock().unwrap().push(locator.to_string());
        let (outcome, delay) = self
            .lock_script()
            .get(locator)
            .cloned()
            .unwrap_or((FetchOutcome::HttpError(404), Duration::ZERO));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        outcome
    }
}
