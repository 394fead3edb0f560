use log::debug;
use reqwest::Client;

use crate::config::Config;
use crate::error::{Result, ShareError};
use crate::readings::RawReading;

const US_BASE_URL: &str = "https://share2.dexcom.com/ShareWebServices/Services";
const OUTSIDE_US_BASE_URL: &str = "https://shareous1.dexcom.com/ShareWebServices/Services";

const LOGIN_PATH: &str = "/General/LoginPublisherAccountByName";
const LATEST_GLUCOSE_PATH: &str = "/Publisher/ReadPublisherLatestGlucoseValues";

// Well-known publisher application id of the official Share apps; the
// undocumented API rejects logins without it.
const APPLICATION_ID: &str = "d89443d2-327c-4a6f-89e5-496bbb0317db";
const SHARE_USER_AGENT: &str = "Dexcom Share/3.0.2.11 CFNetwork/711.2.23 Darwin/14.0.0";

/// Client for the Share endpoints. Holds the session id obtained from the
/// first login; the session is never persisted or refreshed, it lives as
/// long as this value does (one process invocation).
pub struct ShareClient {
    client: Client,
    base_url: String,
    timeout: std::time::Duration,
    session: Option<String>,
}

impl ShareClient {
    pub fn new(outside_us: bool, timeout: std::time::Duration) -> Self {
        Self::with_base_url(resolve_base_url(outside_us), timeout)
    }

    /// Same client against an explicit base URL, for exercising the HTTP
    /// paths against a local server.
    pub fn with_base_url(base_url: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout,
            session: None,
        }
    }

    /// Authenticates the publisher account and returns the session id the
    /// readings endpoint expects.
    pub async fn login(&self, config: &Config) -> Result<String> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), LOGIN_PATH);
        debug!("logging in via {url}");

        let response = self
            .client
            .post(&url)
            .header("User-Agent", SHARE_USER_AGENT)
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .json(&serde_json::json!({
                "password": config.password,
                "applicationId": APPLICATION_ID,
                "accountName": config.account_name,
            }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ShareError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        // The endpoint answers with a bare JSON string.
        serde_json::from_str(&body)
            .map_err(|_| ShareError::Parse(format!("login response was not a session id: {body}")))
    }

    /// Fetches the latest readings inside the `minutes` window, in whatever
    /// order the service sends them. Logs in first when no session is
    /// cached yet, at most once per process.
    pub async fn fetch_latest(
        &mut self,
        config: &Config,
        minutes: u32,
        max_count: u32,
    ) -> Result<Vec<RawReading>> {
        let session = match &self.session {
            Some(session) => session.clone(),
            None => {
                let session = self.login(config).await?;
                self.session = Some(session.clone());
                session
            }
        };

        let url = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            LATEST_GLUCOSE_PATH
        );
        debug!("fetching readings via {url} (minutes={minutes}, maxCount={max_count})");

        let response = self
            .client
            .post(&url)
            .query(&[
                ("sessionID", session),
                ("minutes", minutes.to_string()),
                ("maxCount", max_count.to_string()),
            ])
            .header("User-Agent", SHARE_USER_AGENT)
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        match status.as_u16() {
            200..=299 => serde_json::from_str(&body)
                .map_err(|_| ShareError::Parse(format!("unexpected readings payload: {body}"))),
            code => Err(ShareError::Network { status: code, body }),
        }
    }
}

fn resolve_base_url(outside_us: bool) -> &'static str {
    if outside_us {
        OUTSIDE_US_BASE_URL
    } else {
        US_BASE_URL
    }
}
