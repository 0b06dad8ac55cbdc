use crate::core::errors::Result;
use crate::core::ranges::CloudRanges;
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  ZScaler Config API Client
-------------------------------------------------------------------------------------------------*/

/// ZScaler cloud identifiers with a published config feed.
pub const KNOWN_CLOUDS: [&str; 8] = [
    "zscaler.net",
    "zscalerone.net",
    "zscalertwo.net",
    "zscalerthree.net",
    "zscloud.net",
    "zscalerbeta.net",
    "zscalergov.net",
    "zscalerten.net",
];

/// Feed URL for a cloud identifier.
pub fn api_url(cloud: &str) -> String {
    format!("https://config.zscaler.com/api/{cloud}/cenr/json")
}

/// Client for retrieving a cloud's datacenter feed. The fetch is a single synchronous request;
/// a failure is fatal to the run and surfaced immediately.
#[derive(Debug, Clone)]
pub struct Client {
    cloud: String,
    url: String,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Client {
    /// Create a client for the cloud's published feed URL. Unknown cloud identifiers are still
    /// attempted; the request will fail if no such feed exists.
    pub fn new(cloud: &str) -> Self {
        if !KNOWN_CLOUDS.contains(&cloud) {
            warn!("`{cloud}` is not a known ZScaler cloud; attempting the request anyway");
        }

        Self {
            cloud: cloud.to_string(),
            url: api_url(cloud),
        }
    }

    /// Create a client that fetches the feed for `cloud` from a custom URL.
    pub fn with_url(cloud: &str, url: &str) -> Self {
        Self {
            cloud: cloud.to_string(),
            url: url.to_string(),
        }
    }

    /// The feed URL this client requests.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Retrieve and parse the feed, scoped to this client's cloud.
    pub fn get_ranges(&self) -> Result<CloudRanges> {
        let json = self.get_json()?;
        CloudRanges::from_json(&json, &self.cloud)
    }

    fn get_json(&self) -> Result<String> {
        info!("GET {}", self.url);
        let response = reqwest::blocking::get(&self.url)?.error_for_status()?;
        Ok(response.text()?)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
