// src/core/net.rs
// Blocking HTTP GET. No retry; non-2xx is an error.

use reqwest::blocking::Client;

use crate::config::consts::BROWSER_USER_AGENT;
use crate::error::{Result, ScrapeError};

/// Page source. The runner only ever talks to this trait so pages can be
/// served from fixtures.
pub trait Fetch: Send + Sync {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String>;
}

/// Headers the schedule and match pages are requested with.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[("User-Agent", BROWSER_USER_AGENT)];

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String> {
        let mut req = self.client.get(url);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let t = std::time::Instant::now();
        let resp = req.send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        let body = resp.text()?;
        logd!("GET {url} -> {status} ({} bytes) in {:?}", body.len(), t.elapsed());
        Ok(body)
    }
}
