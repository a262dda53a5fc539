//! Sends fixture requests and compares the responses against expectations.

use reqwest::Client;
use reqwest::header::HeaderMap;

use crate::fixture::{Expect, Fixture};

/// What came back for one request.
pub struct Captured {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

pub struct RunResult {
    pub expected_status: u16,
    pub actual_status: Option<u16>,
    /// Human-readable differences from the expectation, empty on success.
    pub mismatches: Vec<String>,
    /// Set when the request could not be sent (e.g. connection refused).
    pub error: Option<String>,
}

impl RunResult {
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.mismatches.is_empty()
    }

    fn failed(expected_status: u16, error: String) -> Self {
        Self {
            expected_status,
            actual_status: None,
            mismatches: Vec::new(),
            error: Some(error),
        }
    }
}

pub struct Runner {
    client: Client,
    base_url: String,
}

impl Runner {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub async fn run(&self, fixture: &Fixture) -> RunResult {
        let expected_status = fixture.expect.status;

        let first = match self.send(fixture).await {
            Ok(c) => c,
            Err(e) => return RunResult::failed(expected_status, e),
        };
        let mut mismatches = check(&fixture.expect, &first);

        if fixture.expect.repeatable {
            match self.send(fixture).await {
                Ok(second) if second.body != first.body => mismatches.push(format!(
                    "repeat: body changed between identical requests ({} vs {} bytes)",
                    first.body.len(),
                    second.body.len()
                )),
                Ok(_) => {}
                Err(e) => return RunResult::failed(expected_status, e),
            }
        }

        RunResult {
            expected_status,
            actual_status: Some(first.status),
            mismatches,
            error: None,
        }
    }

    async fn send(&self, fixture: &Fixture) -> Result<Captured, String> {
        let method = reqwest::Method::from_bytes(fixture.request.method.to_uppercase().as_bytes())
            .map_err(|_| format!("unknown HTTP method: {}", fixture.request.method))?;
        let url = format!("{}{}", self.base_url, fixture.request.path);

        let mut req = self.client.request(method, &url);
        for (k, v) in &fixture.request.headers {
            req = req.header(k, v);
        }

        let resp = req.send().await.map_err(|e| e.to_string())?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        Ok(Captured {
            status,
            headers,
            body,
        })
    }
}

/// Compare one captured response against an expectation.
pub fn check(expect: &Expect, actual: &Captured) -> Vec<String> {
    let mut mismatches = Vec::new();

    if actual.status != expect.status && !expect.also_accept_status.contains(&actual.status) {
        mismatches.push(format!(
            "status: expected {}, got {}",
            expect.status, actual.status
        ));
    }

    for (name, expected_val) in &expect.headers {
        match actual.headers.get(name.as_str()) {
            Some(v) if v.to_str().unwrap_or("") == expected_val => {}
            Some(v) => mismatches.push(format!(
                "header {name}: expected {expected_val:?}, got {:?}",
                v.to_str().unwrap_or("<non-utf8>")
            )),
            None => mismatches.push(format!("header {name}: missing (expected {expected_val:?})")),
        }
    }

    if expect.body.is_none() && expect.body_keys.is_empty() {
        return mismatches;
    }

    let json: serde_json::Value =
        serde_json::from_str(&actual.body).unwrap_or(serde_json::Value::Null);
    if let Some(expected_body) = &expect.body {
        if &json != expected_body {
            mismatches.push(format!("body: expected {expected_body}, got {json}"));
        }
    }
    for key in &expect.body_keys {
        if json.get(key).is_none() {
            mismatches.push(format!("body: missing key {key:?}"));
        }
    }

    mismatches
}
