//! Contract fixture format and loader.
//!
//! Fixtures live at `contracts/http/{service}/{id}.json`. Each one names a
//! request and what a conforming service must answer.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    /// Subdirectory the fixture was loaded from (`users`).
    pub service: String,
    /// Unique within the service; matches the filename stem.
    pub id: String,
    pub description: String,
    pub request: Request,
    pub expect: Expect,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default = "default_method")]
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Expect {
    pub status: u16,
    /// Other statuses that also pass, for answers that differ only by
    /// middleware (`204` vs `200` on a CORS preflight).
    #[serde(default)]
    pub also_accept_status: Vec<u16>,
    /// Subset match; extra response headers are fine.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Exact JSON match when present.
    pub body: Option<serde_json::Value>,
    /// Top-level keys that must be present in a JSON object body.
    #[serde(default)]
    pub body_keys: Vec<String>,
    /// Send the request twice and require byte-identical bodies.
    #[serde(default)]
    pub repeatable: bool,
}

fn default_method() -> String {
    "GET".to_owned()
}

/// Load every fixture under `{workspace_root}/contracts/http/`, or only the
/// `service` subdirectory when given. Sorted by service, then id.
pub fn load_all(workspace_root: &Path, service: Option<&str>) -> Result<Vec<Fixture>> {
    let http_dir = workspace_root.join("contracts/http");

    let dirs = match service {
        Some(svc) => vec![http_dir.join(svc)],
        None => subdirectories(&http_dir)?,
    };

    let mut fixtures = Vec::new();
    for dir in dirs.iter().filter(|d| d.exists()) {
        for path in json_files(dir)? {
            fixtures.push(parse(&path)?);
        }
    }

    fixtures.sort_by(|a, b| a.service.cmp(&b.service).then(a.id.cmp(&b.id)));
    Ok(fixtures)
}

pub fn parse(path: &Path) -> Result<Fixture> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid fixture JSON in {}", path.display()))
}

fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(fs::read_dir(dir)
        .with_context(|| format!("cannot open {}", dir.display()))?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_ok_and(|t| t.is_dir()))
        .map(|e| e.path())
        .collect())
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(fs::read_dir(dir)
        .with_context(|| format!("cannot read {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect())
}
