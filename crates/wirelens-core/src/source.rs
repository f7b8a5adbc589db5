// ── Discovery sources ──
//
// The seam to the discovery collaborator. Discovery itself lives elsewhere;
// a source only hands over complete snapshots.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::model::DiscoverySnapshot;

/// Something that can produce a complete discovery snapshot on demand.
pub trait DiscoverySource: Send + Sync {
    /// Short description for logs and error messages.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<DiscoverySnapshot, CoreError>;
}

/// Reads a JSON snapshot from a file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiscoverySource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<DiscoverySnapshot, CoreError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| {
            CoreError::SourceUnavailable {
                origin: self.describe(),
                source,
            }
        })?;
        decode_snapshot(&raw, &self.describe())
    }
}

/// A fixed snapshot, handed out again on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    snapshot: DiscoverySnapshot,
}

impl StaticSource {
    pub fn new(snapshot: DiscoverySnapshot) -> Self {
        Self { snapshot }
    }
}

impl DiscoverySource for StaticSource {
    fn describe(&self) -> String {
        "static snapshot".into()
    }

    fn fetch(&self) -> Result<DiscoverySnapshot, CoreError> {
        Ok(self.snapshot.clone())
    }
}

/// Decode a JSON snapshot. `origin` only feeds the error message.
pub fn decode_snapshot(raw: &str, origin: &str) -> Result<DiscoverySnapshot, CoreError> {
    serde_json::from_str(raw).map_err(|source| CoreError::Decode {
        origin: origin.to_owned(),
        source,
    })
}
