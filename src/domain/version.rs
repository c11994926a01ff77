use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Site identifier as known by the authoring service.
pub type SiteId = String;

/// Opaque revision identifier of a content item. Only compared for
/// equality; list order comes from the service.
///
/// The service hands these out either as strings (`"1.3"`) or as bare
/// integers; both are normalized to their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionNumber(String);

impl VersionNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of the revision that would follow this one.
    ///
    /// Dotted numbers bump their last segment (`1.9` -> `1.10`), plain
    /// integers are incremented, anything else (including a segment already
    /// at `u64::MAX`) gets a `.1` suffix.
    pub fn successor(&self) -> Self {
        if let Some((head, last)) = self.0.rsplit_once('.')
            && let Some(n) = bump(last)
        {
            return Self(format!("{head}.{n}"));
        }
        if let Some(n) = bump(&self.0) {
            return Self(n.to_string());
        }
        Self(format!("{}.1", self.0))
    }
}

fn bump(segment: &str) -> Option<u64> {
    segment.parse::<u64>().ok()?.checked_add(1)
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for VersionNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for VersionNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for VersionNumber {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for VersionNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

/// One persisted revision of a content item. Never mutated client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub version_number: VersionNumber,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub edited_by: String,
    pub edited_date: DateTime<Utc>,
    #[serde(default)]
    pub comment: String,
}

/// The content item whose history is being shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDescriptor {
    pub path: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl ItemDescriptor {
    pub fn for_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: None,
            content_type: None,
        }
    }
}

/// Result of listing an item's history, newest version first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionsResponse {
    pub item: ItemDescriptor,
    pub versions: Vec<VersionRecord>,
}

/// Body of a single version as returned by the get-version call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentVersion {
    pub path: String,
    pub version_number: VersionNumber,
    pub content: String,
}

/// Parameters of a history listing. `config` selects the configuration
/// history endpoint, which additionally takes `environment` and `module`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryRequest {
    pub path: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub config: bool,
}

impl HistoryRequest {
    pub fn content(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn configuration(
        path: impl Into<String>,
        environment: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            environment: Some(environment.into()),
            module: Some(module.into()),
            config: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentVersionRequest {
    pub path: String,
    pub version_number: VersionNumber,
}
