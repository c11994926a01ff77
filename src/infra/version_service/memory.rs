use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::traits::{ServiceResult, VersionService};
use crate::domain::{
    ContentVersion, ItemDescriptor, ServiceError, VersionNumber, VersionRecord, VersionsResponse,
};

/// Serialized form of every site's version history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionCatalog {
    #[serde(default)]
    pub sites: BTreeMap<String, SiteCatalog>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteCatalog {
    /// Content items keyed by repository path.
    #[serde(default)]
    pub items: BTreeMap<String, ItemHistory>,
    #[serde(default)]
    pub configurations: Vec<ConfigurationHistory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemHistory {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    /// Newest first.
    #[serde(default)]
    pub versions: Vec<StoredVersion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredVersion {
    #[serde(flatten)]
    pub record: VersionRecord,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationHistory {
    pub path: String,
    pub module: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(flatten)]
    pub history: ItemHistory,
}

impl VersionCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("parse catalog {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self).context("serialize catalog")?;
        std::fs::write(path, contents).with_context(|| format!("write catalog {}", path.display()))
    }
}

impl ItemHistory {
    fn to_response(&self, path: &str) -> VersionsResponse {
        VersionsResponse {
            item: ItemDescriptor {
                path: path.to_string(),
                label: self.label.clone(),
                content_type: self.content_type.clone(),
            },
            versions: self.versions.iter().map(|v| v.record.clone()).collect(),
        }
    }
}

/// Version service backed by a catalog held in memory.
pub struct InMemoryVersionService {
    catalog: RwLock<VersionCatalog>,
    editor: String,
}

impl InMemoryVersionService {
    pub fn new(catalog: VersionCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            editor: "studio".to_string(),
        }
    }

    /// Name recorded as `edited_by` on versions created by reverts.
    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = editor.into();
        self
    }

    pub fn snapshot(&self) -> VersionCatalog {
        self.catalog.read().clone()
    }
}

fn not_found(site: &str, path: &str) -> ServiceError {
    ServiceError::NotFound {
        site: site.to_string(),
        path: path.to_string(),
    }
}

#[async_trait]
impl VersionService for InMemoryVersionService {
    async fn list_versions(&self, site: &str, path: &str) -> ServiceResult<VersionsResponse> {
        let catalog = self.catalog.read();
        catalog
            .sites
            .get(site)
            .and_then(|s| s.items.get(path))
            .map(|history| history.to_response(path))
            .ok_or_else(|| not_found(site, path))
    }

    async fn list_configuration_versions(
        &self,
        site: &str,
        path: &str,
        environment: Option<&str>,
        module: Option<&str>,
    ) -> ServiceResult<VersionsResponse> {
        let catalog = self.catalog.read();
        catalog
            .sites
            .get(site)
            .and_then(|s| {
                s.configurations.iter().find(|c| {
                    c.path == path
                        && Some(c.module.as_str()) == module
                        && c.environment.as_deref() == environment
                })
            })
            .map(|config| config.history.to_response(path))
            .ok_or_else(|| not_found(site, path))
    }

    async fn get_version(
        &self,
        site: &str,
        path: &str,
        version: &VersionNumber,
    ) -> ServiceResult<ContentVersion> {
        let catalog = self.catalog.read();
        let history = catalog
            .sites
            .get(site)
            .and_then(|s| s.items.get(path))
            .ok_or_else(|| not_found(site, path))?;
        let stored = history
            .versions
            .iter()
            .find(|v| &v.record.version_number == version)
            .ok_or_else(|| ServiceError::VersionNotFound {
                path: path.to_string(),
                version: version.clone(),
            })?;

        Ok(ContentVersion {
            path: path.to_string(),
            version_number: stored.record.version_number.clone(),
            content: stored.content.clone(),
        })
    }

    async fn revert(&self, site: &str, path: &str, version: &VersionNumber) -> ServiceResult<()> {
        let mut catalog = self.catalog.write();
        let history = catalog
            .sites
            .get_mut(site)
            .and_then(|s| s.items.get_mut(path))
            .ok_or_else(|| not_found(site, path))?;

        let target = history
            .versions
            .iter()
            .find(|v| &v.record.version_number == version)
            .cloned()
            .ok_or_else(|| ServiceError::VersionNotFound {
                path: path.to_string(),
                version: version.clone(),
            })?;

        let next_number = history
            .versions
            .first()
            .map(|newest| newest.record.version_number.successor())
            .unwrap_or_else(|| VersionNumber::from("1.0"));

        log::info!("Reverting {path} in {site} to {version} as {next_number}");

        history.versions.insert(
            0,
            StoredVersion {
                record: VersionRecord {
                    version_number: next_number,
                    label: target.record.label.clone(),
                    edited_by: self.editor.clone(),
                    edited_date: Utc::now(),
                    comment: format!("Reverted to version {version}"),
                },
                content: target.content,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stored(number: &str, content: &str) -> StoredVersion {
        StoredVersion {
            record: VersionRecord {
                version_number: number.into(),
                label: String::new(),
                edited_by: "author".into(),
                edited_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
                comment: String::new(),
            },
            content: content.into(),
        }
    }

    fn catalog() -> VersionCatalog {
        let mut site = SiteCatalog::default();
        site.items.insert(
            "/site/website/index.xml".into(),
            ItemHistory {
                label: Some("Home".into()),
                content_type: None,
                versions: vec![stored("1.2", "<c>three</c>"), stored("1.1", "<c>two</c>")],
            },
        );
        site.configurations.push(ConfigurationHistory {
            path: "site-config.xml".into(),
            module: "studio".into(),
            environment: Some("authoring".into()),
            history: ItemHistory {
                versions: vec![stored("4", "<site/>")],
                ..Default::default()
            },
        });
        let mut catalog = VersionCatalog::default();
        catalog.sites.insert("editorial".into(), site);
        catalog
    }

    #[tokio::test]
    async fn lists_content_versions_newest_first() {
        let service = InMemoryVersionService::new(catalog());
        let response = service
            .list_versions("editorial", "/site/website/index.xml")
            .await
            .unwrap();
        assert_eq!(response.item.label.as_deref(), Some("Home"));
        let numbers: Vec<_> = response
            .versions
            .iter()
            .map(|v| v.version_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["1.2", "1.1"]);
    }

    #[tokio::test]
    async fn configuration_history_matches_module_and_environment() {
        let service = InMemoryVersionService::new(catalog());
        let found = service
            .list_configuration_versions(
                "editorial",
                "site-config.xml",
                Some("authoring"),
                Some("studio"),
            )
            .await
            .unwrap();
        assert_eq!(found.versions.len(), 1);

        let missing = service
            .list_configuration_versions("editorial", "site-config.xml", None, Some("studio"))
            .await;
        assert!(matches!(missing, Err(ServiceError::NotFound { .. })));
    }

    #[tokio::test]
    async fn unknown_item_is_not_found() {
        let service = InMemoryVersionService::new(catalog());
        let err = service
            .list_versions("editorial", "/site/website/missing.xml")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn revert_appends_copy_of_target() {
        let service = InMemoryVersionService::new(catalog()).with_editor("jane");
        service
            .revert("editorial", "/site/website/index.xml", &"1.1".into())
            .await
            .unwrap();

        let response = service
            .list_versions("editorial", "/site/website/index.xml")
            .await
            .unwrap();
        assert_eq!(response.versions.len(), 3);
        assert_eq!(response.versions[0].version_number.as_str(), "1.3");
        assert_eq!(response.versions[0].edited_by, "jane");

        let body = service
            .get_version("editorial", "/site/website/index.xml", &"1.3".into())
            .await
            .unwrap();
        assert_eq!(body.content, "<c>two</c>");
    }

    #[tokio::test]
    async fn revert_to_unknown_version_fails_without_side_effect() {
        let service = InMemoryVersionService::new(catalog());
        let err = service
            .revert("editorial", "/site/website/index.xml", &"9.9".into())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::VersionNotFound { .. }));
        assert_eq!(service.snapshot(), catalog());
    }

    #[test]
    fn catalog_round_trips_through_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        catalog().save(file.path()).unwrap();
        assert_eq!(VersionCatalog::load(file.path()).unwrap(), catalog());
    }
}
