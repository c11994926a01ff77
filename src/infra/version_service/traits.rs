use async_trait::async_trait;

use crate::domain::{ContentVersion, ServiceError, VersionNumber, VersionsResponse};

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Remote versioning operations the history dialog depends on.
///
/// Everything but `revert` is idempotent. `revert` creates a new current
/// version on the server and must not be retried behind the caller's back.
#[async_trait]
pub trait VersionService: Send + Sync {
    /// History of a content item, newest first.
    async fn list_versions(&self, site: &str, path: &str) -> ServiceResult<VersionsResponse>;

    /// History of a configuration file scoped to an environment and module.
    async fn list_configuration_versions(
        &self,
        site: &str,
        path: &str,
        environment: Option<&str>,
        module: Option<&str>,
    ) -> ServiceResult<VersionsResponse>;

    async fn get_version(
        &self,
        site: &str,
        path: &str,
        version: &VersionNumber,
    ) -> ServiceResult<ContentVersion>;

    async fn revert(&self, site: &str, path: &str, version: &VersionNumber) -> ServiceResult<()>;
}
