//! Owner lookup for one resource family.

use async_trait::async_trait;

use playerhub_core::result::AppResult;
use playerhub_core::types::UserId;

/// Resolves the user that owns a resource.
///
/// One implementation per resource family (player profiles, users, ...).
/// The gate only ever sees this trait, so it does not know how or where
/// resources are stored.
#[async_trait]
pub trait OwnerResolver: Send + Sync + 'static {
    /// Singular lowercase name of the resource family, e.g. `"player"`.
    fn resource_name(&self) -> &'static str;

    /// Returns the owner of resource `id`, or an error if it cannot be found.
    async fn resolve_owner(&self, id: i64) -> AppResult<UserId>;
}
