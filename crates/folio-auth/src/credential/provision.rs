//! Startup provisioning of the admin account.

use tracing::info;

use folio_core::config::BootstrapAdmin;
use folio_core::error::AppError;
use folio_database::store::UserStore;
use folio_entity::CreateUser;

use super::verifier::CredentialVerifier;

/// Creates the configured admin account if no user has that username.
///
/// Returns `true` when a user was created. Existing accounts are left
/// untouched, including their password.
pub async fn provision_user(
    users: &dyn UserStore,
    verifier: &CredentialVerifier,
    admin: &BootstrapAdmin,
) -> Result<bool, AppError> {
    let username = admin.username.trim();
    if username.is_empty() {
        return Err(AppError::configuration("Bootstrap admin username is empty"));
    }
    if admin.password.is_blank() {
        return Err(AppError::configuration("Bootstrap admin password is empty"));
    }

    if users.find_by_username(username).await?.is_some() {
        info!(username, "Bootstrap admin already exists");
        return Ok(false);
    }

    let password_hash = verifier.hash_credential(admin.password.expose()).await?;
    let user = users
        .create(CreateUser {
            username: username.to_string(),
            password_hash,
        })
        .await?;

    info!(user_id = user.id, username = %user.username, "Provisioned bootstrap admin");
    Ok(true)
}
