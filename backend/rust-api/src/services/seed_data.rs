use crate::error::StoreError;
use crate::services::{EventStore, PasswordStore};

/// Create missing data files at startup: an empty event collection, and the admin
/// password when one is configured. Existing files are never touched.
pub async fn bootstrap_data_files(
    events: &EventStore,
    passwords: &PasswordStore,
    admin_password: Option<&str>,
) -> Result<(), StoreError> {
    if events.exists().await? {
        tracing::info!("Event file {} found, skipping seed", events.path().display());
    } else {
        events.write_all(&[]).await?;
        tracing::info!("Created empty event file {}", events.path().display());
    }

    if passwords.exists().await? {
        return Ok(());
    }

    match admin_password {
        Some(password) => {
            passwords.write(password).await?;
            tracing::info!("Created password file {} from ADMIN_PASSWORD", passwords.path().display());
        }
        None => {
            tracing::warn!(
                "Password file {} is missing and ADMIN_PASSWORD is not set; /readPass will fail until a password is set",
                passwords.path().display()
            );
        }
    }

    Ok(())
}
