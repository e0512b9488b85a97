use anyhow::Context;
use async_trait::async_trait;
use dioxus::logger::tracing::info;

use crate::{AccountCollection, AppSettings};

#[cfg(target_arch = "wasm32")]
mod browser_storage;
#[cfg(not(target_arch = "wasm32"))]
mod file_storage;

#[cfg(target_arch = "wasm32")]
pub use browser_storage::IdbStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use file_storage::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
type AppStorage = file_storage::FileStorage;
#[cfg(target_arch = "wasm32")]
type AppStorage = browser_storage::IdbStorage;

/// Accounts written on first run, when nothing has been stored yet.
const SEED_ACCOUNTS: &str = include_str!("../../assets/accounts.json");

#[async_trait(?Send)]
pub trait Storage {
    async fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()>;
    async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>>;
    async fn save_accounts(&self, accounts: &AccountCollection) -> anyhow::Result<()>;
    async fn load_accounts(&self) -> anyhow::Result<Option<AccountCollection>>;
}

/// Loads the stored accounts. When none are stored yet, parses `seed`, stores
/// it and returns it. An empty stored collection is kept as is.
pub async fn load_or_seed_accounts(
    storage: &impl Storage,
    seed: &str,
) -> anyhow::Result<AccountCollection> {
    if let Some(accounts) = storage.load_accounts().await? {
        return Ok(accounts);
    }
    let accounts: AccountCollection =
        serde_json::from_str(seed).context("parsing seed accounts")?;
    info!("seeding {} accounts", accounts.len());
    storage.save_accounts(&accounts).await?;
    Ok(accounts)
}

/// [`load_or_seed_accounts`] with the bundled sample accounts.
pub async fn load_accounts_or_default(storage: &impl Storage) -> anyhow::Result<AccountCollection> {
    load_or_seed_accounts(storage, SEED_ACCOUNTS).await
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    use directories_next::ProjectDirs;
    use std::path::PathBuf;

    let base = if let Some(proj_dirs) = ProjectDirs::from("com", "N K", "accountsel") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    };
    tokio::fs::create_dir_all(&base).await?;
    let storage = AppStorage::new(base);
    Ok(storage)
}

#[cfg(target_arch = "wasm32")]
pub async fn get_storage() -> anyhow::Result<AppStorage> {
    let storage = AppStorage::new().await?;
    Ok(storage)
}
