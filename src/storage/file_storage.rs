use std::{io::ErrorKind, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;

use crate::{AccountCollection, AppSettings};

pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn settings_path(&self) -> PathBuf {
        self.base.join("settings.json")
    }

    fn accounts_path(&self) -> PathBuf {
        self.base.join("accounts.json")
    }
}

async fn write_json<T: Serialize>(path: PathBuf, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<Option<T>> {
    match fs::read_to_string(&path).await {
        Ok(data) => {
            let value = serde_json::from_str(&data)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
    }
}

#[async_trait::async_trait(?Send)]
impl super::Storage for FileStorage {
    async fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        write_json(self.settings_path(), settings).await
    }

    async fn load_settings(&self) -> Result<Option<AppSettings>> {
        read_json(self.settings_path()).await
    }

    async fn save_accounts(&self, accounts: &AccountCollection) -> Result<()> {
        write_json(self.accounts_path(), accounts).await
    }

    async fn load_accounts(&self) -> Result<Option<AccountCollection>> {
        read_json(self.accounts_path()).await
    }
}
