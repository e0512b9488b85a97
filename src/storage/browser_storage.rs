use anyhow::anyhow;
use idb::{Database, Factory, ObjectStoreParams, TransactionMode};
use js_sys::wasm_bindgen::JsValue;
use serde::{Serialize, de::DeserializeOwned};
use serde_wasm_bindgen::Serializer;

use dioxus::logger::tracing::warn;

use super::Storage;
use crate::{AccountCollection, AppSettings};

const DB_NAME: &str = "accountsel";
const STORE: &str = "documents";
const SETTINGS_KEY: &str = "settings";
const ACCOUNTS_KEY: &str = "accounts";

/// IndexedDB backed storage. Each document lives under a fixed key in one
/// object store, so every opened handle sees the same data.
#[derive(Debug)]
pub struct IdbStorage {
    db: Database,
}

impl IdbStorage {
    pub async fn new() -> anyhow::Result<Self> {
        let db = Self::open_db().await?;
        Ok(Self { db })
    }

    async fn open_db() -> anyhow::Result<Database> {
        let factory = Factory::new().map_err(|e| anyhow!("{e:?}"))?;
        let mut open_request = factory
            .open(DB_NAME, Some(1))
            .map_err(|e| anyhow!("{e:?}"))?;

        open_request.on_upgrade_needed(|event| {
            let database = match event.database() {
                Ok(db) => db,
                Err(e) => {
                    warn!("Could not upgrade {DB_NAME}: {e:?}");
                    return;
                }
            };
            // Out-of-line keys: documents are stored under SETTINGS_KEY/ACCOUNTS_KEY.
            if let Err(e) = database.create_object_store(STORE, ObjectStoreParams::new()) {
                warn!("Could not create object store {STORE}: {e:?}");
            }
        });

        let db = open_request.await.map_err(|e| anyhow!("{e:?}"))?;
        Ok(db)
    }

    async fn put<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        let transaction = self
            .db
            .transaction(&[STORE], TransactionMode::ReadWrite)
            .map_err(|e| anyhow!("{e:?}"))?;
        let store = transaction
            .object_store(STORE)
            .map_err(|e| anyhow!("{e:?}"))?;

        let doc = value
            .serialize(&Serializer::json_compatible())
            .map_err(|e| anyhow!("{e:?}"))?;
        store
            .put(&doc, Some(&JsValue::from_str(key)))
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;
        transaction
            .commit()
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>> {
        let transaction = self
            .db
            .transaction(&[STORE], TransactionMode::ReadOnly)
            .map_err(|e| anyhow!("{e:?}"))?;
        let store = transaction
            .object_store(STORE)
            .map_err(|e| anyhow!("{e:?}"))?;

        let stored: Option<JsValue> = store
            .get(JsValue::from_str(key))
            .map_err(|e| anyhow!("{e:?}"))?
            .await
            .map_err(|e| anyhow!("{e:?}"))?;
        let stored = stored
            .map(|v| serde_wasm_bindgen::from_value(v).map_err(|e| anyhow!("{e:?}")))
            .transpose()?;

        transaction.await.map_err(|e| anyhow!("{e:?}"))?;
        Ok(stored)
    }
}

#[async_trait::async_trait(?Send)]
impl Storage for IdbStorage {
    async fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()> {
        self.put(SETTINGS_KEY, settings).await
    }

    async fn load_settings(&self) -> anyhow::Result<Option<AppSettings>> {
        self.get(SETTINGS_KEY).await
    }

    async fn save_accounts(&self, accounts: &AccountCollection) -> anyhow::Result<()> {
        self.put(ACCOUNTS_KEY, accounts).await
    }

    async fn load_accounts(&self) -> anyhow::Result<Option<AccountCollection>> {
        self.get(ACCOUNTS_KEY).await
    }
}
