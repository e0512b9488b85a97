//! Account records handed to the selector by its caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Label shown for accounts without a usable name.
pub const UNNAMED: &str = "Unnamed";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Account {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    pub fn named(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: Some(name.into()),
        }
    }

    /// The name as given, or [`UNNAMED`] when it is absent or empty.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNNAMED,
        }
    }
}

/// Accounts keyed by address. Iteration order is unspecified.
pub type AccountCollection = HashMap<String, Account>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_when_missing_or_empty() {
        assert_eq!(Account::new("0xBBB").display_name(), "Unnamed");
        assert_eq!(Account::named("0xBBB", "").display_name(), "Unnamed");
    }

    #[test]
    fn display_name_is_not_trimmed() {
        let account = Account::named("0xAAA", "  Alice ");
        assert_eq!(account.display_name(), "  Alice ");
    }

    #[test]
    fn collection_parses_without_names() {
        let accounts: AccountCollection = serde_json::from_str(
            r#"{
                "0xAAA": { "address": "0xAAA", "name": "Alice" },
                "0xBBB": { "address": "0xBBB" }
            }"#,
        )
        .unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts["0xAAA"].display_name(), "Alice");
        assert_eq!(accounts["0xBBB"].name, None);
    }
}
