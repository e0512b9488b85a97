use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AppSettings {
    /// Address picked the last time the selector changed.
    #[serde(default)]
    pub selected_account: Option<String>,
}

impl AppSettings {
    pub fn with_selection(mut self, address: String) -> Self {
        self.selected_account = if address.is_empty() {
            None
        } else {
            Some(address)
        };
        self
    }

    /// Selection as the selector expects it, empty meaning none.
    pub fn selection_value(&self) -> String {
        self.selected_account.clone().unwrap_or_default()
    }
}
