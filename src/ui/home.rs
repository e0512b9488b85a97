//! Landing page: the persisted accounts in an [`AccountSelect`], with the
//! picked address written back to the settings. Sample accounts are stored on
//! first run.

use dioxus::{
    logger::tracing::{info, warn},
    prelude::*,
};

use crate::{
    AccountCollection, AppSettings, Route,
    storage::{Storage, get_storage, load_accounts_or_default},
    ui::{account_select::AccountSelect, dropdown::SelectEvent},
};

#[component]
pub fn Home() -> Element {
    let mut settings = use_signal(AppSettings::default);
    let accounts = use_resource(move || async move {
        let storage = match get_storage().await {
            Ok(s) => s,
            Err(e) => {
                warn!("Could not get storage: {e:?}");
                return AccountCollection::new();
            }
        };
        match storage.load_settings().await {
            Ok(Some(s)) => settings.set(s),
            Ok(None) => {}
            Err(e) => warn!("Could not load settings: {e:?}"),
        }
        match load_accounts_or_default(&storage).await {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!("Could not load accounts: {e:?}");
                AccountCollection::new()
            }
        }
    });

    let save_selection = move |(_e, address): (SelectEvent, String)| async move {
        info!("selected account {address}");
        let s = settings().with_selection(address);
        settings.set(s.clone());
        let storage = match get_storage().await {
            Ok(s) => s,
            Err(e) => {
                warn!("Could not get storage: {e:?}");
                return;
            }
        };
        if let Err(e) = storage.save_settings(&s).await {
            warn!("Could not save settings: {e:?}");
        }
    };

    let Some(accounts) = accounts() else {
        return rsx! { "Loading..." };
    };
    let error = if accounts.is_empty() {
        "No accounts found.".to_string()
    } else {
        String::new()
    };
    let selected = settings.read().selection_value();

    rsx! {
        div { style: "padding: 1rem;",
            AccountSelect {
                accounts,
                value: selected.clone(),
                label: "Account".to_string(),
                hint: "The account used to sign requests".to_string(),
                error,
                on_change: save_selection,
            }
            if !selected.is_empty() {
                p { class: "selected-account", "Selected: {selected}" }
            }
            hr {}
            Link {
                to: Route::Docs {
                    module: env!("CARGO_PKG_NAME").to_string(),
                },
                "Implementors"
            }
        }
    }
}
