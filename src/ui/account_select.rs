use dioxus::prelude::*;

use crate::{
    AccountCollection,
    ui::{
        dropdown::{Dropdown, DropdownOption, SelectEvent},
        identity_icon::IdentityIcon,
    },
};

/// One selectable row: the option key/value and the label shown next to the icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountOption {
    pub address: String,
    pub label: String,
}

/// Options in the collection's iteration order, which is unspecified.
pub fn account_options(accounts: &AccountCollection) -> Vec<AccountOption> {
    accounts
        .values()
        .map(|a| AccountOption {
            address: a.address.clone(),
            label: a.display_name().to_string(),
        })
        .collect()
}

/// Drops the dropdown's option index and hands `(event, address)` on, untouched.
pub fn forward_change<E>(
    (event, _index, address): (E, usize, String),
    on_change: impl FnOnce((E, String)),
) {
    on_change((event, address))
}

/// Dropdown of the caller's accounts, showing each account's identicon and name.
///
/// Selection lives with the caller: `value` is only used for highlighting, and
/// `on_change` receives the address picked by the user.
#[component]
pub fn AccountSelect(
    accounts: AccountCollection,
    on_change: Callback<(SelectEvent, String), ()>,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] label: String,
    #[props(default)] hint: String,
    #[props(default)] error: String,
) -> Element {
    let options: Vec<DropdownOption> = account_options(&accounts)
        .into_iter()
        .map(|o| DropdownOption {
            key: o.address.clone(),
            value: o.address.clone(),
            node: rsx! {
                AccountRow { address: o.address, label: o.label }
            },
        })
        .collect();

    rsx! {
        Dropdown {
            options,
            value,
            disabled,
            label,
            hint,
            error,
            on_change: move |change: (SelectEvent, usize, String)| {
                forward_change(change, |c| on_change(c))
            },
        }
    }
}

#[component]
fn AccountRow(address: String, label: String) -> Element {
    rsx! {
        div { class: "account-row",
            IdentityIcon { address, inline: true, center: true }
            span { class: "account-name", "{label}" }
        }
    }
}
