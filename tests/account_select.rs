use accountsel::{
    Account, AccountCollection,
    ui::{AccountSelect, IdentityIcon, SelectEvent},
};
use dioxus::prelude::*;

#[component]
fn Harness(
    accounts: AccountCollection,
    value: String,
    disabled: bool,
    hint: String,
    error: String,
) -> Element {
    rsx! {
        AccountSelect {
            accounts,
            value,
            disabled,
            label: "Account".to_string(),
            hint,
            error,
            on_change: move |_change: (SelectEvent, String)| {},
        }
    }
}

fn render(props: HarnessProps) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn props(accounts: &[Account], value: &str) -> HarnessProps {
    HarnessProps {
        accounts: accounts
            .iter()
            .map(|a| (a.address.clone(), a.clone()))
            .collect(),
        value: value.to_string(),
        disabled: false,
        hint: String::new(),
        error: String::new(),
    }
}

struct RenderedOption {
    tag: String,
    label: String,
}

impl RenderedOption {
    fn has_value(&self, address: &str) -> bool {
        self.tag.contains(&format!(r#"data-value="{address}""#))
    }

    fn is_selected(&self) -> bool {
        self.tag.contains(r#"aria-selected="true""#)
    }
}

/// Opening tag of every option, paired with the account name rendered inside it.
fn rendered_options(html: &str) -> Vec<RenderedOption> {
    let mut out: Vec<RenderedOption> = Vec::new();
    for piece in html.split('<') {
        let (tag, text) = piece.split_once('>').unwrap_or((piece, ""));
        if tag.starts_with("div") && tag.contains(r#"class="dropdown-option""#) {
            out.push(RenderedOption {
                tag: tag.to_string(),
                label: String::new(),
            });
        } else if tag.starts_with("span") && tag.contains(r#"class="account-name""#) {
            if let Some(last) = out.last_mut() {
                last.label = text.to_string();
            }
        }
    }
    out
}

fn find<'a>(options: &'a [RenderedOption], address: &str) -> &'a RenderedOption {
    options
        .iter()
        .find(|o| o.has_value(address))
        .unwrap_or_else(|| panic!("no option for {address}"))
}

#[test]
fn named_and_unnamed_accounts_with_selection() {
    let html = render(props(
        &[Account::named("0xAAA", "Alice"), Account::new("0xBBB")],
        "0xAAA",
    ));
    let options = rendered_options(&html);
    assert_eq!(options.len(), 2);

    let alice = find(&options, "0xAAA");
    assert_eq!(alice.label, "Alice");
    assert!(alice.is_selected());

    let unnamed = find(&options, "0xBBB");
    assert_eq!(unnamed.label, "Unnamed");
    assert!(!unnamed.is_selected());
}

#[test]
fn empty_collection_renders_no_options() {
    let html = render(props(&[], ""));
    assert!(rendered_options(&html).is_empty());
    assert!(html.contains("Account"));
}

#[test]
fn option_count_matches_collection() {
    let accounts: Vec<Account> = (0..7)
        .map(|i| Account::named(format!("0x{i:040x}"), format!("Account {i}")))
        .collect();
    let html = render(props(&accounts, ""));
    let options = rendered_options(&html);
    assert_eq!(options.len(), 7);
    assert!(options.iter().all(|o| !o.is_selected()));
    for account in &accounts {
        assert_eq!(find(&options, &account.address).label, account.display_name());
    }
}

#[test]
fn names_are_shown_verbatim() {
    let html = render(props(
        &[Account::named("0xAAA", "  Alice "), Account::named("0xCCC", "")],
        "",
    ));
    let options = rendered_options(&html);
    assert_eq!(find(&options, "0xAAA").label, "  Alice ");
    assert_eq!(find(&options, "0xCCC").label, "Unnamed");
}

#[test]
fn disabled_reaches_the_dropdown_and_keeps_options() {
    let accounts = [Account::named("0xAAA", "Alice"), Account::new("0xBBB")];

    let enabled = render(props(&accounts, ""));
    assert!(!enabled.contains("aria-disabled"));

    let disabled = render(HarnessProps {
        disabled: true,
        ..props(&accounts, "")
    });
    assert!(disabled.contains(r#"aria-disabled="true""#));
    assert_eq!(rendered_options(&disabled).len(), 2);
}

#[test]
fn unknown_selection_highlights_nothing() {
    let html = render(props(&[Account::named("0xAAA", "Alice")], "0xFFF"));
    let options = rendered_options(&html);
    assert_eq!(options.len(), 1);
    assert!(!options[0].is_selected());
}

#[test]
fn hint_and_error_are_passed_through() {
    let html = render(HarnessProps {
        hint: "Pick one".to_string(),
        error: "Account locked".to_string(),
        ..props(&[Account::new("0xAAA")], "")
    });
    assert!(html.contains("Pick one"));
    assert!(html.contains("dropdown-error"));
    assert!(html.contains("Account locked"));

    let html = render(props(&[Account::new("0xAAA")], ""));
    assert!(!html.contains("dropdown-error"));
    assert!(!html.contains("dropdown-hint"));
}

#[component]
fn IconHarness(address: String) -> Element {
    rsx! {
        IdentityIcon { address, inline: true, center: true }
    }
}

#[test]
fn identity_icon_is_stable_per_address() {
    let draw = |address: &str| {
        let mut dom = VirtualDom::new_with_props(
            IconHarness,
            IconHarnessProps {
                address: address.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    };
    let first = draw("0xAAA");
    assert!(first.starts_with("<svg"));
    assert!(first.contains("inline-block"));
    assert!(first.contains("vertical-align: middle"));
    assert_eq!(first, draw("0xAAA"));
    assert_ne!(first, draw("0xBBB"));
}
