use dioxus::prelude::*;

/// Raw event carried by dropdown change notifications.
pub type SelectEvent = Event<MouseData>;

#[derive(Clone, PartialEq)]
pub struct DropdownOption {
    pub key: String,
    pub value: String,
    pub node: Element,
}

/// Labeled option list. Reports `(event, index, value)` when an option is
/// clicked, unless disabled.
#[component]
pub fn Dropdown(
    options: Vec<DropdownOption>,
    on_change: Callback<(SelectEvent, usize, String), ()>,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] label: String,
    #[props(default)] hint: String,
    #[props(default)] error: String,
) -> Element {
    let disabled_attr = disabled.then_some("true");
    let error_class = if error.is_empty() { "" } else { "has-error" };
    rsx! {
        div { class: "dropdown {error_class}", "aria-disabled": disabled_attr,
            if !label.is_empty() {
                label { class: "dropdown-label", "{label}" }
            }
            div { class: "dropdown-options", role: "listbox",
                {
                    options
                        .into_iter()
                        .enumerate()
                        .map(move |(index, o)| {
                            let DropdownOption { key, value: option_value, node } = o;
                            let selected = !value.is_empty() && option_value == value;
                            let selected_attr = selected.then_some("true");
                            let data_value = option_value.clone();
                            rsx! {
                                div {
                                    key: "{key}",
                                    class: "dropdown-option",
                                    role: "option",
                                    "data-value": "{data_value}",
                                    "aria-selected": selected_attr,
                                    onclick: move |e| {
                                        if disabled {
                                            return;
                                        }
                                        on_change((e, index, option_value.clone()))
                                    },
                                    {node}
                                }
                            }
                        })
                }
            }
            if !hint.is_empty() {
                div { class: "dropdown-hint", "{hint}" }
            }
            if !error.is_empty() {
                div { class: "dropdown-error", "{error}" }
            }
        }
    }
}
