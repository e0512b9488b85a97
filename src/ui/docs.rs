use std::sync::Arc;

use dioxus::prelude::*;

use crate::{Route, docindex::ImplementorsIndex};

/// Implementors of `module`, rendered from their generated HTML fragments.
#[component]
pub fn Docs(module: String) -> Element {
    let index = consume_context::<Arc<ImplementorsIndex>>();
    let fragments = index.implementors(&module).to_vec();
    let others: Vec<String> = index
        .modules()
        .filter(|m| *m != module)
        .map(str::to_string)
        .collect();

    rsx! {
        div { style: "padding: 1rem;",
            h3 { "Implementors in {module}" }
            if fragments.is_empty() {
                p { "No implementors registered." }
            } else {
                ul { class: "implementors",
                    for (i, fragment) in fragments.into_iter().enumerate() {
                        li { key: "{i}", dangerous_inner_html: fragment }
                    }
                }
            }
            if !others.is_empty() {
                h4 { "Other modules" }
                ul {
                    for m in others {
                        li { key: "{m}",
                            Link { to: Route::Docs { module: m.clone() }, "{m}" }
                        }
                    }
                }
            }
            Link { to: Route::Home {}, "Back" }
        }
    }
}
