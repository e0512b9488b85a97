use dioxus::{
    logger::tracing::{Level, info},
    prelude::*,
};

use accountsel::{App, docindex::ImplementorsRegistry};

const IMPLEMENTORS: &str = include_str!("../assets/implementors.json");

fn main() -> anyhow::Result<()> {
    dioxus::logger::init(Level::INFO)?;

    let mut registry = ImplementorsRegistry::new();
    registry.register_json(IMPLEMENTORS)?;
    registry.subscribe(|index| {
        for module in index.modules() {
            info!("{module}: {} implementors", index.implementors(module).len());
        }
    });
    let index = registry.ready()?;

    LaunchBuilder::new().with_context(index).launch(App);
    Ok(())
}
