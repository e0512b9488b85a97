//! Deterministic glyph for an account address.

use dioxus::prelude::*;
use sha2::{Digest, Sha256};

const GRID: usize = 5;

/// A 5x5 grid mirrored around its middle column, with one fill colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blockie {
    pub color: String,
    pub cells: [[bool; GRID]; GRID],
}

impl Blockie {
    pub fn from_address(address: &str) -> Self {
        let digest = Sha256::digest(address.as_bytes());
        let hue = u32::from(digest[0]) * 360 / 256;
        let mut cells = [[false; GRID]; GRID];
        for (row, line) in cells.iter_mut().enumerate() {
            for col in 0..=GRID / 2 {
                let on = digest[1 + row * 3 + col] & 1 == 1;
                line[col] = on;
                line[GRID - 1 - col] = on;
            }
        }
        Self {
            color: format!("hsl({hue}, 55%, 45%)"),
            cells,
        }
    }

    /// `(x, y)` of every filled cell, row by row.
    pub fn filled_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(y, line)| {
                line.iter()
                    .enumerate()
                    .filter(|(_, on)| **on)
                    .map(move |(x, _)| (x, y))
            })
            .collect()
    }
}

#[component]
pub fn IdentityIcon(
    address: String,
    #[props(default)] inline: bool,
    #[props(default)] center: bool,
    #[props(default = 24)] size: u32,
) -> Element {
    let blockie = Blockie::from_address(&address);
    let display = if inline { "inline-block" } else { "block" };
    let align = if center {
        "vertical-align: middle; margin: 0 auto;"
    } else {
        ""
    };
    let color = blockie.color.clone();
    rsx! {
        svg {
            class: "identity-icon",
            width: "{size}",
            height: "{size}",
            "viewBox": "0 0 5 5",
            style: "display: {display}; {align}",
            for (x, y) in blockie.filled_cells() {
                rect {
                    key: "{x}-{y}",
                    x: "{x}",
                    y: "{y}",
                    width: "1",
                    height: "1",
                    fill: "{color}",
                }
            }
        }
    }
}
