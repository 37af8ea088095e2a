//! View module.
//!
//! Read-only snapshots of the game state and the functions that turn them into
//! styled text. Handlers never format game objects directly; they build a
//! snapshot and hand it to one of the `render_*` functions here.
use std::fmt::Write;

use colored::Colorize;
use textwrap::fill;

use crate::command::COMMANDS;
use crate::effect::Effect;
use crate::inventory::{Inventory, InventoryEntry};
use crate::map::Map;
use crate::style::{GameStyle, indented_block, normal_block};

const ICON_EFFECT: &str = "\u{2623}"; // biohazard sign
const ICON_DEATH: &str = "☠";

/// One coded line of an inventory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLine {
    pub code: char,
    pub title: String,
    pub count: u32,
    pub weight: f32,
}
impl InventoryLine {
    /// Snapshot every entry of an inventory together with its current code.
    pub fn list(inventory: &Inventory) -> Vec<InventoryLine> {
        inventory
            .iter_coded()
            .map(|(code, entry)| InventoryLine {
                code,
                title: entry.item.title.clone(),
                count: entry.count,
                weight: entry.weight(),
            })
            .collect()
    }
}

/// What the player can see of the map they're standing on.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub title: String,
    pub description: String,
    pub exits: Vec<String>,
    pub items: Vec<InventoryLine>,
}
impl From<&Map> for MapView {
    fn from(map: &Map) -> Self {
        MapView {
            title: map.title.clone(),
            description: map.description.clone(),
            exits: map.exits.keys().cloned().collect(),
            items: InventoryLine::list(&map.inventory),
        }
    }
}

/// Numbers shown in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub hp: i32,
    pub max_hp: i32,
    pub level: u32,
}

fn item_lines(out: &mut String, lines: &[InventoryLine]) {
    for line in lines {
        let _ = write!(out, "\n    {}) {}", line.code.to_string().code_style(), line.title.item_style());
        if line.count > 1 {
            let _ = write!(out, " (x{})", line.count);
        }
    }
}

/// Full description of a map: title, description, ground items and exits.
pub fn render_map(view: &MapView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title.map_titlebar_style());
    let _ = writeln!(out, "{}", fill(&view.description, normal_block()).description_style());
    if view.items.is_empty() {
        let _ = write!(out, "\n  - Items: {}", "none".dimmed());
    } else {
        let _ = write!(out, "\n  - Items:");
        item_lines(&mut out, &view.items);
    }
    let exits = if view.exits.is_empty() {
        "none".dimmed().to_string()
    } else {
        view.exits
            .iter()
            .map(|exit| exit.exit_style().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = write!(out, "\n  - Possible exits: {exits}");
    out
}

/// The player's inventory listing, with a weight total.
pub fn render_inventory(lines: &[InventoryLine]) -> String {
    if lines.is_empty() {
        return "Your inventory is empty.".to_string();
    }
    let mut out = "Your inventory contains these items:".to_string();
    item_lines(&mut out, lines);
    let total: f32 = lines.iter().map(|line| line.weight).sum();
    let _ = write!(out, "\n\n  Total weight: {total:.1}");
    out
}

/// Detailed look at a single item.
pub fn render_item(entry: &InventoryEntry) -> String {
    let item = &entry.item;
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.title.item_style().underline());
    let _ = writeln!(out, "{}", fill(&item.description, indented_block()).description_style());
    let _ = write!(out, "\n  Weight: {:.1}", item.weight);
    if entry.count > 1 {
        let _ = write!(out, " each, {} here", entry.count);
    }
    if !item.flags.is_empty() {
        let mut flags: Vec<_> = item.flags.iter().map(ToString::to_string).collect();
        flags.sort_unstable();
        let _ = write!(out, "\n  Properties: {}", flags.join(", "));
    }
    out
}

/// Summary line for each effect just applied by consuming an item or entering a map.
pub fn render_new_effects(effects: &[Effect]) -> String {
    effects
        .iter()
        .map(|fx| {
            format!(
                "{ICON_EFFECT} You feel the {} setting in.",
                fx.name.effect_style()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lines produced by an effect tick.
pub fn render_effect_log(log: &[String]) -> String {
    log.iter()
        .map(|line| format!("{ICON_EFFECT} {}", line.as_str().effect_style()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The game-over notice shown when the player dies.
pub fn render_death(name: &str) -> String {
    format!("{ICON_DEATH} {} {ICON_DEATH}", format!("{name} has died. The adventure ends here.").death_style())
}

/// Command list with their aliases and one-line help.
pub fn render_help() -> String {
    let mut out = format!("{}", "Available commands:".subheading_style());
    for spec in COMMANDS {
        let _ = write!(out, "\n    {:<16}{}", spec.name, spec.help);
        let _ = write!(out, "\n    {:<16}{}", "", format!("aliases: {}", spec.aliases.join(", ")).dimmed());
    }
    out
}

/// Prompt shown before each command.
pub fn prompt(status: StatusLine) -> String {
    format!(
        "\n[HP: {}/{} | Lvl {}]  Your action: ",
        status.hp, status.max_hp, status.level
    )
    .prompt_style()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<InventoryLine> {
        vec![
            InventoryLine {
                code: 'a',
                title: "A torch".into(),
                count: 1,
                weight: 1.0,
            },
            InventoryLine {
                code: 'b',
                title: "Some arrows".into(),
                count: 12,
                weight: 1.2,
            },
        ]
    }

    #[test]
    fn empty_inventory_has_its_own_message() {
        assert_eq!(render_inventory(&[]), "Your inventory is empty.");
    }

    #[test]
    fn inventory_lists_codes_counts_and_weight() {
        let text = render_inventory(&lines());
        assert!(text.contains("A torch"));
        assert!(text.contains("(x12)"));
        assert!(text.contains("2.2"));
    }

    #[test]
    fn map_render_mentions_title_items_and_exits() {
        let view = MapView {
            title: "Dark Forest".into(),
            description: "Trees.".into(),
            exits: vec!["north".into(), "south".into()],
            items: lines(),
        };
        let text = render_map(&view);
        assert!(text.contains("Dark Forest"));
        assert!(text.contains("Some arrows"));
        assert!(text.contains("north"));
        assert!(text.contains("south"));
    }

    #[test]
    fn help_lists_every_command() {
        let text = render_help();
        for spec in COMMANDS {
            assert!(text.contains(spec.name));
        }
    }
}
