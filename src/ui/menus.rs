//! Menu table and rendering
//!
//! The main menu is a static table mapping a stable key ("1".."18") to an
//! action. Rendering and dispatch both read the same table.

use std::io::{self, Write};

use strum::Display;

use crate::types::Operation;

/// Width of the `=` rules around the menu
pub const RULE_WIDTH: usize = 50;

/// Heading a menu entry is grouped under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MenuSection {
    #[strum(serialize = "Basic Operations")]
    Basic,
    #[strum(serialize = "Scientific Functions")]
    Scientific,
    #[strum(serialize = "Angle Conversion")]
    AngleConversion,
    #[strum(serialize = "Utilities")]
    Utilities,
}

/// What choosing a menu entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Calculate(Operation),
    ShowHistory,
    ClearHistory,
    Quit,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Calculate(op) => op.label(),
            Self::ShowHistory => "Show History",
            Self::ClearHistory => "Clear History",
            Self::Quit => "Quit",
        }
    }
}

/// One row of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: &'static str,
    pub section: MenuSection,
    pub action: MenuAction,
}

const fn entry(key: &'static str, section: MenuSection, action: MenuAction) -> MenuEntry {
    MenuEntry {
        key,
        section,
        action,
    }
}

use MenuAction::Calculate;
use MenuSection::{AngleConversion, Basic, Scientific, Utilities};

/// The main menu, in display order
pub const MENU: [MenuEntry; 18] = [
    entry("1", Basic, Calculate(Operation::Add)),
    entry("2", Basic, Calculate(Operation::Subtract)),
    entry("3", Basic, Calculate(Operation::Multiply)),
    entry("4", Basic, Calculate(Operation::Divide)),
    entry("5", Basic, Calculate(Operation::Power)),
    entry("6", Basic, Calculate(Operation::Modulo)),
    entry("7", Scientific, Calculate(Operation::SquareRoot)),
    entry("8", Scientific, Calculate(Operation::Sine)),
    entry("9", Scientific, Calculate(Operation::Cosine)),
    entry("10", Scientific, Calculate(Operation::Tangent)),
    entry("11", Scientific, Calculate(Operation::NaturalLog)),
    entry("12", Scientific, Calculate(Operation::LogBase10)),
    entry("13", Scientific, Calculate(Operation::Exponential)),
    entry("14", AngleConversion, Calculate(Operation::DegreesToRadians)),
    entry("15", AngleConversion, Calculate(Operation::RadiansToDegrees)),
    entry("16", Utilities, MenuAction::ShowHistory),
    entry("17", Utilities, MenuAction::ClearHistory),
    entry("18", Utilities, MenuAction::Quit),
];

/// Resolve a (trimmed) menu answer to its action.
///
/// The quit sentinel is accepted here as well as "18".
pub fn lookup(choice: &str) -> Option<MenuAction> {
    let choice = choice.trim();
    if crate::input::is_quit(choice) {
        return Some(MenuAction::Quit);
    }
    MENU.iter()
        .find(|entry| entry.key == choice)
        .map(|entry| entry.action)
}

/// Menu key that triggers `op`
pub fn key_for(op: Operation) -> Option<&'static str> {
    MENU.iter()
        .find(|entry| entry.action == Calculate(op))
        .map(|entry| entry.key)
}

/// Write the full menu with section headings
pub fn render_menu<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{:^width$}", title, width = RULE_WIDTH)?;
    writeln!(out, "{}", rule)?;

    let mut current: Option<MenuSection> = None;
    for entry in MENU.iter() {
        if current != Some(entry.section) {
            if current.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "{}:", entry.section)?;
            current = Some(entry.section);
        }
        writeln!(out, "{:>3}. {}", entry.key, entry.action.label())?;
    }
    writeln!(out, "{}", rule)?;
    Ok(())
}
