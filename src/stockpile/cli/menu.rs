use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Remove,
    ByCategory,
    All,
    Search,
    Sort,
    LowStock,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Remove,
        MenuChoice::ByCategory,
        MenuChoice::All,
        MenuChoice::Search,
        MenuChoice::Sort,
        MenuChoice::LowStock,
        MenuChoice::Exit,
    ];

    /// Maps the 1-based menu number to a choice.
    pub fn from_number(n: u8) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)))
            .copied()
    }

    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map_or(0, |i| i + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Item",
            MenuChoice::Update => "Update Item",
            MenuChoice::Remove => "Remove Item",
            MenuChoice::ByCategory => "Display Items by Category",
            MenuChoice::All => "Display All Items",
            MenuChoice::Search => "Search Item",
            MenuChoice::Sort => "Sort Items",
            MenuChoice::LowStock => "Display Low Stock Items",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const CHOICE_ERROR: &str = "Invalid option! Please enter a number between 1 and 9.";

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Inventory Menu:")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    Ok(())
}
