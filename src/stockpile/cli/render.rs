use colored::Colorize;
use std::io::{self, Write};
use stockpile::api::{CmdMessage, MessageLevel};
use stockpile::error::StockpileError;
use stockpile::model::Item;

pub const HEADER: &str = "ID | Name | Quantity | Price | Category";

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
        }
    }
    Ok(())
}

/// Header, one line per item, and a count footer when anything was listed.
pub(super) fn print_items<W: Write>(out: &mut W, items: &[Item]) -> io::Result<()> {
    writeln!(out, "{}", HEADER.bold())?;
    for item in items {
        writeln!(out, "{}", item.display_line())?;
    }
    if !items.is_empty() {
        let noun = if items.len() == 1 { "item" } else { "items" };
        writeln!(out, "{}", format!("{} {}", items.len(), noun).dimmed())?;
    }
    Ok(())
}

pub(super) fn print_found<W: Write>(out: &mut W, item: &Item) -> io::Result<()> {
    writeln!(out, "Found Item: {}", item.display_line())
}

pub(super) fn print_error<W: Write>(out: &mut W, err: &StockpileError) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().red())
}
