//! # CLI Layer
//!
//! This module is **one possible client** for stockpile: an interactive menu on the
//! terminal. It is the only place in the codebase that reads stdin, writes stdout, or
//! sets up logging.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: flags for config file, capacity, threshold, verbosity (`setup`)
//! 2. **Input**: token-based, validated prompts that re-ask until the answer is usable (`prompt`)
//! 3. **Dispatch**: the menu loop calling one `InventoryApi` method per choice (`commands`, `menu`)
//! 4. **Output**: item tables and colored messages (`render`)
//!
//! Business rules are not enforced here beyond what is needed to re-prompt; the
//! command layer checks them again.

mod commands;
mod menu;
mod prompt;
mod render;
mod setup;

pub use commands::run;
