//! # Stockpile Architecture
//!
//! Stockpile is a small inventory library with an interactive menu client on top.
//! The library holds no opinion about terminals: every operation takes plain Rust
//! arguments and hands back a structured result that the client decides how to show.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, validated prompts, colored rendering          │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the InventoryConfig                   │
//! │  - Thin dispatch to commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Add, update, remove, list, search, sort, low stock       │
//! │  - Enforces id uniqueness, capacity and value domains       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore trait, InMemoryStore (owned Vec<Item>)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Storage order
//!
//! Items are kept in insertion order until something reorders them. Two operations do:
//! removal swaps the last item into the freed slot, and sorting rewrites the order
//! permanently. Listings always follow the current storage order.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore`, where most of the coverage lives.
//! 2. **API**: dispatch checks plus property tests for the id-uniqueness invariant.
//! 3. **CLI**: prompt and menu tests with in-memory readers/writers, and end-to-end
//!    tests in `tests/` that pipe scripted input into the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Item`, `Category`, `NewItem`)
//! - [`config`]: Capacity and low-stock configuration
//! - [`error`]: Error types
//! - `cli`: Menu loop, prompts and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
