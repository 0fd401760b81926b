//! # Shelf Architecture
//!
//! Shelf is a **batch catalog processor**: it reads a file of tab-separated commands,
//! applies them to an in-memory catalog of books, toys and stationery, and writes the
//! results to an output file. The binary is a thin client; everything it does is
//! available through this library against any `BufRead` / `Write` pair.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, opens files, installs logging          │
//! │  - The ONLY place that knows about stderr/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Driver (runner.rs, script.rs, render.rs)                   │
//! │  - Reads lines, parses them into `Command`s                 │
//! │  - Writes rendered `CmdResult`s to the output sink          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the `Catalog`                         │
//! │  - Dispatches each `Command` to its command module          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns `CmdResult` values               │
//! │  - No knowledge of text layout or streams                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `ItemStore` trait, one store per category                │
//! │  - `Catalog` probes stores in Book, Toy, Stationery order   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lookup Priority
//!
//! Searches and removals walk the three category stores in a fixed order:
//! books first, then toys, then stationery. The first match wins for searches.
//! This order is visible in the output whenever the same barcode or name exists
//! in more than one store, so it is part of the contract, not an implementation
//! detail.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of store interaction using
//!    [`store::memory::InMemoryStore`] and the fixture builder.
//! 2. **Driver** (`runner.rs`): scenario tests feeding scripts through in-memory
//!    readers and writers.
//! 3. **CLI** (`tests/`): the compiled binary run against temp files.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Store trait, in-memory store and the three-store catalog
//! - [`model`]: Core data types (`Item`, `Category`, `Price`)
//! - [`script`]: Parsing of tab-separated command lines
//! - [`render`]: Text layout of command results
//! - [`runner`]: The line-by-line stream driver
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod runner;
pub mod script;
pub mod store;
