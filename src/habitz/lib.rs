//! # Habitz Architecture
//!
//! Habitz is a **UI-agnostic habit log**: a durable, self-healing store of
//! habits and the days they were completed on, plus the streak arithmetic
//! derived from those days. The `habitz` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - Owns the system clock and the data directory             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, injects "now" from a Clock    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: create, done, clear, remove, doctor      │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load / save, full-file rewrites         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Beside the layers sit two pure modules: [`sanitize`] (the validation and
//! repair rules every record passes through on read and on write) and
//! [`streak`] (streak length and time left in the day).
//!
//! ## Key Principles
//!
//! - The habit file is the only authority. Each operation loads it fresh and
//!   each mutation rewrites it completely, sorted and de-duplicated.
//! - Malformed input is repaired, not reported: a bad line or a bad date is
//!   dropped and everything else survives. The only refusal is a blank name.
//! - A streak is never stored. It is always recomputed from the dates.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Habit`, `Habits`, `HabitKey`)
//! - [`sanitize`]: Read/write sanitization policy
//! - [`streak`]: Streak engine
//! - [`clock`]: Injected wall clock
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod sanitize;
pub mod store;
pub mod streak;
