//! # Addressbook Architecture
//!
//! Addressbook is a small contact manager: contacts with phone numbers and an
//! optional birthday, driven by line commands and persisted between runs. The
//! library is UI-agnostic; the binary in `main.rs` is one line-oriented client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, runs the read-eval-print loop, colors      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook and its store                       │
//! │  - One line in, one Reply out; saves on exit                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Stateless handlers over &mut AddressBook                 │
//! │  - Uniform error-to-reply wrapping                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (fields.rs, record.rs, book.rs) + Storage (store/)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Command table, handlers and the error wrapper
//! - [`fields`]: Validated `Name`, `Phone` and `Birthday` values
//! - [`record`]: A single contact
//! - [`book`]: The address book and upcoming-birthday computation
//! - [`store`]: Snapshot persistence
//! - [`config`]: Configuration file
//! - [`init`]: Data directory resolution and context wiring
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod init;
pub mod record;
pub mod store;
