//! # Lyricbook Architecture
//!
//! Lyricbook keeps song lyrics in a single JSON file and can pull new ones from
//! Genius. The library is UI-agnostic; the `lyricbook` binary is one client of
//! it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load, work, save-if-changed                              │
//! │  - Lookups live in lookup.rs, lyrics come from provider/    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)       Provider Layer (provider/)    │
//! │  - SongStore trait            - LyricsProvider trait        │
//! │  - FileStore, InMemoryStore   - GeniusProvider              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing exits
//! the process. Diagnostics go through `tracing`; the CLI decides whether a
//! subscriber is installed.
//!
//! ## Testing
//!
//! Commands are tested against `InMemoryStore` and `provider::fake::FakeProvider`.
//! `FileStore` has its own tests on a temp dir, and `tests/` drives the binary
//! end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per command
//! - [`lookup`]: Case-insensitive find/search/remove over a loaded collection
//! - [`model`]: The `Song` record
//! - [`store`]: Storage abstraction and implementations
//! - [`provider`]: Lyrics providers and the English heuristic
//! - [`config`]: Configuration file and environment
//! - [`init`]: Production wiring of config, store and provider
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod store;
