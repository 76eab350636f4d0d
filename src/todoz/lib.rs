//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic todo-tracking library**. The binary that ships with
//! it is a demonstration client; everything interesting lives behind the
//! library surface.
//!
//! ## The Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Demo client (main.rs)                                     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes│
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade over commands                               │
//! │  - Returns structured Result types                         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Validation and business logic                           │
//! │  - Operates on Rust types, returns Rust types              │
//! │  - No I/O assumptions whatsoever                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - Abstract DataStore trait                                │
//! │  - InMemoryStore (the only shipped backend)                │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code takes regular Rust
//! arguments, returns `Result`, never writes to stdout/stderr, and never
//! calls `std::process::exit`. The same core could serve a REST API or a TUI
//! without changes.
//!
//! There is no ambient state: the caller constructs a store, hands it to
//! [`api::TodozApi::new`], and owns the resulting instance.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of the business logic against
//!    `InMemoryStore`. This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): dispatch tests verifying the facade wires arguments
//!    through correctly.
//! 3. **End to end** (`tests/`): the full scenario through the public surface,
//!    and the compiled binary's output.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: Core data types (`Todo`, `TodoDraft`, `TodoPatch`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
