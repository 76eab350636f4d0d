//! Business logic for each operation. Commands are pure: they take a store,
//! operate on model types, and never touch I/O.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
