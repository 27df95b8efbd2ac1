//! Command interpreter and shell state machine for the browser terminal.
//!
//! The engine is runtime-agnostic: it maps command lines to [`shell_document`] trees through a
//! fixed [`CommandRegistry`], records every run as an immutable [`HistoryEntry`], and serializes
//! all state writes through one [`SessionWorker`]. UI crates only read published snapshots.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod builtins;
pub mod config;
pub mod interpreter;
pub mod machine;
pub mod registry;
pub mod session;
mod tokenizer;

pub use builtins::help_listing;
pub use config::{ConfigError, ShellConfig};
pub use interpreter::{InterpretError, Interpreter};
pub use machine::{EntryId, HistoryEntry, ShellMachine, ShellState};
pub use registry::{
    builtin_registry, CommandRegistry, CommandRegistryBuilder, CommandResult, CommandSpec,
    Handler, NavigateFn, RegistryError, RenderFn,
};
pub use session::{session, SessionError, SessionHandle, SessionWorker};
pub use shell_document::{ElementNode, Node, TextNode, Value};
