//! Browser host for the command shell.
//!
//! [`ShellProvider`] owns the session and publishes snapshots; [`InteractiveShell`] renders the
//! scrollback and prompt. Output trees pass through the pure [`present`] dispatch before
//! [`render_presentation`] maps them onto `shell_ui` primitives.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod host;
pub mod presentation;
pub mod render;
mod shell;

pub use host::{load_config, use_shell, ShellContext, ShellProvider};
pub use presentation::{present, Presentation};
pub use render::{render_node, render_nodes, render_presentation};
pub use shell::{prompt_label, InteractiveShell};
