//! Append-only shell state and the transition that records one command run.

use std::fmt;

use serde::{Deserialize, Serialize};
use shell_document::Node;
use uuid::Uuid;

use crate::{interpreter::Interpreter, registry::CommandRegistry};

/// Opaque, unique identifier of a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One executed command and its output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique entry id.
    pub id: EntryId,
    /// Cursor at the moment the command ran.
    pub cwd: Vec<String>,
    /// Input exactly as typed, untrimmed.
    pub input: String,
    /// Rendered output nodes.
    pub output: Vec<Node>,
}

/// Cursor plus scrollback history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShellState {
    /// Path-like cursor segments.
    pub cwd: Vec<String>,
    /// Executed commands in execution order.
    pub history: Vec<HistoryEntry>,
}

impl ShellState {
    /// Empty history at cursor `cwd`.
    pub fn new(cwd: Vec<String>) -> Self {
        Self {
            cwd,
            history: Vec::new(),
        }
    }

    /// State seeded with an existing history.
    pub fn with_history(cwd: Vec<String>, history: Vec<HistoryEntry>) -> Self {
        Self { cwd, history }
    }

    /// Cursor rendered as an absolute path; the root is `/`.
    pub fn cwd_path(&self) -> String {
        format!("/{}", self.cwd.join("/"))
    }
}

/// Pure transition function over [`ShellState`].
#[derive(Debug, Clone, Copy)]
pub struct ShellMachine<'r> {
    interpreter: Interpreter<'r>,
}

impl ShellMachine<'static> {
    /// Machine over the built-in command table.
    pub fn builtin() -> Self {
        Self::new(Interpreter::builtin())
    }
}

impl<'r> ShellMachine<'r> {
    /// Creates a machine driving `interpreter`.
    pub fn new(interpreter: Interpreter<'r>) -> Self {
        Self { interpreter }
    }

    /// Machine over an arbitrary command table.
    pub fn with_registry(registry: &'r CommandRegistry) -> Self {
        Self::new(Interpreter::new(registry))
    }

    /// Runs `input` against `state` and returns the successor snapshot; `state` is untouched.
    ///
    /// Exactly one entry is appended. Interpreter failures become a single text node carrying
    /// the failure message, so this never fails.
    pub fn run(&self, state: &ShellState, input: &str) -> ShellState {
        let (entry, next_cwd) = self.record(&state.cwd, input);
        let mut history = Vec::with_capacity(state.history.len() + 1);
        history.extend(state.history.iter().cloned());
        history.push(entry);
        ShellState {
            cwd: next_cwd.unwrap_or_else(|| state.cwd.clone()),
            history,
        }
    }

    /// Same transition as [`ShellMachine::run`] for a state the caller owns outright.
    pub fn advance(&self, mut state: ShellState, input: &str) -> ShellState {
        let (entry, next_cwd) = self.record(&state.cwd, input);
        state.history.push(entry);
        if let Some(cwd) = next_cwd {
            state.cwd = cwd;
        }
        state
    }

    fn record(&self, cwd: &[String], input: &str) -> (HistoryEntry, Option<Vec<String>>) {
        let (output, next_cwd) = match self.interpreter.interpret_at(input.trim(), cwd) {
            Ok(result) => (result.value.into_nodes(), result.cwd),
            Err(err) => (vec![Node::text(err.to_string())], None),
        };
        let entry = HistoryEntry {
            id: EntryId::new(),
            cwd: cwd.to_vec(),
            input: input.to_string(),
            output,
        };
        (entry, next_cwd)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use shell_document::Value;

    use super::*;
    use crate::registry::{CommandResult, CommandSpec};

    fn go(args: &[String], _: &[String]) -> CommandResult {
        CommandResult::navigate(Node::text("moved"), args.to_vec())
    }

    #[test]
    fn run_appends_exactly_one_entry_and_keeps_prior_snapshot() {
        let machine = ShellMachine::builtin();
        let before = ShellState::default();
        let after = machine.run(&before, "echo hi");
        assert!(before.history.is_empty());
        assert_eq!(after.history.len(), 1);
        assert_eq!(after.history[0].output, vec![Node::text("hi")]);
    }

    #[test]
    fn entry_keeps_untrimmed_input() {
        let state = ShellMachine::builtin().run(&ShellState::default(), "  echo  x  ");
        assert_eq!(state.history[0].input, "  echo  x  ");
        assert_eq!(state.history[0].output, vec![Node::text("x")]);
    }

    #[test]
    fn empty_input_records_error_text() {
        let state = ShellMachine::builtin().run(&ShellState::default(), "   ");
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].output, vec![Node::text("Empty command")]);
    }

    #[test]
    fn multi_node_values_are_recorded_in_order() {
        fn pair(_: &[String]) -> Value {
            Value::Nodes(vec![Node::text("first"), Node::text("second")])
        }
        let registry = CommandRegistry::builder()
            .register(CommandSpec::render("pair", "two nodes", pair))
            .expect("register")
            .build();
        let state = ShellMachine::with_registry(&registry).run(&ShellState::default(), "pair");
        assert_eq!(
            state.history[0].output,
            vec![Node::text("first"), Node::text("second")]
        );
    }

    #[test]
    fn navigation_records_previous_cursor_and_moves() {
        let registry = CommandRegistry::builder()
            .register(CommandSpec::navigate("go", "move the cursor", go))
            .expect("register")
            .build();
        let machine = ShellMachine::with_registry(&registry);
        let start = ShellState::new(vec!["home".to_string()]);
        let moved = machine.run(&start, "go posts 2025");
        assert_eq!(moved.history[0].cwd, vec!["home".to_string()]);
        assert_eq!(moved.cwd, vec!["posts".to_string(), "2025".to_string()]);
        assert_eq!(moved.cwd_path(), "/posts/2025");

        let next = machine.run(&moved, "unknown");
        assert_eq!(next.history[1].cwd, moved.cwd);
        assert_eq!(next.cwd, moved.cwd);
    }

    #[test]
    fn builtins_never_move_the_cursor() {
        let machine = ShellMachine::builtin();
        let mut state = ShellState::new(vec!["a".to_string()]);
        for input in ["fetch", "news", "help", "echo x", "nope", ""] {
            state = machine.advance(state, input);
        }
        assert_eq!(state.cwd, vec!["a".to_string()]);
        assert_eq!(state.history.len(), 6);
    }

    #[test]
    fn entry_ids_are_unique() {
        let machine = ShellMachine::builtin();
        let mut state = ShellState::default();
        for _ in 0..32 {
            state = machine.advance(state, "echo");
        }
        let ids = state.history.iter().map(|entry| entry.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn run_and_advance_agree_apart_from_ids() {
        let machine = ShellMachine::builtin();
        let base = machine.run(&ShellState::default(), "echo seed");
        let by_run = machine.run(&base, "news");
        let by_advance = machine.advance(base.clone(), "news");
        assert_eq!(by_run.history[0], by_advance.history[0]);
        assert_eq!(by_run.history[1].output, by_advance.history[1].output);
        assert_eq!(by_run.cwd, by_advance.cwd);
    }

    #[test]
    fn root_cursor_path_is_slash() {
        assert_eq!(ShellState::default().cwd_path(), "/");
    }
}
