//! Maps one command line to a node-producing [`Value`].

use shell_document::{Node, Value};
use thiserror::Error;

use crate::{
    registry::{builtin_registry, CommandRegistry, CommandResult, Handler},
    tokenizer::tokenize,
};

/// Prefix of the text shown for names that resolve to no command.
pub const UNKNOWN_COMMAND_PREFIX: &str = "Unknown command: ";

/// Structural failures of a command line. Unknown command names are not failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// The line holds no command name.
    #[error("Empty command")]
    EmptyInput,
}

/// Stateless interpreter bound to one command table.
#[derive(Debug, Clone, Copy)]
pub struct Interpreter<'r> {
    registry: &'r CommandRegistry,
}

impl Interpreter<'static> {
    /// Interpreter over the built-in command table.
    pub fn builtin() -> Self {
        Self::new(builtin_registry())
    }
}

impl<'r> Interpreter<'r> {
    /// Creates an interpreter over `registry`.
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    /// Command table this interpreter resolves against.
    pub fn registry(&self) -> &'r CommandRegistry {
        self.registry
    }

    /// Interprets `raw` with an empty cursor and returns the handler's value unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InterpretError::EmptyInput`] when `raw` has no tokens.
    pub fn interpret(&self, raw: &str) -> Result<Value, InterpretError> {
        self.interpret_at(raw, &[]).map(|result| result.value)
    }

    /// Interprets `raw` at cursor `cwd`; navigating handlers may return a new cursor.
    ///
    /// # Errors
    ///
    /// Same as [`Interpreter::interpret`].
    pub fn interpret_at(&self, raw: &str, cwd: &[String]) -> Result<CommandResult, InterpretError> {
        let mut tokens = tokenize(raw).into_iter();
        let name = tokens.next().ok_or(InterpretError::EmptyInput)?;
        let args = tokens.map(|token| token.value).collect::<Vec<_>>();

        let Some(spec) = self.registry.resolve(&name.value) else {
            return Ok(CommandResult::output(unknown_command(name.raw)));
        };
        Ok(match spec.handler {
            Handler::Render(handler) => CommandResult::output(handler(&args)),
            Handler::Navigate(handler) => handler(&args, cwd),
        })
    }
}

fn unknown_command(name: &str) -> Node {
    Node::text(format!("{UNKNOWN_COMMAND_PREFIX}{name}"))
}
