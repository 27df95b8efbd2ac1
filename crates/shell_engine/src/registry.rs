//! Fixed command table mapping command names to descriptions and handlers.

use once_cell::sync::Lazy;
use shell_document::Value;
use thiserror::Error;

use crate::builtins;

/// Pure handler producing output from argument tokens.
pub type RenderFn = fn(&[String]) -> Value;

/// Handler that may also move the shell cursor. Receives the argument tokens and the current
/// cursor segments.
pub type NavigateFn = fn(&[String], &[String]) -> CommandResult;

/// Handler backing one registered command.
///
/// Handlers are plain function pointers: they capture nothing, must be deterministic for the
/// same arguments, and must not fail for any argument vector.
#[derive(Debug, Clone, Copy)]
pub enum Handler {
    /// Output-only command; never changes the cursor.
    Render(RenderFn),
    /// Command that returns output alongside an optional replacement cursor.
    Navigate(NavigateFn),
}

/// Normalized outcome of a handler invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// Output value.
    pub value: Value,
    /// Replacement cursor, when the command moves the shell.
    pub cwd: Option<Vec<String>>,
}

impl CommandResult {
    /// Output that leaves the cursor unchanged.
    pub fn output(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            cwd: None,
        }
    }

    /// Output plus a replacement cursor.
    pub fn navigate(value: impl Into<Value>, cwd: Vec<String>) -> Self {
        Self {
            value: value.into(),
            cwd: Some(cwd),
        }
    }
}

/// Registration metadata for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Unique command name; the lookup key.
    pub name: &'static str,
    /// One-line description listed by `help`.
    pub description: &'static str,
    /// Handler invoked with the argument tokens.
    pub handler: Handler,
}

impl CommandSpec {
    /// Describes an output-only command.
    pub const fn render(name: &'static str, description: &'static str, handler: RenderFn) -> Self {
        Self {
            name,
            description,
            handler: Handler::Render(handler),
        }
    }

    /// Describes a command that may move the cursor.
    pub const fn navigate(
        name: &'static str,
        description: &'static str,
        handler: NavigateFn,
    ) -> Self {
        Self {
            name,
            description,
            handler: Handler::Navigate(handler),
        }
    }
}

/// Errors raised while assembling a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two specs share one name.
    #[error("command `{0}` is already registered")]
    DuplicateCommand(&'static str),
    /// A spec has an empty or whitespace-containing name and could never be typed.
    #[error("invalid command name `{0}`")]
    InvalidName(&'static str),
}

/// Immutable command table; iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// Starts an empty builder.
    pub fn builder() -> CommandRegistryBuilder {
        CommandRegistryBuilder::default()
    }

    /// Looks up a command by exact, case-sensitive name.
    pub fn resolve(&self, name: &str) -> Option<&CommandSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Registered specs in registration order.
    pub fn specs(&self) -> impl ExactSizeIterator<Item = &CommandSpec> {
        self.specs.iter()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.specs.iter().map(|spec| spec.name).collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Builder enforcing name validity and uniqueness.
#[derive(Debug, Default)]
pub struct CommandRegistryBuilder {
    specs: Vec<CommandSpec>,
}

impl CommandRegistryBuilder {
    /// Appends one spec.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCommand`] when the name is taken and
    /// [`RegistryError::InvalidName`] when it is empty or contains whitespace.
    pub fn register(mut self, spec: CommandSpec) -> Result<Self, RegistryError> {
        if spec.name.is_empty() || spec.name.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidName(spec.name));
        }
        if self.specs.iter().any(|existing| existing.name == spec.name) {
            return Err(RegistryError::DuplicateCommand(spec.name));
        }
        self.specs.push(spec);
        Ok(self)
    }

    /// Appends every spec, stopping at the first rejected one.
    ///
    /// # Errors
    ///
    /// See [`CommandRegistryBuilder::register`].
    pub fn register_all(
        self,
        specs: impl IntoIterator<Item = CommandSpec>,
    ) -> Result<Self, RegistryError> {
        specs.into_iter().try_fold(self, Self::register)
    }

    /// Freezes the table.
    pub fn build(self) -> CommandRegistry {
        CommandRegistry { specs: self.specs }
    }
}

static BUILTIN_REGISTRY: Lazy<CommandRegistry> = Lazy::new(|| {
    CommandRegistry::builder()
        .register_all(builtins::builtin_specs())
        .map(CommandRegistryBuilder::build)
        .unwrap_or_else(|err| panic!("built-in command table is inconsistent: {err}"))
});

/// Process-wide registry of the built-in commands, built on first use.
pub fn builtin_registry() -> &'static CommandRegistry {
    &BUILTIN_REGISTRY
}

#[cfg(test)]
mod tests {
    use shell_document::Node;

    use super::*;

    fn noop(_: &[String]) -> Value {
        Value::from(Node::text("noop"))
    }

    #[test]
    fn resolve_is_exact_and_case_sensitive() {
        let registry = CommandRegistry::builder()
            .register(CommandSpec::render("noop", "does nothing", noop))
            .expect("register")
            .build();
        assert!(registry.resolve("noop").is_some());
        assert!(registry.resolve("NOOP").is_none());
        assert!(registry.resolve("no").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let error = CommandRegistry::builder()
            .register(CommandSpec::render("noop", "first", noop))
            .and_then(|builder| builder.register(CommandSpec::render("noop", "second", noop)))
            .expect_err("duplicate should fail");
        assert_eq!(error, RegistryError::DuplicateCommand("noop"));
    }

    #[test]
    fn names_with_whitespace_are_rejected() {
        let error = CommandRegistry::builder()
            .register(CommandSpec::render("two words", "bad", noop))
            .expect_err("invalid name");
        assert_eq!(error, RegistryError::InvalidName("two words"));
    }

    #[test]
    fn specs_keep_registration_order() {
        let registry = CommandRegistry::builder()
            .register_all([
                CommandSpec::render("zeta", "z", noop),
                CommandSpec::render("alpha", "a", noop),
                CommandSpec::render("mid", "m", noop),
            ])
            .expect("register")
            .build();
        assert_eq!(registry.names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn builtin_registry_lists_builtins_in_order() {
        assert_eq!(
            builtin_registry().names(),
            vec!["echo", "help", "fetch", "news", "research", "honors"]
        );
    }
}
