//! Session host: owns the shell state signal and the single-writer session feeding it.

use leptos::*;
use shell_engine::{session, HistoryEntry, ShellConfig, ShellMachine, ShellState};

const SHELL_TOML: &str = include_str!("../shell.toml");

#[derive(Clone, Copy)]
/// Leptos context shared by every view inside [`ShellProvider`].
pub struct ShellContext {
    /// Latest published snapshot.
    pub state: RwSignal<ShellState>,
    /// Queues one input line for execution.
    pub run: Callback<String>,
    /// Host configuration in effect.
    pub config: StoredValue<ShellConfig>,
}

/// Parses `raw`, falling back to [`ShellConfig::default`] with a warning when it is invalid.
pub fn load_config(raw: &str) -> ShellConfig {
    ShellConfig::from_toml_str(raw).unwrap_or_else(|err| {
        logging::warn!("{err}; using default shell config");
        ShellConfig::default()
    })
}

#[component]
/// Provides [`ShellContext`] to descendants and starts the session worker.
///
/// When the restored history is empty the configured startup script is queued in order.
pub fn ShellProvider(
    /// History restored from a previous session, oldest first.
    #[prop(optional)]
    initial_history: Vec<HistoryEntry>,
    children: Children,
) -> impl IntoView {
    let config = load_config(SHELL_TOML);
    let initial = ShellState::with_history(config.initial_cwd.clone(), initial_history);
    let run_startup = initial.history.is_empty();

    let state = create_rw_signal(initial.clone());
    let (handle, worker) = session(ShellMachine::builtin(), initial, config.queue_capacity);
    spawn_local(async move {
        worker
            .run(move |next| {
                if state.try_set(next.clone()).is_some() {
                    logging::warn!("shell view disposed; dropping snapshot");
                }
            })
            .await;
    });

    let handle = store_value(handle);
    let run = Callback::new(move |input: String| {
        match handle.try_update_value(|handle| handle.submit(input)) {
            Some(Ok(())) => {}
            Some(Err(err)) => logging::warn!("shell input dropped: {err}"),
            None => logging::warn!("shell input dropped: session disposed"),
        }
    });

    if run_startup {
        for command in &config.startup {
            run.call(command.clone());
        }
    }

    provide_context(ShellContext {
        state,
        run,
        config: store_value(config),
    });

    children().into_view()
}

/// Returns the current [`ShellContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>().expect("ShellContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = ShellConfig::from_toml_str(SHELL_TOML).expect("embedded config");
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        assert_eq!(load_config("queue_capacity = 0"), ShellConfig::default());
        assert_eq!(load_config("user = ["), ShellConfig::default());
    }

    #[test]
    fn valid_config_is_used() {
        assert_eq!(load_config("host = \"example.org\"").host, "example.org");
    }
}
