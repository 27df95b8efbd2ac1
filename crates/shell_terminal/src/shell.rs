//! Interactive terminal view: scrollback, prompt, and input line.

use leptos::*;
use shell_engine::{HistoryEntry, ShellConfig, ShellState};
use shell_ui::prelude::*;

use crate::{host::use_shell, render::render_nodes};

/// Prompt text for `state`: `user@host`, the cursor path, and `$`.
pub fn prompt_label(config: &ShellConfig, state: &ShellState) -> String {
    format!("{}{} $", config.identity(), state.cwd_path())
}

#[component]
fn HistoryItem(entry: HistoryEntry, run: Callback<String>) -> impl IntoView {
    let output = render_nodes(&entry.output, run);
    view! {
        <TerminalLine tone=TextTone::Muted>
            <span class="shell-history-marker" aria-hidden="true">"$"</span>
            <span class="shell-history-input">{entry.input}</span>
        </TerminalLine>
        <div class="shell-history-output">{output}</div>
        <Separator />
    }
}

#[component]
/// Scrollback plus prompt; must be mounted inside [`crate::ShellProvider`].
pub fn InteractiveShell() -> impl IntoView {
    let shell = use_shell();
    let input = create_rw_signal(String::new());
    let input_ref = create_node_ref::<html::Input>();
    let end_ref = create_node_ref::<html::Div>();
    let identity = shell.config.with_value(ShellConfig::identity);

    create_effect(move |_| {
        shell.state.with(|state| state.history.len());
        if let Some(end) = end_ref.get() {
            end.scroll_into_view_with_bool(false);
        }
    });

    let entries = move || shell.state.with(|state| state.history.clone());
    let cwd = Signal::derive(move || shell.state.with(ShellState::cwd_path));
    let label = move || {
        shell
            .state
            .with(|state| shell.config.with_value(|config| prompt_label(config, state)))
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let value = input.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        input.set(String::new());
        shell.run.call(value);
    };
    let focus_input = Callback::new(move |_: ev::MouseEvent| {
        if let Some(field) = input_ref.get_untracked() {
            let _ = field.focus();
        }
    });

    view! {
        <TerminalSurface aria_label="Terminal" on_click=focus_input>
            <TerminalTranscript>
                <For each=entries key=|entry| entry.id let:entry>
                    <HistoryItem entry=entry run=shell.run />
                </For>
            </TerminalTranscript>
            <TerminalPrompt identity=identity cwd=cwd>
                <form class="shell-input-line" on:submit=on_submit>
                    <input
                        class="shell-input"
                        type="text"
                        node_ref=input_ref
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        aria-label=label
                        autocomplete="off"
                        spellcheck="false"
                        autofocus=true
                    />
                </form>
            </TerminalPrompt>
            <div class="shell-end" node_ref=end_ref></div>
        </TerminalSurface>
    }
}
