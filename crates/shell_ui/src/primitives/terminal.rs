use super::*;

#[component]
/// Scrollable terminal viewport.
pub fn TerminalSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-surface"
            node_ref=node_ref
            role="log"
            aria-live="polite"
            aria-label=aria_label
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Scrollback container.
pub fn TerminalTranscript(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-transcript", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-transcript"
        >
            {children()}
        </div>
    }
}

#[component]
/// One transcript line.
pub fn TerminalLine(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-line", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-line"
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Prompt row: identity, cursor, and the `$` marker ahead of the children.
pub fn TerminalPrompt(
    #[prop(into)] identity: String,
    #[prop(into)] cwd: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-prompt", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-prompt"
        >
            <span class="ui-terminal-prompt-identity">{identity}</span>
            <span class="ui-terminal-prompt-cwd">{move || cwd.get()}</span>
            <span class="ui-terminal-prompt-marker" aria-hidden="true">"$"</span>
            {children()}
        </div>
    }
}

#[component]
/// Horizontal rule between transcript entries.
pub fn Separator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="separator"
        ></div>
    }
}
