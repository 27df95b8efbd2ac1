use leptos::*;
use leptos_meta::*;
use shell_terminal::{InteractiveShell, ShellProvider};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Jay Lee" />
        <Meta name="description" content="A personal site you browse from a shell prompt." />

        <main class="site-root">
            <ShellEntry />
        </main>
    }
}

#[component]
pub fn ShellEntry() -> impl IntoView {
    view! {
        <ShellProvider>
            <InteractiveShell />
        </ShellProvider>
    }
}
