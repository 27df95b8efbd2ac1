use super::*;

fn icon_glyph(icon: LinkIcon) -> &'static str {
    match icon {
        LinkIcon::Paper => "📄",
        LinkIcon::Github => "⌥",
        LinkIcon::Video => "▶",
        LinkIcon::Link => "↗",
    }
}

#[component]
/// External hyperlink opened in a new tab, with an optional leading icon.
pub fn TextLink(
    #[prop(into)] href: String,
    #[prop(default = None)] icon: Option<LinkIcon>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            class=merge_layout_class("ui-link", layout_class)
            data-ui-primitive="true"
            data-ui-kind="link"
            data-ui-icon=icon.map(LinkIcon::token)
            href=href
            target="_blank"
            rel="noopener noreferrer"
        >
            {icon.map(|icon| view! { <span class="ui-link-icon" aria-hidden="true">{icon_glyph(icon)}</span> })}
            {children()}
        </a>
    }
}

#[component]
/// Button that hands `command` to `on_run` when activated.
pub fn CommandButton(
    #[prop(into)] command: String,
    on_run: Callback<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let title = format!("Run `{command}`");
    let command = store_value(command);
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-command-button", layout_class)
            data-ui-primitive="true"
            data-ui-kind="command-button"
            title=title
            on:click=move |_| on_run.call(command.get_value())
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_a_glyph() {
        for icon in [LinkIcon::Paper, LinkIcon::Github, LinkIcon::Video, LinkIcon::Link] {
            assert!(!icon_glyph(icon).is_empty());
        }
    }
}
