use super::*;

#[component]
/// Bordered content card.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
        >
            {children()}
        </article>
    }
}

#[component]
/// Inline text run.
pub fn Text(
    #[prop(optional)] tone: TextTone,
    #[prop(optional)] size: TextSize,
    #[prop(optional)] weight: TextWeight,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-tone=tone.token()
            data-ui-size=size.token()
            data-ui-weight=weight.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading exposed to assistive technology at `level` (`1..=6`).
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let level = level.clamp(1, 6);
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-level=level.to_string()
            role="heading"
            aria-level=level.to_string()
        >
            {children()}
        </div>
    }
}

#[component]
/// Fixed-size image.
pub fn ImageFrame(
    #[prop(into)] src: String,
    #[prop(optional, into)] alt: String,
    #[prop(default = 128)] width: u32,
    #[prop(default = 128)] height: u32,
    #[prop(optional)] rounded: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <img
            class=merge_layout_class("ui-image", layout_class)
            data-ui-primitive="true"
            data-ui-kind="image"
            data-ui-rounded=bool_token(rounded)
            src=src
            alt=alt
            width=width
            height=height
        />
    }
}

#[component]
/// Unordered list container.
pub fn ListSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="list"
        >
            {children()}
        </ul>
    }
}

#[component]
/// One list row.
pub fn ListItem(children: Children) -> impl IntoView {
    view! {
        <li class="ui-list-item" data-ui-primitive="true" data-ui-kind="list-item">
            {children()}
        </li>
    }
}
