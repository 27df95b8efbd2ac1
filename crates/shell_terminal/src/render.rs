//! Views for [`Presentation`] values, built only from `shell_ui` primitives.

use leptos::*;
use shell_document::Node;
use shell_ui::prelude::*;

use crate::presentation::{present, Presentation};

/// Renders one output node; `Cmd` buttons submit their command through `run`.
pub fn render_node(node: &Node, run: Callback<String>) -> View {
    render_presentation(present(node), run)
}

/// Renders a sequence of sibling nodes in order.
pub fn render_nodes(nodes: &[Node], run: Callback<String>) -> View {
    nodes.iter().map(|node| render_node(node, run)).collect_view()
}

/// Maps one resolved presentation onto its primitive.
pub fn render_presentation(presentation: Presentation, run: Callback<String>) -> View {
    match presentation {
        Presentation::Plain(text) => view! { <span class="shell-text">{text}</span> }.into_view(),
        Presentation::VStack { gap, children } => {
            let children = render_nodes(&children, run);
            view! { <Stack gap=gap>{children}</Stack> }.into_view()
        }
        Presentation::HStack { gap, children } => {
            let children = render_nodes(&children, run);
            view! { <Cluster gap=gap>{children}</Cluster> }.into_view()
        }
        Presentation::Grid {
            gap,
            base,
            md,
            md_template,
            children,
        } => {
            let children = render_nodes(&children, run);
            view! {
                <Grid gap=gap columns=base md_columns=md md_template=md_template>
                    {children}
                </Grid>
            }
            .into_view()
        }
        Presentation::Card { children } => {
            let children = render_nodes(&children, run);
            view! { <Card>{children}</Card> }.into_view()
        }
        Presentation::Heading { level, children } => {
            let children = render_nodes(&children, run);
            view! { <Heading level=level>{children}</Heading> }.into_view()
        }
        Presentation::Text {
            tone,
            size,
            weight,
            children,
        } => {
            let children = render_nodes(&children, run);
            view! { <Text tone=tone size=size weight=weight>{children}</Text> }.into_view()
        }
        Presentation::Image {
            src,
            alt,
            width,
            height,
            rounded,
        } => view! {
            <ImageFrame src=src alt=alt width=width height=height rounded=rounded />
        }
        .into_view(),
        Presentation::Link {
            href,
            icon,
            children,
        } => {
            let children = render_nodes(&children, run);
            view! { <TextLink href=href icon=icon>{children}</TextLink> }.into_view()
        }
        Presentation::Command { command, children } => {
            let label = if children.is_empty() {
                command.clone().into_view()
            } else {
                render_nodes(&children, run)
            };
            view! { <CommandButton command=command on_run=run>{label}</CommandButton> }
                .into_view()
        }
        Presentation::List { items } => {
            let items = items
                .iter()
                .map(|item| {
                    let item = render_node(item, run);
                    view! { <ListItem>{item}</ListItem> }
                })
                .collect_view();
            view! { <ListSurface>{items}</ListSurface> }.into_view()
        }
        Presentation::Fallback(dump) => {
            view! { <pre class="shell-fallback">{dump}</pre> }.into_view()
        }
    }
}
