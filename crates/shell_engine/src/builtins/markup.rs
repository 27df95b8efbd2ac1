//! Small constructors for the presentation primitives the built-ins emit.

use shell_document::{ElementNode, Node};

pub(super) fn vstack(gap: u32, children: impl IntoIterator<Item = Node>) -> Node {
    ElementNode::new("VStack")
        .attr("gap", gap)
        .children(children)
        .into_node()
}

pub(super) fn hstack(gap: u32, children: impl IntoIterator<Item = Node>) -> Node {
    ElementNode::new("HStack")
        .attr("gap", gap)
        .children(children)
        .into_node()
}

pub(super) fn card(children: impl IntoIterator<Item = Node>) -> Node {
    ElementNode::new("Card").children(children).into_node()
}

pub(super) fn text(content: &str) -> ElementNode {
    ElementNode::new("Text").child(Node::text(content))
}

pub(super) fn heading(level: u32, content: &str) -> Node {
    ElementNode::new("Heading")
        .attr("level", level)
        .child(Node::text(content))
        .into_node()
}

pub(super) fn link(href: &str, icon: &str, label: &str) -> Node {
    ElementNode::new("Link")
        .attr("href", href)
        .attr("icon", icon)
        .child(Node::text(label))
        .into_node()
}

/// Inline action that re-runs `command` when activated.
pub(super) fn command_button(command: &str) -> Node {
    ElementNode::new("Cmd")
        .attr("cmd", command)
        .child(Node::text(command))
        .into_node()
}

pub(super) fn list(items: impl IntoIterator<Item = Node>) -> Node {
    ElementNode::new("List").children(items).into_node()
}
