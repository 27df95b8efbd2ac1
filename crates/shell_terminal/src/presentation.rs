//! Closed dispatch from document nodes to presentation variants.
//!
//! [`present`] is pure: it reads element names and attributes, applies defaults, and never
//! touches the DOM. [`crate::render`] turns the result into views.

use shell_document::{AttrValue, ElementNode, Node};
use shell_ui::{GridColumns, GridTemplate, LayoutGap, LinkIcon, TextSize, TextTone, TextWeight};

const DEFAULT_HEADING_LEVEL: u8 = 2;
const DEFAULT_IMAGE_SIZE: u32 = 128;

/// One node resolved against the closed element vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    /// Bare text node.
    Plain(String),
    /// Vertical stack.
    VStack {
        /// Spacing between children.
        gap: LayoutGap,
        /// Nested nodes.
        children: Vec<Node>,
    },
    /// Horizontal stack.
    HStack {
        /// Spacing between children.
        gap: LayoutGap,
        /// Nested nodes.
        children: Vec<Node>,
    },
    /// Responsive grid.
    Grid {
        /// Spacing between cells.
        gap: LayoutGap,
        /// Columns at every width.
        base: GridColumns,
        /// Columns from the medium breakpoint up.
        md: Option<GridColumns>,
        /// Column template from the medium breakpoint up.
        md_template: Option<GridTemplate>,
        /// Nested nodes.
        children: Vec<Node>,
    },
    /// Bordered card.
    Card {
        /// Nested nodes.
        children: Vec<Node>,
    },
    /// Heading at `level` in `1..=6`.
    Heading {
        /// Outline level.
        level: u8,
        /// Nested nodes.
        children: Vec<Node>,
    },
    /// Styled text run.
    Text {
        /// Color tone from the `variant` attribute.
        tone: TextTone,
        /// Font size.
        size: TextSize,
        /// Font weight.
        weight: TextWeight,
        /// Nested nodes.
        children: Vec<Node>,
    },
    /// Fixed-size image.
    Image {
        /// Image URL.
        src: String,
        /// Alternate text.
        alt: String,
        /// Width in CSS pixels.
        width: u32,
        /// Height in CSS pixels.
        height: u32,
        /// Circular crop.
        rounded: bool,
    },
    /// External link.
    Link {
        /// Target URL.
        href: String,
        /// Leading icon.
        icon: Option<LinkIcon>,
        /// Link label nodes.
        children: Vec<Node>,
    },
    /// Button that runs `command` when clicked.
    Command {
        /// Literal input line submitted on click.
        command: String,
        /// Button label nodes; the command itself when empty.
        children: Vec<Node>,
    },
    /// Bulleted list; every child becomes one item.
    List {
        /// One node per item.
        items: Vec<Node>,
    },
    /// Anything outside the vocabulary, dumped as pretty JSON.
    Fallback(String),
}

/// Resolves `node` against the element vocabulary.
pub fn present(node: &Node) -> Presentation {
    let element = match node {
        Node::Text(text) => return Presentation::Plain(text.text.clone()),
        Node::Element(element) => element,
    };
    let children = || element.children.clone();

    match element.name.as_str() {
        "VStack" => Presentation::VStack {
            gap: gap(element),
            children: children(),
        },
        "HStack" => Presentation::HStack {
            gap: gap(element),
            children: children(),
        },
        "Grid" => Presentation::Grid {
            gap: gap(element),
            base: columns(element, "base").unwrap_or_default(),
            md: columns(element, "md"),
            md_template: element.attr_str("mdTemplate").and_then(GridTemplate::from_token),
            children: children(),
        },
        "Card" => Presentation::Card {
            children: children(),
        },
        "Heading" => Presentation::Heading {
            level: heading_level(element),
            children: children(),
        },
        "Text" => Presentation::Text {
            tone: element
                .attr_str("variant")
                .and_then(TextTone::from_variant)
                .unwrap_or_default(),
            size: element
                .attr_str("size")
                .and_then(TextSize::from_token)
                .unwrap_or_default(),
            weight: element
                .attr_str("weight")
                .and_then(TextWeight::from_token)
                .unwrap_or_default(),
            children: children(),
        },
        "Image" => Presentation::Image {
            src: element.attr_str("src").unwrap_or_default().to_string(),
            alt: element.attr_str("alt").unwrap_or_default().to_string(),
            width: dimension(element, "width"),
            height: dimension(element, "height"),
            rounded: element.get("rounded").is_some_and(truthy),
        },
        "Link" => match element.attr_str("href") {
            Some(href) => Presentation::Link {
                href: href.to_string(),
                icon: element.attr_str("icon").and_then(LinkIcon::from_token),
                children: children(),
            },
            None => fallback(node),
        },
        "Cmd" => Presentation::Command {
            command: element
                .attr_str("cmd")
                .map(str::to_string)
                .unwrap_or_else(|| element.text_content()),
            children: children(),
        },
        "List" => Presentation::List { items: children() },
        _ => fallback(node),
    }
}

fn gap(element: &ElementNode) -> LayoutGap {
    element
        .get("gap")
        .and_then(AttrValue::as_u32)
        .and_then(LayoutGap::from_scale)
        .unwrap_or_default()
}

fn columns(element: &ElementNode, key: &str) -> Option<GridColumns> {
    element
        .get(key)
        .and_then(AttrValue::as_u32)
        .and_then(GridColumns::from_count)
}

fn heading_level(element: &ElementNode) -> u8 {
    element
        .get("level")
        .and_then(AttrValue::as_u32)
        .map(|level| level.clamp(1, 6) as u8)
        .unwrap_or(DEFAULT_HEADING_LEVEL)
}

fn dimension(element: &ElementNode, key: &str) -> u32 {
    element
        .get(key)
        .and_then(AttrValue::as_u32)
        .filter(|px| *px > 0)
        .unwrap_or(DEFAULT_IMAGE_SIZE)
}

fn truthy(value: &AttrValue) -> bool {
    match value {
        AttrValue::Number(value) => *value != 0.0,
        AttrValue::Text(text) => text == "true",
    }
}

fn fallback(node: &Node) -> Presentation {
    let dump = serde_json::to_string_pretty(node).unwrap_or_else(|_| format!("{node:?}"));
    Presentation::Fallback(dump)
}
