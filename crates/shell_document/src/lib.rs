//! Document tree shared by the shell interpreter and the terminal renderer.
//!
//! Command handlers build a fresh [`Node`] tree per invocation; the renderer walks it. The tree
//! is plain data: it serializes to the same JSON shape the page consumes and carries no
//! callbacks, so inline command buttons hold the literal command string they re-run.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize};

/// Scalar attribute value attached to an [`ElementNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// String attribute, such as `href` or `variant`.
    Text(String),
    /// Numeric attribute, such as `gap` or `width`.
    Number(f64),
}

impl AttrValue {
    /// Returns the string payload when this is a text attribute.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// Returns the numeric payload when this is a number attribute.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the value as a non-negative integer when it is a whole number.
    pub fn as_u32(&self) -> Option<u32> {
        let value = self.as_number()?;
        (value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value))
            .then_some(value as u32)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) if value.fract() == 0.0 => write!(f, "{value:.0}"),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Attribute map of an element. Unset attributes are simply absent.
pub type Attrs = BTreeMap<String, AttrValue>;

/// Text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextNode {
    /// Text payload; may be empty.
    pub text: String,
}

/// Named composite element with attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Presentation primitive name, matched case-sensitively by the renderer.
    pub name: String,
    /// Attributes; `null` values on the wire are dropped and read back as unset.
    #[serde(default, deserialize_with = "deserialize_attrs")]
    pub attrs: Attrs,
    /// Child nodes in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl ElementNode {
    /// Creates an element with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    /// Sets one attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Sets one attribute when `value` is present and leaves it unset otherwise.
    pub fn attr_opt(self, key: impl Into<String>, value: Option<impl Into<AttrValue>>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    /// Appends one child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends every child yielded by `children`.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Wraps the element as a [`Node`].
    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    /// Looks up an attribute.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Looks up a string attribute.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    /// Looks up a numeric attribute.
    pub fn attr_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttrValue::as_number)
    }

    /// Concatenates the text of the direct text children, skipping nested elements.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(leaf) => Some(leaf.text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Text leaf.
    Text(TextNode),
    /// Composite element.
    Element(ElementNode),
}

impl Node {
    /// Creates a text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextNode { text: text.into() })
    }

    /// Returns the leaf text when this node is a [`TextNode`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(leaf) => Some(&leaf.text),
            Self::Element(_) => None,
        }
    }

    /// Returns the element when this node is an [`ElementNode`].
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl From<TextNode> for Node {
    fn from(value: TextNode) -> Self {
        Self::Text(value)
    }
}

impl From<ElementNode> for Node {
    fn from(value: ElementNode) -> Self {
        Self::Element(value)
    }
}

/// Result of a command handler: one node or an ordered sequence of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A single node.
    Node(Node),
    /// Several nodes in display order.
    Nodes(Vec<Node>),
}

impl Value {
    /// Normalizes the value into a node sequence; a bare node becomes a one-element sequence.
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            Self::Node(node) => vec![node],
            Self::Nodes(nodes) => nodes,
        }
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

impl From<ElementNode> for Value {
    fn from(value: ElementNode) -> Self {
        Self::Node(Node::Element(value))
    }
}

impl From<TextNode> for Value {
    fn from(value: TextNode) -> Self {
        Self::Node(Node::Text(value))
    }
}

impl From<Vec<Node>> for Value {
    fn from(value: Vec<Node>) -> Self {
        Self::Nodes(value)
    }
}

fn deserialize_attrs<'de, D>(deserializer: D) -> Result<Attrs, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<AttrValue>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect())
}
