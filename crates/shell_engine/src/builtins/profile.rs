use shell_document::{ElementNode, Node, Value};

use super::markup::{card, text, vstack};

const NAME: &str = "Jay Lee";
const TAGLINE: &str = "M.S. student in Computer Science | Programming Languages";
const SUMMARY: &str = "Applying programming language theory, static analysis, and program \
synthesis to build ergonomic, reliable tools for real-world programmers.";
const PORTRAIT: &str = "/profile.jpg";
const PORTRAIT_SIZE: u32 = 160;

pub(super) fn fetch(_: &[String]) -> Value {
    let portrait = ElementNode::new("Image")
        .attr("src", PORTRAIT)
        .attr("alt", format!("{NAME}'s profile image"))
        .attr("width", PORTRAIT_SIZE)
        .attr("height", PORTRAIT_SIZE)
        .attr("rounded", 1)
        .into_node();
    let about = vstack(
        1,
        [
            text(NAME).attr("size", "xl").attr("weight", "semibold").into_node(),
            text(TAGLINE).attr("variant", "muted").into_node(),
            text(SUMMARY).attr("size", "sm").into_node(),
        ],
    );
    let grid = ElementNode::new("Grid")
        .attr("gap", 4)
        .attr("base", 1)
        .attr("mdTemplate", "auto_1fr")
        .children([portrait, about])
        .into_node();
    Value::from(card([grid]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_renders_profile_card() {
        let Value::Node(Node::Element(card)) = fetch(&[]) else {
            panic!("fetch returns one card");
        };
        assert_eq!(card.name, "Card");
        let grid = card.children[0].as_element().expect("grid");
        assert_eq!(grid.attr_str("mdTemplate"), Some("auto_1fr"));
        let image = grid.children[0].as_element().expect("image");
        assert_eq!(image.attr_str("src"), Some(PORTRAIT));
        assert_eq!(image.attr_number("width"), Some(160.0));
    }
}
