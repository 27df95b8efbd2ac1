use shell_document::{ElementNode, Node, Value};

use super::markup::{card, heading, hstack, link, list, text, vstack};

struct Publication {
    headline: &'static str,
    links: &'static [PublicationLink],
}

struct PublicationLink {
    label: &'static str,
    icon: &'static str,
    href: &'static str,
}

const PUBLICATIONS: &[Publication] = &[
    Publication {
        headline: "OOPSLA 2025 — React‑tRace: A Semantics for Understanding React Hooks (Accepted)",
        links: &[
            PublicationLink {
                label: "paper",
                icon: "paper",
                href: "https://doi.org/10.48550/arXiv.2507.05234",
            },
            PublicationLink {
                label: "github",
                icon: "github",
                href: "https://github.com/Zeta611/react-trace",
            },
            PublicationLink {
                label: "event",
                icon: "link",
                href: "https://2025.splashcon.org/details/OOPSLA/54/",
            },
            PublicationLink {
                label: "live",
                icon: "link",
                href: "https://react-trace.vercel.app/",
            },
        ],
    },
    Publication {
        headline: "UIST 2025 Posters — ReDemon UI: Reactive Synthesis by Demonstration for Web UI (Accepted)",
        links: &[
            PublicationLink {
                label: "paper",
                icon: "paper",
                href: "https://doi.org/10.48550/arXiv.2507.10099",
            },
            PublicationLink {
                label: "github",
                icon: "github",
                href: "https://github.com/Zeta611/redemon-ui",
            },
            PublicationLink {
                label: "live",
                icon: "link",
                href: "https://redemon-ui.vercel.app/",
            },
        ],
    },
    Publication {
        headline: "PLDI 2025 SRC — Retargeting an Abstract Interpreter for a New Language by Partial Evaluation (2nd place 🥈)",
        links: &[
            PublicationLink {
                label: "paper",
                icon: "paper",
                href: "https://doi.org/10.48550/arXiv.2507.04316",
            },
            PublicationLink {
                label: "video",
                icon: "video",
                href: "https://www.youtube.com/live/BRhBv_aYNks?t=5750",
            },
            PublicationLink {
                label: "event",
                icon: "link",
                href: "https://pldi25.sigplan.org/details/pldi-2025-src/1/",
            },
        ],
    },
];

const HONORS: &[&str] = &[
    "Aug 2025 — SIGPL Summer School 2025 Presentation Award (1st place 🥇)",
    "Jun 2025 — PLDI 2025 SRC Graduate Category (2nd place 🥈)",
    "Sep 2024 — Outstanding Teaching Assistant Award (SNU Engineering)",
    "Aug 2024 — SIGPL Summer School 2024 Presentation Award (2nd place 🥈)",
    "Mar 2018–Feb 2024 — Presidential Science Scholarship (Korea Student Aid Foundation)",
];

const RECENT_PUBLICATIONS: usize = 3;
const RECENT_HONORS: usize = 5;

fn publication(entry: &Publication) -> Node {
    vstack(
        1,
        [
            text(entry.headline).into_node(),
            hstack(
                2,
                entry
                    .links
                    .iter()
                    .map(|item| link(item.href, item.icon, item.label)),
            ),
        ],
    )
}

fn publications_section(title: &str, limit: usize) -> Node {
    vstack(
        2,
        [
            heading(3, title),
            vstack(3, PUBLICATIONS.iter().take(limit).map(publication)),
        ],
    )
}

fn honors_section(title: &str, limit: usize) -> Node {
    vstack(
        2,
        [
            heading(3, title),
            list(HONORS.iter().take(limit).map(|honor| Node::text(*honor))),
        ],
    )
}

pub(super) fn news(_: &[String]) -> Value {
    let grid = ElementNode::new("Grid")
        .attr("gap", 4)
        .attr("base", 1)
        .attr("md", 2)
        .children([
            publications_section("Recent publications", RECENT_PUBLICATIONS),
            honors_section("Recent honors", RECENT_HONORS),
        ])
        .into_node();
    Value::from(card([grid]))
}

pub(super) fn research(_: &[String]) -> Value {
    Value::from(card([publications_section("Publications", PUBLICATIONS.len())]))
}

pub(super) fn honors(_: &[String]) -> Value {
    Value::from(card([honors_section("Honors", HONORS.len())]))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn single(value: Value) -> Node {
        match value {
            Value::Node(node) => node,
            Value::Nodes(_) => panic!("expected a single node"),
        }
    }

    #[test]
    fn news_has_publication_and_honor_columns() {
        let root = single(news(&[]));
        let grid = root.as_element().expect("card").children[0]
            .as_element()
            .expect("grid");
        assert_eq!(grid.name, "Grid");
        assert_eq!(grid.attr_number("md"), Some(2.0));
        assert_eq!(grid.children.len(), 2);
    }

    #[test]
    fn honors_list_items_are_text_leaves() {
        let root = single(honors(&[]));
        let section = root.as_element().expect("card").children[0]
            .as_element()
            .expect("section");
        let items = &section.children[1].as_element().expect("list").children;
        assert_eq!(items.len(), HONORS.len());
        assert!(items.iter().all(|item| item.as_text().is_some()));
    }

    #[test]
    fn research_links_every_publication() {
        let root = single(research(&[]));
        let links = count_named(&root, "Link");
        let expected: usize = PUBLICATIONS.iter().map(|entry| entry.links.len()).sum();
        assert_eq!(links, expected);
    }

    fn count_named(node: &Node, name: &str) -> usize {
        match node {
            Node::Text(_) => 0,
            Node::Element(element) => {
                usize::from(element.name == name)
                    + element
                        .children
                        .iter()
                        .map(|child| count_named(child, name))
                        .sum::<usize>()
            }
        }
    }
}
