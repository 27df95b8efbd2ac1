use shell_document::{Node, Value};

use crate::registry::{builtin_registry, CommandRegistry, CommandSpec};

mod markup;
mod news;
mod profile;

use markup::{command_button, hstack, list, text, vstack};

pub(crate) fn builtin_specs() -> Vec<CommandSpec> {
    vec![
        CommandSpec::render("echo", "Echo arguments", echo),
        CommandSpec::render("help", "Show available commands", help),
        CommandSpec::render("fetch", "Display Jay Lee's information", profile::fetch),
        CommandSpec::render("news", "Show recent news", news::news),
        CommandSpec::render("research", "List publications", news::research),
        CommandSpec::render("honors", "List honors and awards", news::honors),
    ]
}

fn echo(args: &[String]) -> Value {
    Value::from(Node::text(args.join(" ")))
}

fn help(_: &[String]) -> Value {
    Value::from(help_listing(builtin_registry()))
}

/// Builds the `help` listing for `registry`: one item per command in registration order, each
/// pairing a clickable command button with its muted description.
pub fn help_listing(registry: &CommandRegistry) -> Node {
    let items = registry.specs().map(|spec| {
        hstack(
            2,
            [
                command_button(spec.name),
                text(spec.description).attr("variant", "muted").into_node(),
            ],
        )
    });
    vstack(2, [text("Available commands:").into_node(), list(items)])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shell_document::ElementNode;

    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    fn help_items(node: &Node) -> &[Node] {
        let root = node.as_element().expect("help root element");
        let list = root.children[1].as_element().expect("list element");
        assert_eq!(list.name, "List");
        &list.children
    }

    #[test]
    fn echo_joins_arguments_with_single_spaces() {
        assert_eq!(echo(&args(&["a", "b"])), Value::from(Node::text("a b")));
    }

    #[test]
    fn echo_without_arguments_is_empty_text() {
        assert_eq!(echo(&[]), Value::from(Node::text("")));
    }

    #[test]
    fn help_lists_every_builtin_in_order() {
        let Value::Node(node) = help(&[]) else {
            panic!("help returns a single node");
        };
        let items = help_items(&node);
        let registry = builtin_registry();
        assert_eq!(items.len(), registry.len());

        for (item, spec) in items.iter().zip(registry.specs()) {
            let row = item.as_element().expect("row");
            let button = row.children[0].as_element().expect("button");
            assert_eq!(button.name, "Cmd");
            assert_eq!(button.attr_str("cmd"), Some(spec.name));
            assert_eq!(button.text_content(), spec.name);
            let description = row.children[1].as_element().expect("description");
            assert_eq!(description.attr_str("variant"), Some("muted"));
            assert_eq!(description.text_content(), spec.description);
        }
    }

    #[test]
    fn help_ignores_arguments() {
        assert_eq!(help(&args(&["extra", "args"])), help(&[]));
    }

    #[test]
    fn help_listing_follows_the_given_registry() {
        fn noop(_: &[String]) -> Value {
            Value::from(Node::text(""))
        }
        let registry = CommandRegistry::builder()
            .register(CommandSpec::render("only", "the only one", noop))
            .expect("register")
            .build();
        let listing = help_listing(&registry);
        let items = help_items(&listing);
        assert_eq!(items.len(), 1);
        let expected = hstack(
            2,
            [
                command_button("only"),
                ElementNode::new("Text")
                    .attr("variant", "muted")
                    .child(Node::text("the only one"))
                    .into_node(),
            ],
        );
        assert_eq!(items[0], expected);
    }

    #[test]
    fn every_builtin_is_total_over_odd_arguments() {
        let odd = args(&["", "--flag", "🥇", "a very long argument"]);
        for spec in builtin_specs() {
            let crate::registry::Handler::Render(handler) = spec.handler else {
                panic!("built-ins never navigate");
            };
            assert!(!handler(&odd).into_nodes().is_empty(), "{} returned nothing", spec.name);
        }
    }
}
