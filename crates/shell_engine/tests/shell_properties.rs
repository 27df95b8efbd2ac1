use pretty_assertions::assert_eq;
use shell_engine::{
    builtin_registry, help_listing, Handler, Interpreter, Node, ShellMachine, ShellState, Value,
};

const INPUTS: &[&str] = &[
    "fetch",
    "news",
    "help",
    "echo a b",
    "  echo   spaced  ",
    "",
    "   ",
    "whoami",
    "research",
    "honors extra args",
    "echo don't panic",
    "echo C:\\temp\\x",
];

#[test]
fn registered_commands_pass_handler_results_through() {
    let interpreter = Interpreter::builtin();
    let args = vec!["x".to_string(), "y".to_string()];
    for spec in builtin_registry().specs() {
        let Handler::Render(handler) = spec.handler else {
            continue;
        };
        let line = format!("{} x y", spec.name);
        assert_eq!(
            interpreter.interpret(&line).expect("interpret"),
            handler(&args),
            "{line}"
        );
    }
}

#[test]
fn empty_inputs_record_one_text_node() {
    let machine = ShellMachine::builtin();
    for input in ["", " ", "\t", "\n  \n"] {
        let state = machine.run(&ShellState::default(), input);
        assert_eq!(state.history.len(), 1);
        let output = &state.history[0].output;
        assert_eq!(output.len(), 1);
        assert!(output[0].as_text().is_some());
    }
}

#[test]
fn unregistered_names_record_unknown_command_text() {
    let machine = ShellMachine::builtin();
    for name in ["ls", "HELP", "fetch2", "🦀"] {
        let state = machine.run(&ShellState::default(), &format!("{name} --flag"));
        assert_eq!(
            state.history[0].output,
            vec![Node::text(format!("Unknown command: {name}"))]
        );
    }
}

#[test]
fn quotes_and_backslashes_never_fail_a_line() {
    let machine = ShellMachine::builtin();
    let cases = [
        ("echo don't panic", "don't panic".to_string()),
        ("echo C:\\temp\\x", "C:\\temp\\x".to_string()),
        ("echo oops\\", "oops\\".to_string()),
        ("it's", "Unknown command: it's".to_string()),
        ("\"who\" am i", "Unknown command: \"who\"".to_string()),
    ];
    for (input, expected) in cases {
        let state = machine.run(&ShellState::default(), input);
        assert_eq!(state.history[0].output, vec![Node::text(expected)], "{input}");
    }
}

#[test]
fn history_grows_by_one_and_preserves_prefix() {
    let machine = ShellMachine::builtin();
    let mut state = ShellState::default();
    for input in INPUTS {
        let next = machine.run(&state, input);
        assert_eq!(next.history.len(), state.history.len() + 1);
        assert_eq!(&next.history[..state.history.len()], &state.history[..]);
        assert_eq!(next.history.last().map(|entry| entry.input.as_str()), Some(*input));
        state = next;
    }
}

#[test]
fn echo_of_quoted_words_is_single_text_node() {
    let state = ShellMachine::builtin().run(&ShellState::default(), "echo \"a\" \"b\"");
    assert_eq!(state.history[0].output, vec![Node::text("a b")]);
}

#[test]
fn help_item_count_matches_registry() {
    let Value::Node(root) = Interpreter::builtin().interpret("help").expect("interpret") else {
        panic!("help returns one node");
    };
    assert_eq!(root, help_listing(builtin_registry()));

    let list = root.as_element().expect("root").children[1]
        .as_element()
        .expect("list");
    let names = list
        .children
        .iter()
        .map(|item| {
            let row = item.as_element().expect("row");
            row.children[0]
                .as_element()
                .and_then(|button| button.attr_str("cmd"))
                .expect("command name")
                .to_string()
        })
        .collect::<Vec<_>>();
    assert_eq!(names, builtin_registry().names());
}

#[test]
fn history_output_round_trips_through_json() {
    let machine = ShellMachine::builtin();
    let mut state = ShellState::default();
    for input in INPUTS {
        state = machine.advance(state, input);
    }
    for entry in &state.history {
        let raw = serde_json::to_string(&entry.output).expect("serialize");
        let decoded: Vec<Node> = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(decoded, entry.output, "{}", entry.input);
    }

    let raw = serde_json::to_string(&state).expect("serialize state");
    let decoded: ShellState = serde_json::from_str(&raw).expect("deserialize state");
    assert_eq!(decoded, state);
}

#[test]
fn echo_and_help_are_idempotent() {
    let machine = ShellMachine::builtin();
    for input in ["echo same words", "help"] {
        let state = machine.run(&ShellState::default(), input);
        let state = machine.run(&state, input);
        assert_eq!(state.history[0].output, state.history[1].output);
    }
}
