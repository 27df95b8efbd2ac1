//! Command-line tokenization: whitespace-separated words with optional quote grouping.

/// One word of a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    /// Word with grouping quotes removed.
    pub(crate) value: String,
    /// Exact source text of the word.
    pub(crate) raw: &'a str,
}

/// Splits `line` into tokens. Never fails.
///
/// Runs of whitespace separate tokens. A `"` or `'` that opens a token and has a matching quote
/// later in the line groups everything up to that quote, whitespace included. Every other quote
/// and every backslash is an ordinary character.
pub(crate) fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut index = 0;
    while let Some(offset) = line[index..].find(|ch: char| !ch.is_whitespace()) {
        let start = index + offset;
        let (value, end) = read_token(line, start);
        tokens.push(Token {
            value,
            raw: &line[start..end],
        });
        index = end;
    }
    tokens
}

fn read_token(line: &str, start: usize) -> (String, usize) {
    let mut value = String::new();
    let mut quote = None::<char>;

    for (offset, ch) in line[start..].char_indices() {
        let position = start + offset;
        match quote {
            Some(active) if ch == active => quote = None,
            Some(_) => value.push(ch),
            None if ch.is_whitespace() => return (value, position),
            None if offset == 0 && opens_group(line, position, ch) => quote = Some(ch),
            None => value.push(ch),
        }
    }
    (value, line.len())
}

fn opens_group(line: &str, position: usize, ch: char) -> bool {
    (ch == '"' || ch == '\'') && line[position + ch.len_utf8()..].contains(ch)
}
