//! LaTeX escaping for free-text values.
//!
//! Only values that come from the résumé data go through here. Markup built by a
//! renderer (`\textbf{..}`, `\href{..}{..}`) must never be escaped, and a value must
//! be escaped exactly once: every pass adds another layer of backslashes.

/// Where an escaped value is going to be inserted.
///
/// Both contexts currently share the same replacement table. Table cells are kept
/// separate so that alignment-sensitive macros can diverge without touching prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeContext {
    Text,
    TableCell,
}

/// Replacement table, in the order the replacements are defined.
/// `\` is deliberately absent: backslashes produced by earlier rows are never re-escaped.
const REPLACEMENTS: &[(char, &str)] = &[
    ('%', r"\%"),
    ('&', r"\&"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('^', r"\^{}"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
];

fn replacement(c: char, context: EscapeContext) -> Option<&'static str> {
    match context {
        EscapeContext::Text | EscapeContext::TableCell => REPLACEMENTS
            .iter()
            .find(|(special, _)| *special == c)
            .map(|(_, escaped)| *escaped),
    }
}

/// Escapes `text` for insertion into the given context.
///
/// A single pass over the input gives the same result as applying the table row by
/// row, except that braces emitted by `\^{}` are left alone, which is what LaTeX needs.
pub fn escape(text: &str, context: EscapeContext) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match replacement(c, context) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(c),
        }
    }
    out
}

/// Escapes prose: summaries, bullet points, titles.
pub fn escape_text(text: &str) -> String {
    escape(text, EscapeContext::Text)
}

/// Escapes values placed in tabular or heading macros such as `\resumeSubheading`.
pub fn escape_table_cell(text: &str) -> String {
    escape(text, EscapeContext::TableCell)
}
