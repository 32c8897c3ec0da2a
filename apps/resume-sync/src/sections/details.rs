//! Detail lines of a work entry.
//!
//! Each line is classified on its own, then a renderer tracking a single
//! "sub-list open" flag turns the classified lines into nested `\resumeItem`s.

use crate::latex::escape_text;
use crate::sections::RenderRules;

const NESTED_BULLET_PREFIX: &str = "  •";
const BULLET: char = '•';

/// One classified detail line, with its prefix already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine<'a> {
    /// "Role (Jan 2021 - Present)" style line; opens a sub-list.
    RoleHeader(&'a str),
    /// Indented "  • text".
    NestedBullet(&'a str),
    /// "• text".
    PlainBullet(&'a str),
    /// Line ending with a configured location suffix; opens a sub-list.
    SubsectionHeader(&'a str),
    PlainLine(&'a str),
}

/// Classifies one raw line. Returns `None` for blank lines.
///
/// The nested-bullet prefix is matched on the raw line, everything else on the
/// trimmed line.
pub fn classify<'a>(raw: &'a str, rules: &RenderRules) -> Option<DetailLine<'a>> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    if line.contains('(') && line.contains(')') && rules.mentions_role_date(line) {
        return Some(DetailLine::RoleHeader(line));
    }
    if let Some(rest) = raw.strip_prefix(NESTED_BULLET_PREFIX) {
        return Some(DetailLine::NestedBullet(rest.trim()));
    }
    if let Some(rest) = line.strip_prefix(BULLET) {
        return Some(DetailLine::PlainBullet(rest.trim()));
    }
    if rules.is_location_header(line) {
        return Some(DetailLine::SubsectionHeader(line));
    }
    Some(DetailLine::PlainLine(line))
}

/// Renders a work entry's detail lines. The caller wraps the result in
/// `\resumeItemListStart` / `\resumeItemListEnd`.
pub fn render_details(details: &[String], rules: &RenderRules) -> String {
    let mut out = String::new();
    let mut in_sublist = false;

    for raw in details {
        let Some(line) = classify(raw, rules) else {
            continue;
        };

        match line {
            DetailLine::RoleHeader(text) => {
                close_sublist(&mut out, &mut in_sublist);
                let formatted = match text.split_once(" - ") {
                    Some((role, department)) => format!(
                        "\\textbf{{{}}} - {}",
                        escape_text(role.trim()),
                        escape_text(department.trim())
                    ),
                    None => format!("\\textbf{{{}}}", escape_text(text)),
                };
                out.push_str(&format!("\\resumeItem{{{formatted}}}\n"));
                open_sublist(&mut out, &mut in_sublist);
            }
            DetailLine::NestedBullet(text) => {
                if !in_sublist {
                    open_sublist(&mut out, &mut in_sublist);
                }
                out.push_str(&format!("    \\resumeItem{{{}}}\n", escape_text(text)));
            }
            DetailLine::PlainBullet(text) => {
                out.push_str(&format!("    \\resumeItem{{{}}}\n", escape_text(text)));
            }
            DetailLine::SubsectionHeader(text) => {
                close_sublist(&mut out, &mut in_sublist);
                out.push_str(&format!("\\resumeItem{{\\textbf{{{}}}}}\n", escape_text(text)));
                open_sublist(&mut out, &mut in_sublist);
            }
            DetailLine::PlainLine(text) => {
                out.push_str(&format!("\\resumeItem{{{}}}\n", escape_text(text)));
            }
        }
    }

    close_sublist(&mut out, &mut in_sublist);
    out
}

fn open_sublist(out: &mut String, in_sublist: &mut bool) {
    out.push_str("\\begin{itemize}\n");
    *in_sublist = true;
}

fn close_sublist(out: &mut String, in_sublist: &mut bool) {
    if *in_sublist {
        out.push_str("\\end{itemize}\n");
        *in_sublist = false;
    }
}
