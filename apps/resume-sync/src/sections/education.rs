use crate::latex::escape_table_cell;
use crate::models::{Category, ResumeData};
use crate::sections::sorted_entries;

/// Renders education entries as `\resumeSubheading` rows, highest `order` first.
pub fn render_education(data: &ResumeData) -> String {
    let mut content =
        String::from("%-----------EDUCATION-----------\n\\section{Education}\n\\resumeSubHeadingListStart\n");

    for entry in sorted_entries(data, Category::Education) {
        let date = date_range(&entry.start_date, &entry.end_date);
        content.push_str(&format!(
            "\\resumeSubheading\n{{{}}}{{{}}}\n{{{}}}{{{}}}\n",
            escape_table_cell(&entry.company),
            escape_table_cell(&entry.modal_content.location),
            escape_table_cell(&entry.title),
            escape_table_cell(&date),
        ));
    }

    content.push_str("\\resumeSubHeadingListEnd");
    content
}

/// "{start} -- {end}" when both are set, the start alone otherwise.
/// An end date without a start date renders nothing.
pub fn date_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} -- {end}"),
        (false, true) => start.to_string(),
        _ => String::new(),
    }
}
