use crate::latex::{escape_table_cell, escape_text};
use crate::models::{Category, ResumeData};
use crate::sections::details::render_details;
use crate::sections::{last_token, sorted_entries, RenderRules};

/// Renders work entries, highest `order` first.
///
/// Every entry after the first is preceded by `\needspace{..}` so a job never
/// starts at the bottom of a page; the amount comes from the render rules.
pub fn render_experience(data: &ResumeData, rules: &RenderRules) -> String {
    let mut content = String::from(
        "%-----------EXPERIENCE-----------\n\\section{Experience}\n\\resumeSubHeadingListStart\n",
    );

    for (i, entry) in sorted_entries(data, Category::Work).into_iter().enumerate() {
        if i > 0 {
            content.push_str(&format!(
                "\n\\needspace{{{}}}\n",
                rules.spacing_for(&entry.company)
            ));
        }

        content.push_str(&format!(
            "\\resumeSubheading\n{{{}}}{{{}}}\n{{{}}}{{{}}}\n",
            escape_text(&entry.title),
            escape_text(&year_range(&entry.start_date, &entry.end_date)),
            escape_text(&entry.company),
            escape_table_cell(&entry.modal_content.location),
        ));

        let details = &entry.modal_content.details;
        if !details.is_empty() {
            content.push_str("\\resumeItemListStart\n");
            content.push_str(&render_details(details, rules));
            content.push_str("\\resumeItemListEnd\n");
        }
    }

    content.push_str("\n\\resumeSubHeadingListEnd");
    content
}

/// Year-only date range: ("Jan 2020", "Dec 2022") -> "2020 -- 2022".
///
/// An end date of `Present` is kept as-is. With no end date the start year stands
/// alone; with no start date the range is empty.
pub fn year_range(start: &str, end: &str) -> String {
    let start_year = last_token(start);
    let end_year = last_token(end);
    match (start_year.is_empty(), end_year.is_empty()) {
        (false, false) if end_year == "Present" => format!("{start_year} -- Present"),
        (false, false) => format!("{start_year} -- {end_year}"),
        (false, true) => start_year.to_string(),
        _ => String::new(),
    }
}
