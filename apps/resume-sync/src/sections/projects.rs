use crate::latex::escape_text;
use crate::models::ResumeData;

/// At most this many sentences of a project description become bullets.
const MAX_PROJECT_POINTS: usize = 3;

/// Renders the showcase in document order, each project with up to three bullets.
pub fn render_projects(data: &ResumeData) -> String {
    let mut content =
        String::from("%-----------PROJECTS-----------\n\\section{Projects}\n    \\resumeSubHeadingListStart\n");

    for project in &data.showcase {
        let technologies: Vec<String> = project.technologies.iter().map(|t| escape_text(t)).collect();

        content.push_str("      \\resumeProjectHeading\n");
        content.push_str(&format!(
            "          {{\\textbf{{{}}} $|$ \\emph{{{}}}}}{{}}\n",
            escape_text(&project.title),
            technologies.join(", "),
        ));
        content.push_str("          \\resumeItemListStart\n");
        for point in key_points(&project.modal_content.description) {
            content.push_str(&format!("            \\resumeItem{{{}}}\n", escape_text(point)));
        }
        content.push_str("          \\resumeItemListEnd\n");
    }

    content.push_str("    \\resumeSubHeadingListEnd");
    content
}

/// Splits a description on ". " and keeps the first three non-empty sentences.
pub fn key_points(description: &str) -> Vec<&str> {
    description
        .split(". ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_PROJECT_POINTS)
        .collect()
}
