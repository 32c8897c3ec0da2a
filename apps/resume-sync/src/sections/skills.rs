use tracing::warn;

use crate::latex::escape_text;
use crate::models::ResumeData;

/// Renders one line per non-empty skill category, in document order.
pub fn render_skills(data: &ResumeData) -> Option<String> {
    if data.skills.is_empty() {
        warn!("No skills section found in data");
        return None;
    }

    let mut content = String::from(
        "%-----------PROGRAMMING SKILLS-----------\n\\section{Technical Skills}\n \\begin{itemize}[leftmargin=0.15in, label={}]\n    \\small{\\item{\n",
    );

    for (category, mut technologies) in data.skill_categories() {
        if technologies.is_empty() {
            continue;
        }
        technologies.sort_unstable();
        let technologies: Vec<String> = technologies.into_iter().map(escape_text).collect();
        content.push_str(&format!(
            "     \\textbf{{{}}}{{: {}}} \\\\\n",
            escape_text(&category_display_name(category)),
            technologies.join(", "),
        ));
    }

    content.push_str("    }}\n \\end{itemize}");
    Some(content)
}

/// "cloud_devops" -> "Cloud & Devops". Not escaped.
pub fn category_display_name(category: &str) -> String {
    title_case(&category.replace('_', " & "))
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
