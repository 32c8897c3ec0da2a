use crate::latex::escape_text;
use crate::models::{Category, ResumeData};
use crate::sections::{last_token, sorted_entries};

/// Renders certifications as one bolded line each, with the issue year right-aligned.
pub fn render_certifications(data: &ResumeData) -> String {
    let mut content = String::from(
        "%-----------CERTIFICATIONS-----------\n\\section{Certifications}\n\\begin{itemize}[leftmargin=0.15in, label={}]\n    \\small{\\item{\n",
    );

    for entry in sorted_entries(data, Category::Certification) {
        content.push_str(&format!(
            "        \\textbf{{{}}} - {} \\hfill {} \\\\\n",
            escape_text(&entry.title),
            escape_text(&entry.company),
            escape_text(last_token(&entry.start_date)),
        ));
    }

    content.push_str("    }}\n\\end{itemize}");
    content
}
