use tracing::warn;

use crate::latex::escape_text;
use crate::models::ResumeData;

const LINK_SEPARATOR: &str = " $|$ ";

/// Renders the name banner and contact line.
///
/// Skipped when the display name or email is empty. Display texts are escaped;
/// link targets are passed to `\href` verbatim.
pub fn render_header(data: &ResumeData) -> Option<String> {
    let config = &data.config;
    let name = config.display_name();
    let email = config.email.as_str();

    if name.is_empty() || email.is_empty() {
        warn!("Missing required fields in config: name or email");
        return None;
    }

    let mut links = vec![contact_link(&format!("mailto:{email}"), email)];

    if !config.website.is_empty() {
        let display = strip_scheme(&config.website);
        links.push(contact_link(&config.website, display));
    }

    let linkedin = data
        .social
        .iter()
        .find(|s| s.platform.eq_ignore_ascii_case("linkedin"));
    if let Some(entry) = linkedin.filter(|e| !e.url.is_empty()) {
        let display = strip_scheme(&entry.url);
        let display = display.replacen("www.", "", 1);
        links.push(contact_link(&entry.url, &display));
    }

    Some(format!(
        "%----------HEADING----------\n\
         \\begin{{center}}\n    \
         \\textbf{{\\Huge \\scshape {name}}} \\\\ \\vspace{{1pt}}\n    \
         \\small {links}\n\
         \\end{{center}}",
        name = escape_text(name),
        links = links.join(LINK_SEPARATOR),
    ))
}

fn contact_link(target: &str, display: &str) -> String {
    format!("\\href{{{target}}}{{\\underline{{{}}}}}", escape_text(display))
}

/// Drops a leading `https://` or `http://`.
fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
