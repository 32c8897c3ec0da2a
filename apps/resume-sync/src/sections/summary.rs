use tracing::warn;

use crate::latex::escape_text;
use crate::models::ResumeData;

/// Renders the highlighted professional summary box.
pub fn render_summary(data: &ResumeData) -> Option<String> {
    let summary = data.config.summary.as_str();
    if summary.is_empty() {
        warn!("No summary found in config");
        return None;
    }

    Some(format!(
        r"% Professional Summary Section
% Customize your professional summary as needed

\begin{{center}}
    \colorbox{{backgroundgray}}{{
        \begin{{minipage}}{{0.95\textwidth}}
            \centering
            \vspace{{6pt}}
            \textcolor{{textgray}}{{\textit{{{}}}}}
            \vspace{{6pt}}
        \end{{minipage}}
    }}
\end{{center}}
\vspace{{6pt}}",
        escape_text(summary)
    ))
}
