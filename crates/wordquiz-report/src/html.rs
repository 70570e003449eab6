//! Printable HTML quiz sheet.
//!
//! Produces a self-contained A4 page with all CSS inlined. Every value taken
//! from vocabulary data is escaped before insertion.

use anyhow::Result;

use wordquiz_core::model::{QuizDocument, QuizItem};
use wordquiz_core::traits::DocumentRenderer;

/// Heading prefix used when no title is configured.
pub const DEFAULT_TITLE: &str = "영어 단어 퀴즈";

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Renders quiz sheets as printable HTML.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn extension(&self) -> &str {
        "html"
    }

    fn render(&self, document: &QuizDocument) -> Result<String> {
        Ok(generate_html(document, &self.title))
    }
}

/// Generate the HTML sheet for a document.
pub fn generate_html(document: &QuizDocument, title: &str) -> String {
    let title = html_escape(title);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("<title>{} {}</title>\n", title, document.number));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!("<h1>{} #{}</h1>\n", title, document.number));

    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>문제번호</th><th>단어 첫글자</th><th>한글 뜻</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for item in &document.items {
        html.push_str(&item_row(item));
    }
    html.push_str("</tbody>\n</table>\n");

    html.push_str("</body>\n</html>\n");
    html
}

fn item_row(item: &QuizItem) -> String {
    format!(
        "<tr><td class=\"number\">{}</td><td class=\"first-letter\">{}</td><td class=\"meaning\">{}</td></tr>\n",
        item.sequence_number,
        html_escape(&item.first_character),
        html_escape(&item.definition),
    )
}

const CSS: &str = r#"
@page { size: A4; margin: 20mm; }
body { font-family: 'Malgun Gothic', sans-serif; padding: 20px; max-width: 210mm; margin: 0 auto; }
h1 { text-align: center; margin-bottom: 30px; font-size: 24px; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
th, td { border: 1px solid #333; padding: 10px; text-align: center; }
th { background-color: #f0f0f0; font-weight: bold; }
td.number { width: 15%; font-weight: bold; }
td.first-letter { width: 25%; font-size: 18px; font-weight: bold; text-align: left; padding-left: 15px; }
td.meaning { width: 60%; text-align: left; padding-left: 20px; }
@media print { body { padding: 0; } }
"#;
