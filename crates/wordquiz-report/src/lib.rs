//! wordquiz-report — Quiz sheet renderers.

pub mod html;
pub mod json;

use anyhow::Result;

use wordquiz_core::model::{QuizDocument, VocabularyRecord};
use wordquiz_core::traits::DocumentRenderer;

use crate::html::{HtmlRenderer, DEFAULT_TITLE};
use crate::json::JsonRenderer;

/// Format names accepted by [`create_renderer`].
pub const FORMATS: &[&str] = &["html", "json"];

/// Render sampled records as the printable HTML sheet numbered `document_number`.
pub fn render(records: &[VocabularyRecord], document_number: usize) -> String {
    html::generate_html(
        &QuizDocument::from_sample(document_number, records),
        DEFAULT_TITLE,
    )
}

/// Create a renderer by format name.
pub fn create_renderer(format: &str, title: &str) -> Result<Box<dyn DocumentRenderer>> {
    match format {
        "html" => Ok(Box::new(HtmlRenderer::new(title))),
        "json" => Ok(Box::new(JsonRenderer)),
        other => anyhow::bail!(
            "unknown output format '{other}'. Available: {}",
            FORMATS.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wordquiz_core::sampler::sample;

    #[test]
    fn apple_banana_sheet() {
        let pool = vec![
            VocabularyRecord::new("Apple", "사과"),
            VocabularyRecord::new("Banana", "바나나"),
        ];
        let picked = sample(&pool, 2, &mut StdRng::seed_from_u64(5)).unwrap();
        let html = render(&picked, 1);

        assert_eq!(html.matches("<td class=\"number\">").count(), 2);
        assert!(html.contains("<td class=\"first-letter\">a</td><td class=\"meaning\">사과</td>"));
        assert!(html.contains("<td class=\"first-letter\">b</td><td class=\"meaning\">바나나</td>"));
    }

    #[test]
    fn render_is_byte_identical_for_same_input() {
        let records = vec![
            VocabularyRecord::new("Sun", "해"),
            VocabularyRecord::new("Star", "별"),
        ];
        assert_eq!(render(&records, 4), render(&records, 4));
        assert_ne!(render(&records, 4), render(&records, 5));
    }

    #[test]
    fn create_renderer_by_name() {
        assert_eq!(create_renderer("html", "t").unwrap().extension(), "html");
        assert_eq!(create_renderer("json", "t").unwrap().extension(), "json");
        let err = create_renderer("pdf", "t").err().unwrap();
        assert!(err.to_string().contains("unknown output format"));
    }
}
