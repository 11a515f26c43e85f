//! Inline test-run region: pending / success / error, rendered next to the
//! prompt so the context stays visible while the call runs.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::TEST_RESULT_ID;
use crate::dom_utils::{self, escape_html};
use crate::i18n::{tr, Language};
use crate::models::TestOutcome;
use crate::state::{TestRun, APP_STATE};

pub fn render(document: &Document) -> Result<(), JsValue> {
    let (language, test_run) = APP_STATE.with(|s| {
        let s = s.borrow();
        (s.language, s.test_run.clone())
    });

    let container = match document.get_element_by_id(TEST_RESULT_ID) {
        Some(container) => container,
        None => return Ok(()),
    };

    match test_run {
        TestRun::Idle => {
            container.set_inner_html("");
            dom_utils::hide(&container);
        }
        TestRun::Pending => {
            container.set_inner_html(&format!(
                "<div class=\"test-pending\">{}</div>",
                tr(language, "testing")
            ));
            dom_utils::show(&container);
        }
        TestRun::Done(outcome) => {
            container.set_inner_html(&outcome_markup(language, &outcome));
            dom_utils::show(&container);
        }
    }
    Ok(())
}

fn outcome_markup(language: Language, outcome: &TestOutcome) -> String {
    if !outcome.success {
        let error = outcome.error.as_deref().unwrap_or("");
        return format!(
            "<div class=\"test-error\"><strong>{}</strong> {}</div>",
            tr(language, "testFailed"),
            escape_html(error)
        );
    }

    let line = |label: &str, value: &Option<String>| match value {
        Some(value) => format!(
            "<div class=\"test-line\"><strong>{}</strong> {}</div>",
            label,
            escape_html(value)
        ),
        None => String::new(),
    };

    let mut markup = String::from("<div class=\"test-success\">");
    markup.push_str(&line(tr(language, "testModelLabel"), &outcome.model));
    markup.push_str(&line(tr(language, "testBaseUrlLabel"), &outcome.base_url));
    markup.push_str(&line(tr(language, "testResponseLabel"), &outcome.response));
    markup.push_str("</div>");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_outcome_renders_the_error_text() {
        let outcome = TestOutcome::failure("connection refused".to_string());
        let markup = outcome_markup(Language::En, &outcome);
        assert!(markup.contains("Test failed:"));
        assert!(markup.contains("connection refused"));
    }

    #[test]
    fn successful_outcome_renders_model_and_response() {
        let outcome = TestOutcome {
            success: true,
            model: Some("claude-3-opus".to_string()),
            base_url: Some("https://api.example.com".to_string()),
            response: Some("Hello!".to_string()),
            error: None,
        };
        let markup = outcome_markup(Language::Zh, &outcome);
        assert!(markup.contains("claude-3-opus"));
        assert!(markup.contains("Hello!"));
        assert!(markup.contains("模型："));
    }

    #[test]
    fn response_text_is_escaped() {
        let outcome = TestOutcome {
            success: true,
            model: None,
            base_url: None,
            response: Some("<b>bold</b>".to_string()),
            error: None,
        };
        let markup = outcome_markup(Language::En, &outcome);
        assert!(markup.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
