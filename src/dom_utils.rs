//! dom_utils.rs – thin helper layer for repetitive DOM operations, plus the
//! busy-scope guard wrapped around every gateway call.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// Make the element visible by toggling CSS classes.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

/// Fetch an `<input>` element by id and cast it. Returns `None` when the
/// element is missing or of a different type.
pub fn html_input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
}

/// Fetch a `<textarea>` element by id and cast it.
pub fn html_textarea(document: &Document, id: &str) -> Option<HtmlTextAreaElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlTextAreaElement>().ok())
}

/// Escape text that ends up inside an `innerHTML` fragment.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Busy scoping
// ---------------------------------------------------------------------------

thread_local! {
    static PAGE_BUSY_DEPTH: Cell<u32> = Cell::new(0);
}

/// Where one gateway call shows its in-flight indicator.
pub enum BusyTarget {
    /// Whole-page indicator; overlapping refreshes compose via a counter.
    Page,
    /// Disable the invoking control for the call's duration. Doubles as the
    /// duplicate-submission guard.
    Control(HtmlElement),
    /// No shared indicator - the caller renders its own pending state.
    None,
}

/// RAII guard acquired before a request is issued and released on both the
/// success and failure paths when dropped.
pub struct BusyScope {
    restore: Restore,
}

enum Restore {
    Page,
    Control(HtmlElement),
    None,
}

impl BusyScope {
    pub fn acquire(target: BusyTarget) -> Self {
        let restore = match target {
            BusyTarget::Page => {
                PAGE_BUSY_DEPTH.with(|depth| {
                    let next = depth.get() + 1;
                    depth.set(next);
                    if next == 1 {
                        with_body(|body| {
                            let _ = body.class_list().add_1("app-busy");
                        });
                    }
                });
                Restore::Page
            }
            BusyTarget::Control(el) => {
                if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
                    button.set_disabled(true);
                }
                let _ = el.class_list().add_1("is-busy");
                Restore::Control(el)
            }
            BusyTarget::None => Restore::None,
        };
        BusyScope { restore }
    }
}

impl Drop for BusyScope {
    fn drop(&mut self) {
        match &self.restore {
            Restore::Page => PAGE_BUSY_DEPTH.with(|depth| {
                let next = depth.get().saturating_sub(1);
                depth.set(next);
                if next == 0 {
                    with_body(|body| {
                        let _ = body.class_list().remove_1("app-busy");
                    });
                }
            }),
            Restore::Control(el) => {
                if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
                    button.set_disabled(false);
                }
                let _ = el.class_list().remove_1("is-busy");
            }
            Restore::None => {}
        }
    }
}

fn with_body(f: impl FnOnce(&HtmlElement)) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        f(&body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
