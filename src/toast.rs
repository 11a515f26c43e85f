//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs
//! that are removed after a per-kind lifetime. Error toasts stay up twice as
//! long as success toasts so they can actually be read.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{ERROR_TOAST_MS, SUCCESS_TOAST_MS};

#[derive(Debug, Clone, Copy)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }

    fn lifetime_ms(self) -> u32 {
        match self {
            ToastKind::Error => ERROR_TOAST_MS,
            ToastKind::Success | ToastKind::Info => SUCCESS_TOAST_MS,
        }
    }
}

pub fn success(msg: &str) {
    show(msg, ToastKind::Success);
}

pub fn error(msg: &str) {
    show(msg, ToastKind::Error);
}

pub fn info(msg: &str) {
    show(msg, ToastKind::Info);
}

pub fn show(message: &str, kind: ToastKind) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };

    let root = ensure_root(&document);

    let toast = document.create_element("div").unwrap();
    toast.set_class_name("toast");
    let _ = toast.class_list().add_1(kind.class());
    toast.set_text_content(Some(message));

    // Prepend so newest appears on top.
    let _ = root.prepend_with_node_1(&toast);

    let lifetime = kind.lifetime_ms();
    let toast: HtmlElement = toast.unchecked_into();
    spawn_local(async move {
        TimeoutFuture::new(lifetime).await;
        if let Some(parent) = toast.parent_node() {
            let _ = parent.remove_child(&toast);
        }
    });

    ensure_styles(&document);
}

fn ensure_root(document: &Document) -> Element {
    if let Some(el) = document.get_element_by_id("toast-root") {
        el
    } else {
        let root = document.create_element("div").unwrap();
        root.set_id("toast-root");
        root.set_class_name("toast-root");
        document.body().unwrap().append_child(&root).unwrap();
        root
    }
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id("toast-styles").is_some() {
        return;
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
.toast-error{background:#dc2626}
.toast-info{background:#2563eb}
@keyframes toast-in{to{opacity:1}}
";

    let style = document.create_element("style").unwrap();
    style.set_id("toast-styles");
    style.set_text_content(Some(css));
    if let Ok(Some(head)) = document.query_selector("head") {
        head.append_child(&style).unwrap();
    } else {
        document.body().unwrap().append_child(&style).unwrap();
    }
}
