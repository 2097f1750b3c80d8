//! DOM utilities for the upload form.

use common::config::ClientConfig;
use common::error::TransportError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// Bootstrap utility class that hides an element.
pub const HIDDEN_CLASS: &str = "d-none";

/// Shows or hides `element` by toggling `HIDDEN_CLASS`. Content is untouched.
pub fn set_hidden(element: &Element, hidden: bool) {
    let classes = element.class_list();
    let toggled = if hidden {
        classes.add_1(HIDDEN_CLASS)
    } else {
        classes.remove_1(HIDDEN_CLASS)
    };
    if let Err(err) = toggled {
        gloo_console::error!("Could not toggle panel visibility:", err);
    }
}

/// Id of the optional `<script type="application/json">` holding a
/// `ClientConfig` object.
pub const CONFIG_ELEMENT_ID: &str = "client-config";

/// Reads the page's embedded client configuration, falling back to the
/// same-origin defaults when it is absent or unreadable.
pub fn load_config() -> ClientConfig {
    let embedded = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty());

    match embedded {
        Some(json) => ClientConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, err);
            ClientConfig::default()
        }),
        None => ClientConfig::default(),
    }
}

/// Describes a failed fetch the way the browser's `error.message` does,
/// without the `TypeError:` style name prefix.
pub fn net_error(err: gloo_net::Error) -> TransportError {
    match err {
        gloo_net::Error::JsError(js) => TransportError::new(js.message),
        other => TransportError::new(other.to_string()),
    }
}

/// Turns a thrown JS value into a readable transport error.
pub fn js_error(value: JsValue) -> TransportError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    TransportError::new(message)
}
