use common::controller::UploadSurface;
use web_sys::{Element, HtmlButtonElement};

use super::helpers::set_hidden;

/// The page elements the controller draws on, handed over after first render.
pub struct DomSurface {
    pub generate_button: HtmlButtonElement,
    pub spinner: Element,
    pub results: Element,
    pub api_info: Element,
    pub output: Element,
    pub errors: Element,
    pub error_message: Element,
}

impl UploadSurface for DomSurface {
    fn set_busy(&self, busy: bool) {
        self.generate_button.set_disabled(busy);
        set_hidden(&self.spinner, !busy);
    }

    fn show_result(&self, summary_markup: &str, output: &str) {
        // Values in the summary are escaped by `summary_markup`.
        self.api_info.set_inner_html(summary_markup);
        self.output.set_text_content(Some(output));
        set_hidden(&self.results, false);
    }

    fn hide_result(&self) {
        set_hidden(&self.results, true);
    }

    fn show_error(&self, message: &str) {
        self.error_message.set_text_content(Some(message));
        set_hidden(&self.errors, false);
    }

    fn hide_error(&self) {
        set_hidden(&self.errors, true);
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(url) {
                gloo_console::error!("Could not navigate to download:", err);
            }
        }
    }
}
