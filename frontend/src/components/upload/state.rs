//! Component state for the upload form.
//!
//! Holds the `NodeRef`s of every element the controller touches and, once the
//! first render has happened, the controller bound to them.

use std::rc::Rc;

use common::controller::UploadController;
use web_sys::{Element, HtmlButtonElement};
use yew::prelude::*;

use super::helpers::load_config;
use super::surface::DomSurface;
use super::transport::FetchTransport;

pub type Controller = UploadController<DomSurface, FetchTransport>;

pub struct UploadComponent {
    /// The `<input type="file">` the selection is read from on submit.
    pub file_input_ref: NodeRef,
    pub generate_button_ref: NodeRef,
    pub spinner_ref: NodeRef,
    pub results_ref: NodeRef,
    pub api_info_ref: NodeRef,
    pub output_ref: NodeRef,
    pub error_ref: NodeRef,
    pub error_message_ref: NodeRef,

    /// `None` until the first render has produced the nodes above.
    pub controller: Option<Rc<Controller>>,
}

impl UploadComponent {
    pub fn new() -> Self {
        Self {
            file_input_ref: Default::default(),
            generate_button_ref: Default::default(),
            spinner_ref: Default::default(),
            results_ref: Default::default(),
            api_info_ref: Default::default(),
            output_ref: Default::default(),
            error_ref: Default::default(),
            error_message_ref: Default::default(),
            controller: None,
        }
    }

    /// Builds a controller over the rendered nodes. Returns `None` if any of
    /// them is missing or of the wrong element type.
    pub fn bind(&self) -> Option<Rc<Controller>> {
        let surface = DomSurface {
            generate_button: self.generate_button_ref.cast::<HtmlButtonElement>()?,
            spinner: self.spinner_ref.cast::<Element>()?,
            results: self.results_ref.cast::<Element>()?,
            api_info: self.api_info_ref.cast::<Element>()?,
            output: self.output_ref.cast::<Element>()?,
            errors: self.error_ref.cast::<Element>()?,
            error_message: self.error_message_ref.cast::<Element>()?,
        };

        Some(Rc::new(UploadController::new(
            surface,
            FetchTransport,
            load_config(),
        )))
    }
}
