//! Upload form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and the DOM/fetch
//! adapters the shared `UploadController` runs on.
//!
//! Responsibilities
//! - Render the form and both result panels once (`view`).
//! - On first render, bind an `UploadController` to the rendered nodes.
//! - Forward form submission and download clicks to that controller.
//!
//! After binding, the panels are driven directly through their DOM nodes by
//! the controller; the component itself never re-renders.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod surface;
mod transport;
mod update;
mod view;

pub use messages::Msg;
pub use state::UploadComponent;

impl Component for UploadComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        UploadComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render && self.controller.is_none() {
            self.controller = self.bind();
            if self.controller.is_none() {
                gloo_console::error!("Upload form is missing elements; controller not bound.");
            }
        }
    }
}
