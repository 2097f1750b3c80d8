//! Update function for the upload form.
//!
//! Both messages only hand work to the bound controller, which draws on the
//! DOM itself, so `update` never asks for a re-render.

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UploadComponent;
use super::transport::SelectedFile;

pub fn update(component: &mut UploadComponent, _ctx: &Context<UploadComponent>, msg: Msg) -> bool {
    let Some(controller) = component.controller.clone() else {
        gloo_console::warn!("Upload form used before it was bound.");
        return false;
    };

    match msg {
        Msg::Submit => {
            let file = component
                .file_input_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(SelectedFile);

            spawn_local(async move {
                controller.submit(file).await;
            });
            false
        }
        Msg::Download => {
            controller.download();
            false
        }
    }
}
