//! View rendering for the upload form.
//!
//! Rendered once. The spinner and both panels start hidden; from then on their
//! visibility and content belong to the controller.

use common::config::ClientConfig;
use yew::prelude::*;

use super::helpers::HIDDEN_CLASS;
use super::messages::Msg;
use super::state::UploadComponent;

pub fn view(component: &UploadComponent, ctx: &Context<UploadComponent>) -> Html {
    let link = ctx.link();

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_download = link.callback(|_: MouseEvent| Msg::Download);

    html! {
        <div class="upload-root">
            <form class="card card-body mb-4" onsubmit={on_submit}>
                <label for="fileInput" class="form-label">{"API specification (JSON or YAML)"}</label>
                <input
                    id="fileInput"
                    type="file"
                    class="form-control mb-3"
                    accept={ClientConfig::accept_attribute()}
                    ref={component.file_input_ref.clone()}
                />
                <button type="submit" class="btn btn-primary" ref={component.generate_button_ref.clone()}>
                    <span
                        class={classes!("spinner-border", "spinner-border-sm", "me-2", HIDDEN_CLASS)}
                        role="status"
                        ref={component.spinner_ref.clone()}
                    ></span>
                    {"Generate Test Cases"}
                </button>
            </form>

            <div class={classes!("card", HIDDEN_CLASS)} ref={component.results_ref.clone()}>
                <div class="card-header d-flex justify-content-between align-items-center">
                    <span>{"Generated Test Cases"}</span>
                    <button type="button" class="btn btn-success btn-sm" onclick={on_download}>
                        {"Download"}
                    </button>
                </div>
                <div class="card-body">
                    <div class="alert alert-info" ref={component.api_info_ref.clone()}></div>
                    <pre class="bg-light p-3"><code ref={component.output_ref.clone()}></code></pre>
                </div>
            </div>

            <div class={classes!("alert", "alert-danger", HIDDEN_CLASS)} ref={component.error_ref.clone()}>
                <strong>{"Error: "}</strong>
                <span ref={component.error_message_ref.clone()}></span>
            </div>
        </div>
    }
}
