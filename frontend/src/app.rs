use crate::components::upload::UploadComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container py-4">
                <h1 class="mb-4">{"API Test Case Generator"}</h1>
                <UploadComponent />
            </div>
        }
    }
}
