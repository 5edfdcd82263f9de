mod api;
mod components;
mod config;
mod filters;
mod models;
mod pages;
mod request_seq;
mod router;
mod utils;

use crate::config::BACKEND_URL;
use crate::router::{switch, Route};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(&format!("Tubio frontend, API: \"{}\"", &*BACKEND_URL).into());
}
