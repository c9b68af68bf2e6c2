mod api;
mod components;
mod config;
mod error;
mod model;
mod poller;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
