mod app;
mod components;
mod context;
mod hooks;
mod pages;
mod services;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
