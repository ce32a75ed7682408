use crate::app::{App, AppProps};

mod api;
mod app;
mod components;
mod config;
mod logger;

fn main() {
    logger::init(config::log_level());
    log::info!("bookings API at {}", config::api_url());
    yew::Renderer::<App>::with_props(AppProps {
        api_base: config::api_url().into(),
    })
    .render();
}
