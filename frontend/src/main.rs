use crate::app::App;

mod app;
mod components;
mod logger;
mod modal_sheet;
mod stats_grid;
mod transport;

fn main() {
    logger::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    yew::Renderer::<App>::new().render();
}
