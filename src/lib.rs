mod app;
mod comments_panel;
mod design_canvas;
mod fixtures;
mod navigation;
mod pages;
mod project_card;
mod project_list;
mod project_page;
mod team_panel;
mod tools_panel;
mod types;
mod utils;
mod versions_panel;
mod viewport;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting designflow");
    yew::Renderer::<App>::new().render();
}
