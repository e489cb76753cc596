pub mod app;
pub mod components;
pub mod config;
pub mod events;
pub mod interaction;
pub mod logging;
pub mod math;
pub mod physics_world;
pub mod systems;


#[cfg(target_arch="wasm32")]
mod xr;

pub use app::App;
pub use config::SceneConfig;

#[cfg(target_arch="wasm32")]
use wasm_bindgen::prelude::*;


#[cfg(target_arch="wasm32")]
#[wasm_bindgen(start)]
pub async fn run() {
    crate::xr::run_experience().await
}
