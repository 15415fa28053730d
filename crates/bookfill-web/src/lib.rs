#[macro_use]
extern crate log;

mod autofill;
mod config;
mod dom;
mod search;

pub use config::ElementIds;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    dom::on_content_loaded(|| {
        let ids = ElementIds::default();

        if let Err(e) = autofill::install(&ids) {
            error!("ISBN autofill not installed: {e}");
        }
        if let Err(e) = search::scroll_to_results(&ids) {
            error!("Search scroll skipped: {e}");
        }
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))
}
