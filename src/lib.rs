#![recursion_limit = "512"]

use wasm_bindgen::prelude::*;

mod app;
pub mod config;
pub mod content;
pub mod encoder;
pub mod export;
pub mod form;
pub mod qr_generator;

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    yew::start_app::<app::Main>();

    Ok(())
}

/// Payload for a plain JS object of form values, e.g.
/// `encode_payload("wifi", { ssid: "Home", password: "secret" })`.
#[wasm_bindgen]
pub fn encode_payload(tag: &str, fields: &JsValue) -> String {
    let fields = if fields.is_undefined() || fields.is_null() {
        form::FormFields::default()
    } else {
        match fields.into_serde::<form::FormFields>() {
            Ok(fields) => fields,
            Err(err) => {
                web_sys::console::error_2(
                    &JsValue::from_str("Unreadable form fields:"),
                    &JsValue::from_str(&err.to_string()),
                );
                form::FormFields::default()
            }
        }
    };
    encoder::encode_tag(tag, &fields)
}
