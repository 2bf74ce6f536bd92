use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

/// Offers the canvas contents as a PNG download. Does nothing when no code is
/// on the page.
pub fn download_png(canvas: Option<HtmlCanvasElement>, filename: &str) -> Result<(), JsValue> {
    let canvas = match canvas {
        Some(canvas) => canvas,
        None => return Ok(()),
    };

    let data_url = canvas.to_data_url_with_type("image/png")?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document to download from"))?;
    let a: HtmlAnchorElement = document.create_element("A")?.unchecked_into();
    a.set_href(&data_url);
    a.set_download(filename);
    a.click();

    Ok(())
}
