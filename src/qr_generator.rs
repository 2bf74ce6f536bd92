use crate::{
    config::{ErrorCorrection, RenderOptions, QUIET_ZONE},
    form::Color,
};
use qrcodegen::{DataTooLong, QrCode};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub fn encode_payload(payload: &str, ecc: ErrorCorrection) -> Result<QrCode, DataTooLong> {
    QrCode::encode_text(payload, ecc.into())
}

/// Maps symbol modules onto the square canvas.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CanvasLayout {
    /// Modules per side, quiet zone included.
    pub cells: i32,
    /// Offset of the symbol from the canvas edge, in modules.
    pub offset: i32,
    /// Pixels per module.
    pub scale: f64,
}

impl CanvasLayout {
    pub fn new(qr: &QrCode, options: &RenderOptions) -> Self {
        let offset = if options.margin { QUIET_ZONE } else { 0 };
        let cells = qr.size() + 2 * offset;
        Self {
            cells,
            offset,
            scale: f64::from(options.size) / f64::from(cells),
        }
    }

    /// Canvas cell coordinates of every dark module.
    pub fn dark_cells<'a>(&self, qr: &'a QrCode) -> impl Iterator<Item = (i32, i32)> + 'a {
        let offset = self.offset;
        let size = qr.size();
        (0..size)
            .flat_map(move |y| (0..size).map(move |x| (x, y)))
            .filter(move |&(x, y)| qr.get_module(x, y))
            .map(move |(x, y)| (x + offset, y + offset))
    }
}

/// Resizes the canvas and fills it with the background colour.
pub fn clear(
    canvas: &HtmlCanvasElement,
    options: &RenderOptions,
) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas.set_width(options.size);
    canvas.set_height(options.size);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
        .unchecked_into();

    let edge = f64::from(options.size);
    context.set_fill_style(&JsValue::from_str(&options.background));
    context.fill_rect(0.0, 0.0, edge, edge);

    Ok(context)
}

pub fn paint(
    canvas: &HtmlCanvasElement,
    qr: &QrCode,
    color: &Color,
    options: &RenderOptions,
) -> Result<(), JsValue> {
    let context = clear(canvas, options)?;

    let layout = CanvasLayout::new(qr, options);
    context.set_fill_style(&JsValue::from_str(color.as_str()));
    for (x, y) in layout.dark_cells(qr) {
        // round edges outward so neighbouring modules leave no hairline gaps
        let left = (f64::from(x) * layout.scale).floor();
        let top = (f64::from(y) * layout.scale).floor();
        let right = (f64::from(x + 1) * layout.scale).ceil();
        let bottom = (f64::from(y + 1) * layout.scale).ceil();
        context.fill_rect(left, top, right - left, bottom - top);
    }

    Ok(())
}

/// Draws the code for `payload`. A payload too long for any symbol version
/// leaves a blank canvas and yields `false`.
pub fn paint_payload(
    canvas: &HtmlCanvasElement,
    payload: &str,
    color: &Color,
    options: &RenderOptions,
) -> Result<bool, JsValue> {
    match encode_payload(payload, options.ecc) {
        Ok(qr) => {
            paint(canvas, &qr, color, options)?;
            Ok(true)
        }
        Err(_) => {
            clear(canvas, options)?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_adds_quiet_zone() {
        let qr = encode_payload("tel:0812345678", ErrorCorrection::Medium).unwrap();
        let layout = CanvasLayout::new(&qr, &RenderOptions::default());
        assert_eq!(layout.cells, qr.size() + 8);
        assert_eq!(layout.offset, 4);
        assert!((layout.scale * f64::from(layout.cells) - 240.0).abs() < 1e-9);

        let bare = RenderOptions {
            margin: false,
            ..RenderOptions::default()
        };
        let layout = CanvasLayout::new(&qr, &bare);
        assert_eq!(layout.cells, qr.size());
        assert_eq!(layout.offset, 0);
    }

    #[test]
    fn dark_cells_stay_inside_the_quiet_zone() {
        let payload = "WIFI:T:WPA;S:Home;P:secret;;";
        let qr = encode_payload(payload, ErrorCorrection::Medium).unwrap();
        let layout = CanvasLayout::new(&qr, &RenderOptions::default());
        let cells: Vec<(i32, i32)> = layout.dark_cells(&qr).collect();
        assert!(!cells.is_empty());
        for &(x, y) in &cells {
            assert!(x >= 4 && x < layout.cells - 4);
            assert!(y >= 4 && y < layout.cells - 4);
        }
        // top-left finder pattern corner is always dark
        assert!(cells.contains(&(4, 4)));
    }

    #[test]
    fn oversize_payload_is_rejected() {
        let payload = "x".repeat(4000);
        assert!(encode_payload(&payload, ErrorCorrection::Medium).is_err());
    }
}
