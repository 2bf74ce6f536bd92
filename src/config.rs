use qrcodegen::QrCodeEcc;

/// Quiet zone width in modules when the margin is enabled.
pub const QUIET_ZONE: i32 = 4;

pub const EXPORT_FILENAME: &str = "qr-code.png";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorCorrection {
    Low,
    Medium,
    Quartile,
    High,
}

impl From<ErrorCorrection> for QrCodeEcc {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => QrCodeEcc::Low,
            ErrorCorrection::Medium => QrCodeEcc::Medium,
            ErrorCorrection::Quartile => QrCodeEcc::Quartile,
            ErrorCorrection::High => QrCodeEcc::High,
        }
    }
}

/// How the code is drawn on the page.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RenderOptions {
    /// Edge length of the canvas in CSS pixels.
    pub size: u32,
    pub ecc: ErrorCorrection,
    pub margin: bool,
    pub background: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 240,
            ecc: ErrorCorrection::Medium,
            margin: true,
            background: "#FFFFFF".to_owned(),
        }
    }
}
