use crate::{
    content::{ContentType, Field},
    encoder,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "#4F46E5";

pub const PRESET_COLORS: [&str; 6] = [
    DEFAULT_COLOR,
    "#EC4899",
    "#10B981",
    "#F59E0B",
    "#EF4444",
    "#8B5CF6",
];

/// Every input the form can show. Values of fields hidden by the current
/// content type are kept but never read.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub text: Option<String>,
    pub url: Option<String>,
    pub tel: Option<String>,
    pub email: Option<String>,
    pub sms: Option<String>,
    pub ssid: Option<String>,
    pub password: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub line_id: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram: Option<String>,
}

impl FormFields {
    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Text => &self.text,
            Field::Url => &self.url,
            Field::Tel => &self.tel,
            Field::Email => &self.email,
            Field::Sms => &self.sms,
            Field::Ssid => &self.ssid,
            Field::Password => &self.password,
            Field::Latitude => &self.latitude,
            Field::Longitude => &self.longitude,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
            Field::LineId => &self.line_id,
            Field::FacebookUrl => &self.facebook_url,
            Field::Instagram => &self.instagram,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Text => &mut self.text,
            Field::Url => &mut self.url,
            Field::Tel => &mut self.tel,
            Field::Email => &mut self.email,
            Field::Sms => &mut self.sms,
            Field::Ssid => &mut self.ssid,
            Field::Password => &mut self.password,
            Field::Latitude => &mut self.latitude,
            Field::Longitude => &mut self.longitude,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
            Field::LineId => &mut self.line_id,
            Field::FacebookUrl => &mut self.facebook_url,
            Field::Instagram => &mut self.instagram,
        }
    }

    /// The field's value, if it holds any text. A blank input counts as absent.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref().filter(|value| !value.is_empty())
    }

    /// Like [`get`](Self::get), but absent values read as `""`.
    pub fn raw(&self, field: Field) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.slot_mut(field) = Some(value);
    }

    pub fn with(mut self, field: Field, value: &str) -> Self {
        self.set(field, value.to_owned());
        self
    }
}

/// Foreground colour of the rendered code, as a CSS hex string.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn presets() -> impl Iterator<Item = Color> {
        PRESET_COLORS.iter().map(|preset| Color::new(*preset))
    }

    /// Whether this colour is the given preset swatch. Picker values come back
    /// lowercase, so the comparison ignores case.
    pub fn is_preset(&self, preset: &str) -> bool {
        self.0.eq_ignore_ascii_case(preset)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

/// What the preview area shows.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CodeDisplay<'a> {
    NoCodeDisplayed,
    CodeDisplayed { payload: &'a str, color: &'a Color },
}

/// Everything the page remembers between events. Updates return a new state.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FormState {
    pub content_type: ContentType,
    pub fields: FormFields,
    pub color: Color,
    pub payload: String,
}

impl FormState {
    /// Switches the visible inputs. Entered values and the current payload stay.
    pub fn with_type(self, content_type: ContentType) -> Self {
        Self {
            content_type,
            ..self
        }
    }

    pub fn with_field(mut self, field: Field, value: String) -> Self {
        self.fields.set(field, value);
        self
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Re-encodes the payload from the current type and field values.
    pub fn submitted(self) -> Self {
        let payload = encoder::encode(self.content_type, &self.fields);
        Self { payload, ..self }
    }

    pub fn display(&self) -> CodeDisplay<'_> {
        if self.payload.is_empty() {
            CodeDisplay::NoCodeDisplayed
        } else {
            CodeDisplay::CodeDisplayed {
                payload: &self.payload,
                color: &self.color,
            }
        }
    }
}
