use crate::{encoder, form::FormFields};

/// Kind of payload the form produces.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ContentType {
    Text,
    Url,
    Tel,
    Email,
    Sms,
    Wifi,
    Maps,
    Whatsapp,
    Line,
    Facebook,
    Instagram,
}

impl Default for ContentType {
    fn default() -> Self {
        Self::Text
    }
}

/// One input of the form. Several content types never share a field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Field {
    Text,
    Url,
    Tel,
    Email,
    Sms,
    Ssid,
    Password,
    Latitude,
    Longitude,
    Phone,
    Message,
    LineId,
    FacebookUrl,
    Instagram,
}

impl Field {
    /// Name of the field as it appears in the host page's form object.
    pub fn key(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Ssid => "ssid",
            Self::Password => "password",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Phone => "phone",
            Self::Message => "message",
            Self::LineId => "lineId",
            Self::FacebookUrl => "facebookUrl",
            Self::Instagram => "instagram",
        }
    }
}

pub struct FieldDescriptor {
    pub field: Field,
    pub placeholder: &'static str,
    pub icon: &'static str,
    /// HTML `type` attribute of the input element.
    pub input_type: &'static str,
}

pub struct TypeDescriptor {
    pub tag: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub fields: &'static [FieldDescriptor],
    /// Builds the payload from this type's fields.
    pub encode: fn(&FormFields) -> String,
}

const fn input(field: Field, placeholder: &'static str, icon: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        field,
        placeholder,
        icon,
        input_type: "text",
    }
}

static TEXT: TypeDescriptor = TypeDescriptor {
    tag: "text",
    label: "Text",
    icon: "📝",
    fields: &[input(Field::Text, "Enter your text...", "📝")],
    encode: encoder::text,
};

static URL: TypeDescriptor = TypeDescriptor {
    tag: "url",
    label: "Website",
    icon: "🌐",
    fields: &[input(Field::Url, "www.example.com", "🌐")],
    encode: encoder::url,
};

static TEL: TypeDescriptor = TypeDescriptor {
    tag: "tel",
    label: "Phone number",
    icon: "📞",
    fields: &[input(Field::Tel, "e.g. 0812345678", "📞")],
    encode: encoder::tel,
};

static EMAIL: TypeDescriptor = TypeDescriptor {
    tag: "email",
    label: "Email",
    icon: "✉️",
    fields: &[input(Field::Email, "you@example.com", "✉️")],
    encode: encoder::email,
};

static SMS: TypeDescriptor = TypeDescriptor {
    tag: "sms",
    label: "SMS",
    icon: "💬",
    fields: &[input(Field::Sms, "Recipient number", "💬")],
    encode: encoder::sms,
};

static WIFI: TypeDescriptor = TypeDescriptor {
    tag: "wifi",
    label: "Wi-Fi",
    icon: "📶",
    fields: &[
        input(Field::Ssid, "Network name (SSID)", "📶"),
        FieldDescriptor {
            field: Field::Password,
            placeholder: "Password",
            icon: "🔒",
            input_type: "password",
        },
    ],
    encode: encoder::wifi,
};

static MAPS: TypeDescriptor = TypeDescriptor {
    tag: "maps",
    label: "Location (Google Maps)",
    icon: "📍",
    fields: &[
        input(Field::Latitude, "Latitude", "🗺️"),
        input(Field::Longitude, "Longitude", "📍"),
    ],
    encode: encoder::maps,
};

static WHATSAPP: TypeDescriptor = TypeDescriptor {
    tag: "whatsapp",
    label: "WhatsApp",
    icon: "💬",
    fields: &[
        input(Field::Phone, "WhatsApp number (e.g. 66812345678)", "📱"),
        input(Field::Message, "Prefilled message (optional)", "💬"),
    ],
    encode: encoder::whatsapp,
};

static LINE: TypeDescriptor = TypeDescriptor {
    tag: "line",
    label: "Line",
    icon: "🟢",
    fields: &[input(Field::LineId, "Line ID (without @)", "🟢")],
    encode: encoder::line,
};

static FACEBOOK: TypeDescriptor = TypeDescriptor {
    tag: "facebook",
    label: "Facebook",
    icon: "🔵",
    fields: &[input(Field::FacebookUrl, "Facebook page or profile link", "🔵")],
    encode: encoder::facebook,
};

static INSTAGRAM: TypeDescriptor = TypeDescriptor {
    tag: "instagram",
    label: "Instagram",
    icon: "📷",
    fields: &[input(Field::Instagram, "Instagram username (e.g. yourname)", "📷")],
    encode: encoder::instagram,
};

impl ContentType {
    pub const ALL: [ContentType; 11] = [
        Self::Text,
        Self::Url,
        Self::Tel,
        Self::Email,
        Self::Sms,
        Self::Wifi,
        Self::Maps,
        Self::Whatsapp,
        Self::Line,
        Self::Facebook,
        Self::Instagram,
    ];

    pub fn descriptor(self) -> &'static TypeDescriptor {
        match self {
            Self::Text => &TEXT,
            Self::Url => &URL,
            Self::Tel => &TEL,
            Self::Email => &EMAIL,
            Self::Sms => &SMS,
            Self::Wifi => &WIFI,
            Self::Maps => &MAPS,
            Self::Whatsapp => &WHATSAPP,
            Self::Line => &LINE,
            Self::Facebook => &FACEBOOK,
            Self::Instagram => &INSTAGRAM,
        }
    }

    pub fn tag(self) -> &'static str {
        self.descriptor().tag
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    pub fn fields(self) -> impl Iterator<Item = Field> {
        self.descriptor().fields.iter().map(|input| input.field)
    }
}
