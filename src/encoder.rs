//! Turns the form into the string stored in the QR symbol.
//!
//! Every rule is a plain template over the raw field values. Nothing is
//! validated or escaped except the WhatsApp message, which ends up in a URL
//! query and is percent-encoded the way `encodeURIComponent` does it.

use crate::{
    content::{ContentType, Field},
    form::FormFields,
};
use std::borrow::Cow;

/// `urlencoding` escapes these too, `encodeURIComponent` leaves them alone.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

pub fn encode(content_type: ContentType, fields: &FormFields) -> String {
    (content_type.descriptor().encode)(fields)
}

/// Encodes for a type given by its tag. Unknown tags produce an empty payload.
pub fn encode_tag(tag: &str, fields: &FormFields) -> String {
    ContentType::from_tag(tag)
        .map(|content_type| encode(content_type, fields))
        .unwrap_or_default()
}

pub(crate) fn text(fields: &FormFields) -> String {
    fields.raw(Field::Text).to_owned()
}

pub(crate) fn url(fields: &FormFields) -> String {
    match fields.get(Field::Url) {
        Some(url) if url.starts_with("http") => url.to_owned(),
        Some(url) => format!("https://{}", url),
        None => String::new(),
    }
}

pub(crate) fn tel(fields: &FormFields) -> String {
    prefixed("tel:", fields.get(Field::Tel))
}

pub(crate) fn email(fields: &FormFields) -> String {
    prefixed("mailto:", fields.get(Field::Email))
}

pub(crate) fn sms(fields: &FormFields) -> String {
    prefixed("sms:", fields.get(Field::Sms))
}

pub(crate) fn wifi(fields: &FormFields) -> String {
    format!(
        "WIFI:T:WPA;S:{};P:{};;",
        fields.raw(Field::Ssid),
        fields.raw(Field::Password)
    )
}

pub(crate) fn maps(fields: &FormFields) -> String {
    format!(
        "https://www.google.com/maps?q={},{}",
        fields.raw(Field::Latitude),
        fields.raw(Field::Longitude)
    )
}

pub(crate) fn whatsapp(fields: &FormFields) -> String {
    format!(
        "https://wa.me/{}?text={}",
        fields.raw(Field::Phone),
        encode_uri_component(fields.raw(Field::Message))
    )
}

pub(crate) fn line(fields: &FormFields) -> String {
    format!("https://line.me/ti/p/{}", fields.raw(Field::LineId))
}

pub(crate) fn facebook(fields: &FormFields) -> String {
    fields.raw(Field::FacebookUrl).to_owned()
}

pub(crate) fn instagram(fields: &FormFields) -> String {
    format!("https://instagram.com/{}", fields.raw(Field::Instagram))
}

fn prefixed(scheme: &str, value: Option<&str>) -> String {
    value
        .map(|value| format!("{}{}", scheme, value))
        .unwrap_or_default()
}

fn encode_uri_component(value: &str) -> Cow<'_, str> {
    let encoded = urlencoding::encode(value);
    if !encoded.contains('%') {
        return encoded;
    }
    let mut encoded = encoded.into_owned();
    // every '%' starts an escape, so these can only match whole escapes
    for (escape, mark) in URI_COMPONENT_MARKS.iter() {
        if encoded.contains(escape) {
            encoded = encoded.replace(escape, mark);
        }
    }
    Cow::Owned(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FormFields {
        FormFields::default()
    }

    #[test]
    fn text_is_verbatim() {
        assert_eq!(encode(ContentType::Text, &fields().with(Field::Text, "héllo ;")), "héllo ;");
        assert_eq!(encode(ContentType::Text, &fields()), "");
    }

    #[test]
    fn url_gets_https_unless_it_has_a_scheme() {
        assert_eq!(
            encode(ContentType::Url, &fields().with(Field::Url, "example.com")),
            "https://example.com"
        );
        assert_eq!(
            encode(ContentType::Url, &fields().with(Field::Url, "http://x.com")),
            "http://x.com"
        );
        assert_eq!(
            encode(ContentType::Url, &fields().with(Field::Url, "https://x.com")),
            "https://x.com"
        );
        // anything starting with "http" counts
        assert_eq!(
            encode(ContentType::Url, &fields().with(Field::Url, "httpbin.org")),
            "httpbin.org"
        );
        assert_eq!(encode(ContentType::Url, &fields()), "");
        assert_eq!(encode(ContentType::Url, &fields().with(Field::Url, "")), "");
    }

    #[test]
    fn scheme_prefixes() {
        assert_eq!(
            encode(ContentType::Tel, &fields().with(Field::Tel, "0812345678")),
            "tel:0812345678"
        );
        assert_eq!(encode(ContentType::Tel, &fields()), "");
        assert_eq!(
            encode(ContentType::Email, &fields().with(Field::Email, "you@example.com")),
            "mailto:you@example.com"
        );
        assert_eq!(encode(ContentType::Email, &fields()), "");
        assert_eq!(
            encode(ContentType::Sms, &fields().with(Field::Sms, "+66 81")),
            "sms:+66 81"
        );
        assert_eq!(encode(ContentType::Sms, &fields()), "");
    }

    #[test]
    fn wifi_always_has_the_full_template() {
        let home = fields()
            .with(Field::Ssid, "Home")
            .with(Field::Password, "secret");
        assert_eq!(encode(ContentType::Wifi, &home), "WIFI:T:WPA;S:Home;P:secret;;");
        assert_eq!(encode(ContentType::Wifi, &fields()), "WIFI:T:WPA;S:;P:;;");
        // no escaping of reserved characters
        let odd = fields().with(Field::Ssid, "a;b").with(Field::Password, "c,d");
        assert_eq!(encode(ContentType::Wifi, &odd), "WIFI:T:WPA;S:a;b;P:c,d;;");
    }

    #[test]
    fn maps_substitutes_raw_coordinates() {
        let spot = fields()
            .with(Field::Latitude, "13.7563")
            .with(Field::Longitude, "100.5018");
        assert_eq!(
            encode(ContentType::Maps, &spot),
            "https://www.google.com/maps?q=13.7563,100.5018"
        );
        assert_eq!(
            encode(ContentType::Maps, &fields().with(Field::Latitude, "not a number")),
            "https://www.google.com/maps?q=not a number,"
        );
    }

    #[test]
    fn whatsapp_encodes_only_the_message() {
        let chat = fields()
            .with(Field::Phone, "66812345678")
            .with(Field::Message, "hi there");
        assert_eq!(
            encode(ContentType::Whatsapp, &chat),
            "https://wa.me/66812345678?text=hi%20there"
        );
        assert_eq!(
            encode(ContentType::Whatsapp, &fields().with(Field::Phone, "+1 555")),
            "https://wa.me/+1 555?text="
        );
    }

    #[test]
    fn message_encoding_matches_uri_component_rules() {
        assert_eq!(encode_uri_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
        assert_eq!(encode_uri_component("a&b=c?d/e#f"), "a%26b%3Dc%3Fd%2Fe%23f");
        assert_eq!(encode_uri_component("100% (sure)!"), "100%25%20(sure)!");
        assert_eq!(encode_uri_component("%21"), "%2521");
        assert_eq!(encode_uri_component("สวัสดี"), "%E0%B8%AA%E0%B8%A7%E0%B8%B1%E0%B8%AA%E0%B8%94%E0%B8%B5");
    }

    #[test]
    fn social_links() {
        assert_eq!(
            encode(ContentType::Line, &fields().with(Field::LineId, "myline")),
            "https://line.me/ti/p/myline"
        );
        assert_eq!(
            encode(
                ContentType::Facebook,
                &fields().with(Field::FacebookUrl, "facebook.com/page")
            ),
            "facebook.com/page"
        );
        assert_eq!(encode(ContentType::Facebook, &fields()), "");
        assert_eq!(
            encode(ContentType::Instagram, &fields().with(Field::Instagram, "yourname")),
            "https://instagram.com/yourname"
        );
    }

    #[test]
    fn unknown_tag_is_empty() {
        let everything = fields()
            .with(Field::Text, "x")
            .with(Field::Url, "y")
            .with(Field::Ssid, "z");
        assert_eq!(encode_tag("bogus-type", &everything), "");
        assert_eq!(encode_tag("", &everything), "");
        assert_eq!(encode_tag("text", &everything), "x");
    }

    #[test]
    fn only_the_selected_type_is_read() {
        let stale = fields()
            .with(Field::Text, "left over")
            .with(Field::Tel, "0812345678");
        assert_eq!(encode(ContentType::Tel, &stale), "tel:0812345678");
        assert_eq!(encode(ContentType::Email, &stale), "");
    }

    #[test]
    fn table_rule_drives_encoding() {
        let home = fields().with(Field::Ssid, "Home");
        let rule = ContentType::Wifi.descriptor().encode;
        assert_eq!(rule(&home), encode(ContentType::Wifi, &home));
        assert_eq!(encode_tag("wifi", &home), "WIFI:T:WPA;S:Home;P:;;");
    }

    #[test]
    fn encoding_is_repeatable() {
        let chat = fields()
            .with(Field::Phone, "1")
            .with(Field::Message, "a b");
        for content_type in ContentType::ALL.iter() {
            assert_eq!(encode(*content_type, &chat), encode(*content_type, &chat));
        }
    }
}
