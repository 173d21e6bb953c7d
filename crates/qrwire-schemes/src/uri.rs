//! Single-line URI payloads.
//!
//! Values substitute as captured. The two exceptions: bitcoin and email
//! query parameters are percent-encoded, and map coordinates are
//! validated as numbers and substituted trimmed.

use urlencoding::encode;

use crate::error::{Error, Result};
use qrwire_types::{FieldKind, FieldSpec, FieldValues};

pub const BITCOIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("account", "Account", true, FieldKind::Text),
    FieldSpec::new("label", "Label", false, FieldKind::Text),
    FieldSpec::new("message", "Message", false, FieldKind::Text),
    FieldSpec::new("amount", "Amount", false, FieldKind::Text),
];

pub const EMAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("to", "To", true, FieldKind::Text),
    FieldSpec::new("subject", "Subject", false, FieldKind::Text),
    FieldSpec::new("body", "Body", false, FieldKind::Text),
];

pub const FACETIME_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("phone", "Phone", true, FieldKind::Phone)];

pub const MAP_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("lat", "Latitude", true, FieldKind::Text),
    FieldSpec::new("lon", "Longitude", true, FieldKind::Text),
];

pub const PHONE_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("phone", "Phone", true, FieldKind::Phone)];

pub const SKYPE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("userid", "User ID", true, FieldKind::Text),
    FieldSpec::new("title", "Title", false, FieldKind::Text),
];

pub const SMS_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("phone", "Phone", true, FieldKind::Phone),
    FieldSpec::new("message", "Message", false, FieldKind::Text),
];

pub const URL_FIELDS: &[FieldSpec] = &[FieldSpec::new("url", "URL", true, FieldKind::Text)];

pub const YOUTUBE_FIELDS: &[FieldSpec] = &[FieldSpec::new("url", "URL", true, FieldKind::Text)];

/// Optional query parameters are always present in the template, empty
/// when blank.
pub fn bitcoin(values: &FieldValues) -> String {
    format!(
        "bitcoin:{}?label={}&message={}&amount={}",
        values.raw("account"),
        encode(values.raw("label")),
        encode(values.raw("message")),
        encode(values.raw("amount"))
    )
}

pub fn email(values: &FieldValues) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        values.raw("to"),
        encode(values.raw("subject")),
        encode(values.raw("body"))
    )
}

pub fn facetime(values: &FieldValues) -> String {
    format!("FACETIME:{}", values.raw("phone"))
}

/// Fails with [`Error::InvalidCoordinate`] unless both coordinates
/// parse as finite numbers. No range check: out-of-range but numeric
/// values pass through unchanged.
pub fn map(values: &FieldValues) -> Result<String> {
    let lat = coordinate(values, "lat")?;
    let lon = coordinate(values, "lon")?;
    Ok(format!("geo:{lat},{lon}"))
}

fn coordinate<'a>(values: &'a FieldValues, field: &'static str) -> Result<&'a str> {
    let text = values.trimmed(field);
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(text),
        _ => Err(Error::InvalidCoordinate {
            field,
            value: text.to_string(),
        }),
    }
}

pub fn phone(values: &FieldValues) -> String {
    format!("TEL:{}", values.raw("phone"))
}

pub fn skype(values: &FieldValues) -> String {
    format!(
        "skype:{}?call&video=true;Title:{};",
        values.raw("userid"),
        values.raw("title")
    )
}

pub fn sms(values: &FieldValues) -> String {
    format!("SMSTO:{}:{}", values.raw("phone"), values.raw("message"))
}

pub fn url(values: &FieldValues) -> String {
    values.raw("url").to_string()
}

pub fn youtube(values: &FieldValues) -> String {
    format!("youtube://{}", values.raw("url"))
}
