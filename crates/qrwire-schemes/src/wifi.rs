//! WIFI network join strings.

use crate::escape::wifi_value;
use qrwire_types::{FieldKind, FieldSpec, FieldValues};

pub const SECURITY_OPTIONS: &[&str] = &["WEP", "WPA", "WPA2", "nopass"];

/// `password` is declared optional here; the builder requires it for
/// every security mode except `nopass`.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("ssid", "SSID", true, FieldKind::Text),
    FieldSpec::new(
        "security",
        "Security",
        true,
        FieldKind::Choice {
            options: SECURITY_OPTIONS,
        },
    ),
    FieldSpec::new("password", "Password", false, FieldKind::Text),
];

/// True when the security mode is `nopass` in any casing.
pub fn is_open_network(values: &FieldValues) -> bool {
    values.trimmed("security").eq_ignore_ascii_case("nopass")
}

/// Open networks omit the `P:` segment entirely rather than emitting a
/// blank password.
pub fn format(values: &FieldValues) -> String {
    let ssid = wifi_value(values.raw("ssid"));
    let security = wifi_value(values.raw("security"));
    if is_open_network(values) {
        format!("WIFI:S:{ssid};T:{security};;")
    } else {
        let password = wifi_value(values.raw("password"));
        format!("WIFI:S:{ssid};T:{security};P:{password};;")
    }
}
