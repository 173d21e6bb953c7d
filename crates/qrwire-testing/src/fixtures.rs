//! Canned field sets and stdin scripts.
//!
//! The field sets feed `CannedCollector` in unit tests; `stdin_script`
//! turns the same pairs into the line-per-prompt input the interactive
//! CLI reads from stdin.

use qrwire_schemes::Scheme;

pub const WIFI_HOME: &[(&str, &str)] = &[
    ("ssid", "Home Net;1"),
    ("security", "WPA2"),
    ("password", "p@ss,1"),
];

pub const WIFI_CAFE_OPEN: &[(&str, &str)] = &[("ssid", "Cafe"), ("security", "nopass")];

pub const VCARD_ANN_SMITH: &[(&str, &str)] = &[
    ("last_name", "Smith, Jr"),
    ("first_name", "Ann"),
    ("title", "Chief; Everything"),
    ("company", "Acme"),
    ("work_email", "ann@acme.test"),
    ("work_address", "1 Main St Suite 200"),
    ("work_phone", "+1 555 0100"),
    ("work_fax", "+1 555 0101"),
    ("work_url", "https://acme.test"),
    ("home_address", "9 Elm Rd"),
    ("home_phone", "+1 555 0199"),
    ("home_email", "ann@home.test"),
];

pub const CALENDAR_LAUNCH_REVIEW: &[(&str, &str)] = &[
    ("title", "Launch review"),
    ("location", "Room 4, floor 2"),
    ("url", "https://cal.example/launch"),
    ("description", "Bring printed agendas"),
    ("start", "20250101 0900"),
    ("end", "20250101 1030"),
];

pub const BITCOIN_TIP_JAR: &[(&str, &str)] = &[
    ("account", "1BoatSLRHtKNngkdXEeobR76b53LETtpyT"),
    ("label", "coffee fund"),
    ("message", "thanks & cheers"),
    ("amount", "0.01"),
];

/// One stdin line per declared field of `scheme`, in prompt order,
/// answering from `pairs` (blank line for keys not in the table).
pub fn stdin_script(scheme: Scheme, pairs: &[(&str, &str)]) -> String {
    let mut script = String::new();
    for spec in scheme.fields() {
        let answer = pairs
            .iter()
            .find(|(key, _)| *key == spec.key)
            .map(|(_, value)| *value)
            .unwrap_or("");
        script.push_str(answer);
        script.push('\n');
    }
    script
}
