//! vCard 3.0 contact blocks.

use crate::escape::vcard_text;
use qrwire_types::{FieldKind, FieldSpec, FieldValues};

/// Every field is optional; a blank value renders as an empty property.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("last_name", "Last Name", false, FieldKind::Text),
    FieldSpec::new("first_name", "First Name", false, FieldKind::Text),
    FieldSpec::new("title", "Title", false, FieldKind::Text),
    FieldSpec::new("company", "Company", false, FieldKind::Text),
    FieldSpec::new("work_email", "Work Email", false, FieldKind::Text),
    FieldSpec::new("work_address", "Work Address", false, FieldKind::Text),
    FieldSpec::new("work_phone", "Work Phone", false, FieldKind::Phone),
    FieldSpec::new("work_fax", "Work Fax", false, FieldKind::Phone),
    FieldSpec::new("work_url", "Work URL", false, FieldKind::Text),
    FieldSpec::new("home_address", "Home Address", false, FieldKind::Text),
    FieldSpec::new("home_phone", "Home Phone", false, FieldKind::Phone),
    FieldSpec::new("home_email", "Home Email", false, FieldKind::Text),
];

/// Renders the vCard block with LF line endings and no surrounding
/// blank lines. Property order is fixed and differs from collection
/// order (URL;TYPE=WORK precedes the work phone lines).
pub fn format(values: &FieldValues) -> String {
    let full_name = [values.trimmed("first_name"), values.trimmed("last_name")]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| vcard_text(part))
        .collect::<Vec<_>>()
        .join(" ");

    let lines = [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!(
            "N:{};{}",
            vcard_text(values.raw("last_name")),
            vcard_text(values.raw("first_name"))
        ),
        format!("FN:{}", full_name),
        format!("TITLE:{}", vcard_text(values.raw("title"))),
        format!("ORG:{}", vcard_text(values.raw("company"))),
        format!("EMAIL;TYPE=WORK:{}", vcard_text(values.raw("work_email"))),
        format!("URL;TYPE=WORK:{}", vcard_text(values.raw("work_url"))),
        format!(
            "TEL;TYPE=WORK,VOICE:{}",
            vcard_text(values.raw("work_phone"))
        ),
        format!("ADR;TYPE=WORK:{}", vcard_text(values.raw("work_address"))),
        format!("FAX;TYPE=WORK:{}", vcard_text(values.raw("work_fax"))),
        format!("EMAIL;TYPE=HOME:{}", vcard_text(values.raw("home_email"))),
        format!(
            "TEL;TYPE=HOME,VOICE:{}",
            vcard_text(values.raw("home_phone"))
        ),
        format!("ADR;TYPE=HOME:{}", vcard_text(values.raw("home_address"))),
        "END:VCARD".to_string(),
    ];
    lines.join("\n")
}
