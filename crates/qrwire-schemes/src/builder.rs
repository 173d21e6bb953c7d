use crate::error::{Error, Result};
use crate::registry::Scheme;
use crate::{uri, vcard, vevent, wifi};
use qrwire_types::{FieldValues, Payload};

/// Builds the payload for one scheme from captured field values.
///
/// Validation runs before formatting: declared required fields must be
/// non-empty after trimming, then the WIFI password rule applies
/// (required unless security is `nopass`). Date and coordinate checks
/// happen inside the scheme formatters. A returned payload always
/// satisfies its scheme's grammar; there is no partial success.
pub fn build(scheme: Scheme, values: &FieldValues) -> Result<Payload> {
    for spec in scheme.fields() {
        if spec.required && values.is_blank(spec.key) {
            return Err(Error::MissingField { field: spec.key });
        }
    }
    if scheme == Scheme::Wifi && !wifi::is_open_network(values) && values.is_blank("password") {
        return Err(Error::MissingField { field: "password" });
    }

    let text = match scheme {
        Scheme::Bitcoin => uri::bitcoin(values),
        Scheme::Calendar => vevent::format(values)?,
        Scheme::Email => uri::email(values),
        Scheme::Facetime => uri::facetime(values),
        Scheme::Map => uri::map(values)?,
        Scheme::Phone => uri::phone(values),
        Scheme::Skype => uri::skype(values),
        Scheme::Sms => uri::sms(values),
        Scheme::Url => uri::url(values),
        Scheme::Vcard => vcard::format(values),
        Scheme::Wifi => wifi::format(values),
        Scheme::Youtube => uri::youtube(values),
    };
    Ok(Payload::new(text))
}
