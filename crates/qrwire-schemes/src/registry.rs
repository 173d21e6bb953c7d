use crate::error::{Error, Result};
use crate::{uri, vcard, vevent, wifi};
use qrwire_types::FieldSpec;

/// One supported category of actionable QR content.
///
/// Dispatch over schemes is exhaustive, and an unrecognized name is an
/// explicit error rather than a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Bitcoin,
    Calendar,
    Email,
    Facetime,
    Map,
    Phone,
    Skype,
    Sms,
    Url,
    Vcard,
    Wifi,
    Youtube,
}

impl Scheme {
    /// Every supported scheme, in listing order.
    pub const ALL: [Scheme; 12] = [
        Scheme::Bitcoin,
        Scheme::Calendar,
        Scheme::Email,
        Scheme::Facetime,
        Scheme::Map,
        Scheme::Phone,
        Scheme::Skype,
        Scheme::Sms,
        Scheme::Url,
        Scheme::Vcard,
        Scheme::Wifi,
        Scheme::Youtube,
    ];

    /// Resolve a scheme by name, case-insensitively.
    pub fn lookup(name: &str) -> Result<Scheme> {
        let wanted = name.trim().to_ascii_lowercase();
        Scheme::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name() == wanted)
            .ok_or_else(|| Error::UnknownScheme(name.trim().to_string()))
    }

    /// Canonical lowercase name, as accepted by [`Scheme::lookup`].
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Bitcoin => "bitcoin",
            Scheme::Calendar => "calendar",
            Scheme::Email => "email",
            Scheme::Facetime => "facetime",
            Scheme::Map => "map",
            Scheme::Phone => "phone",
            Scheme::Skype => "skype",
            Scheme::Sms => "sms",
            Scheme::Url => "url",
            Scheme::Vcard => "vcard",
            Scheme::Wifi => "wifi",
            Scheme::Youtube => "youtube",
        }
    }

    /// Short human description for catalogue listings.
    pub fn label(self) -> &'static str {
        match self {
            Scheme::Bitcoin => "Bitcoin payment request",
            Scheme::Calendar => "Calendar event (VEVENT)",
            Scheme::Email => "Email message",
            Scheme::Facetime => "FaceTime call",
            Scheme::Map => "Map location",
            Scheme::Phone => "Phone call",
            Scheme::Skype => "Skype video call",
            Scheme::Sms => "SMS message",
            Scheme::Url => "Website link",
            Scheme::Vcard => "Contact card (vCard 3.0)",
            Scheme::Wifi => "WiFi network",
            Scheme::Youtube => "YouTube video",
        }
    }

    /// Declared fields, in collection order.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Scheme::Bitcoin => uri::BITCOIN_FIELDS,
            Scheme::Calendar => vevent::FIELDS,
            Scheme::Email => uri::EMAIL_FIELDS,
            Scheme::Facetime => uri::FACETIME_FIELDS,
            Scheme::Map => uri::MAP_FIELDS,
            Scheme::Phone => uri::PHONE_FIELDS,
            Scheme::Skype => uri::SKYPE_FIELDS,
            Scheme::Sms => uri::SMS_FIELDS,
            Scheme::Url => uri::URL_FIELDS,
            Scheme::Vcard => vcard::FIELDS,
            Scheme::Wifi => wifi::FIELDS,
            Scheme::Youtube => uri::YOUTUBE_FIELDS,
        }
    }
}
