//! Canned field collection for tests.

use anyhow::Result;
use std::collections::HashMap;

use qrwire_schemes::FieldCollector;
use qrwire_types::FieldSpec;

/// A `FieldCollector` that answers from a fixed key to value table and
/// records which fields it was asked for, in order.
///
/// Keys absent from the table answer with an empty string, the same as
/// a user hitting enter at a prompt.
pub struct CannedCollector {
    answers: HashMap<String, String>,
    asked: Vec<&'static str>,
}

impl CannedCollector {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        let answers = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self {
            answers,
            asked: Vec::new(),
        }
    }

    /// Field keys collected so far, in collection order.
    pub fn asked(&self) -> &[&'static str] {
        &self.asked
    }
}

impl FieldCollector for CannedCollector {
    fn collect(&mut self, spec: &FieldSpec) -> Result<String> {
        self.asked.push(spec.key);
        Ok(self.answers.get(spec.key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrwire_schemes::{Scheme, build, gather_fields};

    #[test]
    fn test_gather_and_build_end_to_end() {
        let mut collector = CannedCollector::new(crate::fixtures::WIFI_HOME);
        let values = gather_fields(Scheme::Wifi, &mut collector).unwrap();
        let payload = build(Scheme::Wifi, &values).unwrap();

        assert_eq!(collector.asked(), ["ssid", "security", "password"]);
        assert_eq!(payload.as_str(), "WIFI:S:Home Net\\;1;T:WPA2;P:p@ss\\,1;;");
    }

    #[test]
    fn test_unanswered_fields_read_blank() {
        let mut collector = CannedCollector::new(&[("url", "https://example.com")]);
        let values = gather_fields(Scheme::Url, &mut collector).unwrap();
        assert_eq!(values.raw("url"), "https://example.com");

        let mut collector = CannedCollector::new(&[]);
        let values = gather_fields(Scheme::Vcard, &mut collector).unwrap();
        assert!(values.is_blank("last_name"));
        assert!(build(Scheme::Vcard, &values).is_ok());
    }

    #[test]
    fn test_collection_order_matches_declared_order() {
        for scheme in Scheme::ALL {
            let mut collector = CannedCollector::new(&[]);
            gather_fields(scheme, &mut collector).unwrap();
            let declared: Vec<&str> = scheme.fields().iter().map(|f| f.key).collect();
            assert_eq!(collector.asked(), declared.as_slice(), "{}", scheme.name());
        }
    }
}
