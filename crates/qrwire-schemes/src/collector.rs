use anyhow::Result;

use crate::registry::Scheme;
use qrwire_types::{FieldSpec, FieldValues};

/// Supplies raw text for one field at a time.
///
/// Implementations decide where the text comes from: a terminal prompt,
/// a form, or a canned table in tests. Returned text is treated as
/// untrusted and unescaped. I/O failures surface as errors, never as
/// silently-empty values; an exhausted input source is not a failure
/// and reads as a blank answer.
pub trait FieldCollector {
    fn collect(&mut self, spec: &FieldSpec) -> Result<String>;
}

/// Asks the collector for every declared field of `scheme`, first to
/// last, and returns the captured values.
///
/// Collection is unconditional: optional and conditionally-required
/// fields are collected like any other, so the builder always validates
/// a complete value set.
pub fn gather_fields(scheme: Scheme, collector: &mut dyn FieldCollector) -> Result<FieldValues> {
    let mut values = FieldValues::new();
    for spec in scheme.fields() {
        let text = collector.collect(spec)?;
        values.set(spec.key, text);
    }
    Ok(values)
}
