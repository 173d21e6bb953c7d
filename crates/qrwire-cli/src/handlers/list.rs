use anyhow::Result;
use serde::Serialize;

use crate::types::OutputFormat;
use qrwire_schemes::Scheme;
use qrwire_types::FieldSpec;

#[derive(Serialize)]
struct SchemeRow {
    name: &'static str,
    label: &'static str,
    required: Vec<&'static str>,
    fields: &'static [FieldSpec],
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let rows: Vec<SchemeRow> = Scheme::ALL
        .iter()
        .map(|scheme| SchemeRow {
            name: scheme.name(),
            label: scheme.label(),
            required: scheme
                .fields()
                .iter()
                .filter(|field| field.required)
                .map(|field| field.key)
                .collect(),
            fields: scheme.fields(),
        })
        .collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:<10} {:<26} REQUIRED", "SCHEME", "DESCRIPTION");
    println!("{}", "-".repeat(60));
    for row in &rows {
        println!(
            "{:<10} {:<26} {}",
            row.name,
            row.label,
            row.required.join(", ")
        );
    }

    Ok(())
}
