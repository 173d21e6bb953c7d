use anyhow::{Context, Result};

use crate::args::Cli;
use crate::prompt::PromptCollector;
use crate::render;
use crate::types::OutputFormat;
use qrwire_schemes::{Scheme, build, gather_fields};
use qrwire_types::RenderHints;

pub fn handle(scheme: Scheme, cli: &Cli, enable_color: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let stderr = std::io::stderr();
    let mut collector = PromptCollector::new(stdin.lock(), stderr.lock());

    let values = gather_fields(scheme, &mut collector)?;
    let payload = build(scheme, &values)?;

    let hints = RenderHints {
        ec_level: cli.ec_level.into(),
        box_size: cli.box_size,
        border: cli.border,
    };

    if cli.print {
        match cli.format {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "scheme": scheme.name(),
                    "payload": &payload,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Plain => println!("{}", payload),
        }
    } else {
        render::terminal::draw(payload.as_str(), &hints, enable_color)?;
    }

    if let Some(name) = &cli.save {
        let path = render::png::save(payload.as_str(), &hints, name)
            .with_context(|| format!("failed to save '{}'", name))?;
        // stdout carries only the payload/report; status lines share the
        // prompt channel.
        eprintln!("Saved {}", path.display());
    }

    Ok(())
}
