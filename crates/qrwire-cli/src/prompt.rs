use anyhow::Result;
use std::io::{BufRead, Write};

use qrwire_schemes::FieldCollector;
use qrwire_types::{FieldKind, FieldSpec};

/// Interactive collector: one stdin line per field.
///
/// Prompt text goes to `output` (the CLI wires up stderr), so stdout
/// carries nothing but payloads. End of input reads as a blank answer,
/// the same as hitting enter.
pub struct PromptCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

fn prompt_text(spec: &FieldSpec) -> String {
    match spec.kind {
        FieldKind::Date => format!("{} (YYYYMMDD HHMM): ", spec.label),
        FieldKind::Choice { options } => format!("{} ({}): ", spec.label, options.join("/")),
        _ if !spec.required => format!("{} (optional): ", spec.label),
        _ => format!("{}: ", spec.label),
    }
}

impl<R: BufRead, W: Write> FieldCollector for PromptCollector<R, W> {
    fn collect(&mut self, spec: &FieldSpec) -> Result<String> {
        write!(self.output, "{}", prompt_text(spec))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(String::new());
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
