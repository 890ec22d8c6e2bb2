//! JSON output formats.

use std::collections::BTreeMap;
use std::io::Write;

use crate::{FormatError, Formatter, Payload};

/// JSON layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// The body the import endpoint receives: `{"<name>": [..]}`.
    #[default]
    Request,
    /// One update per line.
    Ndjson,
}

/// JSON formatter.
///
/// Updates keep the field names the import endpoints accept, so a
/// [`JsonStyle::Request`] file can be replayed as-is.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    style: JsonStyle,
    pretty: bool,
}

impl JsonFormatter {
    /// Pretty-printed import request bodies.
    #[must_use]
    pub const fn request() -> Self {
        Self {
            style: JsonStyle::Request,
            pretty: true,
        }
    }

    /// Newline-delimited updates.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether request bodies are pretty-printed. NDJSON ignores it.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_payload<P: Payload, W: Write>(
        &self,
        items: &[P],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Request => {
                let body = BTreeMap::from([(P::NAME, items)]);
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, &body)?;
                } else {
                    serde_json::to_writer(&mut writer, &body)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for item in items {
                    serde_json::to_writer(&mut writer, item)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Request => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
