//! CSV output format.

use std::borrow::Cow;
use std::io::Write;

use crate::{FormatError, Formatter, Payload};

/// CSV formatter.
///
/// Fields holding the delimiter, a quote or a line break are quoted.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    delimiter: char,
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Comma-delimited with a header line.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    fn quote<'a>(&self, value: Cow<'a, str>) -> Cow<'a, str> {
        if value.contains([self.delimiter, '"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
        } else {
            value
        }
    }

    fn write_line<'a, W: Write>(
        &self,
        writer: &mut W,
        fields: impl IntoIterator<Item = Cow<'a, str>>,
    ) -> Result<(), FormatError> {
        let mut buf = [0; 4];
        let separator: &str = self.delimiter.encode_utf8(&mut buf);
        let line: Vec<Cow<'a, str>> = fields.into_iter().map(|f| self.quote(f)).collect();
        writeln!(writer, "{}", line.join(separator))?;
        Ok(())
    }
}

impl Formatter for CsvFormatter {
    fn write_payload<P: Payload, W: Write>(
        &self,
        items: &[P],
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.include_header {
            self.write_line(&mut writer, P::COLUMNS.iter().map(|c| Cow::Borrowed(*c)))?;
        }
        for item in items {
            self.write_line(&mut writer, item.fields())?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocksync_types::{OfferId, PriceUpdate, StockUpdate};

    fn stocks() -> Vec<StockUpdate> {
        vec![
            StockUpdate::new(OfferId::new("123"), 100),
            StockUpdate::out_of_stock(OfferId::new("a,b")),
        ]
    }

    fn render(formatter: &CsvFormatter) -> String {
        let mut output = Vec::new();
        formatter.write_stocks(&stocks(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_stocks_with_quoting() {
        assert_eq!(
            render(&CsvFormatter::new()),
            "offer_id,stock\n123,100\n\"a,b\",0\n"
        );
    }

    #[test]
    fn test_prices() {
        let prices = vec![PriceUpdate::new(OfferId::new("12\"3"), "5990")];
        let mut output = Vec::new();

        CsvFormatter::new().write_prices(&prices, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "offer_id,price,old_price,currency_code,auto_action_enabled\n\"12\"\"3\",5990,0,RUB,UNKNOWN\n"
        );
    }

    #[test]
    fn test_without_header() {
        assert_eq!(
            render(&CsvFormatter::new().with_header(false)),
            "123,100\n\"a,b\",0\n"
        );
    }

    #[test]
    fn test_semicolon_leaves_commas_unquoted() {
        assert_eq!(
            render(&CsvFormatter::new().with_delimiter(';')),
            "offer_id;stock\n123;100\na,b;0\n"
        );
    }
}
