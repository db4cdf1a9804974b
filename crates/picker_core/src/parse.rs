use crate::Record;

/// Rows with fewer fields than this are dropped.
pub const MIN_FIELDS: usize = 10;

const NAME: usize = 0;
const PHOTO: usize = 1;
const DESCRIPTION: usize = 3;
const NEIGHBORHOOD: usize = 4;
const SOURCE: usize = 5;
const CATEGORY: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiter: char,
    pub quote: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCatalog {
    pub records: Vec<Record>,
    /// Data rows discarded for having too few fields or an empty name.
    pub dropped_rows: usize,
}

/// Parse delimited text with the default comma/double-quote grammar.
pub fn parse_catalog(text: &str) -> ParsedCatalog {
    parse_catalog_with(text, ParseOptions::default())
}

/// Parse delimited text. The first line is a header and is always skipped.
pub fn parse_catalog_with(text: &str, options: ParseOptions) -> ParsedCatalog {
    let mut parsed = ParsedCatalog::default();

    for line in text.trim().split('\n').skip(1) {
        let fields = split_fields(line, options);
        match record_from_fields(fields) {
            Some(record) => parsed.records.push(record),
            None => parsed.dropped_rows += 1,
        }
    }

    parsed
}

/// Split one line into trimmed fields.
///
/// Every quote character toggles the quoted span and is itself discarded, so
/// `""` inside a quoted field is not an escaped quote.
pub fn split_fields(line: &str, options: ParseOptions) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == options.quote {
            in_quotes = !in_quotes;
        } else if ch == options.delimiter && !in_quotes {
            fields.push(field.trim().to_string());
            field.clear();
        } else {
            field.push(ch);
        }
    }
    fields.push(field.trim().to_string());

    fields
}

fn record_from_fields(mut fields: Vec<String>) -> Option<Record> {
    if fields.len() < MIN_FIELDS || fields[NAME].is_empty() {
        return None;
    }
    let mut take = |index: usize| std::mem::take(&mut fields[index]);
    Some(Record {
        name: take(NAME),
        photo_1: take(PHOTO),
        description_short: take(DESCRIPTION),
        neighborhood: take(NEIGHBORHOOD),
        source1: take(SOURCE),
        category: take(CATEGORY),
    })
}
