//! Minimal RFC 4180 reader/writer shared by roster import and question export.

pub const UTF8_BOM: &str = "\u{feff}";

/// Split CSV text into records of fields.
///
/// Quoted fields may contain commas, doubled quotes and line breaks. Both `\n`
/// and `\r\n` end a record. Blank lines are skipped. A leading BOM is ignored.
pub fn parse_records(text: &str) -> Result<Vec<Vec<String>>, String> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // Whether the current field was opened with a quote.
    let mut quoted = false;
    let mut line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
            }
            '"' => return Err(format!("unexpected quote on line {line}")),
            ',' => {
                record.push(std::mem::take(&mut field));
                quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                end_record(&mut records, &mut record, &mut field, quoted);
                quoted = false;
                line += 1;
            }
            _ if quoted => {
                return Err(format!("unexpected character after closing quote on line {line}"));
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    end_record(&mut records, &mut record, &mut field, quoted);
    Ok(records)
}

fn end_record(
    records: &mut Vec<Vec<String>>,
    record: &mut Vec<String>,
    field: &mut String,
    quoted: bool,
) {
    if record.is_empty() && field.is_empty() && !quoted {
        return;
    }
    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
}

/// Escape a value for CSV: wrap in quotes if it contains comma, quote, or a line break.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Append one record terminated by `\n`.
pub fn write_record<I, S>(out: &mut String, fields: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut first = true;
    for f in fields {
        if !first {
            out.push(',');
        }
        out.push_str(&escape_field(f.as_ref()));
        first = false;
    }
    out.push('\n');
}
