use crate::models::LogRecord;

// Comma-delimited with standard quoting: a field that opens with '"' runs to
// the closing quote, "" inside quotes is a literal quote, quoted commas do
// not separate.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

pub fn record_from_line(line: &str) -> Option<LogRecord> {
    let mut fields = split_fields(line);
    if fields.len() < 5 {
        return None;
    }
    // Anything past the fifth field is dropped.
    fields.truncate(5);
    let mut fields = fields.into_iter();
    Some(LogRecord {
        path: fields.next()?,
        timestamp: fields.next()?,
        user_agent: fields.next()?,
        status: fields.next()?,
        size: fields.next()?,
    })
}
