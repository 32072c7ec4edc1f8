use winnow::combinator::opt;
use winnow::prelude::*;
use winnow::token::take_while;

use crate::error::ParseError;

/// One raw CSV row: its 1-based line number and its fields, unvalidated.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Parse CSV text into raw records, one per non-empty line.
///
/// There is no header row. Fields are either bare (everything up to the
/// next comma, whitespace kept as-is) or double-quoted with `""` as the
/// escape for a literal quote. Empty lines are skipped; they are not
/// records. Field-count validation happens later, in [`crate::Graph::load`].
pub fn parse_records(input: &str) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let mut rest = line;
        let fields =
            record(&mut rest).map_err(|_| ParseError::InvalidQuoting { line: line_no })?;
        if !rest.is_empty() {
            return Err(ParseError::InvalidQuoting { line: line_no });
        }
        records.push(Record {
            line: line_no,
            fields,
        });
    }
    Ok(records)
}

fn record(input: &mut &str) -> winnow::Result<Vec<String>> {
    let first = field.parse_next(input)?;
    let mut fields = vec![first];
    while opt(",").parse_next(input)?.is_some() {
        fields.push(field.parse_next(input)?);
    }
    Ok(fields)
}

fn field(input: &mut &str) -> winnow::Result<String> {
    if input.starts_with('"') {
        quoted_field.parse_next(input)
    } else {
        bare_field.parse_next(input)
    }
}

fn bare_field(input: &mut &str) -> winnow::Result<String> {
    let text = take_while(0.., |c: char| c != ',').parse_next(input)?;
    Ok(text.to_string())
}

fn quoted_field(input: &mut &str) -> winnow::Result<String> {
    "\"".parse_next(input)?;
    let mut text = String::new();
    loop {
        let chunk = take_while(0.., |c: char| c != '"').parse_next(input)?;
        text.push_str(chunk);
        "\"".parse_next(input)?;
        if opt("\"").parse_next(input)?.is_some() {
            // Doubled quote inside a quoted field.
            text.push('"');
        } else {
            return Ok(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_two_bare_fields() {
        let records = parse_records("A,B\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[0].fields, vec!["A", "B"]);
    }

    #[test]
    fn parse_multiple_rows() {
        let records = parse_records("A,B\nB,C\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].line, 2);
        assert_eq!(records[1].fields, vec!["B", "C"]);
    }

    #[test]
    fn parse_keeps_whitespace_in_fields() {
        let records = parse_records("A, B\n").unwrap();
        assert_eq!(records[0].fields, vec!["A", " B"]);
    }

    #[test]
    fn parse_skips_empty_lines() {
        let records = parse_records("A,B\n\nB,C\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn parse_quoted_field() {
        let records = parse_records("\"svc a\",B\n").unwrap();
        assert_eq!(records[0].fields, vec!["svc a", "B"]);
    }

    #[test]
    fn parse_quoted_field_with_comma() {
        let records = parse_records("\"a,b\",C\n").unwrap();
        assert_eq!(records[0].fields, vec!["a,b", "C"]);
    }

    #[test]
    fn parse_doubled_quote_escape() {
        let records = parse_records("\"say \"\"hi\"\"\",B\n").unwrap();
        assert_eq!(records[0].fields, vec!["say \"hi\"", "B"]);
    }

    #[test]
    fn parse_three_fields_is_not_a_parser_error() {
        // The parser keeps whatever field count it finds; the loader rejects it.
        let records = parse_records("A,B,C\n").unwrap();
        assert_eq!(records[0].fields, vec!["A", "B", "C"]);
    }

    #[test]
    fn parse_single_field_row() {
        let records = parse_records("A\n").unwrap();
        assert_eq!(records[0].fields, vec!["A"]);
    }

    #[test]
    fn parse_unterminated_quote_errors() {
        let err = parse_records("\"A,B\nB,C\n").unwrap_err();
        assert_eq!(err, ParseError::InvalidQuoting { line: 1 });
    }

    #[test]
    fn parse_text_after_closing_quote_errors() {
        let err = parse_records("A,B\n\"a\"x,B\n").unwrap_err();
        assert_eq!(err, ParseError::InvalidQuoting { line: 2 });
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(parse_records("").unwrap(), vec![]);
    }

    #[test]
    fn parse_line_without_trailing_newline() {
        let records = parse_records("A,B").unwrap();
        assert_eq!(records[0].fields, vec!["A", "B"]);
    }

    #[test]
    fn parse_crlf_line_endings() {
        let records = parse_records("A,B\r\nB,C\r\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields, vec!["A", "B"]);
    }
}
