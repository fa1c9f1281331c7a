//! Quote-aware splitting of delimited text lines

pub const DEFAULT_DELIMITER: char = ',';

const QUOTE: char = '"';

/// Splits `line` on `delimiter`, except inside double quotes.
///
/// A delimiter counts as literal text when an odd number of quotes precedes it
/// on the line. Quotes stay in the returned fields and unbalanced quoting is
/// not an error. Empty fields, trailing ones included, are kept.
pub fn parse_line(line: &str, delimiter: char) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in line.char_indices() {
        if c == QUOTE {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            fields.push(&line[start..i]);
            start = i + c.len_utf8();
        }
    }
    fields.push(&line[start..]);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_split() {
        assert_eq!(parse_line("x,y", ','), vec!["x", "y"]);
    }

    #[test]
    fn test_quoted_delimiter_is_kept() {
        assert_eq!(parse_line(r#"A,"B,C",D"#, ','), vec!["A", r#""B,C""#, "D"]);
    }

    #[test]
    fn test_empty_fields_are_kept() {
        assert_eq!(parse_line("a,,b,,", ','), vec!["a", "", "b", "", ""]);
        assert_eq!(parse_line("", ','), vec![""]);
    }

    #[test]
    fn test_unbalanced_quote_swallows_the_rest() {
        assert_eq!(parse_line(r#"a,"b,c,d"#, ','), vec!["a", r#""b,c,d"#]);
    }

    #[test]
    fn test_adjacent_quoted_segments() {
        // "" inside a quoted field flips the state twice, so the comma stays quoted
        assert_eq!(
            parse_line(r#""say ""hi"", ok",next"#, ','),
            vec![r#""say ""hi"", ok""#, "next"]
        );
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(
            parse_line(r#"a;"b;c";d,e"#, ';'),
            vec!["a", r#""b;c""#, "d,e"]
        );
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            parse_line("Björk,\"Jóga, live\",électro", ','),
            vec!["Björk", "\"Jóga, live\"", "électro"]
        );
    }
}
