//! Credential line parser
//!
//! Parses one line of the backing file into a typed result. New records
//! are written as `username*email*passwordHash`, but older files used `:`
//! or `,` separators, bare whitespace, and two-field lines with no email.

/// One field triple read from the backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub username: String,
    pub email: String,
    /// Either a hex digest or a legacy plaintext password
    pub password_value: String,
}

/// Outcome of parsing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Record(RawRecord),
    /// Empty after trimming
    Blank,
    /// Leading `#`
    Comment,
    /// Fewer than two fields, or an empty username or password value;
    /// dropped by the loader
    Malformed,
}

/// Parse one line of the credentials file.
///
/// Delimiter fallback order is `*`, then `:`, then `,`, then generic
/// whitespace: the first delimiter present in the line decides the split.
/// Three or more fields give (username, email, password value); exactly
/// two give (username, password value) with an empty email.
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim();
    if line.is_empty() {
        return ParsedLine::Blank;
    }
    if line.starts_with('#') {
        return ParsedLine::Comment;
    }

    let fields: Vec<&str> = if line.contains('*') {
        line.split('*').collect()
    } else if line.contains(':') {
        line.split(':').collect()
    } else if line.contains(',') {
        line.split(',').collect()
    } else {
        line.split_whitespace().collect()
    };

    let (username, email, password_value) = match fields.len() {
        0 | 1 => return ParsedLine::Malformed,
        2 => (fields[0].trim(), "", fields[1].trim()),
        _ => (fields[0].trim(), fields[1].trim(), fields[2].trim()),
    };

    // A record without a username or password value cannot be looked up
    // or verified, so it does not count as a record at all.
    if username.is_empty() || password_value.is_empty() {
        return ParsedLine::Malformed;
    }

    ParsedLine::Record(RawRecord {
        username: username.to_string(),
        email: email.to_string(),
        password_value: password_value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, email: &str, password_value: &str) -> ParsedLine {
        ParsedLine::Record(RawRecord {
            username: username.to_string(),
            email: email.to_string(),
            password_value: password_value.to_string(),
        })
    }

    #[test]
    fn test_parse_canonical_record() {
        assert_eq!(
            parse_line("alice*a@x.com*abcd1234"),
            record("alice", "a@x.com", "abcd1234")
        );
    }

    #[test]
    fn test_parse_blank_and_comment() {
        assert_eq!(parse_line(""), ParsedLine::Blank);
        assert_eq!(parse_line("   \t"), ParsedLine::Blank);
        assert_eq!(parse_line("# header"), ParsedLine::Comment);
        assert_eq!(parse_line("  # indented comment"), ParsedLine::Comment);
    }

    #[test]
    fn test_parse_legacy_two_field_line() {
        assert_eq!(parse_line("bob:secret"), record("bob", "", "secret"));
        assert_eq!(parse_line("bob,secret"), record("bob", "", "secret"));
        assert_eq!(parse_line("bob secret"), record("bob", "", "secret"));
    }

    #[test]
    fn test_delimiter_priority() {
        // '*' wins over ':' even when it appears later in the line
        assert_eq!(parse_line("a:b*c"), record("a:b", "", "c"));
        // ':' wins over ','
        assert_eq!(parse_line("a,b:c"), record("a,b", "", "c"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(
            parse_line(" carol * c@x.com * deadbeef "),
            record("carol", "c@x.com", "deadbeef")
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        assert_eq!(
            parse_line("dave*d@x.com*feed*junk"),
            record("dave", "d@x.com", "feed")
        );
    }

    #[test]
    fn test_single_token_is_malformed() {
        assert_eq!(parse_line("justoneword"), ParsedLine::Malformed);
    }

    #[test]
    fn test_empty_username_is_malformed() {
        assert_eq!(parse_line("*a@x.com*pw"), ParsedLine::Malformed);
        assert_eq!(parse_line(":secret"), ParsedLine::Malformed);
    }

    #[test]
    fn test_empty_password_is_malformed() {
        assert_eq!(parse_line("alice*a@x.com*"), ParsedLine::Malformed);
        assert_eq!(parse_line("alice*a@x.com*  "), ParsedLine::Malformed);
    }
}
