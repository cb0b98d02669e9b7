use nom::{
    Finish, IResult, Parser,
    branch::alt,
    character::complete::{char, satisfy},
    combinator::{all_consuming, cut, map},
    error::context,
    multi::{many0, separated_list1},
    sequence::preceded,
};
use nom_language::error::VerboseError;

use super::{KeyPath, PathError, error::convert_verbose_error};

pub(super) const INVALID_ESCAPE_MSG: &str = "invalid escape: '\\' must be followed by ',' or '\\'";

// data,items,name - allowed - three keys
// data - allowed - single key
// data,,name - allowed - empty middle key, objects may carry "" as a key
// data, - allowed - trailing empty key
// a\,b,c - allowed - first key is "a,b"
// a\\,b - allowed - first key is "a\"
// a\b - not allowed - '\' only escapes ',' and '\'
// a\ - not allowed - dangling '\'
// "" - not allowed - no keys at all
pub(crate) fn parse_key_list(input: &str) -> Result<KeyPath, PathError> {
    if input.is_empty() {
        return Err(PathError::Empty);
    }

    let (_, keys) = parse_keys(input)
        .finish()
        .map_err(|e| convert_verbose_error(input, e))?;

    KeyPath::new(keys)
}

fn parse_keys(input: &str) -> IResult<&str, Vec<String>, VerboseError<&str>> {
    context(
        "comma-separated list of keys",
        all_consuming(separated_list1(char(','), parse_key)),
    )
    .parse(input)
}

fn parse_key(input: &str) -> IResult<&str, String, VerboseError<&str>> {
    // ',' terminates the key, '\' starts an escape.
    let key_char = alt((unescape_key_char, satisfy(|c| c != ',' && c != '\\')));
    context(
        "key",
        map(many0(key_char), |chars: Vec<char>| {
            chars.into_iter().collect::<String>()
        }),
    )
    .parse(input)
}

fn unescape_key_char(input: &str) -> IResult<&str, char, VerboseError<&str>> {
    preceded(
        char('\\'),
        cut(context(INVALID_ESCAPE_MSG, alt((char(','), char('\\'))))),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn test_parse_key_list() {
        let_assert!(Ok(path) = parse_key_list("level1,level2,name"));
        check!(path.keys() == ["level1", "level2", "name"]);
    }

    #[test]
    fn test_parse_single_key() {
        let_assert!(Ok(path) = parse_key_list("data"));
        check!(path.keys() == ["data"]);
    }

    #[test]
    fn test_parse_empty_input() {
        check!(parse_key_list("") == Err(PathError::Empty));
    }

    #[test]
    fn test_parse_keeps_empty_keys() {
        let_assert!(Ok(path) = parse_key_list("data,,name"));
        check!(path.keys() == ["data", "", "name"]);

        let_assert!(Ok(path) = parse_key_list("data,"));
        check!(path.keys() == ["data", ""]);

        let_assert!(Ok(path) = parse_key_list(","));
        check!(path.keys() == ["", ""]);
    }

    #[test]
    fn test_parse_keeps_whitespace_and_punctuation() {
        let_assert!(Ok(path) = parse_key_list(" a , b;[x]"));
        check!(path.keys() == [" a ", " b;[x]"]);
    }

    #[test]
    fn test_parse_escaped_comma() {
        let_assert!(Ok(path) = parse_key_list("a\\,b,c"));
        check!(path.keys() == ["a,b", "c"]);

        let_assert!(Ok(path) = parse_key_list("\\,"));
        check!(path.keys() == [","]);
    }

    #[test]
    fn test_parse_escaped_backslash() {
        let_assert!(Ok(path) = parse_key_list("a\\\\,b"));
        check!(path.keys() == ["a\\", "b"]);
    }

    #[test]
    fn test_parse_rejects_unknown_escape() {
        let result = parse_key_list("data,a\\b");
        check!(result == Err(PathError::invalid_syntax(7, INVALID_ESCAPE_MSG)));
    }

    #[test]
    fn test_parse_rejects_dangling_backslash() {
        check!(parse_key_list("a\\") == Err(PathError::invalid_syntax(2, INVALID_ESCAPE_MSG)));
        check!(parse_key_list("\\") == Err(PathError::invalid_syntax(1, INVALID_ESCAPE_MSG)));
        check!(parse_key_list("a,\\") == Err(PathError::invalid_syntax(3, INVALID_ESCAPE_MSG)));
        check!(parse_key_list("\\\\\\") == Err(PathError::invalid_syntax(3, INVALID_ESCAPE_MSG)));
    }

    #[test]
    fn test_parse_error_message() {
        let_assert!(Err(err) = parse_key_list("x\\y"));
        check!(
            err.to_string()
                == "Invalid key path syntax at position 2: invalid escape: '\\' must be followed by ',' or '\\'"
        );
    }

    #[test]
    fn test_parse_key() {
        let_assert!(Ok((rest, key)) = parse_key("name,rest"));
        check!(rest == ",rest");
        check!(key == "name");
    }

    #[test]
    fn test_parse_unicode_keys() {
        let_assert!(Ok(path) = parse_key_list("données,名前"));
        check!(path.keys() == ["données", "名前"]);
    }
}
