// parser.rs

/// Splits a line into words, honouring single quotes, double quotes and
/// backslash escapes. Quoted and unquoted pieces that touch form one word.
pub fn split_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut cur = String::new();
    // A quoted empty string ("") is still a word.
    let mut in_word = false;
    let mut chars = line.chars().peekable();
    enum State { Normal, Single, Double }
    let mut state = State::Normal;
    while let Some(ch) = chars.next() {
        match state {
            State::Normal => match ch {
                '\'' => {
                    state = State::Single;
                    in_word = true;
                }
                '"' => {
                    state = State::Double;
                    in_word = true;
                }
                // A trailing backslash is dropped.
                '\\' => {
                    if let Some(next) = chars.next() {
                        cur.push(next);
                        in_word = true;
                    }
                }
                c if c.is_whitespace() => {
                    if in_word {
                        tokens.push(std::mem::take(&mut cur));
                        in_word = false;
                    }
                }
                _ => {
                    cur.push(ch);
                    in_word = true;
                }
            },
            State::Single => match ch {
                '\'' => state = State::Normal,
                _ => cur.push(ch),
            },
            State::Double => match ch {
                '"' => state = State::Normal,
                '\\' => match chars.peek() {
                    Some(&next @ ('\\' | '"' | '$')) => {
                        cur.push(next);
                        chars.next();
                    }
                    _ => cur.push('\\'),
                },
                _ => cur.push(ch),
            },
        }
    }
    if in_word {
        tokens.push(cur);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split_line("  add 5\t3  "), vec!["add", "5", "3"]);
        assert!(split_line("   ").is_empty());
    }

    #[test]
    fn quotes_keep_spaces() {
        assert_eq!(split_line(r#"search "= 4""#), vec!["search", "= 4"]);
        assert_eq!(split_line("search 'a  b'"), vec!["search", "a  b"]);
        assert_eq!(split_line(r#"a"b c"d"#), vec!["ab cd"]);
    }

    #[test]
    fn escapes() {
        assert_eq!(split_line(r"search a\ b"), vec!["search", "a b"]);
        assert_eq!(split_line(r#""x \"y\" \n""#), vec![r#"x "y" \n"#]);
        assert_eq!(split_line(r"'\'"), vec![r"\"]);
    }

    #[test]
    fn trailing_backslash_adds_no_word() {
        assert_eq!(split_line(r"add 1 2 \"), vec!["add", "1", "2"]);
        assert_eq!(split_line(r"add 1 2\"), vec!["add", "1", "2"]);
    }

    #[test]
    fn empty_quotes_and_unterminated_quotes() {
        assert_eq!(split_line(r#"search """#), vec!["search", ""]);
        assert_eq!(split_line("search 'open ended"), vec!["search", "open ended"]);
    }
}
