//! Telegram MarkdownV2 escaping and number grouping.

/// Characters MarkdownV2 treats as markup outside code spans.
pub const RESERVED: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Prefixes every reserved character with one backslash.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        if RESERVED.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Escapes text placed inside a `code` span, where only '`' and '\' are special.
pub fn escape_code(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '`' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// `1234567` → `"1,234,567"`, `-1234` → `"-1,234"`. The result is not MarkdownV2-escaped.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// True when every reserved char is preceded by exactly one escaping backslash.
    fn is_fully_escaped(text: &str) -> bool {
        let mut chars = text.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                match chars.next() {
                    Some(next) if RESERVED.contains(&next) => continue,
                    _ => return false,
                }
            }
            if RESERVED.contains(&ch) {
                return false;
            }
        }
        true
    }

    #[test]
    fn test_escape_signature_example() {
        assert_eq!(escape_markdown("a.b!c"), "a\\.b\\!c");
    }

    #[test]
    fn test_escape_every_reserved_char() {
        let all: String = RESERVED.iter().collect();
        let escaped = escape_markdown(&all);
        assert_eq!(escaped.chars().count(), RESERVED.len() * 2);
        assert!(is_fully_escaped(&escaped));
        assert!(!is_fully_escaped(&all));
    }

    #[test]
    fn test_escape_mixed_text_and_unicode() {
        let input = "hi_there (🔥) [link](x) ~a~ `c` #tag 1+1=2 |x| {y} \\ done!";
        let escaped = escape_markdown(input);
        assert!(is_fully_escaped(&escaped));
        assert!(escaped.contains("🔥"));
        assert_eq!(escape_markdown("plain text 123"), "plain text 123");
    }

    #[test]
    fn test_escape_code() {
        assert_eq!(escape_code("2023-11-14 22:13:20"), "2023-11-14 22:13:20");
        assert_eq!(escape_code("a`b\\c"), "a\\`b\\\\c");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(100000), "100,000");
        assert_eq!(group_thousands(i64::MAX), "9,223,372,036,854,775,807");
        assert_eq!(group_thousands(-1), "-1");
        assert_eq!(group_thousands(-1234), "-1,234");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }
}
