/// Words that start statements and therefore cannot name variables.
pub const KEYWORDS: &[&str] = &["if", "while", "return"];

const fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Finds the delimiter closing the one at byte offset `open`.
///
/// Nested pairs of the same delimiters are skipped over. Returns the byte
/// offset of the closing delimiter, or `None` if it is never closed.
///
/// ## Example
/// ```
/// use shunt::util::scan::matching_close;
///
/// let text = "{ a; { b; } c; } d;";
/// assert_eq!(matching_close(text, 0, b'{', b'}'), Some(15));
/// assert_eq!(matching_close("(1 + (2)", 0, b'(', b')'), None);
/// ```
#[must_use]
pub fn matching_close(text: &str, open: usize, open_byte: u8, close_byte: u8) -> Option<usize> {
    let mut depth = 0usize;

    for (offset, &b) in text.as_bytes().iter().enumerate().skip(open) {
        if b == open_byte {
            depth += 1;
        } else if b == close_byte {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(offset);
            }
        }
    }
    None
}

/// Strips a leading whole-word keyword.
///
/// The keyword only matches when it is not immediately followed by another
/// identifier character, so `iffy` does not start with `if`.
///
/// ## Example
/// ```
/// use shunt::util::scan::strip_keyword;
///
/// assert_eq!(strip_keyword("while (x < 3) x = x + 1;", "while"),
///            Some(" (x < 3) x = x + 1;"));
/// assert_eq!(strip_keyword("if(x) return 1;", "if"), Some("(x) return 1;"));
/// assert_eq!(strip_keyword("iffy = 2;", "if"), None);
/// ```
#[must_use]
pub fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    match rest.as_bytes().first() {
        Some(&b) if is_identifier_byte(b) => None,
        _ => Some(rest),
    }
}

/// Finds the `=` of an assignment.
///
/// Every `==` is skipped as a comparison, so only a lone `=` counts.
///
/// ## Example
/// ```
/// use shunt::util::scan::find_assignment;
///
/// assert_eq!(find_assignment("x = y == 2;"), Some(2));
/// assert_eq!(find_assignment("return x == 2;"), None);
/// ```
#[must_use]
pub fn find_assignment(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'=' {
            if bytes.get(i + 1) == Some(&b'=') {
                i += 2;
                continue;
            }
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Tests whether `name` is a plain identifier: a letter or underscore
/// followed by letters, digits or underscores.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let bytes = name.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {
            bytes.iter().all(|&b| is_identifier_byte(b))
        },
        _ => false,
    }
}

/// Removes a trailing `;` and surrounding whitespace.
#[must_use]
pub fn strip_terminator(text: &str) -> &str {
    let text = text.trim();
    text.strip_suffix(';').unwrap_or(text).trim()
}
