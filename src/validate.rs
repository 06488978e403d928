use regex::Regex;
use std::sync::OnceLock;

mod phone;

pub use phone::{MSG_PHONE_EMPTY, MSG_PHONE_INVALID, is_phone};

/// Sink for user-facing validation messages (e.g. a toast or status line).
///
/// The phone validator reports its failures through this seam instead of
/// talking to any concrete UI layer. A plain closure works:
///
/// ```
/// use strkit::validate::is_phone;
///
/// let quiet = |_: &str| {};
/// assert!(is_phone("13812345678", &quiet));
/// ```
pub trait Notify {
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> Notify for F {
    fn notify(&self, message: &str) {
        self(message);
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static URL_RE: OnceLock<Regex> = OnceLock::new();
static IMAGE_RE: OnceLock<Regex> = OnceLock::new();
static CJK_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^\w+([-+.]\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$")
            .expect("failed to compile email regex")
    })
}

fn url_regex() -> &'static Regex {
    URL_RE.get_or_init(|| Regex::new(r"^(https|http)://").expect("failed to compile url regex"))
}

fn image_regex() -> &'static Regex {
    IMAGE_RE.get_or_init(|| {
        Regex::new(r".*?(gif|jpeg|png|jpg|bmp)").expect("failed to compile image regex")
    })
}

fn cjk_regex() -> &'static Regex {
    CJK_RE.get_or_init(|| Regex::new(r"[\u{4e00}-\u{9fa5}]").expect("failed to compile cjk regex"))
}

/// True if the string is empty or consists only of space, tab, carriage
/// return, or newline.
///
/// Deliberately narrower than Unicode whitespace: a non-breaking space or
/// form feed is NOT blank.
#[must_use]
pub fn is_blank(input: &str) -> bool {
    input.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// True if the slice is empty or any element is blank.
///
/// Asymmetric with the single-string form on purpose: one blank element
/// makes the whole batch blank. Returns false only when the slice is
/// non-empty and every element is non-blank.
#[must_use]
pub fn any_blank(inputs: &[&str]) -> bool {
    inputs.is_empty() || inputs.iter().any(|s| is_blank(s))
}

/// Full-string email check. Blank input is never an email.
#[must_use]
pub fn is_email(input: &str) -> bool {
    !is_blank(input) && email_regex().is_match(input)
}

/// True if the string starts with `http://` or `https://` and is not an
/// email address. Email strings are excluded even when they would match the
/// scheme prefix.
#[must_use]
pub fn is_url(input: &str) -> bool {
    if is_email(input) {
        return false;
    }
    url_regex().is_match(input)
}

/// True if the string contains one of the image extensions
/// gif/jpeg/png/jpg/bmp, case-sensitive.
///
/// The match is a substring occurrence, not a strict suffix: `"a.png?w=2"`
/// counts. Blank input never matches.
#[must_use]
pub fn is_image_url(input: &str) -> bool {
    !is_blank(input) && image_regex().is_match(input)
}

/// True if any codepoint falls in the CJK Unified Ideographs range
/// U+4E00..=U+9FA5.
#[must_use]
pub fn contains_cjk(input: &str) -> bool {
    cjk_regex().is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_accepts_only_the_narrow_whitespace_set() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n"));
        assert!(!is_blank(" a "));
        // U+00A0 is whitespace in Unicode terms but not blank here
        assert!(!is_blank("\u{a0}"));
    }

    #[test]
    fn any_blank_short_circuits_on_first_blank() {
        assert!(any_blank(&[]));
        assert!(any_blank(&["a", ""]));
        assert!(any_blank(&["  ", "b"]));
        assert!(!any_blank(&["a", "b"]));
    }

    #[test]
    fn email_matches_full_string_only() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@mail.example.co"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email(""));
        assert!(!is_email("user@example.com trailing"));
    }

    #[test]
    fn url_requires_scheme_and_rejects_emails() {
        assert!(is_url("http://example.com"));
        assert!(is_url("https://example.com/path?q=1"));
        assert!(!is_url("ftp://example.com"));
        assert!(!is_url("user@example.com"));
        assert!(!is_url(""));
    }

    #[test]
    fn image_url_is_a_loose_substring_match() {
        assert!(is_image_url("photo.jpg"));
        assert!(is_image_url("https://cdn.example.com/a.png?w=200"));
        assert!(!is_image_url("photo.txt"));
        assert!(!is_image_url("PHOTO.JPG"));
        assert!(!is_image_url(""));
    }

    #[test]
    fn cjk_detection() {
        assert!(contains_cjk("密码123"));
        assert!(!contains_cjk("password123"));
        assert!(!contains_cjk(""));
    }

    #[test]
    fn validators_are_idempotent() {
        for input in ["user@example.com", "http://x.com", "photo.jpg", "密码"] {
            assert_eq!(is_email(input), is_email(input));
            assert_eq!(is_url(input), is_url(input));
            assert_eq!(is_image_url(input), is_image_url(input));
            assert_eq!(contains_cjk(input), contains_cjk(input));
        }
    }
}
