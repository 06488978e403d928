use super::Notify;
use regex::Regex;
use std::sync::OnceLock;

pub const MSG_PHONE_EMPTY: &str = "phone number cannot be empty";
pub const MSG_PHONE_INVALID: &str = "please enter a correct phone number";

static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^1[3458][0-9]{9}$").expect("failed to compile phone regex"))
}

/// Mobile number check: 11 digits, leading `1`, second digit in {3,4,5,8}.
///
/// Failures are reported through `notify` with a user-facing message:
/// [`MSG_PHONE_EMPTY`] for blank input, [`MSG_PHONE_INVALID`] for anything
/// that fails the pattern. Exactly one message per failed call, none on
/// success.
pub fn is_phone(input: &str, notify: &dyn Notify) -> bool {
    if super::is_blank(input) {
        notify.notify(MSG_PHONE_EMPTY);
        return false;
    }
    if phone_regex().is_match(input) {
        true
    } else {
        notify.notify(MSG_PHONE_INVALID);
        false
    }
}
