use std::fmt::Write;

/// Render a string as escaped numeric codepoints.
///
/// Codepoints above 255 come out as `\u` plus lowercase hex, everything else
/// as a bare `\` plus lowercase hex. Neither branch zero-pads, so `"A"`
/// becomes `\41` and `"密"` becomes `\u5bc6`. The output is a display
/// format for logs and diffs, not re-parseable escape syntax.
#[must_use]
pub fn unicode_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for ch in input.chars() {
        let cp = u32::from(ch);
        if cp > 255 {
            let _ = write!(out, "\\u{cp:x}");
        } else {
            let _ = write!(out, "\\{cp:x}");
        }
    }
    out
}
