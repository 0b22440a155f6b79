const OPEN: &str = "<span class=\"emojic\"><span class=\"emoji emoji";
const MIDDLE: &str = "\"></span><span class=\"emojit\">&#x";
const CLOSE: &str = ";</span></span>";

/// Wraps a hex code point identifier in the glyph markup.
///
/// The inner `emoji{hex}` class is the hook a stylesheet uses to pick the
/// glyph, and the `emojit` span carries the character as a numeric reference.
///
/// ```
/// assert_eq!(
///     emoji_markup::code_point_to_html("2139"),
///     r#"<span class="emojic"><span class="emoji emoji2139"></span><span class="emojit">&#x2139;</span></span>"#,
/// );
/// ```
pub fn code_point_to_html(hex: &str) -> String {
    let mut out = String::with_capacity(OPEN.len() + MIDDLE.len() + CLOSE.len() + 2 * hex.len());
    push_html(&mut out, hex);
    out
}

pub(crate) fn push_html(out: &mut String, hex: &str) {
    out.push_str(OPEN);
    out.push_str(hex);
    out.push_str(MIDDLE);
    out.push_str(hex);
    out.push_str(CLOSE);
}
