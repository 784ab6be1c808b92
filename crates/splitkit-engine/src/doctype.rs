//! DOCTYPE prologue normalization

/// Prologue prepended to serialized output
pub const DOCTYPE_LINE: &str = "<!DOCTYPE html>\n";

const DOCTYPE_PREFIX: &str = "<!doctype";

/// Prepend [`DOCTYPE_LINE`] unless `html` already starts with a
/// (case-insensitive) `<!doctype`
pub fn ensure_doctype(html: String) -> String {
    let has_doctype = html
        .get(..DOCTYPE_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DOCTYPE_PREFIX));
    if has_doctype {
        html
    } else {
        let mut out = String::with_capacity(DOCTYPE_LINE.len() + html.len());
        out.push_str(DOCTYPE_LINE);
        out.push_str(&html);
        out
    }
}
