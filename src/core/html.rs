// src/core/html.rs

// Hand-rolled, case-insensitive scanning over raw markup. No DOM build:
// the few shapes we care about are anchored and local, and the page is
// small enough to scan whole.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Cheap plausibility check: does the body contain at least one tag opener?
/// Catches empty bodies and plain-text/JSON error pages before the
/// strategies run.
pub fn looks_like_markup(s: &str) -> bool {
    s.as_bytes()
        .windows(2)
        .any(|w| w[0] == b'<' && (w[1].is_ascii_alphabetic() || w[1] == b'!' || w[1] == b'/'))
}

/// Content between the `>` that closes the first occurrence of `open_pat`
/// and the next occurrence of `close_pat`, case-insensitive.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Value of `attr` inside a single opening tag, quote style and attribute
/// order agnostic. `tag` is the raw `<meta ...>` text.
pub fn attr_value(tag: &str, attr: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = format!("{}=", to_lower(attr));
    let mut from = 0;
    while let Some(rel) = lc[from..].find(&needle) {
        let at = from + rel;
        let vstart = at + needle.len();
        // must start the attribute name, not the tail of e.g. data-name=
        if at > 0 && !lc.as_bytes()[at - 1].is_ascii_whitespace() {
            from = vstart;
            continue;
        }
        let rest = &tag[vstart..];
        let value = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => rest[1..].split(q).next().unwrap_or(""),
            _ => rest
                .split(|c: char| c.is_whitespace() || c == '>' || c == '/')
                .next()
                .unwrap_or(""),
        };
        return Some(value.to_string());
    }
    None
}

/// `content` attribute of the first `<meta>` whose `name` equals `name`.
pub fn meta_content(doc: &str, name: &str) -> Option<String> {
    let lc = to_lower(doc);
    let mut from = 0;
    while let Some(rel) = lc[from..].find("<meta") {
        let start = from + rel;
        let end = doc[start..].find('>')? + start;
        let tag = &doc[start..=end];
        if attr_value(tag, "name").as_deref() == Some(name) {
            return attr_value(tag, "content");
        }
        from = end + 1;
    }
    None
}

/// Drop tags, keep text, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
