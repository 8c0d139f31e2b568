//! Allow-list HTML sanitiser for agent replies
//!
//! Formatting tags survive with all attributes removed. Tags that carry
//! executable or styling content are dropped together with that content.
//! Any other tag is unwrapped, keeping its text. Comments are dropped and
//! stray angle brackets are escaped.

/// Tags kept (without attributes)
const ALLOWED_TAGS: &[&str] = &[
    "b", "strong", "i", "em", "u", "s", "del", "mark", "small", "sub", "sup", "code", "pre",
    "p", "br", "hr", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "blockquote",
    "span", "div", "table", "thead", "tbody", "tr", "th", "td",
];

/// Elements without a closing tag
const VOID_TAGS: &[&str] = &["br", "hr"];

/// Tags removed together with everything up to their closing tag
const DROPPED_WITH_CONTENT: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "textarea", "title",
    "svg", "math",
];

struct Tag<'a> {
    name: &'a str,
    closing: bool,
    self_closing: bool,
    /// Bytes from `<` through `>`
    len: usize,
}

#[must_use]
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(['<', '>']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix('>') {
            out.push_str("&gt;");
            rest = after;
            continue;
        }

        if let Some(after) = tail.strip_prefix("<!--") {
            rest = after.find("-->").map_or("", |end| &after[end + 3..]);
            continue;
        }

        let Some(tag) = parse_tag(tail) else {
            out.push_str("&lt;");
            rest = &tail[1..];
            continue;
        };
        rest = &tail[tag.len..];

        let name = tag.name.to_ascii_lowercase();
        if DROPPED_WITH_CONTENT.contains(&name.as_str()) {
            if !tag.closing && !tag.self_closing {
                rest = skip_past_closing_tag(rest, &name);
            }
        } else if ALLOWED_TAGS.contains(&name.as_str()) {
            let is_void = VOID_TAGS.contains(&name.as_str());
            if !tag.closing {
                out.push_str(&format!("<{name}>"));
            } else if !is_void {
                out.push_str(&format!("</{name}>"));
            }
        }
    }

    out.push_str(rest);
    out
}

fn parse_tag(input: &str) -> Option<Tag<'_>> {
    let body = input.strip_prefix('<')?;
    let (closing, body) = match body.strip_prefix('/') {
        Some(body) => (true, body),
        None => (false, body),
    };

    if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name_len = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    let attributes_len = find_tag_end(&body[name_len..])?;
    let attributes = &body[name_len..name_len + attributes_len];

    Some(Tag {
        name: &body[..name_len],
        closing,
        self_closing: attributes.trim_end().ends_with('/'),
        len: 1 + usize::from(closing) + name_len + attributes_len + 1,
    })
}

/// Offset of the `>` closing a tag, skipping quoted attribute values
fn find_tag_end(input: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in input.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '>' => return Some(i),
                '<' => return None,
                _ => {}
            },
        }
    }
    None
}

fn skip_past_closing_tag<'a>(input: &'a str, name: &str) -> &'a str {
    // ASCII lowercasing keeps byte offsets aligned with `input`
    let lowered = input.to_ascii_lowercase();
    let Some(start) = lowered.find(&format!("</{name}")) else {
        return "";
    };
    match lowered[start..].find('>') {
        Some(end) => &input[start + end + 1..],
        None => "",
    }
}
