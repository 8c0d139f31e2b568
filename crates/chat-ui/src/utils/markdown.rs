use yew::prelude::*;

use super::sanitize::sanitize_html;

/// Format an agent reply and render it as sanitised HTML
pub fn render_reply(content: &str) -> Html {
    let html_output = sanitize_html(&format_reply(content));
    Html::from_html_unchecked(AttrValue::from(html_output))
}

/// Convert the light markdown the agent emits into HTML.
///
/// Inline HTML in the reply passes through untouched; the result must go
/// through [`sanitize_html`] before it reaches the DOM.
#[must_use]
pub fn format_reply(content: &str) -> String {
    let mut html_output = String::new();
    let mut code_block: Option<String> = None;
    let mut in_list = false;

    for line in content.lines() {
        if line.trim_start().starts_with("```") {
            close_list(&mut html_output, &mut in_list);
            match code_block.take() {
                Some(code) => push_code_block(&mut html_output, &code),
                None => code_block = Some(String::new()),
            }
            continue;
        }

        if let Some(code) = code_block.as_mut() {
            if !code.is_empty() {
                code.push('\n');
            }
            code.push_str(line);
            continue;
        }

        if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            if !in_list {
                html_output.push_str("<ul>");
                in_list = true;
            }
            html_output.push_str(&format!("<li>{}</li>", format_inline(item)));
            continue;
        }
        close_list(&mut html_output, &mut in_list);

        if let Some(rest) = line.strip_prefix("### ") {
            html_output.push_str(&format!("<h3>{}</h3>", format_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("## ") {
            html_output.push_str(&format!("<h2>{}</h2>", format_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("# ") {
            html_output.push_str(&format!("<h1>{}</h1>", format_inline(rest)));
        } else if line.trim().is_empty() {
            if !html_output.is_empty()
                && !html_output.ends_with("</p>")
                && !html_output.ends_with("</pre>")
                && !html_output.ends_with("<br>")
            {
                html_output.push_str("<br>");
            }
        } else {
            html_output.push_str("<p>");
            html_output.push_str(&format_inline(line));
            html_output.push_str("</p>");
        }
    }

    close_list(&mut html_output, &mut in_list);
    // Unclosed fence runs to the end of the reply
    if let Some(code) = code_block {
        push_code_block(&mut html_output, &code);
    }

    html_output
}

fn close_list(html_output: &mut String, in_list: &mut bool) {
    if *in_list {
        html_output.push_str("</ul>");
        *in_list = false;
    }
}

fn push_code_block(html_output: &mut String, code: &str) {
    html_output.push_str("<pre><code>");
    html_output.push_str(&html_escape(code));
    html_output.push_str("</code></pre>");
}

fn format_inline(text: &str) -> String {
    let text = replace_pattern(text, "**", "<strong>", "</strong>");
    let text = replace_pattern(&text, "*", "<em>", "</em>");
    replace_inline_code(&text)
}

fn replace_pattern(text: &str, delimiter: &str, open_tag: &str, close_tag: &str) -> String {
    let parts: Vec<&str> = text.split(delimiter).collect();
    if parts.len() < 3 {
        return text.to_string();
    }

    let mut result = String::new();
    let mut in_delimiter = false;
    let last = parts.len() - 1;

    for (i, part) in parts.iter().enumerate() {
        if i == 0 {
            result.push_str(part);
        } else if in_delimiter {
            result.push_str(close_tag);
            result.push_str(part);
            in_delimiter = false;
        } else if i == last {
            // Odd delimiter count: leave the trailing one as text
            result.push_str(delimiter);
            result.push_str(part);
        } else {
            result.push_str(open_tag);
            result.push_str(part);
            in_delimiter = true;
        }
    }

    result
}

fn replace_inline_code(text: &str) -> String {
    let parts: Vec<&str> = text.split('`').collect();
    if parts.len() < 3 {
        return text.to_string();
    }

    let mut result = String::new();
    let mut in_code = false;

    for (i, part) in parts.iter().enumerate() {
        if i == 0 {
            result.push_str(part);
        } else if in_code {
            result.push_str("</code>");
            result.push_str(part);
            in_code = false;
        } else {
            result.push_str("<code>");
            result.push_str(&html_escape(part));
            in_code = true;
        }
    }

    result
}

pub(crate) fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
