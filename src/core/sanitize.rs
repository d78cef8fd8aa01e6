// src/core/sanitize.rs

/// Collapse runs of whitespace to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Replace each double space with a single one, left to right, one pass.
/// Four spaces become two, not one.
pub fn collapse_double_spaces(s: &str) -> String {
    s.replace("  ", " ")
}

/// Wrap tag-like mentions in backticks so rustdoc shows `<a>` as code.
/// Every `<` gains a leading backtick and every `>` a trailing one.
pub fn escape_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '<' => out.push_str("`<"),
            '>' => out.push_str(">`"),
            _ => out.push(ch),
        }
    }
    out
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}
