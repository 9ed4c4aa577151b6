//! Escaping helpers for generated SQL and config syntax

/// Escape a string for a single-quoted SQL literal (single quotes doubled)
pub fn sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Escape a string for embedding inside a double-quoted config argument
/// (backslash-escapes backslashes and double quotes)
pub fn cfg_arg(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
