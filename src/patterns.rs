use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    /// `<meta charset="...">` or the charset inside
    /// `<meta http-equiv="Content-Type" content="...; charset=...">`.
    pub static ref CHARSET_META_RE: Regex =
        Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).unwrap();
}
