//! Response body decoding
//!
//! The encoding is taken from the `Content-Type` charset, then a byte order
//! mark, then a `<meta charset>` / `http-equiv` declaration near the top of
//! the document. Anything else is read as UTF-8.

use encoding_rs::{Encoding, UTF_8};

/// How far into the body a `<meta>` charset declaration is looked for
const META_SNIFF_BYTES: usize = 1024;

/// Decode an HTML body to a string, replacing invalid sequences
pub fn decode_html(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .or_else(|| Encoding::for_bom(body).map(|(encoding, _)| encoding))
        .or_else(|| charset_from_meta(body))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

fn lookup(label: &str) -> Option<&'static Encoding> {
    let label = label.trim().trim_matches(|c| c == '"' || c == '\'');
    Encoding::for_label(label.as_bytes())
}

/// `text/html; charset=iso-8859-1` -> windows-1252
fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            lookup(value)
        } else {
            None
        }
    })
}

/// First `charset=` inside a `<meta ...>` tag in the head of the document
fn charset_from_meta(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_SNIFF_BYTES)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    let mut rest = head.as_str();
    while let Some(start) = rest.find("<meta") {
        let tag_and_after = &rest[start..];
        let end = tag_and_after.find('>').unwrap_or(tag_and_after.len());
        let tag = &tag_and_after[..end];

        if let Some(pos) = tag.find("charset=") {
            let value = tag[pos + "charset=".len()..].trim_start_matches(['"', '\'', ' ']);
            let label: String = value
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
                .collect();
            if let Some(encoding) = lookup(&label) {
                return Some(encoding);
            }
        }
        rest = &tag_and_after[end..];
    }
    None
}
