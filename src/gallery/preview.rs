//! Preview document synthesis

/// Compile snippet code into a standalone HTML document
///
/// Code that already carries a top-level `<html>` or `<body>` tag is treated
/// as a self-contained document and returned unchanged. Everything else is
/// injected verbatim into a minimal dark-themed document shell.
///
/// No sanitization is performed. The output must only ever be rendered in an
/// isolated context (a sandboxed frame or a separate browser profile) with
/// no access to the host application's state or credentials.
pub fn build_preview(code: &str) -> String {
    if has_document_tag(code) {
        return code.to_string();
    }

    format!(
        r#"<!doctype html><html><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width, initial-scale=1"/>
<style>html,body{{background:#0b0b0f;color:#e6e6e9;font-family:-apple-system,BlinkMacSystemFont,Segoe UI,Roboto,Ubuntu,Cantarell,Noto Sans,Arial;margin:0;padding:1rem}} button{{cursor:pointer}}</style>
</head><body>{code}</body></html>"#
    )
}

/// Check for a top-level `<html` or `<body` tag
///
/// Case-insensitive, tolerates whitespace after `<`, and requires the tag
/// name to be followed by whitespace or `>` so `<bodyguard>` doesn't count.
fn has_document_tag(code: &str) -> bool {
    let bytes = code.as_bytes();

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }

        for tag in [&b"html"[..], &b"body"[..]] {
            if bytes.len() >= j + tag.len() && bytes[j..j + tag.len()].eq_ignore_ascii_case(tag) {
                match bytes.get(j + tag.len()) {
                    Some(b'>') => return true,
                    Some(c) if c.is_ascii_whitespace() => return true,
                    _ => {}
                }
            }
        }

        i += 1;
    }

    false
}
