use crate::syntax::lexer::Lexer;
use crate::syntax::token::{LineSpan, LineState, TokenClass};

/// Lexer for JSON documents.
///
/// Object keys are emitted as `Name`, string values as `String`, and `true`/`false`/`null`
/// as `KeywordConstant`. Anything that is not JSON becomes a single-character `Error` token.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonLexer;

impl Lexer for JsonLexer {
    fn id(&self) -> &'static str {
        "json"
    }

    fn name(&self) -> &'static str {
        "JSON"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["json-object", "jsonl", "geojson"]
    }

    fn analyse(&self, text: &str) -> f32 {
        let t = text.trim();
        let wrapped = (t.starts_with('{') && t.ends_with('}'))
            || (t.starts_with('[') && t.ends_with(']'));
        if !wrapped {
            return 0.0;
        }
        if t.starts_with('{') && t.contains("\":") {
            0.6
        } else {
            0.2
        }
    }

    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<LineSpan>, LineState) {
        let bytes = line.as_bytes();
        let len = bytes.len();
        let mut out = Vec::new();
        let mut pos = 0;

        if let LineState::InString(_) = state {
            match string_end(bytes, 0) {
                Some(end) => {
                    out.push(LineSpan::new(TokenClass::String, 0..end));
                    pos = end;
                }
                None => {
                    if len > 0 {
                        out.push(LineSpan::new(TokenClass::String, 0..len));
                    }
                    return (out, state);
                }
            }
        }

        while pos < len {
            let b = bytes[pos];
            match b {
                b' ' | b'\t' | b'\r' => {
                    let start = pos;
                    while pos < len && matches!(bytes[pos], b' ' | b'\t' | b'\r') {
                        pos += 1;
                    }
                    out.push(LineSpan::new(TokenClass::Whitespace, start..pos));
                }
                b'"' => {
                    let start = pos;
                    let Some(end) = string_end(bytes, pos + 1) else {
                        out.push(LineSpan::new(TokenClass::String, start..len));
                        return (out, LineState::InString(0));
                    };
                    let class = if is_key(bytes, end) {
                        TokenClass::Name
                    } else {
                        TokenClass::String
                    };
                    out.push(LineSpan::new(class, start..end));
                    pos = end;
                }
                b'{' | b'}' | b'[' | b']' | b':' | b',' => {
                    out.push(LineSpan::new(TokenClass::Punctuation, pos..pos + 1));
                    pos += 1;
                }
                b'-' | b'0'..=b'9' => {
                    let start = pos;
                    pos += 1;
                    while pos < len
                        && (bytes[pos].is_ascii_digit()
                            || matches!(bytes[pos], b'.' | b'e' | b'E' | b'+' | b'-'))
                    {
                        pos += 1;
                    }
                    out.push(LineSpan::new(TokenClass::Number, start..pos));
                }
                b'a'..=b'z' => {
                    let start = pos;
                    while pos < len && bytes[pos].is_ascii_lowercase() {
                        pos += 1;
                    }
                    let class = match &line[start..pos] {
                        "true" | "false" | "null" => TokenClass::KeywordConstant,
                        _ => TokenClass::Error,
                    };
                    out.push(LineSpan::new(class, start..pos));
                }
                _ => {
                    let width = line[pos..].chars().next().map_or(1, char::len_utf8);
                    out.push(LineSpan::new(TokenClass::Error, pos..pos + width));
                    pos += width;
                }
            }
        }

        (out, LineState::Normal)
    }
}

/// Offset just past the closing quote, scanning from `from`.
fn string_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// A string is an object key when the next non-blank byte is `:`.
fn is_key(bytes: &[u8], after: usize) -> bool {
    bytes[after.min(bytes.len())..]
        .iter()
        .find(|b| !matches!(b, b' ' | b'\t'))
        .is_some_and(|b| *b == b':')
}

#[cfg(test)]
#[path = "../../tests/unit/syntax/json.rs"]
mod tests;
