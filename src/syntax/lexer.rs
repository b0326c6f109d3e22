use crate::syntax::token::{LineSpan, LineState, Token, TokenClass};

/// A tokenizer for one language.
///
/// Implementors classify a single line given the state left by the previous line. The provided
/// [`Lexer::tokenize`] threads that state through a whole buffer and returns owned tokens whose
/// texts concatenate back to the input, line breaks included.
pub trait Lexer: Send + Sync {
    /// Stable lowercase identifier (e.g. `"python"`).
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g. `"Python"`).
    fn name(&self) -> &'static str;

    /// Alternative identifiers accepted as language hints.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Confidence in `0.0..=1.0` that `text` is written in this language.
    fn analyse(&self, _text: &str) -> f32 {
        0.0
    }

    /// Classify one line (without its terminator). Span ranges are byte offsets in `line`.
    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<LineSpan>, LineState);

    /// Tokenize a full buffer.
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut state = LineState::Normal;

        for raw in text.split_inclusive('\n') {
            let body = raw.trim_end_matches(['\n', '\r']);
            let (spans, next) = self.tokenize_line(body, state);
            push_line_tokens(&mut tokens, body, &spans);
            let ending = &raw[body.len()..];
            if !ending.is_empty() {
                tokens.push(Token::new(TokenClass::Whitespace, ending));
            }
            state = next;
        }

        tokens
    }
}

/// Convert line spans into owned tokens, filling any uncovered bytes with `Text`.
fn push_line_tokens(out: &mut Vec<Token>, line: &str, spans: &[LineSpan]) {
    let mut cursor = 0usize;
    for span in spans {
        let start = span.range.start.clamp(cursor, line.len());
        let end = span.range.end.clamp(start, line.len());
        if start > cursor {
            out.push(Token::new(TokenClass::Text, &line[cursor..start]));
        }
        if end > start {
            out.push(Token::new(span.class, &line[start..end]));
        }
        cursor = end;
    }
    if cursor < line.len() {
        out.push(Token::new(TokenClass::Text, &line[cursor..]));
    }
}

/// Lexer that emits every line as a single `Text` token. Used as the resolution fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTextLexer;

impl Lexer for PlainTextLexer {
    fn id(&self) -> &'static str {
        "text"
    }

    fn name(&self) -> &'static str {
        "Text only"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["plain", "plaintext", "txt", "none"]
    }

    fn analyse(&self, _text: &str) -> f32 {
        // Never wins a guess; it is the fallback instead.
        0.0
    }

    fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<LineSpan>, LineState) {
        if line.is_empty() {
            return (Vec::new(), state);
        }
        (vec![LineSpan::new(TokenClass::Text, 0..line.len())], state)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/syntax/lexer.rs"]
mod tests;
