use super::*;

fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn plain_tokens_concatenate_back_to_input() {
    for text in ["", "a", "a\nb", "a\r\nb\n", "\n\n", "  x  \n\ty"] {
        let tokens = PlainTextLexer.tokenize(text);
        assert_eq!(concat(&tokens), text);
    }
}

#[test]
fn plain_emits_text_and_line_breaks() {
    let tokens = PlainTextLexer.tokenize("ab\ncd");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenClass::Text, "ab"),
            Token::new(TokenClass::Whitespace, "\n"),
            Token::new(TokenClass::Text, "cd"),
        ]
    );
}

#[test]
fn gaps_between_spans_are_filled_with_text() {
    struct Sparse;
    impl Lexer for Sparse {
        fn id(&self) -> &'static str {
            "sparse"
        }
        fn name(&self) -> &'static str {
            "Sparse"
        }
        fn tokenize_line(&self, line: &str, state: LineState) -> (Vec<LineSpan>, LineState) {
            if line.len() < 3 {
                return (Vec::new(), state);
            }
            (vec![LineSpan::new(TokenClass::Number, 1..2)], state)
        }
    }

    let tokens = Sparse.tokenize("abcd");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenClass::Text, "a"),
            Token::new(TokenClass::Number, "b"),
            Token::new(TokenClass::Text, "cd"),
        ]
    );
}
