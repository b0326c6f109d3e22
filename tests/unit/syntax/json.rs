use super::*;

fn classes(text: &str) -> Vec<(TokenClass, String)> {
    JsonLexer
        .tokenize(text)
        .into_iter()
        .filter(|t| t.class != TokenClass::Whitespace)
        .map(|t| (t.class, t.text))
        .collect()
}

#[test]
fn keys_and_values_are_distinguished() {
    let got = classes(r#"{"name": "codeshot", "n": -1.5e3, "ok": true, "x": null}"#);
    assert!(got.contains(&(TokenClass::Name, "\"name\"".into())));
    assert!(got.contains(&(TokenClass::String, "\"codeshot\"".into())));
    assert!(got.contains(&(TokenClass::Number, "-1.5e3".into())));
    assert!(got.contains(&(TokenClass::KeywordConstant, "true".into())));
    assert!(got.contains(&(TokenClass::KeywordConstant, "null".into())));
    assert_eq!(got[0], (TokenClass::Punctuation, "{".into()));
}

#[test]
fn malformed_input_yields_errors_without_panicking() {
    let got = classes("{ nope: 'x', é }");
    assert!(got.contains(&(TokenClass::Error, "nope".into())));
    assert!(got.contains(&(TokenClass::Error, "é".into())));
    let joined: String = JsonLexer.tokenize("{\"a\": \"unterminated\n}").iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, "{\"a\": \"unterminated\n}");
}

#[test]
fn escaped_quotes_stay_inside_strings() {
    let got = classes(r#"["a\"b"]"#);
    assert_eq!(got[1], (TokenClass::String, r#""a\"b""#.into()));
}

#[test]
fn analyse_prefers_objects() {
    assert!(JsonLexer.analyse("{\"a\": 1}") > JsonLexer.analyse("[1, 2]"));
    assert_eq!(JsonLexer.analyse("def f(): pass"), 0.0);
}
