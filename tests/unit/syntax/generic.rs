use super::*;
use crate::syntax::languages;
use crate::syntax::token::Token;

fn classes_of<'a>(tokens: &'a [Token], text: &str) -> Vec<TokenClass> {
    tokens
        .iter()
        .filter(|t| t.text == text)
        .map(|t| t.class)
        .collect()
}

fn class_of(tokens: &[Token], text: &str) -> TokenClass {
    let found = classes_of(tokens, text);
    assert!(!found.is_empty(), "no token {text:?} in {tokens:?}");
    found[0]
}

#[test]
fn python_definition_line_is_classified() {
    let tokens = languages::python().tokenize("def greet(name):\n    return None  # done\n");
    assert_eq!(class_of(&tokens, "def"), TokenClass::Keyword);
    assert_eq!(class_of(&tokens, "greet"), TokenClass::NameFunction);
    assert_eq!(class_of(&tokens, "name"), TokenClass::Name);
    assert_eq!(class_of(&tokens, "return"), TokenClass::Keyword);
    assert_eq!(class_of(&tokens, "None"), TokenClass::KeywordConstant);
    assert_eq!(class_of(&tokens, "# done"), TokenClass::Comment);
    assert_eq!(class_of(&tokens, "("), TokenClass::Punctuation);
}

#[test]
fn class_keyword_marks_the_next_name() {
    let tokens = languages::python().tokenize("class Point(object): pass");
    assert_eq!(class_of(&tokens, "Point"), TokenClass::NameClass);
    assert_eq!(class_of(&tokens, "object"), TokenClass::NameBuiltin);
}

#[test]
fn tokens_concatenate_back_to_input() {
    let src = "import os\n\n@decorator\ndef f(x):\n    '''doc\n    more'''\n    return x * 0x1F + 1.5e3\r\n";
    let tokens = languages::python().tokenize(src);
    let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, src);
}

#[test]
fn triple_quoted_string_spans_lines() {
    let tokens = languages::python().tokenize("x = \"\"\"one\ntwo\"\"\" + y");
    assert_eq!(class_of(&tokens, "\"\"\"one"), TokenClass::String);
    assert_eq!(class_of(&tokens, "two\"\"\""), TokenClass::String);
    assert_eq!(class_of(&tokens, "y"), TokenClass::Name);
}

#[test]
fn block_comment_continues_until_closed() {
    let tokens = languages::c().tokenize("int a; /* start\nmiddle\nend */ int b;");
    assert_eq!(class_of(&tokens, "/* start"), TokenClass::Comment);
    assert_eq!(class_of(&tokens, "middle"), TokenClass::Comment);
    assert_eq!(class_of(&tokens, "end */"), TokenClass::Comment);
    assert_eq!(classes_of(&tokens, "int"), vec![TokenClass::KeywordType; 2]);
    assert_eq!(class_of(&tokens, "b"), TokenClass::Name);
}

#[test]
fn preprocessor_lines_are_one_token() {
    let tokens = languages::c().tokenize("#include <stdio.h>\nint main(void) {}");
    assert_eq!(class_of(&tokens, "#include <stdio.h>"), TokenClass::CommentPreproc);
    assert_eq!(class_of(&tokens, "main"), TokenClass::Name);
}

#[test]
fn rust_lifetimes_differ_from_char_literals() {
    let tokens = languages::rust().tokenize("fn get<'a>(s: &'a str) -> char { 'x' }");
    assert_eq!(class_of(&tokens, "get"), TokenClass::NameFunction);
    assert_eq!(classes_of(&tokens, "'a"), vec![TokenClass::NameVariable; 2]);
    assert_eq!(class_of(&tokens, "'x'"), TokenClass::String);
    assert_eq!(class_of(&tokens, "str"), TokenClass::KeywordType);
    assert_eq!(class_of(&tokens, "->"), TokenClass::Operator);
}

#[test]
fn rust_attributes_are_decorators() {
    let tokens = languages::rust().tokenize("#[derive(Debug)]\nstruct S;");
    assert_eq!(class_of(&tokens, "#[derive(Debug)]"), TokenClass::NameDecorator);
    assert_eq!(class_of(&tokens, "S"), TokenClass::NameClass);
}

#[test]
fn numbers_cover_radix_exponent_and_suffix() {
    let tokens = languages::rust().tokenize("let v = [0xff, 1_000u32, 2.5e-3, .5];");
    for n in ["0xff", "1_000u32", "2.5e-3", ".5"] {
        assert_eq!(class_of(&tokens, n), TokenClass::Number, "{n}");
    }
}

#[test]
fn escaped_quote_does_not_close_string() {
    let tokens = languages::javascript().tokenize(r#"const s = "a\"b"; x"#);
    assert_eq!(class_of(&tokens, r#""a\"b""#), TokenClass::String);
    assert_eq!(class_of(&tokens, "x"), TokenClass::Name);
}

#[test]
fn escape_before_multibyte_char_stays_on_char_boundary() {
    for (lexer, src) in [
        (languages::python(), "s = \"\\é\"\n"),
        (languages::rust(), "let s = \"caf\\é\";"),
        (languages::javascript(), "`\\日本`; '\\ü'"),
    ] {
        let tokens = lexer.tokenize(src);
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, src);
    }
    let tokens = languages::rust().tokenize("let s = \"caf\\é\"; x");
    assert_eq!(class_of(&tokens, "\"caf\\é\""), TokenClass::String);
    assert_eq!(class_of(&tokens, "x"), TokenClass::Name);
}

#[test]
fn shell_variables_use_sigils() {
    let tokens = languages::bash().tokenize("echo $HOME ${USER}");
    assert_eq!(class_of(&tokens, "echo"), TokenClass::NameBuiltin);
    assert_eq!(class_of(&tokens, "$HOME"), TokenClass::NameVariable);
    assert_eq!(class_of(&tokens, "${USER}"), TokenClass::NameVariable);
}

#[test]
fn case_insensitive_keywords() {
    let tokens = languages::sql().tokenize("SELECT id FROM users -- all");
    assert_eq!(class_of(&tokens, "SELECT"), TokenClass::Keyword);
    assert_eq!(class_of(&tokens, "FROM"), TokenClass::Keyword);
    assert_eq!(class_of(&tokens, "-- all"), TokenClass::Comment);
}

#[test]
fn stray_ascii_control_is_error_and_non_ascii_is_text() {
    let tokens = languages::python().tokenize("x\u{1}é");
    assert_eq!(class_of(&tokens, "x"), TokenClass::Name);
    assert_eq!(class_of(&tokens, "\u{1}"), TokenClass::Error);
    assert_eq!(class_of(&tokens, "é"), TokenClass::Name);
    let tokens = languages::python().tokenize("→");
    assert_eq!(class_of(&tokens, "→"), TokenClass::Text);
}

#[test]
fn shebang_gives_full_confidence() {
    assert_eq!(languages::python().analyse("#!/usr/bin/env python3\nx = 1\n"), 1.0);
    assert_eq!(languages::bash().analyse("#!/bin/bash\necho hi\n"), 1.0);
    assert!(languages::bash().analyse("#!/usr/bin/env python3\n") < 1.0);
}

#[test]
fn signature_scores_are_clamped_below_one() {
    let src = "def f(self):\n    if x:\n        print(1)\n    elif y:\n        return None\n";
    let score = languages::python().analyse(src);
    assert!(score > 0.5, "{score}");
    assert!(score <= 0.99);
    assert_eq!(languages::python().analyse(""), 0.0);
}

#[test]
fn shebang_matching_accepts_versions_only() {
    assert!(shebang_names("/usr/bin/python3.11", "python"));
    assert!(shebang_names("/usr/bin/env python", "python"));
    assert!(!shebang_names("/usr/bin/pythonista", "python"));
}
