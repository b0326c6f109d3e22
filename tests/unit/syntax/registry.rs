use super::*;

const PYTHON_SRC: &str = "import os\n\ndef main():\n    print(os.getcwd())\n\nif __name__ == '__main__':\n    main()\n";

#[test]
fn hint_matches_id_name_and_alias() {
    let reg = LexerRegistry::builtin();
    for hint in ["python", "Python", "  PY  ", "python3"] {
        let lexer = reg.resolve(Some(hint), "").expect("resolve");
        assert_eq!(lexer.id(), "python", "{hint}");
    }
    assert_eq!(reg.resolve(Some("C++"), "").expect("resolve").id(), "cpp");
    assert_eq!(reg.resolve(Some("golang"), "").expect("resolve").id(), "go");
}

#[test]
fn unknown_hint_falls_back_to_guessing() {
    let reg = LexerRegistry::builtin();
    let lexer = reg.resolve(Some("not_a_real_lang"), PYTHON_SRC).expect("resolve");
    assert_eq!(lexer.id(), "python");
}

#[test]
fn empty_hint_is_treated_as_absent() {
    let reg = LexerRegistry::builtin();
    let lexer = reg.resolve(Some("   "), PYTHON_SRC).expect("resolve");
    assert_eq!(lexer.id(), "python");
}

#[test]
fn unrecognisable_text_uses_fallback() {
    let reg = LexerRegistry::builtin();
    let lexer = reg.resolve(None, "lorem ipsum dolor").expect("resolve");
    assert_eq!(lexer.id(), "text");
}

#[test]
fn registry_without_fallback_reports_unknown_language() {
    let mut reg = LexerRegistry::new();
    reg.register(Arc::new(languages::python()));
    let err = match reg.resolve(Some("cobol"), "lorem ipsum") {
        Ok(lexer) => panic!("unexpected lexer {}", lexer.id()),
        Err(err) => err,
    };
    assert!(matches!(err, CodeshotError::UnknownLanguage(ref h) if h == "cobol"));
}

#[test]
fn guess_prefers_earlier_registration_on_ties() {
    struct Fixed(&'static str);
    impl Lexer for Fixed {
        fn id(&self) -> &'static str {
            self.0
        }
        fn name(&self) -> &'static str {
            self.0
        }
        fn analyse(&self, _text: &str) -> f32 {
            0.5
        }
        fn tokenize_line(
            &self,
            _line: &str,
            state: crate::syntax::token::LineState,
        ) -> (Vec<crate::syntax::token::LineSpan>, crate::syntax::token::LineState) {
            (Vec::new(), state)
        }
    }

    let mut reg = LexerRegistry::new();
    reg.register(Arc::new(Fixed("first")));
    reg.register(Arc::new(Fixed("second")));
    assert_eq!(reg.guess("anything").map(|l| l.id()), Some("first"));
}

#[test]
fn catalog_is_sorted_and_stable() {
    let reg = LexerRegistry::builtin();
    let first = reg.list_supported_languages();
    assert!(first.windows(2).all(|w| w[0] < w[1]));
    assert!(first.iter().any(|id| id == "python"));
    assert!(first.iter().any(|id| id == "json"));
    assert!(first.iter().any(|id| id == "text"));
    let again = reg.list_supported_languages();
    assert!(std::ptr::eq(first, again));
    assert_eq!(first.len(), reg.len());
}

#[test]
fn shebang_beats_signatures() {
    let reg = LexerRegistry::builtin();
    let lexer = reg.resolve(None, "#!/bin/sh\nif [ -f x ]; then echo ok; fi\n").expect("resolve");
    assert_eq!(lexer.id(), "bash");
}

const MIXED_UTF8_CORPUS: &[&str] = &[
    "s = \"\\é\"\nt = '\\日'\n",
    "let c = '\\ü'; let s = \"caf\\é\\\n",
    "\"unterminated é\nnext line \\",
    "'''multi ünïcödé\nstill open \\",
    "/* 注释 never closed\n\\\n",
    "echo ${é} $ü \"\\\u{1F600}\"\r\n\tdone\\",
    "#[attr(\"é\")]\n#![inner]\n@décor\n",
    "{\"ключ\": \"знач\\u0435\\é\", \"b\": [1, -2.5e3, tru]}\n",
    "--[[ lua 块\n]] x = [[\\",
    "\\",
    "\u{301}\u{200d}\t\u{feff}mixed\u{0}",
];

#[test]
fn every_builtin_lexer_round_trips_mixed_utf8() {
    let reg = LexerRegistry::builtin();
    assert!(!reg.lexers.is_empty());
    for lexer in &reg.lexers {
        for src in MIXED_UTF8_CORPUS {
            let tokens = lexer.tokenize(src);
            let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
            assert_eq!(&joined, src, "lexer {}", lexer.id());
        }
    }
}
