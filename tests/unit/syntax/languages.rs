use super::*;
use crate::syntax::lexer::Lexer;

fn all() -> Vec<GenericLexer> {
    vec![
        python(),
        rust(),
        javascript(),
        typescript(),
        c(),
        cpp(),
        csharp(),
        java(),
        kotlin(),
        go(),
        swift(),
        php(),
        ruby(),
        bash(),
        lua(),
        sql(),
        css(),
    ]
}

#[test]
fn ids_are_lowercase_and_unique() {
    let mut seen = std::collections::BTreeSet::new();
    for lexer in all() {
        let id = lexer.id();
        assert_eq!(id, id.to_ascii_lowercase());
        assert!(seen.insert(id), "duplicate id {id}");
        for alias in lexer.aliases() {
            assert!(seen.insert(*alias), "alias {alias} collides");
        }
    }
}

#[test]
fn tables_are_static_and_populated() {
    let mut tables: Vec<(&'static str, &'static [StringDelim], &'static [Signature])> = Vec::new();
    for lexer in all() {
        let c = *lexer.config();
        tables.push((c.id, c.strings, c.signatures));
    }
    for (id, strings, signatures) in tables {
        assert!(!strings.is_empty(), "{id} has no string delimiters");
        assert!(!signatures.is_empty(), "{id} has no signatures");
        assert!(signatures.iter().all(|s| s.weight > 0.0 && !s.pattern.is_empty()), "{id}");
    }
}

#[test]
fn python_outscores_ruby_on_python_source() {
    let src = "def main():\n    print(\"hi\")\n\nif __name__ == \"__main__\":\n    main()\n";
    assert!(python().analyse(src) > ruby().analyse(src));
}

#[test]
fn ruby_outscores_python_on_ruby_source() {
    let src = "require 'json'\n\nclass Greeter\n  def hi\n    puts 'hi'\n  end\nend\n";
    assert!(ruby().analyse(src) > python().analyse(src));
}

#[test]
fn lua_block_comment_wins_over_line_comment() {
    let tokens = lua().tokenize("--[[ a\nb ]] local x = 1");
    assert_eq!(tokens[0].class, crate::syntax::token::TokenClass::Comment);
    assert_eq!(tokens[0].text, "--[[ a");
    let local = tokens.iter().find(|t| t.text == "local").map(|t| t.class);
    assert_eq!(local, Some(crate::syntax::token::TokenClass::Keyword));
}
