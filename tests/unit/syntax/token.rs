use super::*;

#[test]
fn every_class_reaches_text() {
    for class in TokenClass::ALL {
        let mut cur = class;
        let mut steps = 0;
        while let Some(parent) = cur.parent() {
            cur = parent;
            steps += 1;
            assert!(steps < 4, "{class:?} has a parent cycle");
        }
        assert_eq!(cur, TokenClass::Text);
    }
}

#[test]
fn keyword_family_inherits_from_keyword() {
    assert_eq!(TokenClass::KeywordType.parent(), Some(TokenClass::Keyword));
    assert_eq!(TokenClass::CommentPreproc.parent(), Some(TokenClass::Comment));
    assert_eq!(TokenClass::NameFunction.parent(), Some(TokenClass::Name));
    assert!(TokenClass::KeywordNamespace.is_keyword());
    assert!(!TokenClass::Name.is_keyword());
}

#[test]
fn serde_uses_snake_case_names() {
    let v = serde_json::to_value(TokenClass::KeywordConstant).unwrap();
    assert_eq!(v, serde_json::json!("keyword_constant"));
}
