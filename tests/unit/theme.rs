use super::*;

#[test]
fn subclasses_inherit_parent_color() {
    let t = Theme::light();
    assert_eq!(t.color_for(TokenClass::KeywordType), rgb(0x204a87));
    assert_eq!(t.color_for(TokenClass::CommentPreproc), rgb(0x8f5902));
    assert_eq!(t.color_for(TokenClass::Name), t.foreground);
    assert_eq!(t.color_for(TokenClass::Text), t.foreground);
}

#[test]
fn dark_overrides_take_precedence_over_parents() {
    let t = Theme::dark();
    assert_eq!(t.color_for(TokenClass::KeywordNamespace), rgb(0xff4689));
    assert_eq!(t.color_for(TokenClass::KeywordConstant), rgb(0x66d9ef));
    assert_eq!(t.color_for(TokenClass::NameFunction), rgb(0xa6e22e));
    assert_eq!(t.color_for(TokenClass::NameVariable), rgb(0xf8f8f2));
}

#[test]
fn variants_share_font_and_layout() {
    let (l, d) = (ThemeVariant::Light.theme(), ThemeVariant::Dark.theme());
    assert_eq!(l.font_family, "DejaVu Sans Mono");
    assert_eq!(l.font_family, d.font_family);
    assert_eq!(l.font_size, d.font_size);
    assert_eq!(l.image_pad, 8);
    assert_eq!(d.line_number_bg, rgb(0x272822));
    assert_eq!(l.line_number_bg, rgb(0xe0e0e0));
}

#[test]
fn json_fills_missing_fields_from_light() {
    let t: Theme = serde_json::from_str(r##"{"background": "#000", "font_size": 20}"##)
        .expect("parse");
    assert_eq!(t.background, Rgb8::BLACK);
    assert_eq!(t.font_size, 20.0);
    assert_eq!(t.foreground, Theme::light().foreground);
    assert_eq!(t.token_colors, Theme::light().token_colors);
}

#[test]
fn token_colors_use_snake_case_keys() {
    let t: Theme = serde_json::from_str(r##"{"token_colors": {"keyword_type": "#123456"}}"##)
        .expect("parse");
    assert_eq!(t.color_for(TokenClass::KeywordType), rgb(0x123456));
    assert_eq!(t.color_for(TokenClass::Keyword), t.foreground);
}

#[test]
fn unreadable_theme_file_is_configuration_error() {
    let err = Theme::from_json_path(Path::new("/definitely/not/here.json"))
        .expect_err("missing file");
    assert!(matches!(err, CodeshotError::Configuration(_)));
}
