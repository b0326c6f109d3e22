use super::*;
use serde_json::json;

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(Rgb8::from_hex("#272822").unwrap(), Rgb8::new(0x27, 0x28, 0x22));
    assert_eq!(Rgb8::from_hex("E0E0E0").unwrap(), Rgb8::new(0xe0, 0xe0, 0xe0));
    assert_eq!(Rgb8::from_hex("#fff").unwrap(), Rgb8::WHITE);
    assert!(Rgb8::from_hex("#12345").is_err());
    assert!(Rgb8::from_hex("#gg0000").is_err());
}

#[test]
fn serde_accepts_hex_and_array() {
    let c: Rgb8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgb8::new(255, 0, 0));

    let c: Rgb8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));

    assert_eq!(serde_json::to_value(c).unwrap(), json!("#010203"));
}
