use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CodeshotError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        CodeshotError::unknown_language("x")
            .to_string()
            .contains("unknown language:")
    );
    assert!(CodeshotError::io("x").to_string().contains("io error:"));
    assert!(
        CodeshotError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        CodeshotError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CodeshotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
