use super::*;
use std::path::PathBuf;

fn temp_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!(
        "codeshot_compositor_{tag}_{}_{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("mkdir");
    dir
}

fn canvas(w: u32, h: u32, rgb: [u8; 3]) -> CodeCanvas {
    CodeCanvas {
        width: w,
        height: h,
        rgb8: rgb.repeat((w * h) as usize),
    }
}

#[test]
fn explicit_matrix_bypasses_sidecar() {
    let dir = temp_dir("explicit");
    let bg_path = dir.join("bg.png");
    image::RgbImage::from_pixel(4, 4, image::Rgb([200, 200, 200]))
        .save(&bg_path)
        .expect("save bg");

    let comp = Compositor::new(Arc::new(MatrixCache::new()));
    let out = comp
        .blend(
            &canvas(2, 2, [128, 128, 128]),
            &bg_path,
            Some(&ProjectiveMatrix::IDENTITY),
        )
        .expect("blend");
    assert_eq!(out.get_pixel(0, 0).0, [100, 100, 100]);
    assert_eq!(out.get_pixel(3, 3).0, [200, 200, 200]);
    assert!(comp.cache().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cached_matrix_is_used_and_output_written() {
    let dir = temp_dir("cached");
    let bg_path = dir.join("bg.jpg");
    image::RgbImage::from_pixel(5, 3, image::Rgb([255, 255, 255]))
        .save(&bg_path)
        .expect("save bg");
    std::fs::write(
        dir.join("bg.json"),
        r#"{"coefficients": [1, 0, 0, 0, 1, 0, 0, 0]}"#,
    )
    .expect("sidecar");

    let comp = Compositor::new(Arc::new(MatrixCache::new()));
    let out_path = dir.join("out.png");
    comp.composite(&canvas(5, 3, [10, 20, 30]), &bg_path, None, &out_path)
        .expect("composite");
    assert!(comp.cache().contains(&bg_path));

    let written = image::open(&out_path).expect("open output").into_rgb8();
    assert_eq!(written.dimensions(), (5, 3));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unreadable_background_is_io_error() {
    let comp = Compositor::new(Arc::new(MatrixCache::new()));
    let err = comp
        .blend(&canvas(1, 1, [0, 0, 0]), Path::new("/no/such/bg.png"), None)
        .expect_err("missing background");
    assert!(matches!(err, CodeshotError::Io(_)));
}

#[test]
fn missing_sidecar_is_configuration_error() {
    let dir = temp_dir("nosidecar");
    let bg_path = dir.join("bg.png");
    image::RgbImage::new(2, 2).save(&bg_path).expect("save bg");

    let comp = Compositor::new(Arc::new(MatrixCache::new()));
    let err = comp
        .blend(&canvas(1, 1, [0, 0, 0]), &bg_path, None)
        .expect_err("no sidecar");
    assert!(matches!(err, CodeshotError::Configuration(_)));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_output_is_io_error() {
    let dir = temp_dir("unwritable");
    let bg_path = dir.join("bg.png");
    image::RgbImage::new(2, 2).save(&bg_path).expect("save bg");

    let comp = Compositor::new(Arc::new(MatrixCache::new()));
    let err = comp
        .composite(
            &canvas(1, 1, [0, 0, 0]),
            &bg_path,
            Some(&ProjectiveMatrix::IDENTITY),
            &dir.join("missing_dir").join("out.png"),
        )
        .expect_err("no parent dir");
    assert!(matches!(err, CodeshotError::Io(_)));

    let _ = std::fs::remove_dir_all(&dir);
}
