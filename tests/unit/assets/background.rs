use super::*;
use rand::SeedableRng;

fn temp_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!(
        "codeshot_bg_{tag}_{}_{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("mkdir");
    dir
}

const SIDECAR: &str = r#"{"coefficients": [1, 0, 0, 0, 1, 0, 0, 0]}"#;

#[test]
fn backgrounds_without_sidecars_are_skipped() {
    let dir = temp_dir("skip");
    for name in ["b.jpg", "a.png", "c.jpeg", "notes.txt"] {
        std::fs::write(dir.join(name), b"x").expect("write");
    }
    std::fs::write(dir.join("a.json"), SIDECAR).expect("sidecar a");
    std::fs::write(dir.join("c.json"), SIDECAR).expect("sidecar c");

    let cache = MatrixCache::new();
    let pool = BackgroundPool::scan(&dir, &cache).expect("scan");
    assert_eq!(pool.paths(), &[dir.join("a.png"), dir.join("c.jpeg")]);
    assert_eq!(cache.len(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_directory_gives_empty_pool() {
    let dir = temp_dir("empty");
    let pool = BackgroundPool::scan(&dir, &MatrixCache::new()).expect("scan");
    assert!(pool.is_empty());
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    assert_eq!(pool.choose(&mut rng), None);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_directory_is_io_error() {
    let err = BackgroundPool::scan(Path::new("/no/such/dir"), &MatrixCache::new())
        .expect_err("missing");
    assert!(matches!(err, CodeshotError::Io(_)));
}

#[test]
fn choose_returns_a_member() {
    let pool = BackgroundPool::from_paths(vec!["x.jpg".into(), "y.jpg".into()]);
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let p = pool.choose(&mut rng).expect("non-empty");
        assert!(pool.paths().iter().any(|q| q == p));
    }
}
