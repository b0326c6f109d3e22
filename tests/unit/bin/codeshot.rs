use super::*;
use clap::CommandFactory as _;
use rand::SeedableRng as _;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn highlight_accepts_lists_and_ranges() {
    let ranges = parse_highlight("1, 3,5-7").expect("parse");
    assert_eq!(
        ranges.lines(47).into_iter().collect::<Vec<_>>(),
        vec![1, 3, 5, 6, 7]
    );
    assert!(parse_highlight("").expect("empty").lines(47).is_empty());
}

#[test]
fn highlight_rejects_zero_and_reversed_ranges() {
    assert!(parse_highlight("0").is_err());
    assert!(parse_highlight("4-2").is_err());
    assert!(parse_highlight("x").is_err());
}

#[test]
fn huge_highlight_ranges_are_capped_at_max_lines() {
    let ranges = parse_highlight("2-99999999999,60").expect("parse");
    let lines = ranges.lines(47);
    assert_eq!(lines.len(), 46);
    assert_eq!(lines.first(), Some(&2));
    assert_eq!(lines.last(), Some(&47));
    assert!(ranges.lines(1).is_empty());
}

#[test]
fn quad_needs_eight_numbers() {
    let q = parse_quad("0,0, 10,0,10,5,0,5").expect("quad");
    assert_eq!(q[2], Point::new(10.0, 5.0));
    assert!(parse_quad("1,2,3").is_err());
    assert!(parse_quad("1,2,3,4,5,6,7,nope").is_err());
}

#[test]
fn random_names_are_twelve_hex_digits() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let a = random_name(&mut rng);
    let b = random_name(&mut rng);
    assert_eq!(a.len(), 12);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn render_parses_batch_arguments() {
    let cli = Cli::try_parse_from([
        "codeshot",
        "-v",
        "render",
        "--code",
        "a.py",
        "--code",
        "b.rs",
        "--backgrounds",
        "bgs",
        "--out-dir",
        "out",
        "--highlight",
        "2-3",
        "--dark",
    ])
    .expect("parse");
    assert_eq!(cli.verbose, 1);
    let Command::Render(args) = cli.cmd else {
        panic!("expected render");
    };
    assert_eq!(args.code.len(), 2);
    assert!(args.dark);
    assert_eq!(args.max_lines, 47);
    assert_eq!(
        args.highlight
            .map(|h| h.lines(args.max_lines).into_iter().collect::<Vec<_>>()),
        Some(vec![2, 3])
    );
}

#[test]
fn render_requires_a_background_and_an_output() {
    assert!(Cli::try_parse_from(["codeshot", "render", "--code", "a.py", "--out", "o.png"]).is_err());
    assert!(
        Cli::try_parse_from(["codeshot", "render", "--code", "a.py", "--background", "b.jpg"])
            .is_err()
    );
    assert!(
        Cli::try_parse_from([
            "codeshot",
            "render",
            "--code",
            "a.py",
            "--background",
            "b.jpg",
            "--backgrounds",
            "dir",
            "--out",
            "o.png",
        ])
        .is_err()
    );
}

#[test]
fn calibrate_writes_a_round_tripping_sidecar() {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!(
        "codeshot_cli_calibrate_{}_{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("mkdir");
    let out = dir.join("bg.json");

    let quad = [
        Point::new(10.0, 20.0),
        Point::new(110.0, 25.0),
        Point::new(105.0, 90.0),
        Point::new(12.0, 80.0),
    ];
    cmd_calibrate(CalibrateArgs {
        width: 200,
        height: 100,
        quad,
        out: out.clone(),
    })
    .expect("calibrate");

    let bytes = std::fs::read(&out).expect("read sidecar");
    let desc = codeshot::SidecarDescriptor::parse(&bytes, &out).expect("parse");
    let m = desc.matrix(&out).expect("matrix");
    let p = m.map_point(quad[2]).expect("finite");
    assert!((p.x - 200.0).abs() < 1e-6 && (p.y - 100.0).abs() < 1e-6);

    let _ = std::fs::remove_dir_all(&dir);
}
