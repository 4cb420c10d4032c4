use clap::Parser;
use lineatur::config::Options;
use lineatur::layout::{Margins, Slant};
use lineatur::{build_document, pagesize, write_file, LineaturError, Mm};

fn options(args: &[&str]) -> Options {
    let mut argv = vec!["lineatur"];
    argv.extend_from_slice(args);
    Options::try_parse_from(argv).expect("arguments parse")
}

fn rendered(args: &[&str]) -> String {
    let config = options(args).resolve().unwrap();
    let mut out = Vec::new();
    build_document(&config).unwrap().write(&mut out).unwrap();
    String::from_utf8_lossy(&out).into_owned()
}

fn strokes(pdf: &str) -> usize {
    pdf.lines().filter(|line| line.trim() == "S").count()
}

#[test]
fn command_line_defaults() {
    assert_eq!(options(&[]), Options::default());
}

#[test]
fn short_and_alias_flags() {
    let parsed = options(&[
        "-o", "kurrent.pdf", "--ps", "A5", "-p", "2:1:2", "-s", "60:10", "-m", "10:10:10:10",
        "--lh", "12", "--ls", "6", "--lw", "0.5",
    ]);
    let config = parsed.resolve().unwrap();
    assert_eq!(config.output.to_str(), Some("kurrent.pdf"));
    assert_eq!(config.paper, pagesize::A5);
    assert_eq!(config.ruling.proportions, vec![2.0, 1.0, 2.0]);
    assert_eq!(config.ruling.slant, Some(Slant::new(60.0, 10)));
    assert_eq!(config.margins, Margins::all(Mm(10.0)));
    assert_eq!(config.ruling.line_height, Mm(12.0));
    assert_eq!(config.ruling.line_spacing, Mm(6.0));
    assert_eq!(config.ruling.line_width, Mm(0.5));
}

#[test]
fn configuration_errors() {
    assert!(matches!(
        options(&["--ps", "Tabloid"]).resolve(),
        Err(LineaturError::UnknownPaperSize(_))
    ));
    assert!(matches!(
        options(&["-p", "2:a:2"]).resolve(),
        Err(LineaturError::MalformedNumberList { option: "-p", .. })
    ));
    assert!(matches!(
        options(&["-s", "60:10:2"]).resolve(),
        Err(LineaturError::WrongArity { option: "-s", .. })
    ));
    assert!(matches!(
        options(&["-m", "5:5"]).resolve(),
        Err(LineaturError::WrongArity { option: "-m", .. })
    ));
}

#[test]
fn non_positive_sizes_are_rejected_by_the_parser() {
    for args in [
        ["--lh", "-5"],
        ["--lh", "0"],
        ["--lw", "0"],
        ["--lw", "-0.3"],
        ["--pages", "0"],
    ] {
        let mut argv = vec!["lineatur"];
        argv.extend_from_slice(&args);
        assert!(Options::try_parse_from(argv).is_err(), "{args:?}");
    }
}

#[test]
fn zero_line_height_and_spacing_cannot_loop() {
    assert!(Options::try_parse_from(["lineatur", "--lh", "0", "--ls", "0"]).is_err());

    let pdf = rendered(&["--ls", "0"]);
    // groups stacked back to back: 5, 15, ..., 265
    assert_eq!(strokes(&pdf), 27);
}

#[test]
fn oversized_slant_count_is_rejected() {
    assert!(matches!(
        options(&["-s", "60:99999999999"]).resolve(),
        Err(LineaturError::InvalidInput(_))
    ));
}

#[test]
fn single_baseline_page() {
    // one baseline per group, 18 groups on A4 with default margins
    let pdf = rendered(&[]);
    assert!(pdf.starts_with("%PDF-"));
    assert_eq!(strokes(&pdf), 18);
}

#[test]
fn kurrent_page() {
    // 4 lines + 2 borders + 10 slanted lines per group
    let pdf = rendered(&["-p", "2:1:2", "-s", "60:10"]);
    assert_eq!(strokes(&pdf), 18 * 16);
    assert!(pdf.contains("/Title"));
}

#[test]
fn pages_are_identical_copies() {
    let pdf = rendered(&["-p", "1:1:1", "--pages", "3"]);
    assert!(pdf.contains("/Count 3"));
    assert_eq!(strokes(&pdf), 3 * 18 * 6);
}

#[test]
fn zero_proportions_fail_before_writing() {
    let path = std::env::temp_dir().join(format!("lineatur-zero-{}.pdf", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut parsed = options(&["-p", "0:0"]);
    parsed.output = path.clone();
    let config = parsed.resolve().unwrap();
    assert!(matches!(
        write_file(&config),
        Err(LineaturError::InvalidInput(_))
    ));
    assert!(!path.exists());
}

#[test]
fn writes_the_output_file() {
    let path = std::env::temp_dir().join(format!("lineatur-out-{}.pdf", std::process::id()));

    let mut parsed = options(&["-p", "3:2:3", "-s", "52:10", "--ps", "Letter"]);
    parsed.output = path.clone();
    write_file(&parsed.resolve().unwrap()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    std::fs::remove_file(&path).unwrap();
}
