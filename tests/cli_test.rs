use clap::Parser;
use stamp::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("stamp")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./template", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, PathBuf::from("./template"));
    assert_eq!(parsed.output_dir, PathBuf::from("./output"));
    assert!(!parsed.verbose);
    assert!(!parsed.stdin);
}

#[test]
fn test_output_dir_defaults_to_current_dir() {
    let args = make_args(&["templates/team-project"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("."));
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-v", "-s", "./template", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert!(parsed.stdin);
}

#[test]
fn test_missing_args() {
    let args = make_args(&[]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./template", "./output", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
