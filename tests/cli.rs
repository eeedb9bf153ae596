//! End-to-end runs through argument parsing and rendering, using in-memory
//! streams in place of the process's stdin and stdout.

use std::io::Cursor;

use clap::Parser;
use overlong::cli::{ByteLength, Cli, Format};
use overlong::{overlong, EncodingMode, Width};

fn try_parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

fn run(args: &[&str], stdin: &str) -> String {
    let cli = try_parse(args).unwrap_or_else(|e| panic!("expected parse to succeed, got:\n{e}"));
    let mut stdout = Vec::new();
    overlong(&cli, Cursor::new(stdin.to_owned()), &mut stdout).unwrap();
    String::from_utf8(stdout).unwrap()
}

#[test]
fn defaults() {
    let cli = try_parse(&["overlong"]).unwrap();
    assert_eq!(cli.input, None);
    assert_eq!(cli.byte_length, ByteLength::Normal);
    assert_eq!(cli.format, Format::String);
    assert_eq!(cli.log_level(), tracing::Level::WARN);
}

#[test]
fn long_and_short_flags() {
    let cli = try_parse(&["overlong", "-b", "3", "-f", "table", "x"]).unwrap();
    assert_eq!(EncodingMode::from(cli.byte_length), EncodingMode::Overlong(Width::Three));
    assert_eq!(cli.format, Format::Table);
    assert_eq!(cli.input.as_deref(), Some("x"));

    let cli = try_parse(&["overlong", "--byte-length", "4", "--format", "string"]).unwrap();
    assert_eq!(EncodingMode::from(cli.byte_length), EncodingMode::Overlong(Width::Four));
}

#[test]
fn invalid_choices_are_rejected() {
    for args in [
        &["overlong", "-b", "1"][..],
        &["overlong", "-b", "5"],
        &["overlong", "--byte-length", "overlong"],
        &["overlong", "-f", "json"],
    ] {
        let error = try_parse(args).expect_err("expected parse to fail");
        assert_eq!(error.kind(), clap::error::ErrorKind::InvalidValue);
        assert_ne!(error.exit_code(), 0);
    }
}

#[test]
fn debug_and_quiet_conflict() {
    assert!(try_parse(&["overlong", "--debug", "--quiet"]).is_err());
    let cli = try_parse(&["overlong", "-d"]).unwrap();
    assert_eq!(cli.log_level(), tracing::Level::DEBUG);
}

#[test]
fn standard_ascii() {
    assert_eq!(run(&["overlong", "A"], ""), "\\x41\n");
}

#[test]
fn two_byte_ascii() {
    assert_eq!(run(&["overlong", "-b", "2", "A"], ""), "\\xC1\\x81\n");
}

#[test]
fn empty_stdin_string() {
    assert_eq!(run(&["overlong"], ""), "\n");
}

#[test]
fn empty_stdin_table() {
    let output = run(&["overlong", "-f", "table"], "  \n");
    assert_eq!(output.lines().count(), 4);
    assert_eq!(output.lines().nth(1), Some("| Char | Unicode  | Encoded (normal-byte-long) |"));
}

#[test]
fn stdin_is_used_without_argument() {
    assert_eq!(run(&["overlong", "-b", "2"], "\t/\n"), "\\xC0\\xAF\n");
}

#[test]
fn emoji_at_four_bytes_is_standard() {
    let forced = run(&["overlong", "-b", "4", "😀"], "");
    let standard = run(&["overlong", "😀"], "");
    assert_eq!(forced, "\\xF0\\x9F\\x98\\x80\n");
    assert_eq!(forced, standard);
}

#[test]
fn table_output() {
    let output = run(&["overlong", "-b", "3", "-f", "table", "é"], "");
    let expected = "\
+------+----------+-----------------------+
| Char | Unicode  | Encoded (3-byte-long) |
+------+----------+-----------------------+
| é    | U+00E9   | \\xE0\\x83\\xA9          |
+------+----------+-----------------------+
";
    assert_eq!(output, expected);
}

#[test]
fn repeated_runs_are_identical() {
    let args = ["overlong", "-b", "3", "-f", "table", "héllo wörld 😀"];
    assert_eq!(run(&args, ""), run(&args, ""));
}
