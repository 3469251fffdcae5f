mod app;
mod container;
mod error;
mod updater;

use std::{ffi::OsString, iter, process::ExitCode};

use app::{CliApp, Request};
use clap::Parser;

const USAGE: &str = "Usage: jset <file_path> <section> <key> <value>";

#[derive(Debug, Parser)]
#[command(name = "jset", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    file_path: String,
    section: String,
    key: String,
    value: String,
}

impl Args {
    /// Every argument is positional, including `-x`, `--help` and `--`.
    fn parse_positional(args: impl IntoIterator<Item = OsString>) -> Result<Self, clap::Error> {
        let mut args = args.into_iter();
        let binary_name = args.next().unwrap_or_else(|| OsString::from("jset"));
        Self::try_parse_from(
            iter::once(binary_name)
                .chain(iter::once(OsString::from("--")))
                .chain(args),
        )
    }
}

fn main() -> ExitCode {
    let Ok(args) = Args::parse_positional(std::env::args_os()) else {
        println!("{USAGE}");
        return ExitCode::FAILURE;
    };

    CliApp::new(Request {
        file_path: args.file_path,
        section: args.section,
        key: args.key,
        value: args.value,
    })
    .run()
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Option<Args> {
        Args::parse_positional(iter::once("jset").chain(args.iter().copied()).map(OsString::from))
            .ok()
    }

    #[test]
    fn exactly_four_arguments_test() {
        assert!(parse(&[]).is_none());
        assert!(parse(&["file.json", "S", "K"]).is_none());
        assert!(parse(&["file.json", "S", "K", "V", "extra"]).is_none());

        let args = parse(&["file.json", "S", "K", "V"]).unwrap();
        assert_eq!(args.file_path, "file.json");
        assert_eq!(args.section, "S");
        assert_eq!(args.key, "K");
        assert_eq!(args.value, "V");
    }

    #[test]
    fn hyphen_values_test() {
        let args = parse(&["file.json", "-S", "--key", "-1"]).unwrap();
        assert_eq!(args.section, "-S");
        assert_eq!(args.key, "--key");
        assert_eq!(args.value, "-1");
    }

    #[test]
    fn help_is_not_a_flag_test() {
        assert!(parse(&["--help"]).is_none());
        assert!(parse(&["-V"]).is_none());

        let args = parse(&["--help", "-h", "--version", "-V"]).unwrap();
        assert_eq!(args.file_path, "--help");
        assert_eq!(args.value, "-V");
    }

    #[test]
    fn double_dash_is_a_value_test() {
        let args = parse(&["file.json", "--", "K", "--"]).unwrap();
        assert_eq!(args.section, "--");
        assert_eq!(args.key, "K");
        assert_eq!(args.value, "--");

        let args = parse(&["--", "--", "--", "--"]).unwrap();
        assert_eq!(args.file_path, "--");
        assert_eq!(args.value, "--");

        assert!(parse(&["--", "file.json", "S", "K", "V"]).is_none());
        assert!(parse(&["file.json", "S", "--"]).is_none());
    }

    #[test]
    fn empty_arguments_test() {
        let args = parse(&["file.json", "", "", ""]).unwrap();
        assert_eq!(args.section, "");
        assert_eq!(args.key, "");
        assert_eq!(args.value, "");
    }
}
