use std::io;
use std::num::NonZeroUsize;
use clap::{Arg, ArgMatches, Command, ErrorKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const NAME: &str = env!("CARGO_PKG_NAME");

pub const SPACE: &str = "space";
pub const SPACE_DICT: &str = "space_dict";
pub const SPACE_INPUT: &str = "space_input";
pub const INPUT_PATH: &str = "input_path";
pub const DICTIONARY_PATH: &str = "dictionary_path";
pub const COLUMN: &str = "column";

pub fn build() -> ArgMatches {
    let mut command = command();

    match command.try_get_matches_from_mut(normalize_args(std::env::args())) {
        Ok(matches) => matches,
        Err(e) => {
            // wrong arg count: purpose and flag descriptions first, then the error
            if is_arg_count_error(e.kind()) {
                let _ = command.write_help(&mut io::stderr());
                eprintln!();
            }
            e.exit()
        }
    }
}

pub fn is_arg_count_error(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument)
}

pub fn command() -> Command<'static> {
    Command::new(NAME)
        .about("Translate a column in a TSV file using a dictionary")
        .version(VERSION)
        .arg_required_else_help(true)
        .author(AUTHOR)
        .arg(Arg::new(SPACE_DICT)
            .help("-sd dictionary uses space as delimiter instead of tabs")
            .long("space-dict")
        )
        .arg(Arg::new(SPACE_INPUT)
            .help("-si input uses space as delimiter instead of tabs")
            .long("space-input")
        )
        .arg(Arg::new(SPACE)
            .help("equivalent to -sd -si")
            .short('s')
            .long("space")
        )
        .arg(Arg::new(INPUT_PATH)
            .help("Input file to translate")
            .required(true)
            .index(1)
        )
        .arg(Arg::new(DICTIONARY_PATH)
            .help("Dictionary file, key and value on each line")
            .required(true)
            .index(2)
        )
        .arg(Arg::new(COLUMN)
            .help("1-based column to translate")
            .required(true)
            .index(3)
            .validator(|value| value.parse::<NonZeroUsize>())
        )
}

/// `-sd` and `-si` are two letter flags behind a single dash,
/// clap would read them as `-s -d`, so they are rewritten to their long form.
pub fn normalize_args<I>(args: I) -> Vec<String>
    where I: IntoIterator<Item=String>
{
    args.into_iter()
        .map(|arg| match arg.as_str() {
            "-sd" => "--space-dict".to_string(),
            "-si" => "--space-input".to_string(),
            _ => arg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::cli::{command, is_arg_count_error, normalize_args, COLUMN, DICTIONARY_PATH, INPUT_PATH, SPACE, SPACE_DICT, SPACE_INPUT};

    fn args(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn positional_args() {
        let matches = command().try_get_matches_from(args(&["translate-field", "in.tsv", "dict.tsv", "2"])).unwrap();

        assert_eq!(matches.value_of(INPUT_PATH), Some("in.tsv"));
        assert_eq!(matches.value_of(DICTIONARY_PATH), Some("dict.tsv"));
        assert_eq!(matches.value_of(COLUMN), Some("2"));
        assert!(!matches.is_present(SPACE));
        assert!(!matches.is_present(SPACE_DICT));
        assert!(!matches.is_present(SPACE_INPUT));
    }

    #[test]
    fn two_letter_flags() {
        let matches = command().try_get_matches_from(args(&["translate-field", "-sd", "in.tsv", "dict.txt", "1"])).unwrap();
        assert!(matches.is_present(SPACE_DICT));
        assert!(!matches.is_present(SPACE_INPUT));
        assert!(!matches.is_present(SPACE));

        let matches = command().try_get_matches_from(args(&["translate-field", "-si", "in.txt", "dict.tsv", "1"])).unwrap();
        assert!(matches.is_present(SPACE_INPUT));
        assert!(!matches.is_present(SPACE_DICT));

        let matches = command().try_get_matches_from(args(&["translate-field", "in.txt", "dict.txt", "1", "-s"])).unwrap();
        assert!(matches.is_present(SPACE));
    }

    #[test]
    fn wrong_arg_count() {
        let e = command().try_get_matches_from(args(&["translate-field", "in.tsv", "dict.tsv"])).unwrap_err();
        assert!(is_arg_count_error(e.kind()));

        let e = command().try_get_matches_from(args(&["translate-field", "in.tsv", "dict.tsv", "1", "extra"])).unwrap_err();
        assert!(is_arg_count_error(e.kind()));
    }

    #[test]
    fn invalid_column_is_not_arg_count_error() {
        let e = command().try_get_matches_from(args(&["translate-field", "in.tsv", "dict.tsv", "two"])).unwrap_err();
        assert!(!is_arg_count_error(e.kind()));
    }

    #[test]
    fn column_must_be_positive_integer() {
        assert!(command().try_get_matches_from(args(&["translate-field", "in.tsv", "dict.tsv", "two"])).is_err());
        assert!(command().try_get_matches_from(args(&["translate-field", "in.tsv", "dict.tsv", "0"])).is_err());
        assert!(command().try_get_matches_from(args(&["translate-field", "in.tsv", "dict.tsv", "-1"])).is_err());
    }
}
