// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
iced_gallery - search and browse Pixabay images

USAGE:
  iced_gallery [OPTIONS] [QUERY]

ARGS:
  QUERY                 Search submitted on startup

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --api-key <KEY>       Pixabay API key
  --verbose             Log debug output
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (flags, verbose) = match parse_flags(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_tracing(verbose);
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}

/// Parses the CLI into startup flags and the verbose switch.
fn parse_flags(mut args: pico_args::Arguments) -> Result<(Flags, bool), pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let api_key = args.opt_value_from_str("--api-key")?;
    let verbose = args.contains("--verbose");

    let rest: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();
    let unknown: Vec<String> = rest.iter().filter(|arg| arg.starts_with("--")).cloned().collect();
    if !unknown.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unknown option(s): {}", unknown.join(", ")),
        });
    }
    let query = (!rest.is_empty()).then(|| rest.join(" "));

    let flags = Flags {
        lang,
        query,
        config_dir,
        api_key,
    };
    Ok((flags, verbose))
}

/// `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "iced_gallery=debug"
    } else {
        "iced_gallery=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<(Flags, bool), pico_args::Error> {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        parse_flags(pico_args::Arguments::from_vec(args))
    }

    #[test]
    fn positional_words_form_the_query() {
        let (flags, verbose) = parse(&["--lang", "fr", "red", "car"]).expect("valid args");
        assert_eq!(flags.query.as_deref(), Some("red car"));
        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert!(!verbose);
    }

    #[test]
    fn options_are_read() {
        let (flags, verbose) =
            parse(&["--api-key", "KEY", "--config-dir", "/tmp/cfg", "--verbose"]).expect("valid");
        assert_eq!(flags.api_key.as_deref(), Some("KEY"));
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/cfg"));
        assert!(flags.query.is_none());
        assert!(verbose);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = parse(&["--colour", "cats"]).expect_err("unknown option");
        assert!(err.to_string().contains("--colour"));
    }
}
