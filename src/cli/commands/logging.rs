//! `-v`/`--verbose`, repeatable, or `USERADMIN_LOG_LEVEL` set to a level name
//! or its index. Both resolve to an index into [`LEVELS`].

use clap::{builder::ValueParser, Arg, ArgAction, ArgMatches, Command};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";

/// Indexed by verbosity; extra `-v` flags stay at trace.
const LEVELS: [(&str, Level); 5] = [
    ("error", Level::ERROR),
    ("warn", Level::WARN),
    ("info", Level::INFO),
    ("debug", Level::DEBUG),
    ("trace", Level::TRACE),
];

fn parse_verbosity(text: &str) -> Result<u8, String> {
    let text = text.trim();
    let index = match text.parse::<usize>() {
        Ok(index) => (index < LEVELS.len()).then_some(index),
        Err(_) => LEVELS
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(text)),
    };

    index
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| {
            format!("invalid log level '{text}': use 0-4 or error, warn, info, debug, trace")
        })
}

#[must_use]
pub fn verbosity_parser() -> ValueParser {
    ValueParser::new(parse_verbosity)
}

/// Level selected by the parsed arguments, error when nothing was given.
#[must_use]
pub fn level(matches: &ArgMatches) -> Level {
    let verbosity = matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0);
    LEVELS
        .get(usize::from(verbosity))
        .map_or(Level::TRACE, |(_, level)| *level)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log more: -v warn, -vv info, -vvv debug, -vvvv trace (default: error)")
            .env("USERADMIN_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(verbosity_parser()),
    )
}
