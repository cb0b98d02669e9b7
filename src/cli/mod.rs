pub mod compare;
pub mod flags;

use clap::{ArgAction, Parser};
use restdiff::{inspect::DEFAULT_TIMEOUT_SECS, path::KeyPath};

/// RestDiff Inspector: compare data from two REST API endpoints with different structures
#[derive(Debug, Parser)]
#[command(name = "restdiff", version, about)]
pub struct Cli {
    /// URL for the first API endpoint (also accepted as -u1)
    #[arg(long, value_name = "URL")]
    pub url1: String,

    /// URL for the second API endpoint (also accepted as -u2)
    #[arg(long, value_name = "URL")]
    pub url2: String,

    /// Comma-separated list of keys to extract data from the first API (also accepted as -k1)
    ///
    /// Arrays met along the way are walked element by element, e.g. `data,users,id`
    /// collects every `id` of every entry in `data.users`. Use `\,` for a literal comma.
    #[arg(long, value_name = "KEYS")]
    pub keys1: KeyPath,

    /// Comma-separated list of keys to extract data from the second API (also accepted as -k2)
    #[arg(long, value_name = "KEYS")]
    pub keys2: KeyPath,

    /// Timeout for API requests in seconds
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        env = "RESTDIFF_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Increase log verbosity on stderr (-v, -vv, -vvv); RUST_LOG overrides it
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
