mod cli;

use clap::Parser;
use cli::{
    Cli,
    compare::{error_line, handle_compare_command},
    flags::expand_numbered_flags,
};
use restdiff::{fetch::HttpFetcher, logging};

fn main() {
    let cli = Cli::parse_from(expand_numbered_flags(std::env::args_os()));
    logging::init(cli.verbose);

    let fetcher = HttpFetcher::new();
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = handle_compare_command(&cli, &fetcher, &mut stdout) {
        eprintln!("{}", error_line(e.as_ref()));
        std::process::exit(1);
    }
}
