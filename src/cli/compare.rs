use std::{error::Error, io::Write, time::Duration};

use restdiff::{
    fetch::{Fetch, FetchError},
    inspect::{Endpoint, inspect},
    report::write_report,
};

use crate::cli::Cli;

pub fn handle_compare_command<F, W>(cli: &Cli, fetcher: &F, out: &mut W) -> Result<(), Box<dyn Error>>
where
    F: Fetch + ?Sized,
    W: Write,
{
    let first = Endpoint::new(&cli.url1, cli.keys1.clone());
    let second = Endpoint::new(&cli.url2, cli.keys2.clone());
    tracing::info!(
        url1 = %first.url,
        keys1 = %first.keys,
        url2 = %second.url,
        keys2 = %second.keys,
        timeout = cli.timeout,
        "comparing endpoints"
    );

    let comparison = inspect(fetcher, &first, &second, Duration::from_secs(cli.timeout))
        .inspect_err(|e| tracing::debug!(url = e.url(), error = ?e, "fetch failed"))?;

    write_report(out, &first.url, &second.url, &comparison)?;
    out.flush()?;
    Ok(())
}

/// The line printed to stderr when the command fails. Fetch errors already
/// carry their `Error fetching data from <url>` prefix.
pub fn error_line(err: &(dyn Error + 'static)) -> String {
    match err.downcast_ref::<FetchError>() {
        Some(fetch_err) => fetch_err.to_string(),
        None => format!("Error: {err}"),
    }
}
