use std::ffi::OsString;

// clap short flags are a single character, so the two-character forms are
// mapped onto their long equivalents before parsing.
const NUMBERED_FLAGS: [(&str, &str); 4] = [
    ("-u1", "--url1"),
    ("-u2", "--url2"),
    ("-k1", "--keys1"),
    ("-k2", "--keys2"),
];

/// Rewrites `-u1 X` / `-u1=X` style arguments to `--url1 X` / `--url1=X`.
///
/// Arguments after a bare `--` are left untouched.
pub fn expand_numbered_flags<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                return arg;
            }
            expand_one(&arg).unwrap_or(arg)
        })
        .collect()
}

fn expand_one(arg: &OsString) -> Option<OsString> {
    let arg = arg.to_str()?;
    NUMBERED_FLAGS.iter().find_map(|(short, long)| {
        let rest = arg.strip_prefix(short)?;
        if rest.is_empty() || rest.starts_with('=') {
            Some(OsString::from(format!("{long}{rest}")))
        } else {
            None
        }
    })
}
