//! Line parsers for the supported blacklist formats.
//!
//! Both parsers are tolerant: malformed lines are skipped silently and an
//! empty payload yields zero entries. Fatal decisions belong to the caller.

use crate::config::{ListFormat, Source};

/// Extract normalized domain entries from one raw list payload.
///
/// Lines are split on `\n` with a single trailing `\r` stripped. The first
/// `skip_lines` lines are dropped unconditionally, then empty lines and
/// `#` comments are ignored. Dispatch on the source format:
///
/// - `basic`: the whole line is the entry.
/// - `host`: the address field (token 0) is discarded and the first
///   remaining token longer than one character that is not a comment is
///   taken; lines with no such token yield nothing.
pub fn entries<'a>(payload: &'a str, source: &'a Source) -> impl Iterator<Item = &'a str> + 'a {
    payload
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .skip(source.skip_lines)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(move |line| match source.format {
            ListFormat::Basic => Some(line),
            ListFormat::Host => host_entry(line),
        })
}

/// Pick the domain out of a hosts-file line (`address name [# comment]`).
///
/// Tabs count as field separators. Empty tokens from repeated separators are
/// rejected by the length rule, same as single-character names.
fn host_entry(line: &str) -> Option<&str> {
    let start = line.find(['\t', ' '])?;

    line[start..]
        .split(['\t', ' '])
        .find(|token| token.len() > 1 && !token.starts_with('#'))
}
