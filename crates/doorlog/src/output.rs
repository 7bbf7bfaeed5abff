//! Report output: one fixed-width line per event on stdout.

use std::io::{self, Write};

use doorlog_core::{ReferenceData, lines};
use vapix_api::Event;

use crate::error::CliError;

/// Write each joined event to `out` as soon as it is formatted.
///
/// Returns the number of lines written.
pub fn write_report(
    out: &mut impl Write,
    events: &[Event],
    reference: &ReferenceData,
) -> io::Result<usize> {
    let mut written = 0;
    for line in lines(events, reference) {
        writeln!(out, "{line}")?;
        out.flush()?;
        written += 1;
    }
    Ok(written)
}

/// Print the report to stdout. A closed pipe (`doorlog | head`) ends
/// output quietly.
pub fn print_report(events: &[Event], reference: &ReferenceData) -> Result<usize, CliError> {
    let mut stdout = io::stdout().lock();
    match write_report(&mut stdout, events, reference) {
        Ok(written) => Ok(written),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(0),
        Err(e) => Err(e.into()),
    }
}
