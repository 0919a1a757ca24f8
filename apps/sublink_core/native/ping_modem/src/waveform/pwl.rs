//! Piecewise-linear text export
//!
//! One `time<TAB>value` line per sample, the format circuit simulators read
//! as a PWL source.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::Waveform;

/// Write `wave` to `path`, replacing any existing file
pub fn write_pwl(path: impl AsRef<Path>, wave: &Waveform) -> io::Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_pwl_to(&mut out, wave)?;
    out.flush()?;
    debug!(path = %path.display(), samples = wave.len(), "wrote PWL file");
    Ok(())
}

pub fn write_pwl_to<W: Write>(mut out: W, wave: &Waveform) -> io::Result<()> {
    for (t, x) in wave.iter() {
        writeln!(out, "{t}\t{x}")?;
    }
    Ok(())
}
