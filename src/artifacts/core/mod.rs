//! Output plumbing shared by the commands
//!
//! Diff output either streams straight to stdout or is collected into a
//! `minus` pager that is shown once the comparison has been rendered.

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Adapts the minus pager to `std::io::Write`, so commands can render into
/// it exactly as they would into stdout.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where rendered output ends up.
pub enum OutputTarget {
    Stdout,
    Pager(Pager),
}

impl OutputTarget {
    pub fn paged() -> Self {
        OutputTarget::Pager(Pager::new())
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            OutputTarget::Stdout => Box::new(io::stdout()),
            OutputTarget::Pager(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Shows the collected output when paging; a no-op for stdout.
    pub fn finish(self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout => io::stdout().flush(),
            OutputTarget::Pager(pager) => minus::page_all(pager).map_err(io::Error::other),
        }
    }
}
