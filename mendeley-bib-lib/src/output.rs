//! Where rendered entries go.
//!
//! A run writes to exactly one destination. Named files start with a
//! one-line banner comment; stdout gets the bare entries so the output can be
//! piped or appended to an existing `.bib`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// The destination of a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `None` means stdout.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    pub fn writes_banner(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

/// The banner line written at the top of named output files.
pub fn banner() -> String {
    format!(
        "% This file was generated automatically by mendeley-bib {}.\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Buffered writer for rendered entries.
///
/// Dropping the writer flushes what was buffered, so an early return still
/// leaves every completed entry on disk. Call [`BibWriter::finish`] to see
/// flush errors.
pub struct BibWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> BibWriter<W> {
    /// Wrap a writer without a banner.
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
        }
    }

    /// Wrap a writer and write the banner line first.
    pub fn with_banner(inner: W) -> io::Result<Self> {
        let mut writer = Self::new(inner);
        writer.inner.write_all(banner().as_bytes())?;
        Ok(writer)
    }

    /// Write one rendered entry.
    ///
    /// The buffer is flushed after each entry so an interrupted run never
    /// leaves half an entry behind it in the buffer.
    pub fn write_entry(&mut self, entry: &str) -> io::Result<()> {
        self.inner.write_all(entry.as_bytes())?;
        self.inner.flush()
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error())
    }
}

/// Open the destination for a run, writing the banner for named files.
pub fn open_output(target: &OutputTarget) -> io::Result<BibWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match target {
        OutputTarget::Stdout => Box::new(io::stdout()),
        OutputTarget::File(path) => {
            log::debug!("Writing BibTeX to {}", path.display());
            Box::new(File::create(path)?)
        }
    };
    if target.writes_banner() {
        BibWriter::with_banner(sink)
    } else {
        Ok(BibWriter::new(sink))
    }
}
