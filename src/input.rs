use std::fs::File;
use std::io::Read;
use std::path::Path;

use memmap2::Mmap;

use crate::error::FreqTabResult;

/// Bytes for one counting run, either memory-mapped from a file or buffered
/// in memory. Standard input and zero-length files take the buffered path.
#[derive(Debug)]
pub enum Source {
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

impl Source {
    /// Memory-maps the file at `path`. Zero-length files skip the mapping
    /// and come back as an empty buffer, since mapping zero bytes fails on
    /// some platforms.
    pub fn open(path: impl AsRef<Path>) -> FreqTabResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Source::Buffered(Vec::new()));
        }

        // Read-only mapping of a file this process never writes through.
        let mmap = unsafe { Mmap::map(&file)? };
        #[cfg(unix)]
        advise_sequential_scan(&mmap, path);
        Ok(Source::Mapped(mmap))
    }

    /// Slurps all of standard input into memory. Pipes cannot be mapped, so
    /// stdin always buffers.
    pub fn from_stdin() -> FreqTabResult<Self> {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf)?;
        Ok(Source::Buffered(buf))
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Source::Mapped(mmap) => mmap,
            Source::Buffered(buf) => buf,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}

/// Tells the kernel the mapping will be read front to back exactly once.
/// The hints are advisory; a refused hint is logged and ignored.
#[cfg(unix)]
fn advise_sequential_scan(mmap: &Mmap, path: &Path) {
    use log::warn;
    use memmap2::Advice;

    for advice in [Advice::Sequential, Advice::WillNeed] {
        if let Err(err) = mmap.advise(advice) {
            warn!("madvise({:?}) on {} failed: {}", advice, path.display(), err);
        }
    }
}
