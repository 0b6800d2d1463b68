use models::Diagnostic;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to open log file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to write log file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Append-only destination for diagnostic lines, one message per line.
pub trait LogSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn record(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        self.write_line(&diagnostic.to_string())
    }
}

/// Log sink backed by a file opened in append mode.
///
/// The handle is flushed and closed when the sink is dropped, so early
/// returns release it too. Call [`FileSink::finish`] to observe flush errors.
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    /// Opens `path` for appending, creating missing parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| SinkError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(FileSink {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes buffered lines and closes the file.
    pub fn finish(mut self) -> Result<(), SinkError> {
        match self.writer.take() {
            Some(mut writer) => writer.flush().map_err(|source| SinkError::Write {
                path: self.path.clone(),
                source,
            }),
            None => Ok(()),
        }
    }
}

impl LogSink for FileSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writeln!(writer, "{}", line),
            None => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "log sink already finished",
            )),
        }
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}

/// In-memory sink, mostly for tests and callers that want the lines directly.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl LogSink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
