//! Word list sources
//!
//! A word list is plain text with one word per line, read either from a file
//! or from standard input.

use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Where the word list comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl WordSource {
    /// File source if a path was given, standard input otherwise
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => WordSource::File(path),
            None => WordSource::Stdin,
        }
    }

    /// Open the source for buffered line reading
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            WordSource::Stdin => Ok(Box::new(io::stdin().lock())),
            WordSource::File(path) => {
                let file = File::open(path).map_err(|e| match e.kind() {
                    io::ErrorKind::NotFound => Error::InputNotFound(path.clone()),
                    _ => Error::Io(e),
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl std::fmt::Display for WordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordSource::Stdin => write!(f, "<stdin>"),
            WordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Iterator over the raw lines of a word list
///
/// Lines are yielded untouched apart from the line terminator; trimming and
/// skipping blanks is left to the trie builder. Callers should stop at the
/// first `Err`.
pub struct WordReader<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> WordReader<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        WordReader {
            reader,
            buf: String::with_capacity(80),
        }
    }
}

impl<R: BufRead> Iterator for WordReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = self.buf.trim_end_matches(['\n', '\r']);
                Some(Ok(line.to_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
