use std::path::Path;

use futures_util::stream::{self, Stream};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::error::Result;
use crate::model::ParsedEntry;
use crate::parser::parse_line;

/// Asynchronous counterpart of [`CedictParser`](crate::CedictParser).
///
/// Semantics are identical to the sync parser; the only suspension point is
/// pulling the next line from the source. The `&mut self` receivers make
/// concurrent reads on one parser a compile error.
pub struct AsyncCedictParser<R> {
    reader: R,
    line: String,
}

impl AsyncCedictParser<BufReader<File>> {
    /// Opens a dictionary file and wraps it in a parser.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).await?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: AsyncBufRead + Unpin> AsyncCedictParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Consumes the parser and hands back the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads the next entry, skipping comment lines.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    pub async fn read_entry(&mut self) -> Result<Option<ParsedEntry>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line).await? == 0 {
                return Ok(None);
            }
            if !self.line.starts_with('#') {
                break;
            }
        }
        Ok(Some(parse_line(self.line.trim_end_matches(['\n', '\r']))))
    }

    /// Reads every remaining entry, matched and unmatched, in line order.
    pub async fn read_to_end(&mut self) -> Result<Vec<ParsedEntry>> {
        let mut entries = Vec::new();
        while let Some(entry) = self.read_entry().await? {
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Converts the parser into a stream of parse outcomes.
    ///
    /// The stream ends when the source is exhausted; an I/O fault is yielded
    /// as the final item.
    pub fn into_stream(self) -> impl Stream<Item = Result<ParsedEntry>> {
        stream::try_unfold(self, |mut parser| async move {
            Ok(parser.read_entry().await?.map(|entry| (entry, parser)))
        })
    }
}
