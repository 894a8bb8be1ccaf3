use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::Result;
use crate::model::{DictEntry, ParsedEntry};

lazy_static! {
    static ref ENTRY_RE: Regex = Regex::new(r"(\S+) (\S+) (\[.+\]) (/.+/)").unwrap();
}

const COMMENT_TOKEN: char = '#';

/// Matches one non-comment line against the CC-CEDICT entry pattern.
pub(crate) fn parse_line(line: &str) -> ParsedEntry {
    match ENTRY_RE.captures(line) {
        Some(caps) => ParsedEntry::Matched(DictEntry {
            traditional: caps[1].to_string(),
            simplified: caps[2].to_string(),
            pinyin: caps[3].trim_matches(['[', ']']).to_string(),
            definitions: caps[4]
                .trim_matches('/')
                .split('/')
                .map(str::to_string)
                .collect(),
        }),
        None => {
            debug!("line did not match the entry pattern: {line:?}");
            ParsedEntry::Unmatched
        }
    }
}

/// Reads CC-CEDICT entries line by line from any buffered source.
///
/// The parser owns its reader; dropping the parser closes the underlying
/// source. It keeps no state besides the source's read cursor, so it is
/// strictly single-consumer.
#[derive(Debug)]
pub struct CedictParser<R> {
    reader: R,
    line: String,
}

impl CedictParser<BufReader<File>> {
    /// Opens a dictionary file and wraps it in a parser.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CedictParser<R> {
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
    /// Returns `Ok(None)` once the source is exhausted. A non-comment line
    /// always produces `Some`, matched or not; only an I/O fault from the
    /// reader is an error.
    pub fn read_entry(&mut self) -> Result<Option<ParsedEntry>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            if !self.line.starts_with(COMMENT_TOKEN) {
                break;
            }
        }
        Ok(Some(parse_line(self.line.trim_end_matches(['\n', '\r']))))
    }

    /// Reads every remaining entry, matched and unmatched, in line order.
    ///
    /// An exhausted source yields an empty vector, so calling this a second
    /// time is harmless.
    pub fn read_to_end(&mut self) -> Result<Vec<ParsedEntry>> {
        let mut entries = Vec::new();
        while let Some(entry) = self.read_entry()? {
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Borrowing iterator over the remaining entries.
    pub fn entries(&mut self) -> Entries<'_, R> {
        Entries { parser: self }
    }
}

/// Iterator returned by [`CedictParser::entries`].
pub struct Entries<'a, R> {
    parser: &'a mut CedictParser<R>,
}

impl<R: BufRead> Iterator for Entries<'_, R> {
    type Item = Result<ParsedEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.read_entry().transpose()
    }
}

/// Parses a whole dictionary file, keeping only the matched records.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<DictEntry>> {
    let mut parser = CedictParser::from_path(path)?;
    let parsed = parser.read_to_end()?;
    let total = parsed.len();
    let entries: Vec<DictEntry> = parsed
        .into_iter()
        .filter_map(ParsedEntry::into_entry)
        .collect();
    debug!("parsed {} entries from {} lines", entries.len(), total);
    Ok(entries)
}
