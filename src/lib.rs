//! # cedict-parser
//!
//! A line-oriented parser for CC-CEDICT formatted dictionary text. Each line
//! carries a traditional headword, a simplified headword, a bracketed pinyin
//! romanization and a slash-delimited list of English glosses:
//!
//! ```text
//! 你好 你好 [ni3 hao3] /hello/hi/
//! ```
//!
//! [`CedictParser`] reads entries from any [`BufRead`](std::io::BufRead)
//! source, skipping `#` comment lines; [`AsyncCedictParser`] does the same
//! over tokio's buffered readers. Lines that do not fit the entry shape are
//! reported as [`ParsedEntry::Unmatched`] rather than errors.

pub mod async_parser;
pub mod error;
pub mod model;
pub mod parser;

pub use async_parser::AsyncCedictParser;
pub use error::{CedictError, Result};
pub use model::{DictEntry, ParsedEntry};
pub use parser::{parse_file, CedictParser, Entries};
