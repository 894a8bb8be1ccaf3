use serde::{Deserialize, Serialize};

/// One CC-CEDICT dictionary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    /// Headword in traditional script.
    pub traditional: String,
    /// Headword in simplified script.
    pub simplified: String,
    /// Romanization with tone digits, without the surrounding brackets.
    pub pinyin: String,
    /// English glosses, in order of appearance.
    pub definitions: Vec<String>,
}

/// Outcome of matching one non-comment line.
///
/// A line that does not conform to the four-field CC-CEDICT shape is data,
/// not an error: it comes back as [`ParsedEntry::Unmatched`], which carries
/// no field values. This is the only supported no-match representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEntry {
    /// The line matched; all four fields are populated and `definitions`
    /// has at least one element.
    Matched(DictEntry),
    /// The line did not match the entry pattern.
    Unmatched,
}

impl ParsedEntry {
    pub fn is_matched(&self) -> bool {
        matches!(self, ParsedEntry::Matched(_))
    }

    pub fn entry(&self) -> Option<&DictEntry> {
        match self {
            ParsedEntry::Matched(entry) => Some(entry),
            ParsedEntry::Unmatched => None,
        }
    }

    pub fn into_entry(self) -> Option<DictEntry> {
        match self {
            ParsedEntry::Matched(entry) => Some(entry),
            ParsedEntry::Unmatched => None,
        }
    }
}

impl From<DictEntry> for ParsedEntry {
    fn from(entry: DictEntry) -> Self {
        ParsedEntry::Matched(entry)
    }
}
