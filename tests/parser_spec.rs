use std::path::PathBuf;

use anyhow::Result;
use cedict_parser::{
    parse_file, AsyncCedictParser, CedictError, CedictParser, DictEntry, ParsedEntry,
};
use futures_util::StreamExt;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("cedict_sample.u8")
}

#[test]
fn fixture_parses_in_file_order() -> Result<()> {
    let mut parser = CedictParser::from_path(fixture_path())?;
    let parsed = parser.read_to_end()?;

    // 9 comment lines skipped, 7 entry lines kept.
    assert_eq!(parsed.len(), 7);
    assert!(parsed.iter().all(ParsedEntry::is_matched));

    let first = parsed[0].entry().unwrap();
    assert_eq!(
        first,
        &DictEntry {
            traditional: "你好".to_string(),
            simplified: "你好".to_string(),
            pinyin: "ni3 hao3".to_string(),
            definitions: vec!["hello".to_string(), "hi".to_string()],
        }
    );

    let last = parsed[6].entry().unwrap();
    assert_eq!(last.traditional, "再");
    assert_eq!(last.definitions.len(), 6);
    assert_eq!(last.definitions[5], "then (after sth, and not until then)");
    Ok(())
}

#[test]
fn brackets_inside_definitions_stay_in_the_gloss() -> Result<()> {
    let mut parser = CedictParser::from_path(fixture_path())?;
    let parsed = parser.read_to_end()?;

    let entry = parsed[5].entry().unwrap();
    assert_eq!(entry.traditional, "字典");
    assert_eq!(entry.pinyin, "zi4 dian3");
    assert_eq!(entry.definitions, vec!["character dictionary", "CL:本[ben3]"]);
    Ok(())
}

#[test]
fn parse_file_keeps_only_matched_records() -> Result<()> {
    let entries = parse_file(fixture_path())?;

    assert_eq!(entries.len(), 7);
    assert_eq!(entries[3].simplified, "中国");
    assert_eq!(entries[3].definitions, vec!["China"]);
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let err = CedictParser::from_path("tests/data/no_such_file.u8").unwrap_err();
    assert!(matches!(err, CedictError::Io(_)));

    let err = parse_file("tests/data/no_such_file.u8").unwrap_err();
    assert!(matches!(err, CedictError::Io(_)));
}

#[test]
fn read_to_end_after_exhausting_the_file_is_empty() -> Result<()> {
    let mut parser = CedictParser::from_path(fixture_path())?;

    assert_eq!(parser.read_to_end()?.len(), 7);
    assert!(parser.read_to_end()?.is_empty());
    Ok(())
}

#[tokio::test]
async fn async_parser_reads_the_same_fixture() -> Result<()> {
    let mut parser = AsyncCedictParser::from_path(fixture_path()).await?;
    let parsed = parser.read_to_end().await?;

    assert_eq!(parsed.len(), 7);
    let entry = parsed[1].entry().unwrap();
    assert_eq!(entry.traditional, "再見");
    assert_eq!(entry.simplified, "再见");
    assert_eq!(entry.pinyin, "zai4 jian4");
    assert_eq!(
        entry.definitions,
        vec!["goodbye", "see you again later"]
    );
    Ok(())
}

#[tokio::test]
async fn stream_adapter_covers_the_whole_fixture() -> Result<()> {
    let parser = AsyncCedictParser::from_path(fixture_path()).await?;
    let entries: Vec<ParsedEntry> = parser
        .into_stream()
        .map(|entry| entry.unwrap())
        .collect()
        .await;

    assert_eq!(entries.len(), 7);
    assert_eq!(entries[2].entry().unwrap().pinyin, "xie4 xie5");
    Ok(())
}

#[test]
fn entries_round_trip_through_json() -> Result<()> {
    let entries = parse_file(fixture_path())?;
    let json = serde_json::to_string(&entries[0])?;
    let back: DictEntry = serde_json::from_str(&json)?;

    assert_eq!(back, entries[0]);
    assert!(json.contains("\"pinyin\":\"ni3 hao3\""));
    Ok(())
}
