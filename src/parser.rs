use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::block::RawDocument;
use crate::error::Result;

/// Parse a raw document from its JSON form
pub fn parse(json: &str) -> Result<RawDocument> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a raw document from a reader, e.g. stdin
pub fn parse_reader(reader: impl Read) -> Result<RawDocument> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a raw document from a JSON file
pub fn parse_file(path: &Path) -> Result<RawDocument> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockType, EntityRange, InlineStyle, StyleRange};
    use crate::error::Error;

    #[test]
    fn full_block() {
        let doc = parse(
            r#"{"blocks": [{
                "text": "Hello world",
                "type": "header-two",
                "depth": 1,
                "inlineStyleRanges": [{"offset": 6, "length": 5, "style": "BOLD"}],
                "entityRanges": [{"offset": 0, "length": 5, "key": 3}]
            }]}"#,
        )
        .unwrap();

        let block = &doc.blocks[0];
        assert_eq!(block.text, "Hello world");
        assert_eq!(block.block_type, BlockType::Heading(2));
        assert_eq!(block.depth, 1);
        assert_eq!(
            block.inline_style_ranges,
            vec![StyleRange {
                offset: 6,
                length: 5,
                style: InlineStyle::Bold
            }]
        );
        assert_eq!(
            block.entity_ranges,
            vec![EntityRange {
                offset: 0,
                length: 5,
                key: 3
            }]
        );
    }

    #[test]
    fn missing_fields_default() {
        let doc = parse(r#"{"blocks": [{"text": "Just text"}]}"#).unwrap();
        let block = &doc.blocks[0];
        assert_eq!(block.block_type, BlockType::Unstyled);
        assert_eq!(block.depth, 0);
        assert!(block.inline_style_ranges.is_empty());
        assert!(block.entity_ranges.is_empty());
    }

    #[test]
    fn unknown_names_are_not_errors() {
        let doc = parse(
            r#"{"blocks": [{
                "text": "x",
                "type": "atomic",
                "inlineStyleRanges": [{"offset": -1, "length": 2, "style": "STRIKETHROUGH"}]
            }]}"#,
        )
        .unwrap();
        let block = &doc.blocks[0];
        assert_eq!(block.block_type, BlockType::Other("atomic".to_string()));
        assert_eq!(
            block.inline_style_ranges[0].style,
            InlineStyle::Other("STRIKETHROUGH".to_string())
        );
    }

    #[test]
    fn missing_blocks_is_an_error() {
        assert!(matches!(parse(r#"{"entityMap": {}}"#), Err(Error::Json(_))));
        assert!(matches!(parse("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn negative_depth_is_accepted() {
        let doc = parse(r#"{"blocks": [{"text": "x", "depth": -1}]}"#).unwrap();
        assert_eq!(doc.blocks[0].depth, -1);
    }

    #[test]
    fn from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        std::fs::write(&path, r#"{"blocks": [{"text": "Hello"}]}"#).unwrap();

        let doc = parse_file(&path).unwrap();
        assert_eq!(doc.blocks[0].text, "Hello");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let err = parse_file(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn from_reader() {
        let json = br#"{"blocks": []}"#;
        let doc = parse_reader(&json[..]).unwrap();
        assert!(doc.blocks.is_empty());
    }
}
