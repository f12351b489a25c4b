mod block;
mod config;
mod error;
mod inline;
mod markdown;
mod parser;

pub use block::{Block, BlockType, EntityRange, InlineStyle, RawDocument, StyleRange};
pub use config::{CodeBlockConfig, CodeBlockMode, Config, InlineConfig, ListsConfig};
pub use error::{Error, Result};
pub use inline::apply_styles;
pub use markdown::{blocks_to_markdown, render_block};
pub use parser::{parse, parse_file, parse_reader};

/// Convert a raw JSON document to Markdown using default config.
pub fn markdown_from_json(json: &str) -> Result<String> {
    markdown_from_json_with_config(json, &Config::compiled_default())
}

/// Convert a raw JSON document to Markdown with custom config.
pub fn markdown_from_json_with_config(json: &str, config: &Config) -> Result<String> {
    let document = parse(json)?;
    Ok(document_to_markdown(&document, config))
}

/// Convert an already parsed document to Markdown.
pub fn document_to_markdown(document: &RawDocument, config: &Config) -> String {
    log::debug!("Converting {} blocks", document.blocks.len());
    blocks_to_markdown(&document.blocks, config)
}
