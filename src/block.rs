use serde::Deserialize;

/// A raw rich-text document as exported by block-based editors.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub blocks: Vec<Block>,
}

/// One paragraph-level unit of the document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Block {
    pub text: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Nesting level. Signed so malformed values clamp to 0 when rendered.
    pub depth: i64,
    pub inline_style_ranges: Vec<StyleRange>,
    /// Carried through untouched; entities are not rendered.
    pub entity_ranges: Vec<EntityRange>,
}

impl Block {
    /// Build a block of the given type with no style or entity ranges.
    pub fn new(block_type: BlockType, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            block_type,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, offset: i64, length: i64, style: InlineStyle) -> Self {
        self.inline_style_ranges.push(StyleRange {
            offset,
            length,
            style,
        });
        self
    }

    pub fn with_depth(mut self, depth: i64) -> Self {
        self.depth = depth;
        self
    }
}

/// Block-level kinds
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BlockType {
    #[default]
    Unstyled,
    Heading(u8),
    UnorderedListItem,
    OrderedListItem,
    CodeBlock,
    /// Any type this renderer has no rule for. Rendered as unstyled.
    Other(String),
}

impl From<&str> for BlockType {
    fn from(name: &str) -> Self {
        match name {
            "unstyled" => BlockType::Unstyled,
            "header-one" => BlockType::Heading(1),
            "header-two" => BlockType::Heading(2),
            "header-three" => BlockType::Heading(3),
            "header-four" => BlockType::Heading(4),
            "header-five" => BlockType::Heading(5),
            "header-six" => BlockType::Heading(6),
            "unordered-list-item" => BlockType::UnorderedListItem,
            "ordered-list-item" => BlockType::OrderedListItem,
            "code-block" => BlockType::CodeBlock,
            other => BlockType::Other(other.to_string()),
        }
    }
}

impl From<String> for BlockType {
    fn from(name: String) -> Self {
        BlockType::from(name.as_str())
    }
}

/// Inline styles. The derived ordering is the opening priority used when
/// several styles start on the same character: bold opens before italic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "String")]
pub enum InlineStyle {
    Bold,
    Italic,
    Other(String),
}

impl InlineStyle {
    pub fn is_supported(&self) -> bool {
        !matches!(self, InlineStyle::Other(_))
    }
}

impl From<&str> for InlineStyle {
    fn from(name: &str) -> Self {
        match name {
            "BOLD" => InlineStyle::Bold,
            "ITALIC" => InlineStyle::Italic,
            other => InlineStyle::Other(other.to_string()),
        }
    }
}

impl From<String> for InlineStyle {
    fn from(name: String) -> Self {
        InlineStyle::from(name.as_str())
    }
}

/// A style applied to `length` characters of the block text starting at
/// `offset`. Values are signed so malformed input can be clamped instead of
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleRange {
    pub offset: i64,
    pub length: i64,
    pub style: InlineStyle,
}

impl StyleRange {
    /// Character span `[start, end)` of this range clamped to a text of
    /// `len` characters. `None` if nothing of the range remains.
    ///
    /// Both ends are clamped independently: the end stays at
    /// `offset + length`, so a negative offset shortens the range
    /// (`offset: -2, length: 4` covers `[0, 2)`, not `[0, 4)`).
    pub fn clamped(&self, len: usize) -> Option<(usize, usize)> {
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let start = self.offset.clamp(0, len);
        let end = self.offset.saturating_add(self.length).clamp(0, len);
        (start < end).then(|| (start as usize, end as usize))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityRange {
    pub offset: i64,
    pub length: i64,
    pub key: i64,
}
