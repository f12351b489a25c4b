use crate::block::{Block, BlockType};
use crate::config::{CodeBlockMode, Config};
use crate::inline::apply_styles;

/// Convert blocks to Markdown, one line per block joined with "\n".
///
/// The ordered-list counter is threaded from block to block, so numbering
/// restarts at 1 after any block that is not an ordered list item.
pub fn blocks_to_markdown(blocks: &[Block], config: &Config) -> String {
    let (lines, _) = blocks.iter().fold(
        (Vec::with_capacity(blocks.len()), 0),
        |(mut lines, counter), block| {
            let (line, next) = render_block(block, counter, config);
            lines.push(line);
            (lines, next)
        },
    );

    lines.join("\n")
}

/// Render a single block given the number of ordered list items directly
/// before it. Returns the line and the counter for the next block.
pub fn render_block(block: &Block, ordered_counter: u32, config: &Config) -> (String, u32) {
    let mut out = String::new();

    match &block.block_type {
        BlockType::OrderedListItem => {
            let number = ordered_counter + 1;
            push_indent(block.depth, config, &mut out);
            out.push_str(&number.to_string());
            out.push_str(". ");
            push_styled(block, config, &mut out);
            return (out, number);
        }
        BlockType::UnorderedListItem => {
            push_indent(block.depth, config, &mut out);
            out.push_str(&config.lists.bullet);
            out.push(' ');
            push_styled(block, config, &mut out);
        }
        BlockType::Heading(level) => {
            for _ in 0..(*level).clamp(1, 6) {
                out.push('#');
            }
            out.push(' ');
            push_styled(block, config, &mut out);
        }
        BlockType::CodeBlock => match config.code_block.mode {
            CodeBlockMode::Fenced => {
                out.push_str("```\n");
                out.push_str(&block.text);
                out.push_str("\n```");
            }
            CodeBlockMode::Passthrough => push_styled(block, config, &mut out),
        },
        BlockType::Unstyled => push_styled(block, config, &mut out),
        BlockType::Other(name) => {
            log::debug!("Rendering unsupported block type {name:?} as unstyled");
            push_styled(block, config, &mut out);
        }
    }

    (out, 0)
}

fn push_styled(block: &Block, config: &Config, out: &mut String) {
    out.push_str(&apply_styles(
        &block.text,
        &block.inline_style_ranges,
        &config.inline,
    ));
}

fn push_indent(depth: i64, config: &Config, out: &mut String) {
    let depth = usize::try_from(depth).unwrap_or(0);
    let width = depth.saturating_mul(config.lists.indent);
    out.extend(std::iter::repeat_n(' ', width));
}
