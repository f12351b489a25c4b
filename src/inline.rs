use std::collections::BTreeSet;

use crate::block::{InlineStyle, StyleRange};
use crate::config::InlineConfig;

/// Render `text` with Markdown delimiters for its style ranges.
///
/// Ranges may nest, share bounds or cross. Delimiters are always emitted as
/// a well-formed, non-crossing structure: styles open in scan order (bold
/// before italic when they start together) and close last-opened first.
/// When a style ends while styles opened after it are still active, those
/// are closed around it and reopened right after, so every character keeps
/// exactly the styles its ranges give it.
pub fn apply_styles(text: &str, ranges: &[StyleRange], delimiters: &InlineConfig) -> String {
    if ranges.is_empty() || text.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let active = active_styles(chars.len(), ranges);

    let mut out = String::with_capacity(text.len());
    let mut open: Vec<&InlineStyle> = Vec::new();

    for (ch, styles) in chars.iter().zip(&active) {
        close_ended(&mut open, styles, delimiters, &mut out);

        // BTreeSet iteration order is the opening priority
        for style in styles {
            if !open.contains(style) {
                push_delimiter(style, delimiters, &mut out);
                open.push(*style);
            }
        }

        out.push(*ch);
    }

    while let Some(style) = open.pop() {
        push_delimiter(style, delimiters, &mut out);
    }

    out
}

/// The set of rendered styles covering each character position.
fn active_styles(len: usize, ranges: &[StyleRange]) -> Vec<BTreeSet<&InlineStyle>> {
    let mut active = vec![BTreeSet::new(); len];

    for range in ranges {
        if !range.style.is_supported() {
            log::trace!("Ignoring unsupported inline style {:?}", range.style);
            continue;
        }
        let Some((start, end)) = range.clamped(len) else {
            log::trace!("Ignoring empty or out-of-bounds range {:?}", range);
            continue;
        };
        for styles in &mut active[start..end] {
            styles.insert(&range.style);
        }
    }

    active
}

/// Close every open style that is no longer active.
///
/// Styles stacked above the lowest ended style have to be closed first to
/// keep nesting intact; those still active are reopened in their previous
/// order.
fn close_ended<'a>(
    open: &mut Vec<&'a InlineStyle>,
    active: &BTreeSet<&'a InlineStyle>,
    delimiters: &InlineConfig,
    out: &mut String,
) {
    let Some(lowest_ended) = open.iter().position(|style| !active.contains(style)) else {
        return;
    };

    let mut reopen = Vec::new();
    while open.len() > lowest_ended {
        let Some(style) = open.pop() else { break };
        push_delimiter(style, delimiters, out);
        if active.contains(&style) {
            reopen.push(style);
        }
    }

    for style in reopen.into_iter().rev() {
        push_delimiter(style, delimiters, out);
        open.push(style);
    }
}

fn push_delimiter(style: &InlineStyle, delimiters: &InlineConfig, out: &mut String) {
    if let Some(delimiter) = delimiters.delimiter(style) {
        out.push_str(delimiter);
    }
}
