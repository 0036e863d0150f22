use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;
use crate::inline::{self, Span, SpanKind};
use crate::node::HtmlNode;

/// One to six hashes and a single space, at the very start of the block.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6} ").unwrap());

/// A bullet marker: `*`, `-` or `+` followed by a single space.
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*+-] ").unwrap());

/// Structural classification of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into blocks on blank-line separators.
///
/// Each piece is trimmed and empty pieces are dropped, so runs of blank
/// lines collapse into a single separator.
pub fn split_into_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block by the first structural rule it satisfies.
///
/// The rules are ordered and paragraph is the fallback, so every block
/// classifies to exactly one type.
pub fn classify_block(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').collect();

    if HEADING_RE.is_match(block) {
        return BlockType::Heading;
    }
    if lines.len() > 1 && lines[0].starts_with("```") && lines[lines.len() - 1].starts_with("```")
    {
        return BlockType::Code;
    }
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if lines
        .iter()
        .map(|line| line.trim())
        .all(|line| line.is_empty() || BULLET_RE.is_match(line))
    {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

/// Non-blank lines must count `1. `, `2. `, ... with no gaps.
fn is_ordered_list(lines: &[&str]) -> bool {
    let mut expected = 1;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let marker = format!("{expected}. ");
        if !line.starts_with(&marker) {
            return false;
        }
        expected += 1;
    }
    true
}

/// Convert one block into its HTML subtree according to its classification.
pub fn block_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    match classify_block(block) {
        BlockType::Paragraph => paragraph_to_node(block),
        BlockType::Heading => heading_to_node(block),
        BlockType::Code => code_to_node(block),
        BlockType::Quote => quote_to_node(block),
        BlockType::UnorderedList => unordered_list_to_node(block),
        BlockType::OrderedList => ordered_list_to_node(block),
    }
}

/// Convert a whole document: every block in order, wrapped in a root `div`.
///
/// Fail-fast: the first malformed block aborts the conversion.
pub fn markdown_to_html(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let children = split_into_blocks(markdown)
        .into_iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", inline::text_to_nodes(&text)?))
}

fn heading_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let level = block.chars().take_while(|c| *c == '#').count();
    let text = block.get(level + 1..).unwrap_or("");
    if text.is_empty() {
        return Err(ConvertError::InvalidBlock {
            kind: "heading",
            reason: "no content after the marker".to_string(),
        });
    }
    Ok(HtmlNode::parent(
        &format!("h{level}"),
        inline::text_to_nodes(text)?,
    ))
}

fn code_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    if !block.starts_with("```") || !block.ends_with("```") {
        return Err(ConvertError::InvalidBlock {
            kind: "code",
            reason: "block is not fenced by ``` on both ends".to_string(),
        });
    }
    // Drop the opening fence plus the newline after it, and the closing
    // fence. Degenerate fences shorter than that yield empty content.
    let text = skip_chars(block, 4).strip_suffix("```").unwrap_or("");
    let leaf = Span::new(SpanKind::Plain, text).to_html_node();
    Ok(HtmlNode::parent(
        "pre",
        vec![HtmlNode::parent("code", vec![leaf])],
    ))
}

fn quote_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let mut stripped = Vec::new();
    for line in block.split('\n') {
        if !line.starts_with('>') {
            return Err(ConvertError::InvalidBlock {
                kind: "quote",
                reason: format!("line {line:?} does not start with `>`"),
            });
        }
        stripped.push(line.trim_start_matches('>').trim());
    }
    let text = stripped.join(" ");
    Ok(HtmlNode::parent(
        "blockquote",
        inline::text_to_nodes(&text)?,
    ))
}

fn unordered_list_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        let text = skip_chars(line, 2);
        items.push(HtmlNode::parent("li", inline::text_to_nodes(text)?));
    }
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_to_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        let Some((_, text)) = line.split_once(". ") else {
            return Err(ConvertError::InvalidBlock {
                kind: "ordered list",
                reason: format!("line {line:?} has no `. ` marker"),
            });
        };
        items.push(HtmlNode::parent("li", inline::text_to_nodes(text)?));
    }
    Ok(HtmlNode::parent("ol", items))
}

/// The text after the first `n` characters of `s`, or `""` when `s` is
/// shorter than that.
fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map(|(i, _)| &s[i..]).unwrap_or("")
}
