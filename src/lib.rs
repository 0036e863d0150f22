mod assets;
mod block;
mod config;
mod error;
mod inline;
mod node;
mod page;

pub use assets::sync_dir;
pub use block::{BlockType, block_to_node, classify_block, markdown_to_html, split_into_blocks};
pub use config::Config;
pub use error::{BuildError, ConvertError};
pub use inline::{Span, SpanKind, text_to_spans};
pub use node::HtmlNode;
pub use page::{extract_title, generate_pages, render_page};

/// Convert a Markdown document straight to serialized HTML.
pub fn markdown_to_html_string(markdown: &str) -> Result<String, ConvertError> {
    Ok(block::markdown_to_html(markdown)?.render())
}
