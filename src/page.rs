use std::fs;
use std::path::Path;

use crate::block::{markdown_to_html, split_into_blocks};
use crate::error::BuildError;

/// Pull the page title out of a document: the text of the first block
/// opening with an `# ` marker.
///
/// Only block-leading lines count, so an `# `-prefixed line inside a
/// code fence or mid-paragraph never becomes the title.
pub fn extract_title(markdown: &str) -> Result<String, BuildError> {
    for block in split_into_blocks(markdown) {
        let first_line = block.lines().next().unwrap_or("");
        if let Some(title) = first_line.strip_prefix("# ") {
            return Ok(title.trim().to_string());
        }
    }
    Err(BuildError::NoTitle)
}

/// Render one Markdown document into a full page.
///
/// The template's `{{ Title }}` placeholder receives the document's H1
/// text and `{{ Content }}` receives the converted HTML.
pub fn render_page(markdown: &str, template: &str) -> Result<String, BuildError> {
    let html = markdown_to_html(markdown)?.render();
    let title = extract_title(markdown)?;
    Ok(template
        .replace("{{ Title }}", &title)
        .replace("{{ Content }}", &html))
}

/// Generate an `.html` page for every `.md` file under `content`,
/// mirroring the directory layout under `output`.
pub fn generate_pages(content: &Path, template: &str, output: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(output)?;
    for entry in fs::read_dir(content)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            generate_pages(&path, template, &output.join(entry.file_name()))?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let destination = output.join(entry.file_name()).with_extension("html");
            println!("Generating {} -> {}", path.display(), destination.display());
            let markdown = fs::read_to_string(&path)?;
            fs::write(&destination, render_page(&markdown, template)?)?;
        }
    }
    Ok(())
}
