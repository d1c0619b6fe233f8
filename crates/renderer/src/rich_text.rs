//! Rich text to HTML.
//!
//! Markup strings pass through untouched. Block arrays map through a fixed
//! table of five block kinds. Text is not escaped here: rich text comes from
//! the content store's editors and is trusted as authored.

use site_kit_core::{BlockNode, InlineNode, RichContent};

const DEFAULT_HEADING_LEVEL: u8 = 2;

pub fn to_html(content: Option<&RichContent>) -> String {
    match content {
        None => String::new(),
        Some(RichContent::Markup(markup)) => markup.clone(),
        Some(RichContent::Blocks(blocks)) => blocks.iter().map(block_to_html).collect(),
    }
}

fn block_to_html(block: &BlockNode) -> String {
    match block.kind.as_str() {
        "paragraph" => format!("<p>{}</p>", text_of(&block.children)),
        "heading" => {
            // zero counts as unset
            let level = block
                .level
                .filter(|level| *level != 0)
                .unwrap_or(DEFAULT_HEADING_LEVEL)
                .clamp(1, 6);
            format!("<h{level}>{}</h{level}>", text_of(&block.children))
        }
        "list" => {
            let tag = if block.format.as_deref() == Some("ordered") {
                "ol"
            } else {
                "ul"
            };
            let items: String = block
                .children
                .iter()
                .map(|item| format!("<li>{}</li>", text_of(&item.children)))
                .collect();
            format!("<{tag}>{items}</{tag}>")
        }
        "quote" => format!("<blockquote>{}</blockquote>", text_of(&block.children)),
        "code" => format!("<pre><code>{}</code></pre>", text_of(&block.children)),
        _ => String::new(),
    }
}

fn text_of(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.collect_text(&mut out);
    }
    out
}
