use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One tagged unit of article content.
///
/// Authored JSON uses a `type` tag; tags this crate does not know deserialize
/// to [`ContentBlock::Unknown`], which renders as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Heading {
        text: String,
    },
    List {
        items: Vec<String>,
        #[serde(default)]
        ordered: bool,
    },
    Code {
        language: String,
        text: String,
    },
    #[serde(other)]
    Unknown,
}

/// A blog article: metadata plus its ordered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub blocks: Vec<ContentBlock>,
}

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+(?P<item>.*)$").expect("unordered item regex"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s+(?P<item>.*)$").expect("ordered item regex"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+(?P<text>.*?)(?:\s+#+)?\s*$").expect("heading regex"));
static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex"));

struct OpenCode {
    language: String,
    indent: usize,
    lines: Vec<String>,
}

#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<ContentBlock>,
    paragraph: Vec<String>,
    list: Option<(bool, Vec<String>)>,
}

impl BlockBuilder {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();
        self.blocks.push(ContentBlock::Paragraph { text });
    }

    fn flush_list(&mut self) {
        if let Some((ordered, items)) = self.list.take() {
            self.blocks.push(ContentBlock::List { items, ordered });
        }
    }

    fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn push_item(&mut self, ordered: bool, item: &str) {
        self.flush_paragraph();
        if self.list.as_ref().is_some_and(|(o, _)| *o != ordered) {
            self.flush_list();
        }
        self.list
            .get_or_insert_with(|| (ordered, Vec::new()))
            .1
            .push(item.to_string());
    }
}

/// Parses lightweight markdown into content blocks.
///
/// Understands `#` headings, `-`/`*`/`+` and `1.` list items, fenced code with
/// an optional language, and blank-line separated paragraphs. Leading
/// indentation is ignored outside code fences; inside a fence, the fence's own
/// indentation is stripped from each line.
pub fn parse_blocks(src: &str) -> Vec<ContentBlock> {
    let mut b = BlockBuilder::default();
    let mut code: Option<OpenCode> = None;

    for raw in src.lines() {
        if code.is_some() {
            if raw.trim() == "```" {
                if let Some(open) = code.take() {
                    b.blocks.push(ContentBlock::Code {
                        language: open.language,
                        text: open.lines.join("\n"),
                    });
                }
            } else if let Some(open) = code.as_mut() {
                open.lines.push(strip_indent(raw, open.indent).to_string());
            }
            continue;
        }

        let line = raw.trim();
        if let Some(fence) = line.strip_prefix("```") {
            b.flush();
            code = Some(OpenCode {
                language: fence.trim().to_string(),
                indent: indent_width(raw),
                lines: Vec::new(),
            });
        } else if line.is_empty() {
            b.flush();
        } else if let Some(caps) = HEADING.captures(line) {
            b.flush();
            b.blocks.push(ContentBlock::Heading {
                text: caps["text"].to_string(),
            });
        } else if let Some(caps) = UNORDERED_ITEM.captures(line) {
            b.push_item(false, &caps["item"]);
        } else if let Some(caps) = ORDERED_ITEM.captures(line) {
            b.push_item(true, &caps["item"]);
        } else {
            b.flush_list();
            b.paragraph.push(line.to_string());
        }
    }

    // An unterminated fence still keeps its text.
    if let Some(open) = code {
        b.blocks.push(ContentBlock::Code {
            language: open.language,
            text: open.lines.join("\n"),
        });
    }
    b.flush();
    b.blocks
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn strip_indent(line: &str, indent: usize) -> &str {
    &line[indent_width(line).min(indent)..]
}

/// Lowercase, dash-separated identifier usable in a URL path or fragment.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_SLUG
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
