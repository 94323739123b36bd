//! Markdown presenter
//!
//! Converts a markdown string into a displayable rich-text tree.
//! Parsing is delegated to `pulldown-cmark`; this module only maps
//! the event stream onto a closed, serializable node type that the
//! post-detail view ships to the client. Pure function of its input;
//! the input set is small and static, so no caching.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::Serialize;

/// A node of the rendered rich-text tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RichTextNode {
    Heading {
        level: u8,
        children: Vec<RichTextNode>,
    },
    Paragraph {
        children: Vec<RichTextNode>,
    },
    Text {
        value: String,
    },
    Emphasis {
        children: Vec<RichTextNode>,
    },
    Strong {
        children: Vec<RichTextNode>,
    },
    Link {
        href: String,
        children: Vec<RichTextNode>,
    },
    Image {
        src: String,
        alt: String,
    },
    InlineCode {
        value: String,
    },
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    BlockQuote {
        children: Vec<RichTextNode>,
    },
    List {
        ordered: bool,
        items: Vec<Vec<RichTextNode>>,
    },
    Break,
    Rule,
}

/// Render a markdown string into a rich-text tree
pub fn render(markdown: &str) -> Vec<RichTextNode> {
    let mut builder = TreeBuilder::default();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(tag) => builder.start(tag),
            Event::End(tag) => builder.end(tag),
            Event::Text(text) => builder.text(&text),
            Event::Code(code) => builder.push(RichTextNode::InlineCode {
                value: code.into_string(),
            }),
            Event::SoftBreak => builder.text(" "),
            Event::HardBreak => builder.push(RichTextNode::Break),
            Event::Rule => builder.push(RichTextNode::Rule),
            // Raw HTML and footnote/task extensions are not part of the
            // site's content contract; drop them.
            Event::Html(_)
            | Event::InlineHtml(_)
            | Event::FootnoteReference(_)
            | Event::TaskListMarker(_) => {}
        }
    }

    builder.finish()
}

/// Open container being assembled from the event stream
enum Frame {
    Heading(u8, Vec<RichTextNode>),
    Paragraph(Vec<RichTextNode>),
    Emphasis(Vec<RichTextNode>),
    Strong(Vec<RichTextNode>),
    Link(String, Vec<RichTextNode>),
    /// Inner text events become the alt text
    Image(String, String),
    CodeBlock(Option<String>, String),
    BlockQuote(Vec<RichTextNode>),
    List(bool, Vec<Vec<RichTextNode>>),
    Item(Vec<RichTextNode>),
    /// Container we do not model; children splice into the parent
    Transparent(Vec<RichTextNode>),
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<RichTextNode>,
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Heading { level, .. } => Frame::Heading(heading_level(level), Vec::new()),
            Tag::Paragraph => Frame::Paragraph(Vec::new()),
            Tag::Emphasis => Frame::Emphasis(Vec::new()),
            Tag::Strong => Frame::Strong(Vec::new()),
            Tag::Link { dest_url, .. } => Frame::Link(dest_url.into_string(), Vec::new()),
            Tag::Image { dest_url, .. } => Frame::Image(dest_url.into_string(), String::new()),
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                        Some(lang.into_string())
                    }
                    _ => None,
                };
                Frame::CodeBlock(language, String::new())
            }
            Tag::BlockQuote => Frame::BlockQuote(Vec::new()),
            Tag::List(start) => Frame::List(start.is_some(), Vec::new()),
            Tag::Item => Frame::Item(Vec::new()),
            _ => Frame::Transparent(Vec::new()),
        };
        self.stack.push(frame);
    }

    fn end(&mut self, _tag: TagEnd) {
        // Events are well nested, so the ending tag is always the top frame.
        let Some(frame) = self.stack.pop() else {
            return;
        };

        match frame {
            Frame::Heading(level, children) => {
                self.push(RichTextNode::Heading { level, children })
            }
            Frame::Paragraph(children) => self.push(RichTextNode::Paragraph { children }),
            Frame::Emphasis(children) => self.push(RichTextNode::Emphasis { children }),
            Frame::Strong(children) => self.push(RichTextNode::Strong { children }),
            Frame::Link(href, children) => self.push(RichTextNode::Link { href, children }),
            Frame::Image(src, alt) => self.push(RichTextNode::Image { src, alt }),
            Frame::CodeBlock(language, code) => {
                self.push(RichTextNode::CodeBlock { language, code })
            }
            Frame::BlockQuote(children) => self.push(RichTextNode::BlockQuote { children }),
            Frame::List(ordered, items) => self.push(RichTextNode::List { ordered, items }),
            Frame::Item(children) => {
                if let Some(Frame::List(_, items)) = self.stack.last_mut() {
                    items.push(children);
                }
            }
            Frame::Transparent(children) => {
                for child in children {
                    self.push(child);
                }
            }
        }
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::Image(_, alt)) => alt.push_str(text),
            Some(Frame::CodeBlock(_, code)) => code.push_str(text),
            _ => self.push(RichTextNode::Text {
                value: text.to_string(),
            }),
        }
    }

    fn push(&mut self, node: RichTextNode) {
        let children = match self.stack.last_mut() {
            Some(Frame::Heading(_, children))
            | Some(Frame::Paragraph(children))
            | Some(Frame::Emphasis(children))
            | Some(Frame::Strong(children))
            | Some(Frame::Link(_, children))
            | Some(Frame::BlockQuote(children))
            | Some(Frame::Item(children))
            | Some(Frame::Transparent(children)) => children,
            // Loose nodes inside a list (not wrapped in an item) and
            // everything else fall through to the nearest sane target.
            Some(Frame::List(_, items)) => {
                if items.is_empty() {
                    items.push(Vec::new());
                }
                items.last_mut().expect("just ensured an item exists")
            }
            Some(Frame::Image(_, _)) | Some(Frame::CodeBlock(_, _)) | None => &mut self.root,
        };
        children.push(node);
    }

    fn finish(mut self) -> Vec<RichTextNode> {
        // Unbalanced input cannot happen with pulldown-cmark, but if a
        // frame is somehow left open its content is still preserved.
        while !self.stack.is_empty() {
            self.end(TagEnd::Paragraph);
        }
        self.root
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
