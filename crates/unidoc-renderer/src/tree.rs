//! Owned document tree built from the pulldown-cmark event stream.
//!
//! The renderer needs to look at a node's children before leaving it (loose
//! list items) and to skip subtrees (code blocks, images, HTML), so the flat
//! event stream is folded into a tree first.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, LinkType, Parser, Tag, TextMergeStream};

/// A line break that ends a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineBreak {
    /// Source line break inside a paragraph; rendered as a space.
    Soft,
    /// Explicit break (two trailing spaces or a backslash).
    Hard,
}

/// Node payload, one variant per node kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading {
        level: u8,
    },
    Paragraph,
    /// Transparent container for constructs without a rendering of their own.
    TextBlock,
    List {
        ordered: bool,
        /// First number of an ordered list; 0 when unspecified.
        start: u64,
    },
    ListItem,
    Blockquote,
    /// Fenced blocks carry their source lines; indented blocks carry their
    /// content as `Text` children.
    CodeBlock {
        fenced: bool,
        info: String,
        lines: Vec<String>,
    },
    ThematicBreak,
    HtmlBlock,
    Text {
        content: String,
        line_break: Option<LineBreak>,
    },
    /// Level 1 is italic, anything higher is strong.
    Emphasis {
        level: u8,
    },
    CodeSpan {
        code: String,
    },
    Link {
        destination: String,
        title: String,
    },
    AutoLink {
        destination: String,
    },
    Image {
        destination: String,
        title: String,
        alt_text: String,
    },
    RawHtml {
        html: String,
    },
}

/// A node and its children, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node without children.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Create a node with the given children.
    #[must_use]
    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    /// Plain text run without a trailing break.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text {
            content: content.into(),
            line_break: None,
        })
    }

    /// Whether any direct child is a paragraph (a loose list item).
    #[must_use]
    pub fn has_paragraph_child(&self) -> bool {
        self.children
            .iter()
            .any(|child| child.kind == NodeKind::Paragraph)
    }

    /// Concatenated content of all text descendants.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text { content, .. } => out.push_str(content),
            NodeKind::CodeSpan { code } => out.push_str(code),
            _ => {}
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

/// Parse CommonMark source into a `Document`-rooted tree.
///
/// Parsing never fails; malformed markup is recovered by the parser.
#[must_use]
pub fn parse_document(source: &str) -> Node {
    let mut builder = TreeBuilder::new();
    for event in TextMergeStream::new(Parser::new(source)) {
        builder.event(event);
    }
    builder.finish()
}

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Folds events into nodes using a stack of open containers.
struct TreeBuilder {
    /// Open containers; the document is always at the bottom.
    stack: Vec<Node>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Node::new(NodeKind::Document)],
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(_) => self.end_tag(),
            Event::Text(text) | Event::InlineMath(text) | Event::DisplayMath(text) => {
                self.text(&text);
            }
            Event::Code(code) => {
                let code = code.into_string();
                self.push(Node::new(NodeKind::CodeSpan { code }));
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let html = html.into_string();
                self.push(Node::new(NodeKind::RawHtml { html }));
            }
            Event::SoftBreak => self.line_break(LineBreak::Soft),
            Event::HardBreak => self.line_break(LineBreak::Hard),
            Event::Rule => self.push(Node::new(NodeKind::ThematicBreak)),
            Event::FootnoteReference(_) | Event::TaskListMarker(_) => {
                // Not supported
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        let kind = match tag {
            Tag::Paragraph => NodeKind::Paragraph,
            Tag::Heading { level, .. } => NodeKind::Heading {
                level: heading_level_to_num(level),
            },
            Tag::BlockQuote(_) => NodeKind::Blockquote,
            Tag::CodeBlock(kind) => {
                let (fenced, info) = match kind {
                    CodeBlockKind::Fenced(info) => (true, info.into_string()),
                    CodeBlockKind::Indented => (false, String::new()),
                };
                NodeKind::CodeBlock {
                    fenced,
                    info,
                    lines: Vec::new(),
                }
            }
            Tag::HtmlBlock => NodeKind::HtmlBlock,
            Tag::List(start) => NodeKind::List {
                ordered: start.is_some(),
                start: start.unwrap_or(0),
            },
            Tag::Item => NodeKind::ListItem,
            Tag::Emphasis => NodeKind::Emphasis { level: 1 },
            Tag::Strong => NodeKind::Emphasis { level: 2 },
            Tag::Link {
                link_type: LinkType::Autolink | LinkType::Email,
                dest_url,
                ..
            } => NodeKind::AutoLink {
                destination: dest_url.into_string(),
            },
            Tag::Link {
                dest_url, title, ..
            } => NodeKind::Link {
                destination: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => NodeKind::Image {
                destination: dest_url.into_string(),
                title: title.into_string(),
                alt_text: String::new(),
            },
            Tag::FootnoteDefinition(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Table(_)
            | Tag::TableHead
            | Tag::TableRow
            | Tag::TableCell
            | Tag::Strikethrough
            | Tag::Superscript
            | Tag::Subscript
            | Tag::MetadataBlock(_) => NodeKind::TextBlock,
        };
        self.stack.push(Node::new(kind));
    }

    fn end_tag(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        let Some(mut node) = self.stack.pop() else {
            return;
        };
        if let NodeKind::Image { alt_text, .. } = &mut node.kind {
            alt_text.push_str(
                &node
                    .children
                    .iter()
                    .map(Node::plain_text)
                    .collect::<String>(),
            );
            node.children.clear();
        }
        self.push(node);
    }

    fn text(&mut self, text: &str) {
        if let Some(Node {
            kind: NodeKind::CodeBlock {
                fenced: true,
                lines,
                ..
            },
            ..
        }) = self.stack.last_mut()
        {
            lines.extend(text.split_inclusive('\n').map(str::to_owned));
            return;
        }
        self.push(Node::text(text));
    }

    /// Attach a break to the preceding text run, or start an empty one.
    fn line_break(&mut self, kind: LineBreak) {
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        if let Some(Node {
            kind:
                NodeKind::Text {
                    line_break: line_break @ None,
                    ..
                },
            ..
        }) = parent.children.last_mut()
        {
            *line_break = Some(kind);
            return;
        }
        parent.children.push(Node::new(NodeKind::Text {
            content: String::new(),
            line_break: Some(kind),
        }));
    }

    fn push(&mut self, node: Node) {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
        }
    }

    /// Close any containers left open and return the document.
    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.end_tag();
        }
        self.stack
            .pop()
            .unwrap_or_else(|| Node::new(NodeKind::Document))
    }
}
