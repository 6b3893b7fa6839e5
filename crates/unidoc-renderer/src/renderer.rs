//! Tree-walking renderer producing styled Unicode text.

use std::fmt::{self, Write};

use crate::config::RenderConfig;
use crate::convert::collapse_blank_lines;
use crate::error::ConvertError;
use crate::punctuation::smart_dashes;
use crate::state::{LIST_INDENT, QUOTE_PREFIX, RenderState};
use crate::style::Styling;
use crate::tree::{LineBreak, Node, NodeKind};

/// Width of the heading underline for levels 1 and 2.
const UNDERLINE_WIDTH: usize = 50;
/// Width of a thematic break.
const RULE_WIDTH: usize = 60;
/// Number of `─` between the corners of a code box.
const CODE_BOX_WIDTH: usize = 64;
/// Longest code line shown before truncation.
const CODE_LINE_LIMIT: usize = 58;
/// Tab stop used inside code blocks.
const TAB: &str = "    ";
/// Title shown for images without one.
const DEFAULT_IMAGE_TITLE: &str = "Image";

/// What to do with a node's children after entering it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Walk {
    Continue,
    /// Content was rendered atomically on enter.
    SkipChildren,
}

/// Renders a document tree as plain Unicode text.
///
/// Headings, emphasis, lists, quotes and code are approximated with Unicode
/// glyphs only: no markup, colors or terminal escapes end up in the output.
///
/// # Example
///
/// ```
/// use unidoc_renderer::{RenderConfig, UnicodeRenderer, parse_document};
///
/// let tree = parse_document("**Bold** text");
/// let text = UnicodeRenderer::new(RenderConfig::default())
///     .render(&tree)
///     .unwrap();
/// assert_eq!(text, "𝗕𝗼𝗹𝗱 text");
/// ```
#[derive(Debug, Default)]
pub struct UnicodeRenderer {
    config: RenderConfig,
    state: RenderState,
}

impl UnicodeRenderer {
    /// Create a renderer for the given configuration.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            state: RenderState::default(),
        }
    }

    /// Render a document and return the finished text.
    ///
    /// Blank-line runs are collapsed and surrounding whitespace is trimmed.
    pub fn render(&mut self, document: &Node) -> Result<String, ConvertError> {
        let mut raw = String::with_capacity(4096);
        self.render_raw(document, &mut raw)?;
        Ok(collapse_blank_lines(&raw).trim().to_owned())
    }

    /// Render a document into `out` without any cleanup.
    ///
    /// A write failure stops the walk immediately.
    pub fn render_raw<W: Write>(&mut self, document: &Node, out: &mut W) -> fmt::Result {
        self.state = RenderState::default();
        self.walk(document, out)
    }

    fn walk<W: Write>(&mut self, node: &Node, out: &mut W) -> fmt::Result {
        let checkpoint = self.state.checkpoint();
        let entered = match self.enter(node, out) {
            Ok(Walk::Continue) => node
                .children
                .iter()
                .try_for_each(|child| self.walk(child, out)),
            Ok(Walk::SkipChildren) => Ok(()),
            Err(err) => Err(err),
        };
        self.state.rewind(checkpoint);
        entered?;
        self.exit(node, out)
    }

    fn enter<W: Write>(&mut self, node: &Node, out: &mut W) -> Result<Walk, fmt::Error> {
        match &node.kind {
            NodeKind::Document | NodeKind::Paragraph | NodeKind::TextBlock => {}
            NodeKind::Heading { level } => {
                self.state.enter_heading();
                write!(out, "{} ", heading_prefix(*level))?;
            }
            NodeKind::Text {
                content,
                line_break,
            } => self.text(content, *line_break, out)?,
            NodeKind::Emphasis { level } => {
                if *level > 1 {
                    self.state.enter_strong();
                } else {
                    self.state.enter_italic();
                }
            }
            NodeKind::List { ordered, start } => {
                if self.state.list_depth() > 0 {
                    out.write_char('\n')?;
                }
                self.state.push_list(*ordered, *start);
            }
            NodeKind::ListItem => {
                self.state.enter_list_item();
                let indent = LIST_INDENT.repeat(self.state.list_depth().saturating_sub(1));
                let marker = self.state.next_item_marker();
                write!(out, "{indent}{marker} ")?;
            }
            NodeKind::Blockquote => {
                let depth = self.state.enter_blockquote();
                out.write_str(&QUOTE_PREFIX.repeat(depth))?;
            }
            NodeKind::CodeBlock { .. } => {
                code_box(&code_literal(node), out)?;
                return Ok(Walk::SkipChildren);
            }
            NodeKind::CodeSpan { code } => write!(out, "⌜{code}")?,
            NodeKind::Link { .. } | NodeKind::AutoLink { .. } => out.write_char('[')?,
            NodeKind::Image {
                destination, title, ..
            } => {
                let title = if title.is_empty() {
                    DEFAULT_IMAGE_TITLE
                } else {
                    title
                };
                write!(out, "🖼️  {title} <{destination}>")?;
                return Ok(Walk::SkipChildren);
            }
            NodeKind::ThematicBreak => {
                write!(out, "\n{}\n\n", "═".repeat(RULE_WIDTH))?;
            }
            NodeKind::HtmlBlock | NodeKind::RawHtml { .. } => return Ok(Walk::SkipChildren),
        }
        Ok(Walk::Continue)
    }

    /// Emit the closing part of a node. State is already rewound to the
    /// node's parent context here.
    fn exit<W: Write>(&self, node: &Node, out: &mut W) -> fmt::Result {
        match &node.kind {
            NodeKind::Heading { level } => {
                if let Some(rule) = heading_underline(*level) {
                    write!(out, "\n{}", rule.repeat(UNDERLINE_WIDTH))?;
                }
                out.write_str("\n\n")
            }
            NodeKind::Paragraph if !self.state.in_list_item() => out.write_str("\n\n"),
            NodeKind::List { .. } if self.state.list_depth() == 0 => out.write_char('\n'),
            NodeKind::ListItem if node.has_paragraph_child() => out.write_str("\n\n"),
            NodeKind::ListItem => out.write_char('\n'),
            NodeKind::Blockquote => out.write_str("\n\n"),
            NodeKind::CodeSpan { .. } => out.write_char('⌝'),
            NodeKind::Link { destination, .. } | NodeKind::AutoLink { destination } => {
                write!(out, "] 🔗 <{destination}>")
            }
            _ => Ok(()),
        }
    }

    fn text<W: Write>(
        &self,
        content: &str,
        line_break: Option<LineBreak>,
        out: &mut W,
    ) -> fmt::Result {
        if !content.is_empty() {
            let dashed = smart_dashes(content);
            let styling = Styling::resolve(self.state.spans(), &self.config);
            out.write_str(&styling.apply(&dashed))?;
        }
        match line_break {
            Some(LineBreak::Hard) => {
                out.write_char('\n')?;
                out.write_str(&self.state.continuation_prefix())
            }
            Some(LineBreak::Soft) => out.write_char(' '),
            None => Ok(()),
        }
    }
}

/// Fill glyph written before heading text.
fn heading_prefix(level: u8) -> String {
    let glyph = match level {
        1 => "█",
        2 => "▓",
        3 => "▒",
        4 => "░",
        5 => "▫",
        _ => "▪",
    };
    if (2..=4).contains(&level) {
        glyph.repeat(usize::from(level))
    } else {
        glyph.to_owned()
    }
}

fn heading_underline(level: u8) -> Option<&'static str> {
    match level {
        1 => Some("═"),
        2 => Some("─"),
        _ => None,
    }
}

/// Literal content of a code block.
///
/// Fenced blocks keep their source lines; indented blocks keep their text
/// children. Anything else under a code block is ignored.
fn code_literal(node: &Node) -> String {
    if let NodeKind::CodeBlock {
        fenced: true,
        lines,
        ..
    } = &node.kind
    {
        return lines.concat();
    }
    node.children
        .iter()
        .filter_map(|child| match &child.kind {
            NodeKind::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect()
}

/// Draw code inside a fixed-width box.
///
/// Every row is as wide as the borders: long lines are cut to
/// `CODE_LINE_LIMIT` characters plus an ellipsis, short ones are padded.
fn code_box<W: Write>(code: &str, out: &mut W) -> fmt::Result {
    let border = "─".repeat(CODE_BOX_WIDTH);
    writeln!(out, "┌{border}┐")?;
    for line in code.trim_end_matches('\n').split('\n') {
        let line = line.trim_end_matches('\r').replace('\t', TAB);
        let line = truncate_line(&line);
        let padding = (CODE_BOX_WIDTH - 2).saturating_sub(line.chars().count());
        writeln!(out, "│ {line}{} │", " ".repeat(padding))?;
    }
    write!(out, "└{border}┘\n\n")
}

fn truncate_line(line: &str) -> String {
    if line.chars().count() > CODE_LINE_LIMIT {
        let mut cut: String = line.chars().take(CODE_LINE_LIMIT).collect();
        cut.push('…');
        cut
    } else {
        line.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ItalicStyle, StrongStyle};
    use crate::tree::parse_document;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str) -> String {
        render_with(markdown, RenderConfig::default())
    }

    fn render_with(markdown: &str, config: RenderConfig) -> String {
        let tree = parse_document(markdown);
        UnicodeRenderer::new(config).render(&tree).unwrap()
    }

    fn render_tree(tree: &Node) -> String {
        UnicodeRenderer::default().render(tree).unwrap()
    }

    fn doc(children: Vec<Node>) -> Node {
        Node::with_children(NodeKind::Document, children)
    }

    fn list(ordered: bool, start: u64, items: Vec<Node>) -> Node {
        Node::with_children(NodeKind::List { ordered, start }, items)
    }

    fn item(children: Vec<Node>) -> Node {
        Node::with_children(NodeKind::ListItem, children)
    }

    /// Marker of each rendered line, ignoring indentation.
    fn line_markers(text: &str) -> Vec<String> {
        text.lines()
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_heading_level_one() {
        let expected = format!("█ 𝗛𝗲𝗹𝗹𝗼\n{}", "═".repeat(50));
        assert_eq!(render("# Hello"), expected);
    }

    #[test]
    fn test_heading_level_two() {
        let expected = format!("▓▓ 𝗦𝘂𝗯\n{}", "─".repeat(50));
        assert_eq!(render("## Sub"), expected);
    }

    #[test]
    fn test_heading_prefixes() {
        assert_eq!(render("### Three"), "▒▒▒ 𝗧𝗵𝗿𝗲𝗲");
        assert_eq!(render("#### x"), "░░░░ 𝘅");
        assert_eq!(render("##### x"), "▫ 𝘅");
        assert_eq!(render("###### x"), "▪ 𝘅");
    }

    #[test]
    fn test_heading_followed_by_paragraph() {
        assert_eq!(render("### Title\nbody"), "▒▒▒ 𝗧𝗶𝘁𝗹𝗲\n\nbody");
    }

    #[test]
    fn test_heading_overrides_emphasis() {
        assert_eq!(render("### **A** *b*"), "▒▒▒ 𝗔 𝗯");
    }

    #[test]
    fn test_out_of_range_heading_levels() {
        let heading = |level| {
            doc(vec![Node::with_children(
                NodeKind::Heading { level },
                vec![Node::text("x")],
            )])
        };
        assert_eq!(render_tree(&heading(0)), "▪ 𝘅");
        assert_eq!(render_tree(&heading(9)), "▪ 𝘅");
    }

    #[test]
    fn test_emphasis_default_styles() {
        assert_eq!(render("**bold** and *italic*"), "𝗯𝗼𝗹𝗱 and 𝘪𝘵𝘢𝘭𝘪𝘤");
    }

    #[test]
    fn test_emphasis_marker_styles() {
        let config = RenderConfig::default()
            .with_italic_style(ItalicStyle::Markers)
            .with_strong_style(StrongStyle::Markers);
        assert_eq!(
            render_with("**bold** and *italic*", config),
            "**bold** and *italic*"
        );
    }

    #[test]
    fn test_emphasis_plain_and_script() {
        let config = RenderConfig::default()
            .with_italic_style(ItalicStyle::Script)
            .with_strong_style(StrongStyle::Plain);
        assert_eq!(render_with("**Bold** *This*", config), "Bold 𝒯𝒽𝒾𝓈");
    }

    #[test]
    fn test_strong_wins_over_italic() {
        assert_eq!(render("***both***"), "𝗯𝗼𝘁𝗵");
    }

    #[test]
    fn test_italic_restored_after_nested_strong() {
        assert_eq!(render("*a **b** c*"), "𝘢 𝗯 𝘤");
    }

    #[test]
    fn test_emphasis_level_above_two_is_strong() {
        let tree = doc(vec![Node::with_children(
            NodeKind::Paragraph,
            vec![Node::with_children(
                NodeKind::Emphasis { level: 3 },
                vec![Node::text("x")],
            )],
        )]);
        assert_eq!(render_tree(&tree), "𝘅");
    }

    #[test]
    fn test_smart_dashes() {
        assert_eq!(render("a---b"), "a—b");
        assert_eq!(render("a--b"), "a–b");
        assert_eq!(render("**a--b**"), "𝗮–𝗯");
    }

    #[test]
    fn test_soft_break_becomes_space() {
        assert_eq!(render("one\ntwo"), "one two");
        assert_eq!(render("*one*\ntwo"), "𝘰𝘯𝘦 two");
    }

    #[test]
    fn test_hard_break() {
        assert_eq!(render("one  \ntwo"), "one\ntwo");
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(render("- a\n- b"), "• a\n• b");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(render("1. a\n2. b\n3. c"), "① a\n② b\n③ c");
        assert_eq!(render("7. a\n8. b"), "⑦ a\n⑧ b");
    }

    #[test]
    fn test_ordered_list_first_twenty() {
        let markdown: String = (1..=20).map(|n| format!("{n}. x\n")).collect();
        let expected: Vec<String> = "①②③④⑤⑥⑦⑧⑨⑩⑪⑫⑬⑭⑮⑯⑰⑱⑲⑳"
            .chars()
            .map(String::from)
            .collect();
        assert_eq!(line_markers(&render(&markdown)), expected);
    }

    #[test]
    fn test_nested_lists() {
        assert_eq!(
            render("- a\n  - b\n    - c\n- d"),
            "• a\n  ◦ b\n    ▪ c\n\n• d"
        );
    }

    #[test]
    fn test_bullets_cycle_through_six_depths() {
        let mut tree = item(vec![Node::text("7")]);
        for depth in (1..=6).rev() {
            tree = item(vec![
                Node::text(depth.to_string()),
                list(false, 0, vec![tree]),
            ]);
        }
        let tree = doc(vec![list(false, 0, vec![tree])]);

        let text = render_tree(&tree);
        assert_eq!(
            line_markers(&text),
            ["•", "◦", "▪", "▫", "‣", "⁃", "•"]
        );
        assert!(text.ends_with("\n            • 7"));
    }

    #[test]
    fn test_ordered_numbering_by_level() {
        let twelve = (1..=12).map(|n| item(vec![Node::text(n.to_string())])).collect();
        let tree = doc(vec![list(
            true,
            1,
            vec![item(vec![
                Node::text("x"),
                list(
                    true,
                    1,
                    vec![item(vec![
                        Node::text("y"),
                        list(
                            true,
                            1,
                            vec![item(vec![Node::text("z"), list(true, 1, twelve)])],
                        ),
                    ])],
                ),
            ])],
        )]);

        let markers = line_markers(&render_tree(&tree));
        assert_eq!(&markers[..3], ["①", "⑴", "🅐"]);
        assert_eq!(
            &markers[3..],
            ["ⅰ", "ⅱ", "ⅲ", "ⅳ", "ⅴ", "ⅵ", "ⅶ", "ⅷ", "ⅸ", "ⅹ", "ⅺ", "ⅻ"]
        );
    }

    #[test]
    fn test_ordered_list_start_zero() {
        let tree = doc(vec![list(true, 0, vec![item(vec![Node::text("a")])])]);
        assert_eq!(render_tree(&tree), "① a");
    }

    #[test]
    fn test_list_item_outside_list() {
        let tree = doc(vec![item(vec![Node::text("a")])]);
        assert_eq!(render_tree(&tree), "• a");
    }

    #[test]
    fn test_loose_list() {
        assert_eq!(render("- a\n\n- b"), "• a\n\n• b");
    }

    #[test]
    fn test_hard_break_in_list_item() {
        assert_eq!(render("- one  \n  two"), "• one\n  two");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(render("> quote"), "┃ quote");
        assert_eq!(render("> a\n>\n> > b"), "┃ a\n\n┃ ┃ b");
    }

    #[test]
    fn test_hard_break_in_blockquote() {
        assert_eq!(render("> one  \n> two"), "┃ one\n┃ two");
    }

    #[test]
    fn test_code_block_box() {
        let text = render("```\nx\ty\n```");
        let border = "─".repeat(64);
        let expected = format!(
            "┌{border}┐\n│ x    y{} │\n└{border}┘",
            " ".repeat(56)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_code_block_truncates_long_lines() {
        let long = "a".repeat(70);
        let text = render(&format!("```\n{long}\nshort\n```"));
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 4);
        assert!(rows[1].starts_with(&format!("│ {}…", "a".repeat(58))));
        for row in rows {
            assert_eq!(row.chars().count(), 66, "row {row:?}");
        }
    }

    #[test]
    fn test_code_block_exactly_at_limit_is_kept() {
        let line = "b".repeat(58);
        let text = render(&format!("```\n{line}\n```"));
        assert!(text.contains(&format!("│ {line}{} │", " ".repeat(4))));
        assert!(!text.contains('…'));
    }

    #[test]
    fn test_indented_code_block() {
        let text = render("    let x = 1;\n    let y = 2;");
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[1].starts_with("│ let x = 1;"));
        assert!(rows[2].starts_with("│ let y = 2;"));
    }

    #[test]
    fn test_empty_code_block() {
        let text = render("```\n```");
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_code_span() {
        assert_eq!(render("use `x--y` here"), "use ⌜x--y⌝ here");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            render("[text](https://example.com)"),
            "[text] 🔗 <https://example.com>"
        );
        assert_eq!(
            render("<https://example.com>"),
            "[https://example.com] 🔗 <https://example.com>"
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(render("![alt](pic.png)"), "🖼️  Image <pic.png>");
        assert_eq!(
            render(r#"![alt](pic.png "A picture")"#),
            "🖼️  A picture <pic.png>"
        );
    }

    #[test]
    fn test_thematic_break() {
        let expected = format!("a\n\n{}\n\nb", "═".repeat(60));
        assert_eq!(render("a\n\n---\n\nb"), expected);
    }

    #[test]
    fn test_html_is_dropped() {
        assert_eq!(render("<div>\nhidden\n</div>\n\ntext"), "text");
        assert_eq!(render("a <b>b</b> c"), "a b c");
    }

    #[test]
    fn test_renderer_is_reusable() {
        let mut renderer = UnicodeRenderer::default();
        let tree = parse_document("1. a\n2. b");
        let first = renderer.render(&tree).unwrap();
        let second = renderer.render(&tree).unwrap();
        assert_eq!(first, second);
    }

    /// Accepts a fixed number of writes, then fails.
    struct LimitedWriter {
        remaining: usize,
    }

    impl Write for LimitedWriter {
        fn write_str(&mut self, _s: &str) -> fmt::Result {
            if self.remaining == 0 {
                return Err(fmt::Error);
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_aborts_and_rewinds() {
        let tree = parse_document("> - a\n>   - **b**\n>   - c");
        let mut renderer = UnicodeRenderer::default();
        let mut out = LimitedWriter { remaining: 4 };

        assert_eq!(renderer.render_raw(&tree, &mut out), Err(fmt::Error));
        assert_eq!(renderer.state.checkpoint(), RenderState::default().checkpoint());
    }

    #[test]
    fn test_write_failure_stops_the_walk() {
        let tree = parse_document("a\n\nb\n\nc");
        let mut renderer = UnicodeRenderer::default();
        let mut out = LimitedWriter { remaining: 1 };

        assert!(renderer.render_raw(&tree, &mut out).is_err());
        assert_eq!(out.remaining, 0);
    }
}
