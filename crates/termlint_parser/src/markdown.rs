//! Markdown parser using markdown-rs (wooorm/markdown-rs).
//!
//! Converts the mdast produced by the `markdown` crate into TxtAST.

use markdown::mdast::Node;
use markdown::{ParseOptions, to_mdast};
use termlint_ast::{AstArena, NodeData, NodeType, Span, TxtNode};

use crate::traits::check_source_len;
use crate::{ParseError, Parser};

/// Markdown parser implementation (CommonMark + GFM).
pub struct MarkdownParser;

impl MarkdownParser {
    /// Creates a new Markdown parser.
    pub fn new() -> Self {
        Self
    }

    fn options() -> ParseOptions {
        ParseOptions::gfm()
    }

    /// Converts an mdast node to TxtNode.
    fn convert_node<'a>(&self, arena: &'a AstArena, node: &Node) -> TxtNode<'a> {
        match node {
            Node::Root(root) => self.parent(arena, node, &root.children, NodeType::Document),
            Node::Paragraph(para) => {
                self.parent(arena, node, &para.children, NodeType::Paragraph)
            }
            Node::Heading(heading) => self
                .parent(arena, node, &heading.children, NodeType::Header)
                .with_data(NodeData::Header(heading.depth)),
            Node::Blockquote(quote) => {
                self.parent(arena, node, &quote.children, NodeType::BlockQuote)
            }
            Node::List(list) => self
                .parent(arena, node, &list.children, NodeType::List)
                .with_data(NodeData::List(list.ordered)),
            Node::ListItem(item) => self.parent(arena, node, &item.children, NodeType::ListItem),
            Node::Code(code) => {
                let lang = code.lang.as_deref().map(|l| arena.alloc_str(l));
                self.text(arena, node, &code.value, NodeType::CodeBlock)
                    .with_data(NodeData::CodeBlock(lang))
            }
            Node::ThematicBreak(_) => self.leaf(node, NodeType::HorizontalRule),
            Node::Html(html) => self.text(arena, node, &html.value, NodeType::Html),

            Node::Text(text) => self.text(arena, node, &text.value, NodeType::Str),
            Node::Break(_) => self.leaf(node, NodeType::Break),
            Node::Emphasis(em) => self.parent(arena, node, &em.children, NodeType::Emphasis),
            Node::Strong(strong) => self.parent(arena, node, &strong.children, NodeType::Strong),
            Node::Delete(del) => self.parent(arena, node, &del.children, NodeType::Delete),
            Node::InlineCode(code) => self.text(arena, node, &code.value, NodeType::Code),
            Node::Link(link) => {
                let data = self.link_data(arena, &link.url, link.title.as_deref());
                self.parent(arena, node, &link.children, NodeType::Link)
                    .with_data(data)
            }
            Node::Image(image) => {
                let data = self.link_data(arena, &image.url, image.title.as_deref());
                self.leaf(node, NodeType::Image).with_data(data)
            }

            Node::LinkReference(reference) => {
                self.parent(arena, node, &reference.children, NodeType::LinkReference)
            }
            Node::ImageReference(_) => self.leaf(node, NodeType::ImageReference),
            Node::Definition(def) => {
                let data = self.link_data(arena, &def.url, def.title.as_deref());
                self.leaf(node, NodeType::Definition).with_data(data)
            }

            Node::Table(table) => self.parent(arena, node, &table.children, NodeType::Table),
            Node::TableRow(row) => self.parent(arena, node, &row.children, NodeType::TableRow),
            Node::TableCell(cell) => {
                self.parent(arena, node, &cell.children, NodeType::TableCell)
            }
            Node::FootnoteDefinition(def) => {
                self.parent(arena, node, &def.children, NodeType::FootnoteDefinition)
            }
            Node::FootnoteReference(_) => self.leaf(node, NodeType::FootnoteReference),

            // Frontmatter, math and MDX are not enabled by the GFM options.
            _ => self.leaf(node, NodeType::Html),
        }
    }

    fn parent<'a>(
        &self,
        arena: &'a AstArena,
        node: &Node,
        children: &[Node],
        node_type: NodeType,
    ) -> TxtNode<'a> {
        let children =
            arena.alloc_slice_fill_iter(children.iter().map(|c| self.convert_node(arena, c)));
        TxtNode::new_parent(node_type, Self::span(node), children)
    }

    fn text<'a>(
        &self,
        arena: &'a AstArena,
        node: &Node,
        value: &str,
        node_type: NodeType,
    ) -> TxtNode<'a> {
        TxtNode::new_text(node_type, Self::span(node), arena.alloc_str(value))
    }

    fn leaf<'a>(&self, node: &Node, node_type: NodeType) -> TxtNode<'a> {
        TxtNode::new_leaf(node_type, Self::span(node))
    }

    fn link_data<'a>(&self, arena: &'a AstArena, url: &str, title: Option<&str>) -> NodeData<'a> {
        NodeData::link(arena.alloc_str(url), title.map(|t| arena.alloc_str(t)))
    }

    fn span(node: &Node) -> Span {
        match node.position() {
            Some(pos) => Span::new(pos.start.offset as u32, pos.end.offset as u32),
            None => Span::new(0, 0),
        }
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown", "mdown", "mkdn", "mkd"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError> {
        check_source_len(source)?;
        let mdast =
            to_mdast(source, &Self::options()).map_err(|e| ParseError::invalid_source(e.to_string()))?;

        Ok(self.convert_node(arena, &mdast))
    }
}
