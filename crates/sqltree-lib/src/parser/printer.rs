use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};
use serde::Serialize;

use super::Parse;
use super::cst::{SyntaxElement, SyntaxNode};
use super::fields::{Field, field_of};

/// Text dumps of a parse tree.
///
/// The default view is an indented S-expression over named nodes, with field
/// labels. `raw` switches to every node and token of the CST.
pub struct ParsePrinter<'p> {
    parse: &'p Parse,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'p> ParsePrinter<'p> {
    pub fn new(parse: &'p Parse) -> Self {
        Self {
            parse,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    /// Keeps whitespace and comments in the raw view and the JSON tree.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let root = self.parse.syntax();
        if self.raw {
            self.format_cst(&root, 0, w)
        } else {
            self.format_named(&NodeOrToken::Node(root), None, 0, w)
        }
    }

    /// Every node and token as a serializable tree, fields attached.
    pub fn json_tree(&self) -> JsonNode {
        let root = self.parse.syntax();
        JsonNode::build(&NodeOrToken::Node(root), None, self.trivia, false)
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());
        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn format_named(
        &self,
        element: &SyntaxElement,
        field: Option<Field>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let label = field.map(|f| format!("{f}: ")).unwrap_or_default();
        let span = self.span_str(element.text_range());
        let kind = element.kind();

        if !kind.is_named() {
            // Anonymous elements only show when a field points at them.
            if field.is_some() {
                writeln!(w, "{}{}{:?}{}", prefix, label, element_text(element), span)?;
            }
            return Ok(());
        }

        writeln!(w, "{}{}({}){}", prefix, label, kind.name(), span)?;
        if let NodeOrToken::Node(node) = element {
            self.format_children(node, indent + 1, w)?;
        }
        Ok(())
    }

    /// Children of a named node, looking through anonymous wrapper nodes.
    fn format_children(
        &self,
        node: &SyntaxNode,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        for child in node.children_with_tokens() {
            if child.kind().is_trivia() {
                continue;
            }
            let field = field_of(&child);
            match &child {
                NodeOrToken::Node(inner)
                    if !inner.kind().is_named()
                        && !inner.kind().is_multiword_keyword()
                        && field.is_none() =>
                {
                    self.format_children(inner, indent, w)?;
                }
                _ => self.format_named(&child, field, indent, w)?,
            }
        }
        Ok(())
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

/// Source text of an element with inner trivia collapsed to single spaces.
fn element_text(element: &SyntaxElement) -> String {
    match element {
        NodeOrToken::Token(token) => token.text().to_string(),
        NodeOrToken::Node(node) => node
            .descendants_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|token| !token.kind().is_trivia())
            .map(|token| token.text().to_string())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// One element of the JSON tree.
#[derive(Debug, Clone, Serialize)]
pub struct JsonNode {
    pub kind: &'static str,
    pub named: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    pub start: u32,
    pub end: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode>,
}

impl JsonNode {
    /// Words inside a multi-word keyword node are never named, `NULL` included.
    fn build(element: &SyntaxElement, field: Option<Field>, trivia: bool, in_keyword: bool) -> Self {
        let range = element.text_range();
        let kind = element.kind();
        let opaque = in_keyword || kind.is_multiword_keyword();
        let (text, children) = match element {
            NodeOrToken::Token(token) => (Some(token.text().to_string()), Vec::new()),
            NodeOrToken::Node(node) => {
                let children = node
                    .children_with_tokens()
                    .filter(|child| trivia || !child.kind().is_trivia())
                    .map(|child| {
                        let field = field_of(&child);
                        JsonNode::build(&child, field, trivia, opaque)
                    })
                    .collect();
                (None, children)
            }
        };
        Self {
            kind: kind.name(),
            named: kind.is_named() && !in_keyword,
            field,
            start: range.start().into(),
            end: range.end().into(),
            text,
            children,
        }
    }
}

impl Parse {
    pub fn printer(&self) -> ParsePrinter<'_> {
        ParsePrinter::new(self)
    }
}
