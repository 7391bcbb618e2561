//! Field labels on CST children.
//!
//! Fields are not stored in the green tree. A child's field is a function of
//! its parent's kind and its position among the parent's non-trivia children,
//! so it is recomputed on demand.

use std::fmt;

use serde::Serialize;

use super::cst::token_sets::{ARGMODES, COMPARISON_OPERATORS, CONSTRAINT_ACTIONS, DIRECTIONS};
use super::cst::{SyntaxElement, SyntaxKind, SyntaxNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Type,
    Operator,
    Function,
    Arguments,
    Scope,
    Replace,
    Action,
    Argmode,
    Order,
    Table,
    Content,
    Elements,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Type => "type",
            Field::Operator => "operator",
            Field::Function => "function",
            Field::Arguments => "arguments",
            Field::Scope => "scope",
            Field::Replace => "replace",
            Field::Action => "action",
            Field::Argmode => "argmode",
            Field::Order => "order",
            Field::Table => "table",
            Field::Content => "content",
            Field::Elements => "elements",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_punctuation(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ParenOpen
            | SyntaxKind::ParenClose
            | SyntaxKind::BracketOpen
            | SyntaxKind::BracketClose
            | SyntaxKind::Comma
    )
}

/// Non-trivia children of `node`, tokens included.
fn significant_children(node: &SyntaxNode) -> impl Iterator<Item = SyntaxElement> {
    node.children_with_tokens()
        .filter(|child| !child.kind().is_trivia())
}

/// Field label of `element` within its parent, if it carries one.
pub fn field_of(element: &SyntaxElement) -> Option<Field> {
    let parent = element.parent()?;
    let kind = element.kind();
    if kind.is_trivia() {
        return None;
    }

    match parent.kind() {
        SyntaxKind::KwCreateOrReplaceFunction => {
            matches!(kind, SyntaxKind::KwOr | SyntaxKind::KwReplace).then_some(Field::Replace)
        }
        SyntaxKind::SetStatement => {
            matches!(kind, SyntaxKind::KwSession | SyntaxKind::KwLocal).then_some(Field::Scope)
        }
        SyntaxKind::CreateIndexStatement => {
            if kind != SyntaxKind::Identifier {
                return None;
            }
            let position = significant_children(&parent)
                .filter(|child| child.kind() == SyntaxKind::Identifier)
                .position(|child| child == *element)?;
            match position {
                0 => Some(Field::Name),
                1 => Some(Field::Table),
                _ => None,
            }
        }
        SyntaxKind::CreateTableColumnParameter => match kind {
            SyntaxKind::Identifier => Some(Field::Name),
            SyntaxKind::Type | SyntaxKind::ArrayType => Some(Field::Type),
            _ => None,
        },
        SyntaxKind::UsingClause => (kind == SyntaxKind::Identifier).then_some(Field::Type),
        SyntaxKind::Tuple => (!is_punctuation(kind)).then_some(Field::Elements),
        SyntaxKind::OnUpdateAction | SyntaxKind::OnDeleteAction => {
            (CONSTRAINT_ACTIONS.contains(kind) || kind == SyntaxKind::KwSetNull)
                .then_some(Field::Action)
        }
        SyntaxKind::FunctionCall => {
            let first = significant_children(&parent).next()?;
            if first == *element {
                return (kind == SyntaxKind::Identifier).then_some(Field::Function);
            }
            (!is_punctuation(kind)).then_some(Field::Arguments)
        }
        SyntaxKind::ComparisonOperator => {
            COMPARISON_OPERATORS.contains(kind).then_some(Field::Operator)
        }
        SyntaxKind::Str => (kind == SyntaxKind::StringContent).then_some(Field::Content),
        SyntaxKind::OrderedExpression => DIRECTIONS.contains(kind).then_some(Field::Order),
        SyntaxKind::TypeCast => {
            let previous = significant_children(&parent)
                .take_while(|child| child != element)
                .last()?;
            (previous.kind() == SyntaxKind::DoubleColon).then_some(Field::Type)
        }
        SyntaxKind::CreateFunctionParameter => {
            ARGMODES.contains(kind).then_some(Field::Argmode)
        }
        _ => None,
    }
}

/// Field-based navigation over [`SyntaxNode`].
pub trait SyntaxNodeExt {
    /// First child (node or token) labelled `field`.
    fn child_by_field(&self, field: Field) -> Option<SyntaxElement>;

    /// Every child labelled `field`, in source order.
    fn children_by_field(&self, field: Field) -> Vec<SyntaxElement>;
}

impl SyntaxNodeExt for SyntaxNode {
    fn child_by_field(&self, field: Field) -> Option<SyntaxElement> {
        significant_children(self).find(|child| field_of(child) == Some(field))
    }

    fn children_by_field(&self, field: Field) -> Vec<SyntaxElement> {
        significant_children(self)
            .filter(|child| field_of(child) == Some(field))
            .collect()
    }
}
