//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`; accessors return `None` on
//! trees with errors.

use super::cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
use super::fields::{Field, SyntaxNodeExt};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(SourceFile, SourceFile);
ast_node!(SelectStatement, SelectStatement);
ast_node!(SelectClause, SelectClause);
ast_node!(FromClause, FromClause);
ast_node!(JoinClause, JoinClause);
ast_node!(WhereClause, WhereClause);
ast_node!(LimitClause, LimitClause);
ast_node!(CteClause, CteClause);
ast_node!(Alias, Alias);
ast_node!(UpdateStatement, UpdateStatement);
ast_node!(InsertStatement, InsertStatement);
ast_node!(SetStatement, SetStatement);
ast_node!(CreateTableStatement, CreateTableStatement);
ast_node!(CreateTableColumnParameter, CreateTableColumnParameter);
ast_node!(CreateSchemaStatement, CreateSchemaStatement);
ast_node!(CreateFunctionStatement, CreateFunctionStatement);
ast_node!(CreateFunctionParameter, CreateFunctionParameter);
ast_node!(FunctionBody, FunctionBody);
ast_node!(Identifier, Identifier);
ast_node!(FunctionCall, FunctionCall);
ast_node!(ComparisonOperator, ComparisonOperator);
ast_node!(Str, Str);

/// Top-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Select(SelectStatement),
    Update(UpdateStatement),
    Insert(InsertStatement),
    Set(SetStatement),
    CreateTable(CreateTableStatement),
    CreateSchema(CreateSchemaStatement),
    CreateFunction(CreateFunctionStatement),
}

impl Statement {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SelectStatement => SelectStatement::cast(node).map(Statement::Select),
            SyntaxKind::UpdateStatement => UpdateStatement::cast(node).map(Statement::Update),
            SyntaxKind::InsertStatement => InsertStatement::cast(node).map(Statement::Insert),
            SyntaxKind::SetStatement => SetStatement::cast(node).map(Statement::Set),
            SyntaxKind::CreateTableStatement => {
                CreateTableStatement::cast(node).map(Statement::CreateTable)
            }
            SyntaxKind::CreateSchemaStatement => {
                CreateSchemaStatement::cast(node).map(Statement::CreateSchema)
            }
            SyntaxKind::CreateFunctionStatement => {
                CreateFunctionStatement::cast(node).map(Statement::CreateFunction)
            }
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Statement::Select(n) => n.as_cst(),
            Statement::Update(n) => n.as_cst(),
            Statement::Insert(n) => n.as_cst(),
            Statement::Set(n) => n.as_cst(),
            Statement::CreateTable(n) => n.as_cst(),
            Statement::CreateSchema(n) => n.as_cst(),
            Statement::CreateFunction(n) => n.as_cst(),
        }
    }
}

fn child<N>(node: &SyntaxNode, cast: fn(SyntaxNode) -> Option<N>) -> Option<N> {
    node.children().find_map(cast)
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

impl SourceFile {
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }
}

impl SelectStatement {
    pub fn cte_clause(&self) -> Option<CteClause> {
        child(&self.0, CteClause::cast)
    }

    pub fn select_clause(&self) -> Option<SelectClause> {
        child(&self.0, SelectClause::cast)
    }

    pub fn from_clause(&self) -> Option<FromClause> {
        child(&self.0, FromClause::cast)
    }

    pub fn joins(&self) -> impl Iterator<Item = JoinClause> + '_ {
        self.0.children().filter_map(JoinClause::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        child(&self.0, WhereClause::cast)
    }

    pub fn limit_clause(&self) -> Option<LimitClause> {
        child(&self.0, LimitClause::cast)
    }
}

impl SelectClause {
    /// Projection items; empty for a bare `SELECT`.
    pub fn items(&self) -> Vec<SyntaxElement> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::SelectClauseBody)
            .map(|body| significant_items(&body))
            .unwrap_or_default()
    }
}

impl FromClause {
    pub fn items(&self) -> Vec<SyntaxElement> {
        significant_items(&self.0)
            .into_iter()
            .filter(|it| it.kind() != SyntaxKind::KwFrom)
            .collect()
    }
}

impl JoinClause {
    pub fn join_type(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| n.kind() == SyntaxKind::JoinType)
    }

    pub fn table(&self) -> Option<Identifier> {
        child(&self.0, Identifier::cast)
    }
}

impl WhereClause {
    pub fn condition(&self) -> Option<SyntaxElement> {
        significant_items(&self.0)
            .into_iter()
            .find(|it| it.kind() != SyntaxKind::KwWhere)
    }
}

impl LimitClause {
    pub fn count(&self) -> Option<u64> {
        token(&self.0, SyntaxKind::Integer)?.text().parse().ok()
    }

    pub fn offset(&self) -> Option<u64> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::Integer)
            .nth(1)?
            .text()
            .parse()
            .ok()
    }
}

impl CteClause {
    pub fn names(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.0.children().filter_map(Identifier::cast)
    }
}

impl Alias {
    /// The aliased expression.
    pub fn value(&self) -> Option<SyntaxElement> {
        significant_items(&self.0).into_iter().next()
    }

    pub fn name(&self) -> Option<Identifier> {
        self.0.children().filter_map(Identifier::cast).last()
    }
}

impl UpdateStatement {
    pub fn table(&self) -> Option<Identifier> {
        child(&self.0, Identifier::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        child(&self.0, WhereClause::cast)
    }
}

impl InsertStatement {
    pub fn table(&self) -> Option<Identifier> {
        child(&self.0, Identifier::cast)
    }

    /// Expressions of the `VALUES` tuple.
    pub fn values(&self) -> Vec<SyntaxElement> {
        self.0
            .descendants()
            .find(|n| n.kind() == SyntaxKind::ValuesClauseBody)
            .map(|body| significant_items(&body))
            .unwrap_or_default()
    }
}

impl SetStatement {
    pub fn scope(&self) -> Option<SyntaxToken> {
        self.0
            .child_by_field(Field::Scope)
            .and_then(|it| it.into_token())
    }

    pub fn name(&self) -> Option<Identifier> {
        child(&self.0, Identifier::cast)
    }

    pub fn is_default(&self) -> bool {
        token(&self.0, SyntaxKind::KwDefault).is_some()
    }
}

impl CreateTableStatement {
    pub fn if_not_exists(&self) -> bool {
        self.0.children().any(|n| n.kind() == SyntaxKind::KwIfNotExists)
    }

    pub fn name(&self) -> Option<Identifier> {
        child(&self.0, Identifier::cast)
    }

    pub fn columns(&self) -> impl Iterator<Item = CreateTableColumnParameter> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::CreateTableParameters)
            .flat_map(|params| params.children())
            .filter_map(CreateTableColumnParameter::cast)
    }
}

impl CreateTableColumnParameter {
    pub fn name(&self) -> Option<Identifier> {
        self.0
            .child_by_field(Field::Name)
            .and_then(|it| it.into_node())
            .and_then(Identifier::cast)
    }

    pub fn ty(&self) -> Option<SyntaxNode> {
        self.0.child_by_field(Field::Type).and_then(|it| it.into_node())
    }

    pub fn defaults(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::ColumnDefault)
    }
}

impl CreateSchemaStatement {
    pub fn if_not_exists(&self) -> bool {
        self.0.children().any(|n| n.kind() == SyntaxKind::KwIfNotExists)
    }

    pub fn name(&self) -> Option<Identifier> {
        child(&self.0, Identifier::cast)
    }
}

impl CreateFunctionStatement {
    /// Whether the source spelled `OR REPLACE`.
    pub fn is_replace(&self) -> bool {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::KwCreateOrReplaceFunction)
            .is_some_and(|head| head.child_by_field(Field::Replace).is_some())
    }

    pub fn name(&self) -> Option<Identifier> {
        child(&self.0, Identifier::cast)
    }

    pub fn parameters(&self) -> impl Iterator<Item = CreateFunctionParameter> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::CreateFunctionParameters)
            .flat_map(|params| params.children())
            .filter_map(CreateFunctionParameter::cast)
    }

    pub fn language(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::LanguageName)
    }

    pub fn body(&self) -> Option<FunctionBody> {
        child(&self.0, FunctionBody::cast)
    }
}

impl CreateFunctionParameter {
    pub fn argmode(&self) -> Option<SyntaxToken> {
        self.0
            .child_by_field(Field::Argmode)
            .and_then(|it| it.into_token())
    }

    pub fn name(&self) -> Option<Identifier> {
        // A type reference sits in `type`, so a direct identifier is the name.
        child(&self.0, Identifier::cast)
    }

    pub fn default(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::ParamDefault)
    }
}

impl FunctionBody {
    pub fn query(&self) -> Option<SelectStatement> {
        child(&self.0, SelectStatement::cast)
    }
}

impl Identifier {
    /// Dotted parts, quotes kept.
    pub fn parts(&self) -> Vec<String> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| matches!(t.kind(), SyntaxKind::Id | SyntaxKind::QuotedId))
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl FunctionCall {
    pub fn function(&self) -> Option<Identifier> {
        self.0
            .child_by_field(Field::Function)
            .and_then(|it| it.into_node())
            .and_then(Identifier::cast)
    }

    pub fn arguments(&self) -> Vec<SyntaxElement> {
        self.0.children_by_field(Field::Arguments)
    }
}

impl ComparisonOperator {
    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0
            .child_by_field(Field::Operator)
            .and_then(|it| it.into_token())
    }

    pub fn lhs(&self) -> Option<SyntaxElement> {
        significant_items(&self.0).into_iter().next()
    }

    pub fn rhs(&self) -> Option<SyntaxElement> {
        let items = significant_items(&self.0);
        (items.len() > 2).then(|| items[items.len() - 1].clone())
    }
}

impl Str {
    /// Body between the quotes, empty for `''`.
    pub fn content(&self) -> String {
        self.0
            .child_by_field(Field::Content)
            .and_then(|it| it.into_token())
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }
}

/// Non-trivia children minus separators.
fn significant_items(node: &SyntaxNode) -> Vec<SyntaxElement> {
    node.children_with_tokens()
        .filter(|it| !it.kind().is_trivia() && it.kind() != SyntaxKind::Comma)
        .collect()
}
