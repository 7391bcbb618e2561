//! Syntax kinds for SQL.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `SqlLang` implements Rowan's `Language` trait for tree construction.
//!
//! Keywords match case-insensitively. The identifier regex competes with them on
//! longest match, so `SELECTED` lexes as one `Id` rather than `SELECT` + `ED`.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token(";")]
    Semicolon,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("~")]
    Tilde,

    #[token("=")]
    Equals,

    #[token("<>")]
    NotEquals,

    #[token("<")]
    Less,

    #[token("<=")]
    LessEquals,

    #[token(">")]
    Greater,

    #[token(">=")]
    GreaterEquals,

    #[token("::")]
    DoubleColon,

    /// `->>` JSON text extraction.
    #[token("->>")]
    ArrowText,

    #[token("$")]
    Dollar,

    /// Dollar-quoted function body delimiter.
    #[token("$$")]
    DollarDollar,

    #[regex(r"[bB]?[rR]?'[^']*'")]
    #[regex(r#"[bB]?[rR]?"[^"]*""#)]
    #[regex(r"[bB]?[rR]?'''[^']+'''")]
    #[regex(r#"[bB]?[rR]?"""[^"]+""""#)]
    #[doc(hidden)]
    StringLiteral, // Lexer-internal only

    /// Opening delimiter of a string, prefix letters included (`b'`, `r"""`).
    StringOpen,
    /// String body between the delimiters.
    StringContent,
    StringClose,
    /// Bare `'` produced when a string is re-lexed (function bodies, `NUMERIC '1'`).
    SingleQuote,
    DoubleQuote,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,

    /// `@name` or `@@name`.
    #[regex(r"@+[_a-zA-Z][_a-zA-Z0-9]*")]
    QueryParameter,

    /// Backtick-quoted identifier.
    #[regex(r"`[a-zA-Z0-9.\-_]+`")]
    QuotedId,

    #[token("SELECT", ignore(case))]
    KwSelect,
    #[token("FROM", ignore(case))]
    KwFrom,
    #[token("WHERE", ignore(case))]
    KwWhere,
    #[token("GROUP", ignore(case))]
    KwGroup,
    #[token("HAVING", ignore(case))]
    KwHaving,
    #[token("QUALIFY", ignore(case))]
    KwQualify,
    #[token("WINDOW", ignore(case))]
    KwWindow,
    #[token("ORDER", ignore(case))]
    KwOrder,
    #[token("LIMIT", ignore(case))]
    KwLimit,
    #[token("OFFSET", ignore(case))]
    KwOffset,
    #[token("WITH", ignore(case))]
    KwWith,
    #[token("AS", ignore(case))]
    KwAs,
    #[token("JOIN", ignore(case))]
    KwJoin,
    #[token("INNER", ignore(case))]
    KwInner,
    #[token("LEFT", ignore(case))]
    KwLeft,
    #[token("RIGHT", ignore(case))]
    KwRight,
    #[token("FULL", ignore(case))]
    KwFull,
    #[token("OUTER", ignore(case))]
    KwOuter,
    #[token("ON", ignore(case))]
    KwOn,
    #[token("INSERT", ignore(case))]
    KwInsert,
    #[token("INTO", ignore(case))]
    KwInto,
    #[token("VALUES", ignore(case))]
    KwValues,
    #[token("UPDATE", ignore(case))]
    KwUpdate,
    #[token("SET", ignore(case))]
    KwSet,
    #[token("CREATE", ignore(case))]
    KwCreate,
    #[token("OR", ignore(case))]
    KwOr,
    #[token("AND", ignore(case))]
    KwAnd,
    #[token("NOT", ignore(case))]
    KwNot,
    #[token("IS", ignore(case))]
    KwIs,
    #[token("IN", ignore(case))]
    KwIn,
    #[token("NULL", ignore(case))]
    KwNull,
    #[token("TRUE", ignore(case))]
    KwTrue,
    #[token("FALSE", ignore(case))]
    KwFalse,
    #[token("DISTINCT", ignore(case))]
    KwDistinct,
    #[token("ASC", ignore(case))]
    KwAsc,
    #[token("DESC", ignore(case))]
    KwDesc,
    #[token("UNNEST", ignore(case))]
    KwUnnest,
    #[token("ARRAY", ignore(case))]
    KwArray,
    #[token("STRUCT", ignore(case))]
    KwStruct,
    #[token("DEFAULT", ignore(case))]
    KwDefault,
    #[token("RETURNS", ignore(case))]
    KwReturns,

    // Contextual keywords: identifiers outside their construct.
    #[token("BY", ignore(case))]
    KwBy,
    #[token("ROLLUP", ignore(case))]
    KwRollup,
    #[token("REPLACE", ignore(case))]
    KwReplace,
    #[token("FUNCTION", ignore(case))]
    KwFunction,
    #[token("TABLE", ignore(case))]
    KwTable,
    #[token("SCHEMA", ignore(case))]
    KwSchema,
    #[token("IF", ignore(case))]
    KwIf,
    #[token("EXISTS", ignore(case))]
    KwExists,
    #[token("SESSION", ignore(case))]
    KwSession,
    #[token("LOCAL", ignore(case))]
    KwLocal,
    #[token("TO", ignore(case))]
    KwTo,
    #[token("LANGUAGE", ignore(case))]
    KwLanguage,
    #[token("SETOF", ignore(case))]
    KwSetof,
    #[token("VOLATILE", ignore(case))]
    KwVolatile,
    #[token("IMMUTABLE", ignore(case))]
    KwImmutable,
    #[token("STABLE", ignore(case))]
    KwStable,
    #[token("PARALLEL", ignore(case))]
    KwParallel,
    #[token("SAFE", ignore(case))]
    KwSafe,
    #[token("UNSAFE", ignore(case))]
    KwUnsafe,
    #[token("RESTRICTED", ignore(case))]
    KwRestricted,
    #[token("CALLED", ignore(case))]
    KwCalled,
    #[token("INPUT", ignore(case))]
    KwInput,
    #[token("STRICT", ignore(case))]
    KwStrict,
    #[token("OUT", ignore(case))]
    KwOut,
    #[token("INOUT", ignore(case))]
    KwInout,
    #[token("VARIADIC", ignore(case))]
    KwVariadic,
    #[token("NUMERIC", ignore(case))]
    KwNumeric,
    #[token("BIGNUMERIC", ignore(case))]
    KwBignumeric,
    #[token("DECIMAL", ignore(case))]
    KwDecimal,
    #[token("BIGDECIMAL", ignore(case))]
    KwBigdecimal,
    #[token("DATE", ignore(case))]
    KwDate,
    #[token("TIME", ignore(case))]
    KwTime,
    #[token("DATETIME", ignore(case))]
    KwDatetime,
    #[token("TIMESTAMP", ignore(case))]
    KwTimestamp,
    #[token("PARTITION", ignore(case))]
    KwPartition,
    #[token("DOMAIN", ignore(case))]
    KwDomain,
    #[token("TYPE", ignore(case))]
    KwType,
    #[token("INDEX", ignore(case))]
    KwIndex,
    #[token("USING", ignore(case))]
    KwUsing,
    #[token("UNIQUE", ignore(case))]
    KwUnique,
    #[token("CHECK", ignore(case))]
    KwCheck,
    #[token("REFERENCES", ignore(case))]
    KwReferences,
    #[token("CONSTRAINT", ignore(case))]
    KwConstraint,
    #[token("AUTO_INCREMENT", ignore(case))]
    KwAutoIncrement,
    #[token("RESTRICT", ignore(case))]
    KwRestrict,
    #[token("CASCADE", ignore(case))]
    KwCascade,
    #[token("DELETE", ignore(case))]
    KwDelete,

    /// Unquoted identifier. Keywords win ties by priority, longer words win by length.
    #[regex(r"[_a-zA-Z][_a-zA-Z0-9]*")]
    Id,

    /// Function language name (retagged identifier after `LANGUAGE`).
    LanguageName,

    #[regex(r"[\s\x{FEFF}\x{2060}\x{200B}]+")]
    Whitespace,

    #[regex(r"\\\r?\n")]
    LineContinuation,

    #[regex(r"--[^\n]*", allow_greedy = true)]
    #[regex(r"#[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    SourceFile,

    SelectStatement,
    SelectClause,
    SelectClauseBody,
    Alias,
    CteClause,
    FromClause,
    JoinClause,
    JoinType,
    WhereClause,
    GroupByClause,
    GroupByClauseBody,
    HavingClause,
    QualifyClause,
    WindowClause,
    NamedWindowExpression,
    WindowSpecification,
    OrderByClause,
    OrderByClauseBody,
    LimitClause,
    SelectSubexpression,

    UpdateStatement,
    SetClause,
    SetClauseBody,
    AssignmentExpression,
    InsertStatement,
    ValuesClause,
    ValuesClauseBody,
    SetStatement,

    CreateTableStatement,
    CreateTableParameters,
    CreateTableColumnParameter,
    ColumnDefault,
    CreateSchemaStatement,
    CreateFunctionStatement,
    CreateFunctionParameters,
    CreateFunctionParameter,
    ParamDefault,
    Setof,
    ConstrainedType,
    FunctionBody,
    OptimizerHint,
    ParallelHint,
    NullHint,
    CreateDomainStatement,
    CreateTypeStatement,
    CreateIndexStatement,
    Parameters,
    Parameter,
    UsingClause,
    IndexTableParameters,
    OrderedExpression,

    NullConstraint,
    CheckConstraint,
    UniqueConstraint,
    ReferencesConstraint,
    OnUpdateAction,
    OnDeleteAction,
    NamedConstraint,
    DirectionConstraint,
    AutoIncrementConstraint,

    FunctionCall,
    Identifier,
    Type,
    ArrayType,
    TypeCast,
    Str,
    Number,
    Numeric,
    Time,
    Array,
    Struct,
    UnnestClause,
    UnnestOperator,
    UnnestWithoffset,
    ComparisonOperator,
    BooleanExpression,
    IsExpression,
    DistinctFrom,
    InExpression,
    Tuple,
    BinaryExpression,
    FieldAccess,
    ArrayElementAccess,
    AsteriskExpression,
    ArgumentReference,

    // Multi-word keywords, one anonymous node around the word tokens.
    KwCreateTable,
    KwCreateSchema,
    KwCreateDomain,
    KwCreateType,
    KwCreateOrReplaceFunction,
    KwIfNotExists,
    KwGroupBy,
    KwOrderBy,
    KwPartitionBy,
    KwWithOffset,
    KwDistinctFrom,
    KwCalledOnNullInput,
    KwReturnsNullOnNullInput,
    KwOnUpdate,
    KwOnDelete,
    KwSetNull,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Whitespace | LineContinuation | LineComment | BlockComment
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    /// Single-word keyword token.
    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwSelect as u16..=KwDelete as u16).contains(&(self as u16))
    }

    /// Keywords that never act as identifiers.
    #[inline]
    pub fn is_reserved(self) -> bool {
        (KwSelect as u16..=KwReturns as u16).contains(&(self as u16))
    }

    /// Keywords that read as identifiers outside their construct.
    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        (KwBy as u16..=KwDelete as u16).contains(&(self as u16))
    }

    /// Node standing for a keyword spelled as several words (`GROUP BY`).
    #[inline]
    pub fn is_multiword_keyword(self) -> bool {
        (KwCreateTable as u16..=KwSetNull as u16).contains(&(self as u16))
    }

    /// Node kind (as opposed to a lexer token kind).
    #[inline]
    pub fn is_node(self) -> bool {
        self >= Error && self < __LAST
    }

    /// Whether the kind shows up in the S-expression view.
    ///
    /// Rule nodes, `ERROR`, and the leaf tokens `NULL`, `TRUE`, `FALSE`,
    /// `language` and `query_parameter` are named. Keywords, punctuation and
    /// multi-word keyword nodes are anonymous.
    pub fn is_named(self) -> bool {
        match self {
            KwNull | KwTrue | KwFalse | LanguageName | QueryParameter => true,
            _ => self.is_node() && !self.is_multiword_keyword(),
        }
    }

    /// Stable display label, the rule name the kind stands for.
    pub fn name(self) -> &'static str {
        if let Some(text) = self.keyword_text() {
            return text;
        }
        match self {
            ParenOpen => "(",
            ParenClose => ")",
            BracketOpen => "[",
            BracketClose => "]",
            Comma => ",",
            Dot => ".",
            Semicolon => ";",
            Star => "*",
            Plus => "+",
            Minus => "-",
            Tilde => "~",
            Equals => "=",
            NotEquals => "<>",
            Less => "<",
            LessEquals => "<=",
            Greater => ">",
            GreaterEquals => ">=",
            DoubleColon => "::",
            ArrowText => "->>",
            Dollar => "$",
            DollarDollar => "$$",
            StringLiteral => "_string",
            StringOpen => "_string_open",
            StringContent => "content",
            StringClose => "_string_close",
            SingleQuote => "'",
            DoubleQuote => "\"",
            Integer => "_integer",
            Float => "_float",
            QueryParameter => "query_parameter",
            QuotedId => "_quoted_identifier",
            Id => "_unquoted_identifier",
            LanguageName => "language",
            Whitespace => "_whitespace",
            LineContinuation => "_line_continuation",
            LineComment | BlockComment => "comment",
            Garbage | Error => "ERROR",
            SourceFile => "source_file",
            SelectStatement => "select_statement",
            SelectClause => "select_clause",
            SelectClauseBody => "select_clause_body",
            Alias => "alias",
            CteClause => "cte_clause",
            FromClause => "from_clause",
            JoinClause => "join_clause",
            JoinType => "join_type",
            WhereClause => "where_clause",
            GroupByClause => "group_by_clause",
            GroupByClauseBody => "group_by_clause_body",
            HavingClause => "having_clause",
            QualifyClause => "qualify_clause",
            WindowClause => "window_clause",
            NamedWindowExpression => "named_window_expression",
            WindowSpecification => "window_specification",
            OrderByClause => "order_by_clause",
            OrderByClauseBody => "order_by_clause_body",
            LimitClause => "limit_clause",
            SelectSubexpression => "select_subexpression",
            UpdateStatement => "update_statement",
            SetClause => "set_clause",
            SetClauseBody => "set_clause_body",
            AssignmentExpression => "assigment_expression",
            InsertStatement => "insert_statement",
            ValuesClause => "values_clause",
            ValuesClauseBody => "values_clause_body",
            SetStatement => "set_statement",
            CreateTableStatement => "create_table_statement",
            CreateTableParameters => "create_table_parameters",
            CreateTableColumnParameter => "create_table_column_parameter",
            ColumnDefault => "column_default",
            CreateSchemaStatement => "create_schema_statement",
            CreateFunctionStatement => "create_function_statement",
            CreateFunctionParameters => "create_function_parameters",
            CreateFunctionParameter => "create_function_parameter",
            ParamDefault => "default",
            Setof => "setof",
            ConstrainedType => "constrained_type",
            FunctionBody => "function_body",
            OptimizerHint => "optimizer_hint",
            ParallelHint => "parallel_hint",
            NullHint => "null_hint",
            CreateDomainStatement => "create_domain_statement",
            CreateTypeStatement => "create_type_statement",
            CreateIndexStatement => "create_index_statement",
            Parameters => "parameters",
            Parameter => "parameter",
            UsingClause => "using_clause",
            IndexTableParameters => "index_table_parameters",
            OrderedExpression => "ordered_expression",
            NullConstraint => "null_constraint",
            CheckConstraint => "check_constraint",
            UniqueConstraint => "unique_constraint",
            ReferencesConstraint => "references_constraint",
            OnUpdateAction => "on_update_action",
            OnDeleteAction => "on_delete_action",
            NamedConstraint => "named_constraint",
            DirectionConstraint => "direction_constraint",
            AutoIncrementConstraint => "auto_increment_constraint",
            FunctionCall => "function_call",
            Identifier => "identifier",
            Type => "type",
            ArrayType => "array_type",
            TypeCast => "type_cast",
            Str => "string",
            Number => "number",
            Numeric => "numeric",
            Time => "time",
            Array => "array",
            Struct => "struct",
            UnnestClause => "unnest_clause",
            UnnestOperator => "unnest_operator",
            UnnestWithoffset => "unnest_withoffset",
            ComparisonOperator => "comparison_operator",
            BooleanExpression => "boolean_expression",
            IsExpression => "is_expression",
            DistinctFrom => "distinct_from",
            InExpression => "in_expression",
            Tuple => "tuple",
            BinaryExpression => "binary_expression",
            FieldAccess => "field_access",
            ArrayElementAccess => "array_element_access",
            AsteriskExpression => "asterisk_expression",
            ArgumentReference => "argument_reference",
            KwCreateTable => "CREATE_TABLE",
            KwCreateSchema => "CREATE_SCHEMA",
            KwCreateDomain => "CREATE_DOMAIN",
            KwCreateType => "CREATE_TYPE",
            KwCreateOrReplaceFunction => "CREATE_OR_REPLACE_FUNCTION",
            KwIfNotExists => "IF_NOT_EXISTS",
            KwGroupBy => "GROUP_BY",
            KwOrderBy => "ORDER_BY",
            KwPartitionBy => "PARTITION_BY",
            KwWithOffset => "WITH_OFFSET",
            KwDistinctFrom => "DISTINCT_FROM",
            KwCalledOnNullInput => "CALLED_ON_NULL_INPUT",
            KwReturnsNullOnNullInput => "RETURNS_NULL_ON_NULL_INPUT",
            KwOnUpdate => "ON_UPDATE",
            KwOnDelete => "ON_DELETE",
            KwSetNull => "SET_NULL",
            _ => "__LAST",
        }
    }

    /// Upper-case spelling of a single-word keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            KwSelect => "SELECT",
            KwFrom => "FROM",
            KwWhere => "WHERE",
            KwGroup => "GROUP",
            KwHaving => "HAVING",
            KwQualify => "QUALIFY",
            KwWindow => "WINDOW",
            KwOrder => "ORDER",
            KwLimit => "LIMIT",
            KwOffset => "OFFSET",
            KwWith => "WITH",
            KwAs => "AS",
            KwJoin => "JOIN",
            KwInner => "INNER",
            KwLeft => "LEFT",
            KwRight => "RIGHT",
            KwFull => "FULL",
            KwOuter => "OUTER",
            KwOn => "ON",
            KwInsert => "INSERT",
            KwInto => "INTO",
            KwValues => "VALUES",
            KwUpdate => "UPDATE",
            KwSet => "SET",
            KwCreate => "CREATE",
            KwOr => "OR",
            KwAnd => "AND",
            KwNot => "NOT",
            KwIs => "IS",
            KwIn => "IN",
            KwNull => "NULL",
            KwTrue => "TRUE",
            KwFalse => "FALSE",
            KwDistinct => "DISTINCT",
            KwAsc => "ASC",
            KwDesc => "DESC",
            KwUnnest => "UNNEST",
            KwArray => "ARRAY",
            KwStruct => "STRUCT",
            KwDefault => "DEFAULT",
            KwReturns => "RETURNS",
            KwBy => "BY",
            KwRollup => "ROLLUP",
            KwReplace => "REPLACE",
            KwFunction => "FUNCTION",
            KwTable => "TABLE",
            KwSchema => "SCHEMA",
            KwIf => "IF",
            KwExists => "EXISTS",
            KwSession => "SESSION",
            KwLocal => "LOCAL",
            KwTo => "TO",
            KwLanguage => "LANGUAGE",
            KwSetof => "SETOF",
            KwVolatile => "VOLATILE",
            KwImmutable => "IMMUTABLE",
            KwStable => "STABLE",
            KwParallel => "PARALLEL",
            KwSafe => "SAFE",
            KwUnsafe => "UNSAFE",
            KwRestricted => "RESTRICTED",
            KwCalled => "CALLED",
            KwInput => "INPUT",
            KwStrict => "STRICT",
            KwOut => "OUT",
            KwInout => "INOUT",
            KwVariadic => "VARIADIC",
            KwNumeric => "NUMERIC",
            KwBignumeric => "BIGNUMERIC",
            KwDecimal => "DECIMAL",
            KwBigdecimal => "BIGDECIMAL",
            KwDate => "DATE",
            KwTime => "TIME",
            KwDatetime => "DATETIME",
            KwTimestamp => "TIMESTAMP",
            KwPartition => "PARTITION",
            KwDomain => "DOMAIN",
            KwType => "TYPE",
            KwIndex => "INDEX",
            KwUsing => "USING",
            KwUnique => "UNIQUE",
            KwCheck => "CHECK",
            KwReferences => "REFERENCES",
            KwConstraint => "CONSTRAINT",
            KwAutoIncrement => "AUTO_INCREMENT",
            KwRestrict => "RESTRICT",
            KwCascade => "CASCADE",
            KwDelete => "DELETE",
            _ => return None,
        };
        Some(text)
    }

    /// All single-word keyword kinds, in declaration order.
    pub fn keywords() -> impl Iterator<Item = SyntaxKind> {
        (KwSelect as u16..=KwDelete as u16).map(|raw| SqlLang::kind_from_raw(rowan::SyntaxKind(raw)))
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SqlLang {}

impl Language for SqlLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<SqlLang>;
pub type SyntaxToken = rowan::SyntaxToken<SqlLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

const TOKEN_SET_WORDS: usize = 4;

/// 256-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; TOKEN_SET_WORDS]);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet([0; TOKEN_SET_WORDS]);

    /// Panics at compile time if any kind's discriminant >= 256.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = [0u64; TOKEN_SET_WORDS];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as usize;
            assert!(
                kind < TOKEN_SET_WORDS * 64,
                "SyntaxKind value exceeds TokenSet capacity"
            );
            bits[kind / 64] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        Self::new(&[kind])
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as usize;
        if kind >= TOKEN_SET_WORDS * 64 {
            return false;
        }
        self.0[kind / 64] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        let mut bits = self.0;
        let mut i = 0;
        while i < TOKEN_SET_WORDS {
            bits[i] |= other.0[i];
            i += 1;
        }
        TokenSet(bits)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for raw in 0..__LAST as u16 {
            let kind = SqlLang::kind_from_raw(rowan::SyntaxKind(raw));
            if self.contains(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet =
        TokenSet::new(&[Whitespace, LineContinuation, LineComment, BlockComment]);

    /// Keywords that open a statement.
    pub const STATEMENT_FIRST: TokenSet =
        TokenSet::new(&[KwSelect, KwWith, KwUpdate, KwSet, KwInsert, KwCreate]);

    /// Synchronization points for statement-level recovery.
    pub const STATEMENT_RECOVERY: TokenSet = STATEMENT_FIRST.union(TokenSet::single(Semicolon));

    pub const COMPARISON_OPERATORS: TokenSet = TokenSet::new(&[
        Less,
        LessEquals,
        NotEquals,
        Equals,
        Greater,
        GreaterEquals,
    ]);

    pub const TIME_KEYWORDS: TokenSet = TokenSet::new(&[KwDate, KwTime, KwDatetime, KwTimestamp]);

    pub const NUMERIC_KEYWORDS: TokenSet =
        TokenSet::new(&[KwNumeric, KwBignumeric, KwDecimal, KwBigdecimal]);

    pub const ARGMODES: TokenSet = TokenSet::new(&[KwIn, KwOut, KwInout, KwVariadic]);

    pub const OPTIMIZER_HINTS: TokenSet = TokenSet::new(&[KwVolatile, KwImmutable, KwStable]);

    pub const PARALLEL_LEVELS: TokenSet = TokenSet::new(&[KwSafe, KwUnsafe, KwRestricted]);

    pub const DIRECTIONS: TokenSet = TokenSet::new(&[KwAsc, KwDesc]);

    pub const CONSTRAINT_ACTIONS: TokenSet = TokenSet::new(&[KwRestrict, KwCascade]);
}
