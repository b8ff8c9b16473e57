//! Boolean condition trees for WHERE, HAVING and JOIN ... ON.

use super::expression::Operand;
use super::statement::SelectStatement;
use crate::builder::value::SqlValue;

/// How a child is attached to the preceding sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl Connector {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
}

impl CompareOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
        }
    }
}

/// Right hand side of an `IN` predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum InSource {
    /// A literal list; each element is bound or rendered in order.
    List(Vec<Operand>),
    /// A subquery whose parameters are spliced in place.
    Subquery(Box<SelectStatement>),
}

/// A leaf predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `left op right`
    Compare {
        /// Left operand.
        left: Operand,
        /// Operator.
        op: CompareOp,
        /// Right operand.
        right: Operand,
    },
    /// `expr [NOT] BETWEEN low AND high`
    Between {
        /// Tested operand.
        expr: Operand,
        /// Lower bound.
        low: Operand,
        /// Upper bound.
        high: Operand,
        /// `NOT BETWEEN` when set.
        negated: bool,
    },
    /// `expr [NOT] LIKE pattern`; wildcards are the caller's business.
    Like {
        /// Tested operand.
        expr: Operand,
        /// The pattern.
        pattern: Operand,
        /// `NOT LIKE` when set.
        negated: bool,
    },
    /// `expr [NOT] IN (...)`
    In {
        /// Tested operand.
        expr: Operand,
        /// List or subquery.
        source: InSource,
        /// `NOT IN` when set.
        negated: bool,
    },
    /// `expr IS [NOT] NULL`
    IsNull {
        /// Tested operand.
        expr: Operand,
        /// `IS NOT NULL` when set.
        negated: bool,
    },
    /// `[NOT] EXISTS (subquery)`
    Exists {
        /// The subquery.
        query: Box<SelectStatement>,
        /// `NOT EXISTS` when set.
        negated: bool,
    },
    /// A raw SQL fragment with its own `?` placeholders.
    Raw {
        /// SQL text, emitted verbatim.
        sql: String,
        /// Parameters for the placeholders in `sql`, in order.
        params: Vec<SqlValue>,
    },
}

impl Predicate {
    /// Creates a raw predicate.
    ///
    /// **Warning**: only use this for SQL fragments without user input.
    #[must_use]
    pub fn raw(sql: impl Into<String>, params: Vec<SqlValue>) -> Self {
        Self::Raw {
            sql: sql.into(),
            params,
        }
    }
}

/// A node of the condition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionNode {
    /// A leaf.
    Predicate(Predicate),
    /// A nested group.
    Group {
        /// The nested tree.
        condition: Condition,
        /// Renders as `NOT (...)` when set.
        negated: bool,
    },
}

/// A recursive AND/OR tree.
///
/// An empty tree renders nothing at all, so the compiler also drops the
/// `WHERE`/`HAVING`/`ON` keyword.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Condition {
    children: Vec<(Connector, ConditionNode)>,
}

impl Condition {
    /// Creates an empty condition.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Appends a predicate joined with `AND`.
    #[must_use]
    pub fn and(self, predicate: Predicate) -> Self {
        self.push(Connector::And, ConditionNode::Predicate(predicate))
    }

    /// Appends a predicate joined with `OR`.
    #[must_use]
    pub fn or(self, predicate: Predicate) -> Self {
        self.push(Connector::Or, ConditionNode::Predicate(predicate))
    }

    /// Appends a nested group joined with `AND`.
    #[must_use]
    pub fn and_group(self, group: Self) -> Self {
        self.push(
            Connector::And,
            ConditionNode::Group {
                condition: group,
                negated: false,
            },
        )
    }

    /// Appends a nested group joined with `OR`.
    #[must_use]
    pub fn or_group(self, group: Self) -> Self {
        self.push(
            Connector::Or,
            ConditionNode::Group {
                condition: group,
                negated: false,
            },
        )
    }

    /// Appends `AND NOT (group)`.
    #[must_use]
    pub fn and_not_group(self, group: Self) -> Self {
        self.push(
            Connector::And,
            ConditionNode::Group {
                condition: group,
                negated: true,
            },
        )
    }

    /// Appends `OR NOT (group)`.
    #[must_use]
    pub fn or_not_group(self, group: Self) -> Self {
        self.push(
            Connector::Or,
            ConditionNode::Group {
                condition: group,
                negated: true,
            },
        )
    }

    /// Appends a node with the given connector.
    #[must_use]
    pub fn push(mut self, connector: Connector, node: ConditionNode) -> Self {
        self.children.push((connector, node));
        self
    }

    /// Returns the children in order.
    #[must_use]
    pub fn children(&self) -> &[(Connector, ConditionNode)] {
        &self.children
    }

    /// Returns whether the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl From<Predicate> for Condition {
    fn from(predicate: Predicate) -> Self {
        Self::new().and(predicate)
    }
}
