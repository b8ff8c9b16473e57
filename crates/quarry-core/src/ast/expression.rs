//! Expression fragments.
//!
//! An [`Expression`] is a flat sequence of fragments rendered left to right.
//! There is no precedence model: `col + 1 * 2` renders exactly in the order
//! the fragments were pushed, and grouping is expressed with
//! [`Fragment::Nested`].

use crate::builder::value::{SqlValue, ToSqlValue};

/// A reference to a column (or any dotted identifier such as `users.*`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    /// The dotted name, e.g. `users.id`.
    pub name: String,
    /// When set, the name is emitted verbatim without quoting.
    pub raw: bool,
}

impl ColumnRef {
    /// Creates a column reference that is quoted per dialect.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: false,
        }
    }

    /// Creates a `table.column` reference.
    #[must_use]
    pub fn qualified(table: &str, name: &str) -> Self {
        Self::new(format!("{table}.{name}"))
    }

    /// Creates a column reference emitted verbatim.
    ///
    /// Use it for names that are already quoted or fully qualified in a way
    /// the dialect wrapper would mangle.
    #[must_use]
    pub fn raw(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: true,
        }
    }
}

/// A function call fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The function name as written by the caller.
    pub name: String,
    /// The arguments.
    pub args: Vec<Expression>,
    /// Whether `DISTINCT` precedes the arguments (aggregates).
    pub distinct: bool,
}

/// One piece of an [`Expression`].
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// A quoted identifier.
    Column(ColumnRef),
    /// A bound parameter.
    Value(SqlValue),
    /// Raw SQL text such as an operator or keyword, emitted verbatim.
    Raw(String),
    /// A parenthesized sub-expression.
    Nested(Expression),
    /// A function call.
    Function(FunctionCall),
}

/// An ordered sequence of fragments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    fragments: Vec<Fragment>,
}

impl Expression {
    /// Creates an empty expression.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Appends a column reference.
    #[must_use]
    pub fn column(mut self, name: &str) -> Self {
        self.fragments.push(Fragment::Column(ColumnRef::new(name)));
        self
    }

    /// Appends a column reference emitted verbatim.
    #[must_use]
    pub fn raw_column(mut self, name: &str) -> Self {
        self.fragments.push(Fragment::Column(ColumnRef::raw(name)));
        self
    }

    /// Appends a bound value.
    #[must_use]
    pub fn value<T: ToSqlValue>(mut self, value: T) -> Self {
        self.fragments.push(Fragment::Value(value.to_sql_value()));
        self
    }

    /// Appends an operator (`+`, `-`, `||`, ...), emitted verbatim.
    #[must_use]
    pub fn op(self, operator: &str) -> Self {
        self.raw(operator)
    }

    /// Appends raw SQL text.
    ///
    /// **Warning**: never pass user input here.
    #[must_use]
    pub fn raw(mut self, sql: &str) -> Self {
        self.fragments.push(Fragment::Raw(String::from(sql)));
        self
    }

    /// Appends a parenthesized sub-expression.
    #[must_use]
    pub fn nested(mut self, inner: Self) -> Self {
        self.fragments.push(Fragment::Nested(inner));
        self
    }

    /// Appends a function call.
    #[must_use]
    pub fn function(mut self, name: &str, args: Vec<Self>) -> Self {
        self.fragments.push(Fragment::Function(FunctionCall {
            name: String::from(name),
            args,
            distinct: false,
        }));
        self
    }

    /// Appends a function call whose arguments are prefixed by `DISTINCT`.
    #[must_use]
    pub fn function_distinct(mut self, name: &str, args: Vec<Self>) -> Self {
        self.fragments.push(Fragment::Function(FunctionCall {
            name: String::from(name),
            args,
            distinct: true,
        }));
        self
    }

    /// Appends an arbitrary fragment.
    #[must_use]
    pub fn push(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Returns the fragments in rendering order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Returns whether the expression has no fragments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl From<ColumnRef> for Expression {
    fn from(column: ColumnRef) -> Self {
        Self {
            fragments: vec![Fragment::Column(column)],
        }
    }
}

impl From<&str> for Expression {
    fn from(column: &str) -> Self {
        Self::new().column(column)
    }
}

/// One side of a comparison, or a value assigned/inserted into a column.
///
/// Plain Rust values always become [`Operand::Value`]; a column on the right
/// hand side must be spelled out with [`ColumnRef`] (see `builder::col`).
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A quoted column reference.
    Column(ColumnRef),
    /// A bound parameter.
    Value(SqlValue),
    /// A computed expression.
    Expr(Expression),
}

impl From<ColumnRef> for Operand {
    fn from(column: ColumnRef) -> Self {
        Self::Column(column)
    }
}

impl From<Expression> for Operand {
    fn from(expr: Expression) -> Self {
        Self::Expr(expr)
    }
}

impl From<SqlValue> for Operand {
    fn from(value: SqlValue) -> Self {
        Self::Value(value)
    }
}

impl<T: ToSqlValue> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        Self::Value(value.to_sql_value())
    }
}

macro_rules! impl_operand_from_value {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Self::Value(value.to_sql_value())
                }
            }
        )+
    };
}

impl_operand_from_value!(
    bool,
    i64,
    i32,
    i16,
    i8,
    u32,
    u16,
    u8,
    f64,
    f32,
    String,
    &str,
    &String,
    Vec<u8>,
    &[u8],
    chrono::NaiveDate,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
);
