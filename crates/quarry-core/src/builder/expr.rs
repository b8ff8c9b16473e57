//! Predicate and expression helpers.

use crate::ast::{
    ColumnRef, CompareOp, Expression, InSource, Operand, Predicate, SelectStatement,
};

/// Creates a column reference.
///
/// Dotted names are quoted per segment at compile time, so `col("u.id")`
/// renders as `"u"."id"` in ANSI SQL.
#[must_use]
pub fn col(name: &str) -> ColumnRef {
    ColumnRef::new(name)
}

/// Starts an empty expression.
#[must_use]
pub const fn expr() -> Expression {
    Expression::new()
}

/// Creates a function call expression, e.g. `func("ROUND", vec![...])`.
#[must_use]
pub fn func(name: &str, args: Vec<Expression>) -> Expression {
    Expression::new().function(name, args)
}

/// `COUNT(column)`
#[must_use]
pub fn count(column: &str) -> Expression {
    func("COUNT", vec![Expression::new().column(column)])
}

/// `COUNT(*)`
#[must_use]
pub fn count_all() -> Expression {
    func("COUNT", vec![Expression::new().column("*")])
}

/// `COUNT(DISTINCT column)`
#[must_use]
pub fn count_distinct(column: &str) -> Expression {
    Expression::new().function_distinct("COUNT", vec![Expression::new().column(column)])
}

/// `SUM(column)`
#[must_use]
pub fn sum(column: &str) -> Expression {
    func("SUM", vec![Expression::new().column(column)])
}

/// `AVG(column)`
#[must_use]
pub fn avg(column: &str) -> Expression {
    func("AVG", vec![Expression::new().column(column)])
}

/// `MIN(column)`
#[must_use]
pub fn min(column: &str) -> Expression {
    func("MIN", vec![Expression::new().column(column)])
}

/// `MAX(column)`
#[must_use]
pub fn max(column: &str) -> Expression {
    func("MAX", vec![Expression::new().column(column)])
}

/// `EXISTS (query)`
#[must_use]
pub fn exists(query: SelectStatement) -> Predicate {
    Predicate::Exists {
        query: Box::new(query),
        negated: false,
    }
}

/// `NOT EXISTS (query)`
#[must_use]
pub fn not_exists(query: SelectStatement) -> Predicate {
    Predicate::Exists {
        query: Box::new(query),
        negated: true,
    }
}

// Predicate constructors shared by every left hand side type.
macro_rules! impl_predicates {
    ($ty:ty) => {
        impl $ty {
            fn compare(self, op: CompareOp, right: impl Into<Operand>) -> Predicate {
                Predicate::Compare {
                    left: self.into(),
                    op,
                    right: right.into(),
                }
            }

            /// Creates an equality predicate.
            #[must_use]
            pub fn eq(self, right: impl Into<Operand>) -> Predicate {
                self.compare(CompareOp::Eq, right)
            }

            /// Creates an inequality predicate.
            #[must_use]
            pub fn not_eq(self, right: impl Into<Operand>) -> Predicate {
                self.compare(CompareOp::NotEq, right)
            }

            /// Creates a less-than predicate.
            #[must_use]
            pub fn lt(self, right: impl Into<Operand>) -> Predicate {
                self.compare(CompareOp::Lt, right)
            }

            /// Creates a less-than-or-equal predicate.
            #[must_use]
            pub fn lt_eq(self, right: impl Into<Operand>) -> Predicate {
                self.compare(CompareOp::LtEq, right)
            }

            /// Creates a greater-than predicate.
            #[must_use]
            pub fn gt(self, right: impl Into<Operand>) -> Predicate {
                self.compare(CompareOp::Gt, right)
            }

            /// Creates a greater-than-or-equal predicate.
            #[must_use]
            pub fn gt_eq(self, right: impl Into<Operand>) -> Predicate {
                self.compare(CompareOp::GtEq, right)
            }

            /// Creates a BETWEEN predicate.
            #[must_use]
            pub fn between(self, low: impl Into<Operand>, high: impl Into<Operand>) -> Predicate {
                Predicate::Between {
                    expr: self.into(),
                    low: low.into(),
                    high: high.into(),
                    negated: false,
                }
            }

            /// Creates a NOT BETWEEN predicate.
            #[must_use]
            pub fn not_between(
                self,
                low: impl Into<Operand>,
                high: impl Into<Operand>,
            ) -> Predicate {
                Predicate::Between {
                    expr: self.into(),
                    low: low.into(),
                    high: high.into(),
                    negated: true,
                }
            }

            /// Creates a LIKE predicate.
            #[must_use]
            pub fn like(self, pattern: impl Into<Operand>) -> Predicate {
                Predicate::Like {
                    expr: self.into(),
                    pattern: pattern.into(),
                    negated: false,
                }
            }

            /// Creates a NOT LIKE predicate.
            #[must_use]
            pub fn not_like(self, pattern: impl Into<Operand>) -> Predicate {
                Predicate::Like {
                    expr: self.into(),
                    pattern: pattern.into(),
                    negated: true,
                }
            }

            /// Creates an IN predicate over a list.
            #[must_use]
            pub fn in_list<I, T>(self, values: I) -> Predicate
            where
                I: IntoIterator<Item = T>,
                T: Into<Operand>,
            {
                Predicate::In {
                    expr: self.into(),
                    source: InSource::List(values.into_iter().map(Into::into).collect()),
                    negated: false,
                }
            }

            /// Creates a NOT IN predicate over a list.
            #[must_use]
            pub fn not_in_list<I, T>(self, values: I) -> Predicate
            where
                I: IntoIterator<Item = T>,
                T: Into<Operand>,
            {
                Predicate::In {
                    expr: self.into(),
                    source: InSource::List(values.into_iter().map(Into::into).collect()),
                    negated: true,
                }
            }

            /// Creates an IN predicate over a subquery.
            #[must_use]
            pub fn in_subquery(self, query: SelectStatement) -> Predicate {
                Predicate::In {
                    expr: self.into(),
                    source: InSource::Subquery(Box::new(query)),
                    negated: false,
                }
            }

            /// Creates a NOT IN predicate over a subquery.
            #[must_use]
            pub fn not_in_subquery(self, query: SelectStatement) -> Predicate {
                Predicate::In {
                    expr: self.into(),
                    source: InSource::Subquery(Box::new(query)),
                    negated: true,
                }
            }

            /// Creates an IS NULL predicate.
            #[must_use]
            pub fn is_null(self) -> Predicate {
                Predicate::IsNull {
                    expr: self.into(),
                    negated: false,
                }
            }

            /// Creates an IS NOT NULL predicate.
            #[must_use]
            pub fn is_not_null(self) -> Predicate {
                Predicate::IsNull {
                    expr: self.into(),
                    negated: true,
                }
            }
        }
    };
}

impl_predicates!(ColumnRef);
impl_predicates!(Expression);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Fragment;
    use crate::builder::value::SqlValue;

    #[test]
    fn test_column_eq_binds_value() {
        let pred = col("name").eq("Alice");
        assert!(matches!(
            pred,
            Predicate::Compare {
                left: Operand::Column(_),
                op: CompareOp::Eq,
                right: Operand::Value(SqlValue::Text(ref s)),
            } if s == "Alice"
        ));
    }

    #[test]
    fn test_column_to_column_comparison_is_explicit() {
        let pred = col("a.id").eq(col("b.a_id"));
        assert!(matches!(
            pred,
            Predicate::Compare {
                right: Operand::Column(ref c),
                ..
            } if c.name == "b.a_id"
        ));
    }

    #[test]
    fn test_between_keeps_bound_order() {
        let pred = col("age").between(18, 21);
        assert!(matches!(
            pred,
            Predicate::Between {
                low: Operand::Value(SqlValue::Int(18)),
                high: Operand::Value(SqlValue::Int(21)),
                negated: false,
                ..
            }
        ));
    }

    #[test]
    fn test_in_list_collects_values() {
        let pred = col("status").in_list(["active", "pending"]);
        match pred {
            Predicate::In {
                source: InSource::List(values),
                negated,
                ..
            } => {
                assert_eq!(values.len(), 2);
                assert!(!negated);
            }
            other => panic!("unexpected predicate {other:?}"),
        }
    }

    #[test]
    fn test_expression_predicates() {
        let pred = expr().column("price").op("*").value(2).gt(100);
        assert!(matches!(
            pred,
            Predicate::Compare {
                left: Operand::Expr(_),
                op: CompareOp::Gt,
                ..
            }
        ));
    }

    #[test]
    fn test_count_all() {
        let e = count_all();
        match e.fragments() {
            [Fragment::Function(call)] => {
                assert_eq!(call.name, "COUNT");
                assert!(!call.distinct);
            }
            other => panic!("unexpected fragments {other:?}"),
        }
    }

    #[test]
    fn test_count_distinct() {
        let e = count_distinct("email");
        assert!(matches!(
            e.fragments(),
            [Fragment::Function(call)] if call.distinct
        ));
    }
}
