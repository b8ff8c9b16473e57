//! Aggregate functions for QuerySet operations.
//!
//! Each aggregate lowers to a core function-call expression, so its spelling
//! follows the target dialect.

use quarry_core::builder as sql;
use quarry_core::Expression;

/// An aggregate function that can be applied to a QuerySet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate {
    /// COUNT aggregate
    Count {
        /// Column to count, or "*" for all rows
        column: String,
        /// Whether to count only distinct values
        distinct: bool,
    },
    /// SUM aggregate
    Sum {
        /// Column to sum
        column: String,
    },
    /// AVG aggregate
    Avg {
        /// Column to average
        column: String,
    },
    /// MAX aggregate
    Max {
        /// Column to find maximum
        column: String,
    },
    /// MIN aggregate
    Min {
        /// Column to find minimum
        column: String,
    },
}

impl Aggregate {
    /// Creates a COUNT(*) aggregate.
    pub fn count_all() -> Self {
        Self::count("*")
    }

    /// Creates a COUNT(column) aggregate.
    pub fn count(column: &str) -> Self {
        Self::Count {
            column: String::from(column),
            distinct: false,
        }
    }

    /// Creates a COUNT(DISTINCT column) aggregate.
    pub fn count_distinct(column: &str) -> Self {
        Self::Count {
            column: String::from(column),
            distinct: true,
        }
    }

    /// Creates a SUM(column) aggregate.
    pub fn sum(column: &str) -> Self {
        Self::Sum {
            column: String::from(column),
        }
    }

    /// Creates an AVG(column) aggregate.
    pub fn avg(column: &str) -> Self {
        Self::Avg {
            column: String::from(column),
        }
    }

    /// Creates a MAX(column) aggregate.
    pub fn max(column: &str) -> Self {
        Self::Max {
            column: String::from(column),
        }
    }

    /// Creates a MIN(column) aggregate.
    pub fn min(column: &str) -> Self {
        Self::Min {
            column: String::from(column),
        }
    }

    /// Lowers the aggregate to a core expression.
    pub fn to_expression(&self) -> Expression {
        match self {
            Self::Count {
                column,
                distinct: true,
            } => sql::count_distinct(column),
            Self::Count { column, .. } => sql::count(column),
            Self::Sum { column } => sql::sum(column),
            Self::Avg { column } => sql::avg(column),
            Self::Max { column } => sql::max(column),
            Self::Min { column } => sql::min(column),
        }
    }
}

/// Convenience function to create a COUNT(*) aggregate.
pub fn count_all() -> Aggregate {
    Aggregate::count_all()
}

/// Convenience function to create a COUNT(column) aggregate.
pub fn count(column: &str) -> Aggregate {
    Aggregate::count(column)
}

/// Convenience function to create a COUNT(DISTINCT column) aggregate.
pub fn count_distinct(column: &str) -> Aggregate {
    Aggregate::count_distinct(column)
}

/// Convenience function to create a SUM(column) aggregate.
pub fn sum(column: &str) -> Aggregate {
    Aggregate::sum(column)
}

/// Convenience function to create an AVG(column) aggregate.
pub fn avg(column: &str) -> Aggregate {
    Aggregate::avg(column)
}

/// Convenience function to create a MAX(column) aggregate.
pub fn max(column: &str) -> Aggregate {
    Aggregate::max(column)
}

/// Convenience function to create a MIN(column) aggregate.
pub fn min(column: &str) -> Aggregate {
    Aggregate::min(column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::dialect::{AnsiCompiler, MySqlCompiler};
    use quarry_core::Compiler;

    fn render(agg: &Aggregate) -> String {
        AnsiCompiler
            .render_expression(&agg.to_expression(), &mut Vec::new())
            .unwrap()
    }

    #[test]
    fn test_count_all() {
        assert_eq!(render(&count_all()), "COUNT(*)");
    }

    #[test]
    fn test_count_distinct() {
        assert_eq!(render(&count_distinct("user_id")), r#"COUNT(DISTINCT "user_id")"#);
    }

    #[test]
    fn test_sum_and_avg() {
        assert_eq!(render(&sum("amount")), r#"SUM("amount")"#);
        assert_eq!(render(&avg("price")), r#"AVG("price")"#);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(render(&max("created_at")), r#"MAX("created_at")"#);
        assert_eq!(render(&min("id")), r#"MIN("id")"#);
    }

    #[test]
    fn test_dialect_quoting_applies() {
        let sql = MySqlCompiler
            .render_expression(&sum("amount").to_expression(), &mut Vec::new())
            .unwrap();
        assert_eq!(sql, "SUM(`amount`)");
    }
}
