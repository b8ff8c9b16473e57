//! Statement, condition and expression types consumed by the compilers.

mod condition;
mod expression;
mod statement;

pub use condition::{CompareOp, Condition, ConditionNode, Connector, InSource, Predicate};
pub use expression::{ColumnRef, Expression, Fragment, FunctionCall, Operand};
pub use statement::{
    Assignment, DeleteStatement, InsertSource, InsertStatement, Join, JoinType, NullOrdering,
    OrderBy, OrderDirection, SelectColumn, SelectInto, SelectStatement, Statement, TableRef,
    TableSource, UpdateStatement,
};
