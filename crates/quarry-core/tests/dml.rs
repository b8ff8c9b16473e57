//! Tests for INSERT, UPDATE and DELETE compilation.

mod common;
use common::*;

use quarry_core::ast::{InsertSource, InsertStatement, UpdateStatement};
use quarry_core::builder::{col, exists, Delete, Insert, Select, Update};
use quarry_core::{CompileError, Condition, DialectKind, Operand, SqlValue, Statement};

fn compile_result(kind: DialectKind, stmt: impl Into<Statement>) -> quarry_core::Result<String> {
    kind.compiler().compile(&stmt.into()).map(|q| q.sql)
}

#[test]
fn insert_multiple_rows() {
    init_tracing();
    let ann: [Operand; 2] = ["ann".into(), 30.into()];
    let bob: [Operand; 2] = ["bob".into(), SqlValue::Null.into()];
    let stmt = Insert::new()
        .into_table("users")
        .columns(&["name", "age"])
        .values(ann)
        .and_values(bob)
        .build();
    let q = compile(DialectKind::MySql, stmt);
    assert_eq!(
        q.sql,
        "INSERT INTO `users` (`name`, `age`) VALUES (?, ?), (?, ?)"
    );
    assert_eq!(q.params[3], SqlValue::Null);
}

#[test]
fn insert_from_paginated_select() {
    let source = Select::new()
        .columns(&["name"])
        .from("staging")
        .where_clause(col("valid").eq(true))
        .limit(100)
        .build();
    let stmt = Insert::new()
        .into_table("users")
        .columns(&["name"])
        .select(source)
        .build();
    let q = compile(DialectKind::SqlServer, stmt);
    assert_eq!(
        q.sql,
        "INSERT INTO [users] ([name]) SELECT TOP 100 [name] FROM [staging] WHERE [valid] = ?"
    );
    assert_eq!(q.params, vec![SqlValue::Bool(true)]);
}

#[test]
fn insert_row_arity_mismatch_is_rejected() {
    let stmt = Insert::new()
        .into_table("users")
        .columns(&["name", "age"])
        .values([1, 2])
        .and_values([3])
        .build();
    assert!(matches!(
        compile_result(DialectKind::Ansi, stmt),
        Err(CompileError::Structural(_))
    ));
}

#[test]
fn insert_without_rows_is_rejected() {
    let stmt = InsertStatement {
        table: String::from("users"),
        columns: vec![String::from("name")],
        source: InsertSource::Values(Vec::new()),
    };
    assert!(matches!(
        compile_result(DialectKind::Sqlite, stmt),
        Err(CompileError::Structural(_))
    ));
}

#[test]
fn update_with_expression_per_dialect() {
    let stmt = Update::new()
        .table("counters")
        .increment("hits", 1)
        .set("touched_by", "cron")
        .where_clause(col("id").eq(5))
        .build();
    for kind in DialectKind::ALL {
        let q = compile(kind, stmt.clone());
        let expected = match kind {
            DialectKind::MySql => {
                "UPDATE `counters` SET `hits` = `hits` + ?, `touched_by` = ? WHERE `id` = ?"
            }
            DialectKind::SqlServer => {
                "UPDATE [counters] SET [hits] = [hits] + ?, [touched_by] = ? WHERE [id] = ?"
            }
            _ => r#"UPDATE "counters" SET "hits" = "hits" + ?, "touched_by" = ? WHERE "id" = ?"#,
        };
        assert_eq!(q.sql, expected, "{}", kind.as_str());
        assert_eq!(q.params.len(), 3);
    }
}

#[test]
fn update_without_assignments_is_rejected() {
    let stmt = UpdateStatement {
        table: String::from("users"),
        assignments: Vec::new(),
        where_clause: Condition::new(),
    };
    assert!(matches!(
        compile_result(DialectKind::PostgreSql, stmt),
        Err(CompileError::Structural(_))
    ));
}

#[test]
fn delete_everything() {
    let stmt = Delete::new().from("sessions").build();
    assert_eq!(ansi(stmt).sql, r#"DELETE FROM "sessions""#);
}

#[test]
fn delete_with_exists_subquery() {
    let bans = Select::new()
        .from("bans")
        .where_clause(col("bans.user_id").eq(col("sessions.user_id")))
        .where_clause(col("bans.active").eq(true))
        .build();
    let stmt = Delete::new()
        .from("sessions")
        .where_clause(col("expired").eq(false))
        .or_where(exists(bans))
        .build();
    let q = compile(DialectKind::Oracle, stmt);
    assert_eq!(
        q.sql,
        r#"DELETE FROM "sessions" WHERE "expired" = ? OR EXISTS (SELECT * FROM "bans" WHERE "bans"."user_id" = "sessions"."user_id" AND "bans"."active" = ?)"#
    );
    assert_eq!(q.params, vec![SqlValue::Bool(false), SqlValue::Bool(true)]);
}
