//! Tests for WHERE trees: grouping, negation, IN lists, subqueries and raw
//! fragments.

mod common;
use common::*;

use quarry_core::builder::{col, exists, not_exists, Select};
use quarry_core::{Condition, DialectKind, Predicate, SqlValue};

fn text(s: &str) -> SqlValue {
    SqlValue::Text(String::from(s))
}

#[test]
fn empty_condition_renders_no_where() {
    let stmt = Select::new()
        .from("t")
        .where_group(Condition::new())
        .build();
    assert_eq!(ansi(stmt).sql, r#"SELECT * FROM "t""#);
}

#[test]
fn empty_groups_are_skipped_with_their_connector() {
    let stmt = Select::new()
        .from("t")
        .where_group(Condition::new())
        .where_clause(col("a").eq(1))
        .or_where_group(Condition::new())
        .build();
    let q = ansi(stmt);
    assert_eq!(q.sql, r#"SELECT * FROM "t" WHERE "a" = ?"#);
    assert_eq!(q.params, vec![SqlValue::Int(1)]);
}

#[test]
fn nested_groups_are_parenthesized() {
    let inner = Condition::new().and(col("c").eq(3)).and(col("d").eq(4));
    let group = Condition::new().and(col("b").eq(2)).or_group(inner);
    let stmt = Select::new()
        .from("t")
        .where_clause(col("a").eq(1))
        .where_group(group)
        .build();
    let q = ansi(stmt);
    assert_eq!(
        q.sql,
        r#"SELECT * FROM "t" WHERE "a" = ? AND ("b" = ? OR ("c" = ? AND "d" = ?))"#
    );
    assert_eq!(
        q.params,
        vec![
            SqlValue::Int(1),
            SqlValue::Int(2),
            SqlValue::Int(3),
            SqlValue::Int(4)
        ]
    );
}

#[test]
fn single_predicate_group_is_not_parenthesized() {
    let stmt = Select::new()
        .from("t")
        .where_group(Condition::new().and(col("a").eq(1)))
        .build();
    assert_eq!(ansi(stmt).sql, r#"SELECT * FROM "t" WHERE "a" = ?"#);
}

#[test]
fn negated_group_always_parenthesized() {
    let stmt = Select::new()
        .from("users")
        .where_clause(col("active").eq(true))
        .where_not_group(Condition::new().and(col("banned").eq(true)))
        .build();
    assert_eq!(
        ansi(stmt).sql,
        r#"SELECT * FROM "users" WHERE "active" = ? AND NOT ("banned" = ?)"#
    );
}

#[test]
fn or_where_joins_with_or() {
    let stmt = Select::new()
        .from("users")
        .where_clause(col("role").eq("admin"))
        .or_where(col("role").eq("owner"))
        .build();
    let q = ansi(stmt);
    assert_eq!(
        q.sql,
        r#"SELECT * FROM "users" WHERE "role" = ? OR "role" = ?"#
    );
    assert_eq!(q.params, vec![text("admin"), text("owner")]);
}

#[test]
fn between_scenario() {
    let stmt = Select::new()
        .from("users")
        .where_clause(col("age").between(18, 21))
        .build();
    let q = ansi(stmt);
    assert_eq!(q.sql, r#"SELECT * FROM "users" WHERE "age" BETWEEN ? AND ?"#);
    assert_eq!(inline(&q), r#"SELECT * FROM "users" WHERE "age" BETWEEN 18 AND 21"#);
}

#[test]
fn in_list_binds_each_element() {
    let stmt = Select::new()
        .from("users")
        .where_clause(col("id").in_list([1, 2, 3]))
        .build();
    let q = ansi(stmt);
    assert_eq!(q.sql, r#"SELECT * FROM "users" WHERE "id" IN (?, ?, ?)"#);
    assert_eq!(q.params.len(), 3);
}

#[test]
fn empty_in_lists_are_constant() {
    let none: Vec<i64> = Vec::new();
    let stmt = Select::new()
        .from("users")
        .where_clause(col("id").in_list(none.clone()))
        .or_where(col("id").not_in_list(none))
        .build();
    let q = ansi(stmt);
    assert_eq!(q.sql, r#"SELECT * FROM "users" WHERE 1 = 0 OR 1 = 1"#);
    assert!(q.params.is_empty());
}

#[test]
fn in_subquery_params_follow_text_order() {
    // Built before the subquery, rendered after it.
    let outer = col("w").eq("w-value");
    let sub = Select::new()
        .columns(&["y"])
        .from("t")
        .where_clause(col("z").eq("z-value"))
        .build();
    let stmt = Select::new()
        .from("s")
        .where_clause(col("x").in_subquery(sub))
        .where_clause(outer)
        .build();

    for kind in DialectKind::ALL {
        let q = compile(kind, stmt.clone());
        assert_eq!(
            q.params,
            vec![text("z-value"), text("w-value")],
            "{}",
            kind.as_str()
        );
    }
    assert_eq!(
        ansi(stmt).sql,
        r#"SELECT * FROM "s" WHERE "x" IN (SELECT "y" FROM "t" WHERE "z" = ?) AND "w" = ?"#
    );
}

#[test]
fn params_before_subquery_stay_first() {
    let sub = Select::new()
        .columns(&["user_id"])
        .from("orders")
        .where_clause(col("total").gt(50))
        .build();
    let stmt = Select::new()
        .from("users")
        .where_clause(col("country").eq("fr"))
        .where_clause(col("id").not_in_subquery(sub))
        .where_clause(col("age").lt(30))
        .build();
    let q = ansi(stmt);
    assert_eq!(
        inline(&q),
        r#"SELECT * FROM "users" WHERE "country" = 'fr' AND "id" NOT IN (SELECT "user_id" FROM "orders" WHERE "total" > 50) AND "age" < 30"#
    );
}

#[test]
fn exists_and_not_exists() {
    let orders = Select::new()
        .from("orders")
        .where_clause(col("orders.user_id").eq(col("users.id")))
        .where_clause(col("orders.total").gt(10))
        .build();
    let stmt = Select::new()
        .from("users")
        .where_clause(exists(orders.clone()))
        .where_clause(not_exists(orders))
        .build();
    let q = ansi(stmt);
    assert_eq!(
        q.sql,
        r#"SELECT * FROM "users" WHERE EXISTS (SELECT * FROM "orders" WHERE "orders"."user_id" = "users"."id" AND "orders"."total" > ?) AND NOT EXISTS (SELECT * FROM "orders" WHERE "orders"."user_id" = "users"."id" AND "orders"."total" > ?)"#
    );
    assert_eq!(q.params, vec![SqlValue::Int(10), SqlValue::Int(10)]);
}

#[test]
fn paginated_subquery_keeps_param_order() {
    let sub = Select::new()
        .columns(&["user_id"])
        .from("orders")
        .where_clause(col("total").gt(50))
        .order_by(&["total"])
        .limit(5)
        .offset(5)
        .build();
    let stmt = Select::new()
        .from("users")
        .where_clause(col("id").in_subquery(sub))
        .where_clause(col("age").lt(30))
        .build();
    let q = compile(DialectKind::SqlServer, stmt);
    assert_eq!(
        inline(&q),
        "SELECT * FROM [users] WHERE [id] IN (SELECT [user_id] FROM (SELECT [user_id], ROW_NUMBER() OVER (ORDER BY [total] ASC) AS quarry_rownum FROM [orders] WHERE [total] > 50) AS quarry_page WHERE quarry_rownum BETWEEN 6 AND 10) AND [age] < 30"
    );
}

#[test]
fn raw_predicate_carries_its_params() {
    let stmt = Select::new()
        .from("events")
        .where_clause(col("kind").eq("login"))
        .where_clause(Predicate::raw(
            "created_at > datetime(?, ?)",
            vec![text("now"), text("-1 day")],
        ))
        .build();
    let q = compile(DialectKind::Sqlite, stmt);
    assert_eq!(
        q.sql,
        r#"SELECT * FROM "events" WHERE "kind" = ? AND created_at > datetime(?, ?)"#
    );
    assert_eq!(q.params, vec![text("login"), text("now"), text("-1 day")]);
}

#[test]
fn raw_group_keeps_its_parentheses() {
    let raw = Predicate::raw("b = ? OR c = ?", vec![SqlValue::Int(2), SqlValue::Int(3)]);
    let stmt = Select::new()
        .from("t")
        .where_clause(col("a").eq(1))
        .where_group(Condition::from(raw.clone()))
        .build();
    assert_eq!(
        inline(&ansi(stmt)),
        r#"SELECT * FROM "t" WHERE "a" = 1 AND (b = 2 OR c = 3)"#
    );

    let nested = Select::new()
        .from("t")
        .where_clause(col("a").eq(1))
        .or_where_group(Condition::new().and_group(Condition::from(raw)))
        .build();
    assert_eq!(
        inline(&ansi(nested)),
        r#"SELECT * FROM "t" WHERE "a" = 1 OR (b = 2 OR c = 3)"#
    );
}

#[test]
fn like_and_null_checks() {
    let stmt = Select::new()
        .from("users")
        .where_clause(col("email").like("%@example.com"))
        .where_clause(col("deleted_at").is_null())
        .or_where(col("restored_at").is_not_null())
        .build();
    let q = ansi(stmt);
    assert_eq!(
        q.sql,
        r#"SELECT * FROM "users" WHERE "email" LIKE ? AND "deleted_at" IS NULL OR "restored_at" IS NOT NULL"#
    );
    assert_eq!(q.params, vec![text("%@example.com")]);
}
