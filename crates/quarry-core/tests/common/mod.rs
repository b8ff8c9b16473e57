#![allow(dead_code)]

use quarry_core::ast::SelectStatement;
use quarry_core::{CompileError, CompiledQuery, DialectKind, Statement};
use tracing_subscriber::filter::LevelFilter;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::TRACE)
        .try_init();
}

pub fn compile(kind: DialectKind, stmt: impl Into<Statement>) -> CompiledQuery {
    let stmt = stmt.into();
    kind.compiler()
        .compile(&stmt)
        .unwrap_or_else(|e| panic!("Failed to compile for {}: {e}\n{stmt:?}", kind.as_str()))
}

pub fn compile_err(kind: DialectKind, stmt: &SelectStatement) -> CompileError {
    kind.compiler()
        .compile_select(stmt)
        .expect_err(&format!("Expected compile error for {}", kind.as_str()))
}

pub fn ansi(stmt: impl Into<Statement>) -> CompiledQuery {
    compile(DialectKind::Ansi, stmt)
}

/// A driver stand-in that splices each parameter into its placeholder.
///
/// Quoted text is copied as is, matching `CompiledQuery::placeholder_count`.
///
/// Panics when the placeholder count and parameter count disagree.
pub fn inline(query: &CompiledQuery) -> String {
    assert_eq!(
        query.placeholder_count(),
        query.params.len(),
        "placeholder/param mismatch in {}",
        query.sql
    );
    let mut params = query.params.iter();
    let mut out = String::with_capacity(query.sql.len());
    let mut closing = None;
    for c in query.sql.chars() {
        match closing {
            Some(end) if c == end => closing = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' | '`' => closing = Some(c),
                '[' => closing = Some(']'),
                '?' => {
                    if let Some(value) = params.next() {
                        out.push_str(&value.to_sql_inline());
                        continue;
                    }
                }
                _ => {}
            },
        }
        out.push(c);
    }
    out
}
