#![allow(dead_code)]

use quarry_orm::{CompiledQuery, Database, DatabaseConfig, Executor, Model, SqlValue};
use tracing_subscriber::filter::LevelFilter;

pub const PEOPLE: i64 = 50;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub city: Option<String>,
}

impl Model for Person {
    const TABLE: &'static str = "people";
    const COLUMNS: &'static [&'static str] = &["id", "name", "age", "city"];
    type PrimaryKey = i64;

    fn pk(&self) -> i64 {
        self.id
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::DEBUG)
        .try_init();
}

pub fn name_of(i: i64) -> String {
    format!("person-{i:02}")
}

/// Opens a private in-memory database holding `PEOPLE` rows.
///
/// Row `i` is named `person-{i:02}`, is `18 + i % 40` years old and lives in
/// `paris` when `i` is even, `lyon` when `i % 3 == 1`, nowhere otherwise.
pub async fn seeded_db() -> Database {
    init_tracing();
    let db = Database::connect(&DatabaseConfig::sqlite_memory())
        .await
        .expect("connect");
    db.execute(&CompiledQuery {
        sql: String::from(
            "CREATE TABLE people (id INTEGER PRIMARY KEY, name TEXT NOT NULL, \
             age INTEGER NOT NULL, city TEXT)",
        ),
        params: Vec::new(),
    })
    .await
    .expect("create table");

    for i in 1..=PEOPLE {
        let city = if i % 2 == 0 {
            SqlValue::Text(String::from("paris"))
        } else if i % 3 == 1 {
            SqlValue::Text(String::from("lyon"))
        } else {
            SqlValue::Null
        };
        Person::objects()
            .create_from(
                &db,
                &["id", "name", "age", "city"],
                vec![
                    SqlValue::Int(i),
                    SqlValue::Text(name_of(i)),
                    SqlValue::Int(18 + i % 40),
                    city,
                ],
            )
            .await
            .expect("insert");
    }
    db
}
