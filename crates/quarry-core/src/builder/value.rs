//! Bound values.
//!
//! Literals never become SQL text: builders turn them into [`SqlValue`]s that
//! travel beside the compiled statement and are bound to its `?` markers.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A value bound to one `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// Boolean.
    Bool(bool),
    /// Any integer up to 64 bits.
    Int(i64),
    /// Floating point.
    Float(f64),
    /// Text, also used for dates and timestamps.
    Text(String),
    /// Binary payload (also used for driver-managed resources such as streams).
    Blob(Vec<u8>),
}

impl SqlValue {
    /// The placeholder every dialect uses for a bound value.
    #[must_use]
    pub const fn placeholder() -> &'static str {
        "?"
    }

    /// Spells the value as an SQL literal.
    ///
    /// Compiled statements never contain these; they serve logs and drivers
    /// that cannot bind. Text doubles its single quotes and blobs use the
    /// `X'..'` hex form.
    #[must_use]
    pub fn to_sql_inline(&self) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Bool(true) => String::from("TRUE"),
            Self::Bool(false) => String::from("FALSE"),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Blob(bytes) => {
                let mut literal = String::with_capacity(bytes.len() * 2 + 3);
                literal.push_str("X'");
                for byte in bytes {
                    let _ = write!(literal, "{byte:02X}");
                }
                literal.push('\'');
                literal
            }
        }
    }
}

/// Conversion into a bound value.
pub trait ToSqlValue {
    /// Converts `self` into a [`SqlValue`].
    fn to_sql_value(self) -> SqlValue;
}

macro_rules! to_sql_value {
    (widening $variant:ident: $($t:ty),+) => {
        $(
            impl ToSqlValue for $t {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::$variant(self.into())
                }
            }
        )+
    };
    ($($t:ty => $variant:ident),+ $(,)?) => {
        $(
            impl ToSqlValue for $t {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::$variant(self)
                }
            }
        )+
    };
}

to_sql_value!(
    bool => Bool,
    i64 => Int,
    f64 => Float,
    String => Text,
    Vec<u8> => Blob,
);
to_sql_value!(widening Int: i32, i16, i8, u32, u16, u8);
to_sql_value!(widening Float: f32);
to_sql_value!(widening Text: &str);
to_sql_value!(widening Blob: &[u8]);

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for &String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        self.map_or(SqlValue::Null, ToSqlValue::to_sql_value)
    }
}

impl ToSqlValue for NaiveDate {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self.format("%Y-%m-%d").to_string())
    }
}

impl ToSqlValue for NaiveDateTime {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

impl ToSqlValue for DateTime<Utc> {
    fn to_sql_value(self) -> SqlValue {
        self.naive_utc().to_sql_value()
    }
}
