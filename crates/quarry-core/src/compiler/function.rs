//! Built-in function registry.
//!
//! Function calls whose name matches a built-in are handed to
//! [`Compiler::function_sql`](super::Compiler::function_sql) so each dialect
//! can spell them its own way. Any other name is emitted as written.

/// Functions every dialect knows under some spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFunction {
    /// `COUNT`
    Count,
    /// `SUM`
    Sum,
    /// `AVG`
    Avg,
    /// `MIN`
    Min,
    /// `MAX`
    Max,
    /// Upper-casing (`UCASE`, `UPPER`).
    Upper,
    /// Lower-casing (`LCASE`, `LOWER`).
    Lower,
    /// String length (`LEN`, `LENGTH`).
    Length,
    /// Substring extraction (`MID`, `SUBSTR`, `SUBSTRING`).
    Substring,
    /// `ROUND`
    Round,
    /// Current timestamp (`NOW`).
    Now,
}

impl BuiltinFunction {
    /// Resolves a function name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name.to_ascii_uppercase().as_str() {
            "COUNT" => Self::Count,
            "SUM" => Self::Sum,
            "AVG" => Self::Avg,
            "MIN" => Self::Min,
            "MAX" => Self::Max,
            "UCASE" | "UPPER" => Self::Upper,
            "LCASE" | "LOWER" => Self::Lower,
            "LEN" | "LENGTH" => Self::Length,
            "MID" | "SUBSTR" | "SUBSTRING" => Self::Substring,
            "ROUND" => Self::Round,
            "NOW" => Self::Now,
            _ => return None,
        };
        Some(function)
    }

    /// Returns the standard SQL name.
    #[must_use]
    pub const fn ansi_name(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Upper => "UPPER",
            Self::Lower => "LOWER",
            Self::Length => "CHAR_LENGTH",
            Self::Substring => "SUBSTRING",
            Self::Round => "ROUND",
            Self::Now => "CURRENT_TIMESTAMP",
        }
    }
}

/// Renders `name(arg, arg, ...)`.
#[must_use]
pub fn call(name: &str, args: &[String]) -> String {
    format!("{name}({})", args.join(", "))
}

/// Standard SQL spelling of a built-in.
#[must_use]
pub fn ansi_function_sql(function: BuiltinFunction, args: &[String]) -> String {
    match function {
        BuiltinFunction::Now => String::from(function.ansi_name()),
        _ => call(function.ansi_name(), args),
    }
}
