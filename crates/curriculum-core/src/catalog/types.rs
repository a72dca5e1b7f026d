//! Column type definitions for the catalog.

use serde::Serialize;
use std::fmt;

/// SQL column types used by the curriculum model.
///
/// The rendered names are part of the persisted contract with the backing
/// store, so `Display` must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnType {
    /// Fixed-width character string.
    Char {
        /// Number of characters.
        length: u16,
    },
    /// Fixed-width national (unicode) character string.
    #[serde(rename = "nchar")]
    NChar {
        /// Number of characters.
        length: u16,
    },
    /// Bounded variable-width string.
    Varchar {
        /// Maximum number of characters.
        length: u16,
    },
    /// Variable-width unicode string, unbounded when `length` is `None`.
    #[serde(rename = "nvarchar")]
    NVarchar {
        /// Maximum number of characters.
        length: Option<u16>,
    },
    /// Integer.
    Integer,
    /// Fixed-precision decimal.
    Decimal {
        /// Total number of digits.
        precision: u8,
        /// Number of digits after decimal point.
        scale: u8,
    },
    /// Floating point with binary precision.
    Float {
        /// Precision in bits.
        precision: u8,
    },
    /// Boolean flag.
    Boolean,
    /// Calendar date.
    Date,
    /// Date and time.
    #[serde(rename = "datetime")]
    DateTime,
}

impl ColumnType {
    /// `CHAR(n)`.
    pub const fn char(length: u16) -> Self {
        ColumnType::Char { length }
    }

    /// `NCHAR(n)`.
    pub const fn nchar(length: u16) -> Self {
        ColumnType::NChar { length }
    }

    /// `VARCHAR(n)`.
    pub const fn varchar(length: u16) -> Self {
        ColumnType::Varchar { length }
    }

    /// `NVARCHAR(n)`.
    pub const fn unicode(length: u16) -> Self {
        ColumnType::NVarchar {
            length: Some(length),
        }
    }

    /// Unbounded `NVARCHAR`.
    pub const fn unicode_text() -> Self {
        ColumnType::NVarchar { length: None }
    }

    /// `DECIMAL(p, s)`.
    pub const fn decimal(precision: u8, scale: u8) -> Self {
        ColumnType::Decimal { precision, scale }
    }

    /// `FLOAT(p)`.
    pub const fn float(precision: u8) -> Self {
        ColumnType::Float { precision }
    }

    /// Check if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnType::Integer | ColumnType::Decimal { .. } | ColumnType::Float { .. }
        )
    }

    /// Check if this type is a string-like type.
    pub fn is_string_like(&self) -> bool {
        matches!(
            self,
            ColumnType::Char { .. }
                | ColumnType::NChar { .. }
                | ColumnType::Varchar { .. }
                | ColumnType::NVarchar { .. }
        )
    }

    /// Maximum length for bounded string types.
    pub fn max_length(&self) -> Option<u16> {
        match self {
            ColumnType::Char { length }
            | ColumnType::NChar { length }
            | ColumnType::Varchar { length } => Some(*length),
            ColumnType::NVarchar { length } => *length,
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Char { length } => write!(f, "CHAR({})", length),
            ColumnType::NChar { length } => write!(f, "NCHAR({})", length),
            ColumnType::Varchar { length } => write!(f, "VARCHAR({})", length),
            ColumnType::NVarchar { length: Some(n) } => write!(f, "NVARCHAR({})", n),
            ColumnType::NVarchar { length: None } => write!(f, "NVARCHAR"),
            ColumnType::Integer => write!(f, "INTEGER"),
            ColumnType::Decimal { precision, scale } => {
                write!(f, "DECIMAL({}, {})", precision, scale)
            }
            ColumnType::Float { precision } => write!(f, "FLOAT({})", precision),
            ColumnType::Boolean => write!(f, "BOOLEAN"),
            ColumnType::Date => write!(f, "DATE"),
            ColumnType::DateTime => write!(f, "DATETIME"),
        }
    }
}
