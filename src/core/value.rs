use std::fmt;
use crate::core::{Result, StoreError};

/// Dynamic value crossing the generic field-access boundary.
///
/// Typed entity fields are projected into this enum by [`Record::get`]
/// and written back through [`Record::set`]. Dates travel as ISO-8601 text.
///
/// [`Record::get`]: crate::core::Record::get
/// [`Record::set`]: crate::core::Record::set
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Text(_) => "TEXT",
            Self::Boolean(_) => "BOOLEAN",
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Float(f) => {
                if f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Extract text, failing with a typed error otherwise.
    pub fn into_text(self, entity: &'static str, field: &str) -> Result<String> {
        match self {
            Self::Text(s) => Ok(s),
            other => Err(StoreError::TypeMismatch(format!(
                "{entity}.{field} expects TEXT, got {}",
                other.type_name()
            ))),
        }
    }

    /// Extract a number as f64, accepting both Integer and Float.
    pub fn into_f64(self, entity: &'static str, field: &str) -> Result<f64> {
        self.as_f64().ok_or_else(|| {
            StoreError::TypeMismatch(format!(
                "{entity}.{field} expects a numeric value, got {}",
                self.type_name()
            ))
        })
    }

    pub fn into_i64(self, entity: &'static str, field: &str) -> Result<i64> {
        self.as_i64().ok_or_else(|| {
            StoreError::TypeMismatch(format!(
                "{entity}.{field} expects INTEGER, got {}",
                self.type_name()
            ))
        })
    }

    pub fn into_bool(self, entity: &'static str, field: &str) -> Result<bool> {
        self.as_bool().ok_or_else(|| {
            StoreError::TypeMismatch(format!(
                "{entity}.{field} expects BOOLEAN, got {}",
                self.type_name()
            ))
        })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => {
                if a.is_nan() && b.is_nan() {
                    return true;
                }
                (a - b).abs() < f64::EPSILON
            }
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            // Integer and Float compare by numeric value
            (Self::Integer(i), Self::Float(f)) | (Self::Float(f), Self::Integer(i)) => {
                (*i as f64 - f).abs() < f64::EPSILON
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() {
                    if *fl > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else {
                    write!(f, "{}", fl)
                }
            }
            Self::Text(s) => write!(f, "{}", s),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Integer(42), Value::Integer(42));
        assert_eq!(Value::Float(3.5), Value::Float(3.5));
        assert_eq!(Value::Integer(4), Value::Float(4.0));
        assert_ne!(Value::Integer(1), Value::Integer(2));
        assert_ne!(Value::Text("a".into()), Value::Integer(1));
    }

    #[test]
    fn test_numeric_extraction() {
        assert_eq!(Value::Integer(10).as_f64(), Some(10.0));
        assert_eq!(Value::Float(2.5).as_i64(), Some(2));
        assert_eq!(Value::Text("x".into()).as_f64(), None);
        assert_eq!(Value::Null.as_i64(), None);
    }

    #[test]
    fn test_into_text_mismatch() {
        let err = Value::Integer(1).into_text("campaign", "name").unwrap_err();
        assert!(err.to_string().contains("campaign.name"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Text("hello".into()).to_string(), "hello");
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Boolean(true).to_string(), "true");
    }
}
