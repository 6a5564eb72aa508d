//! Structured expression nodes.
//!
//! Builders that keep their values structured use [`TsExpr`] instead of
//! pre-rendered strings. Structured values render deterministically and can
//! be walked exactly by the usage tracker, with no heuristics involved.

use std::fmt;

/// A structured TypeScript expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TsExpr {
    /// A plain identifier (not quoted).
    Ident(String),
    /// A string literal (will be quoted). May itself contain code-like text.
    String(String),
    /// An integer literal.
    Int(i64),
    /// A floating point literal.
    Float(f64),
    /// A boolean literal.
    Bool(bool),
    /// The `null` literal.
    Null,
    /// The `undefined` literal.
    Undefined,
    /// A raw expression emitted verbatim.
    Raw(String),
    /// A type reference with optional type arguments, e.g. `Map<string, User>`.
    TypeRef {
        name: String,
        args: Vec<TsExpr>,
    },
    /// A qualified/dotted name, e.g. `Foo.Bar.Baz`.
    Qualified(Vec<String>),
    /// A property access on an arbitrary expression.
    Member {
        object: Box<TsExpr>,
        property: String,
    },
    /// A call expression.
    Call {
        callee: Box<TsExpr>,
        args: Vec<TsExpr>,
    },
    /// An array literal.
    Array(Vec<TsExpr>),
}

impl TsExpr {
    /// Create an identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Create a string literal expression.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create an integer literal expression.
    pub fn int(value: i64) -> Self {
        Self::Int(value)
    }

    /// Create a float literal expression.
    pub fn float(value: f64) -> Self {
        Self::Float(value)
    }

    /// Create a boolean literal expression.
    pub fn bool(value: bool) -> Self {
        Self::Bool(value)
    }

    /// Create a raw expression emitted verbatim.
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    /// Create a type reference.
    pub fn type_ref(name: impl Into<String>) -> Self {
        Self::TypeRef {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a type reference with type arguments.
    pub fn type_ref_with(name: impl Into<String>, args: Vec<TsExpr>) -> Self {
        Self::TypeRef {
            name: name.into(),
            args,
        }
    }

    /// Create a qualified name from dotted components.
    pub fn qualified(parts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Qualified(parts.into_iter().map(Into::into).collect())
    }

    /// Create a property access expression.
    pub fn member(object: TsExpr, property: impl Into<String>) -> Self {
        Self::Member {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Create a call expression.
    pub fn call(callee: TsExpr, args: Vec<TsExpr>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            args,
        }
    }

    /// Create an array literal expression.
    pub fn array(items: Vec<TsExpr>) -> Self {
        Self::Array(items)
    }
}

impl fmt::Display for TsExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "{}", name),
            Self::String(s) => write!(f, "\"{}\"", s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Null => write!(f, "null"),
            Self::Undefined => write!(f, "undefined"),
            Self::Raw(s) => write!(f, "{}", s),
            Self::TypeRef { name, args } => {
                if args.is_empty() {
                    write!(f, "{}", name)
                } else {
                    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                    write!(f, "{}<{}>", name, args.join(", "))
                }
            }
            Self::Qualified(parts) => write!(f, "{}", parts.join(".")),
            Self::Member { object, property } => write!(f, "{}.{}", object, property),
            Self::Call { callee, args } => {
                let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", callee, args.join(", "))
            }
            Self::Array(items) => {
                let items: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}
