//! Search expressions for Gerrit's query language.
//!
//! A [`Query`] is a small boolean expression tree that renders to the text
//! Gerrit expects in the `q` parameter of its search endpoints:
//!
//! ```text
//! term := key ':' value | value
//! expr := term | '-' expr | '(' expr (' AND ' expr)+ ')' | '(' expr (' OR ' expr)+ ')'
//! ```
//!
//! Rendering never fails. Empty sub-expressions are dropped, a group with a
//! single remaining member renders without parentheses, and values are
//! quoted only when Gerrit would otherwise misparse them.
//!
//! # Example
//!
//! ```rust
//! use gerrit_api::query::Query;
//!
//! let query = Query::or([
//!     Query::field("status", "open"),
//!     Query::and([
//!         Query::field("status", "merged"),
//!         Query::field("status", "abandoned"),
//!     ]),
//!     Query::not(Query::and([
//!         Query::field("has", "draft"),
//!         Query::field("project", "Foo"),
//!     ])),
//! ]);
//!
//! assert_eq!(
//!     query.to_string(),
//!     "(status:open OR (status:merged AND status:abandoned) OR -(has:draft AND project:Foo))"
//! );
//! ```

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};

/// A boolean search expression.
///
/// Build queries with the constructor functions and render them with
/// [`Display`](fmt::Display).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// A `key:value` predicate. An empty key renders the bare value.
    Field {
        /// The operator name, such as `status` or `project`.
        key: String,
        /// The operand, quoted on render when necessary.
        value: String,
    },
    /// Pre-formatted text, rendered verbatim.
    Raw(String),
    /// Negation of the inner expression.
    Not(Box<Query>),
    /// Conjunction of the children.
    And(Vec<Query>),
    /// Disjunction of the children.
    Or(Vec<Query>),
}

impl Query {
    /// Creates a `key:value` predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gerrit_api::query::Query;
    ///
    /// assert_eq!(Query::field("status", "open").to_string(), "status:open");
    /// assert_eq!(Query::field("message", "fix bug").to_string(), r#"message:"fix bug""#);
    /// assert_eq!(Query::field("", "I8473b95934").to_string(), "I8473b95934");
    /// ```
    #[must_use]
    pub fn field(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a passthrough expression.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Negates `inner`. Negating an empty expression yields an empty one.
    #[must_use]
    pub fn not(inner: Self) -> Self {
        Self::Not(Box::new(inner))
    }

    /// Combines `children` with `AND`.
    #[must_use]
    pub fn and(children: impl IntoIterator<Item = Self>) -> Self {
        Self::And(children.into_iter().collect())
    }

    /// Combines `children` with `OR`.
    #[must_use]
    pub fn or(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Or(children.into_iter().collect())
    }

    /// Returns `true` if the expression renders as the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Field { key, value } => key.is_empty() && value.is_empty(),
            Self::Raw(text) => text.is_empty(),
            Self::Not(inner) => inner.is_empty(),
            Self::And(children) | Self::Or(children) => children.iter().all(Self::is_empty),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { key, value } => {
                if key.is_empty() {
                    return f.write_str(value);
                }
                f.write_str(key)?;
                f.write_char(':')?;
                if needs_quoting(value) {
                    f.write_str(&quote(value))
                } else {
                    f.write_str(value)
                }
            }
            Self::Raw(text) => f.write_str(text),
            Self::Not(inner) => {
                if inner.is_empty() {
                    return Ok(());
                }
                write!(f, "-{inner}")
            }
            Self::And(children) => write_group(f, children, " AND "),
            Self::Or(children) => write_group(f, children, " OR "),
        }
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, children: &[Query], sep: &str) -> fmt::Result {
    let mut present = children.iter().filter(|child| !child.is_empty());
    let Some(first) = present.next() else {
        return Ok(());
    };
    let Some(second) = present.next() else {
        return write!(f, "{first}");
    };

    write!(f, "({first}{sep}{second}")?;
    for child in present {
        write!(f, "{sep}{child}")?;
    }
    f.write_char(')')
}

/// Renders an instant for `before:`, `after:` and `since:` predicates.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use gerrit_api::query::{time_value, Query};
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
/// assert_eq!(time_value(at), "2024-03-09 14:05:00");
/// assert_eq!(
///     Query::field("after", time_value(at)).to_string(),
///     r#"after:"2024-03-09 14:05:00""#
/// );
/// ```
#[must_use]
pub fn time_value(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Returns `true` if `value` must be quoted to survive Gerrit's parser.
///
/// ASCII is safe only within `[A-Za-z0-9@._-]`, plus a literal backslash
/// which passes through unquoted. Non-ASCII is safe unless it is
/// whitespace, non-printable or U+FFFD.
#[must_use]
pub fn needs_quoting(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    value.chars().any(|c| {
        if c.is_ascii() {
            !(c == '\\' || c.is_ascii_alphanumeric() || matches!(c, '@' | '-' | '.' | '_'))
        } else {
            c == char::REPLACEMENT_CHARACTER || c.is_whitespace() || !is_printable(c)
        }
    })
}

/// Quotes `value` as a double-quoted literal.
///
/// Quotes and backslashes are escaped, control characters use their short
/// escapes where one exists, and other non-printable characters become
/// `\xNN`, `\uNNNN` or `\UNNNNNNNN`.
///
/// # Example
///
/// ```rust
/// use gerrit_api::query::quote;
///
/// assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
/// assert_eq!(quote("a\tb"), r#""a\tb""#);
/// ```
#[must_use]
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if is_printable(c) => out.push(c),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c < ' ' || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c if u32::from(c) < 0x1_0000 => {
                out.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            c => {
                out.push_str(&format!("\\U{:08x}", u32::from(c)));
            }
        }
    }
    out.push('"');
    out
}

/// Approximates printability: graphic characters plus the ASCII space.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    let code = u32::from(c);
    let format = matches!(
        code,
        0xAD | 0x600..=0x605
            | 0x61C
            | 0x6DD
            | 0x70F
            | 0x180E
            | 0x200B..=0x200F
            | 0x2028..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0xE0001
            | 0xE0020..=0xE007F
    );
    let private_use = matches!(code, 0xE000..=0xF8FF | 0xF_0000..=0x10_FFFF);
    let noncharacter = matches!(code, 0xFDD0..=0xFDEF) || code & 0xFFFE == 0xFFFE;
    !(format || private_use || noncharacter)
}
