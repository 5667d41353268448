//! A dynamic value for field-name access, method dispatch and nesting.
//!
//! Most operations in this crate are generic over their element type. A few
//! need more than a type parameter can promise: `pluck` and
//! `sort_by_accessor` read a field by name, `invoke` calls a method by name,
//! `every_truthy` asks whether an element is truthy, and `flatten` has to
//! tell a nested sequence from a leaf. [`Value`] covers all of these, and the
//! [`FieldAccess`], [`Dispatch`], [`Truthy`] and
//! [`Nest`](crate::structure::Nest) traits let callers plug in their own
//! types instead.
//!
//! # Ordering
//!
//! `Value` is totally ordered so it can serve as a sort key. Values of
//! different kinds order as
//! `Null < Bool < Number < Text < List < Record < Missing`; numbers compare
//! numerically (`f64::total_cmp`, with `-0.0` equal to `0.0`), text
//! lexicographically, lists and records element by element. [`Value::Missing`] sorts last, so elements lacking a
//! sort field end up at the back.
//!
//! # Examples
//!
//! ```rust
//! use combinars::{list, record};
//! use combinars::value::{FieldAccess, Value};
//!
//! let person = record! { "name" => "Ada", "age" => 36 };
//! assert_eq!(person.field("age"), Some(Value::from(36)));
//! assert_eq!(person.field("email"), None);
//!
//! let nested = list![1, list![2, 3]];
//! assert_eq!(nested.to_string(), "[1, [2, 3]]");
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A string-keyed mapping, iterated in ascending key order.
pub type Mapping<V> = BTreeMap<String, V>;

/// A dynamically typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The explicit "no value here" marker, e.g. a field a record lacks.
    #[default]
    Missing,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
    /// An ordered sequence of values, possibly nested.
    List(Vec<Value>),
    /// A string-keyed record.
    Record(Mapping<Value>),
}

impl Value {
    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
            Self::List(_) => 4,
            Self::Record(_) => 5,
            Self::Missing => 6,
        }
    }

    /// Returns `true` for [`Value::Missing`].
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns the number, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the fields, if this is a record.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Mapping<Self>> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::Number(left), Self::Number(right)) => {
                unsigned_zero(*left).total_cmp(&unsigned_zero(*right))
            }
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            (Self::List(left), Self::List(right)) => left.cmp(right),
            (Self::Record(left), Self::Record(right)) => left.cmp(right),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Folds `-0.0` into `0.0` so both zeros compare and hash alike.
const fn unsigned_zero(number: f64) -> f64 {
    if number == 0.0 { 0.0 } else { number }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Missing | Self::Null => {}
            Self::Bool(flag) => flag.hash(state),
            Self::Number(number) => unsigned_zero(*number).to_bits().hash(state),
            Self::Text(text) => text.hash(state),
            Self::List(items) => items.hash(state),
            Self::Record(fields) => fields.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(formatter, "missing"),
            Self::Null => write!(formatter, "null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Text(text) => write!(formatter, "{text}"),
            Self::List(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
            Self::Record(fields) => {
                write!(formatter, "{{")?;
                for (index, (name, item)) in fields.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{name}: {item}")?;
                }
                write!(formatter, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

macro_rules! impl_from_number {
    ($($number:ty),* $(,)?) => {
        $(
            impl From<$number> for Value {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from(number: $number) -> Self {
                    Self::Number(number as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Mapping<T>> for Value {
    fn from(fields: Mapping<T>) -> Self {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, item)| (name, item.into()))
                .collect(),
        )
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Missing, Into::into)
    }
}

/// Builds a [`Value::List`] from expressions convertible into [`Value`].
///
/// ```rust
/// use combinars::list;
/// use combinars::value::Value;
///
/// let items = list![1, "two", list![3.0]];
/// assert_eq!(items.as_list().map(<[Value]>::len), Some(3));
/// ```
#[macro_export]
macro_rules! list {
    ($($item:expr),* $(,)?) => {
        $crate::value::Value::List(vec![$($crate::value::Value::from($item)),*])
    };
}

/// Builds a [`Value::Record`] from `name => value` pairs.
///
/// ```rust
/// use combinars::record;
/// use combinars::value::FieldAccess;
///
/// let point = record! { "x" => 1, "y" => 2 };
/// assert!(point.field("x").is_some());
/// ```
#[macro_export]
macro_rules! record {
    ($($name:expr => $item:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut fields = $crate::value::Mapping::new();
        $(
            fields.insert(::std::string::String::from($name), $crate::value::Value::from($item));
        )*
        $crate::value::Value::Record(fields)
    }};
}

// =============================================================================
// Truthy
// =============================================================================

/// Types with a notion of truthiness, the default predicate of
/// `every_truthy` and `some_truthy`.
///
/// Zero, NaN, empty strings, `false`, `None`, [`Value::Null`] and
/// [`Value::Missing`] are falsy. Lists and records are truthy even when empty.
pub trait Truthy {
    /// Returns whether the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Missing | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.is_truthy(),
            Self::Text(text) => !text.is_empty(),
            Self::List(_) | Self::Record(_) => true,
        }
    }
}

// =============================================================================
// FieldAccess
// =============================================================================

/// Read access to named fields, used by field-name accessors.
///
/// Implement this for your own record types to use them with `pluck` and
/// `sort_by_accessor`.
///
/// ```rust
/// use combinars::value::{FieldAccess, Value};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl FieldAccess for Person {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(Value::from(self.name.as_str())),
///             "age" => Some(Value::from(self.age)),
///             _ => None,
///         }
///     }
/// }
///
/// let person = Person { name: "Grace".to_owned(), age: 45 };
/// assert_eq!(person.field("age"), Some(Value::from(45)));
/// ```
pub trait FieldAccess {
    /// Returns the named field, or `None` when there is no such field.
    fn field(&self, name: &str) -> Option<Value>;

    /// Whether the value has fields at all.
    ///
    /// Reading a field from a value that is not a record is a contract
    /// violation rather than a missing field.
    fn is_record(&self) -> bool {
        true
    }
}

impl FieldAccess for Value {
    fn field(&self, name: &str) -> Option<Self> {
        self.as_record().and_then(|fields| fields.get(name).cloned())
    }

    fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }
}

impl FieldAccess for Mapping<Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Method calls by name, used by `invoke` with a method name.
pub trait Dispatch {
    /// Calls `method` with `arguments`, or returns `None` when the receiver
    /// has no such method.
    fn dispatch(&self, method: &str, arguments: &[Value]) -> Option<Value>;
}

impl Dispatch for Value {
    /// Supported methods:
    ///
    /// | method | receivers | result |
    /// |---|---|---|
    /// | `len` | text, list, record | number of chars, items or fields |
    /// | `to_uppercase`, `to_lowercase`, `trim` | text | text |
    /// | `reverse` | text, list | reversed copy |
    /// | `sort` | list | sorted copy |
    /// | `keys`, `values` | record | list |
    /// | `join` | list | text, separator argument defaults to `","` |
    fn dispatch(&self, method: &str, arguments: &[Self]) -> Option<Self> {
        match (method, self) {
            ("len", Self::Text(text)) => Some(Self::from(text.chars().count())),
            ("len", Self::List(items)) => Some(Self::from(items.len())),
            ("len", Self::Record(fields)) => Some(Self::from(fields.len())),
            ("to_uppercase", Self::Text(text)) => Some(Self::Text(text.to_uppercase())),
            ("to_lowercase", Self::Text(text)) => Some(Self::Text(text.to_lowercase())),
            ("trim", Self::Text(text)) => Some(Self::Text(text.trim().to_owned())),
            ("reverse", Self::Text(text)) => Some(Self::Text(text.chars().rev().collect())),
            ("reverse", Self::List(items)) => Some(Self::List(items.iter().rev().cloned().collect())),
            ("sort", Self::List(items)) => {
                let mut sorted = items.clone();
                sorted.sort();
                Some(Self::List(sorted))
            }
            ("keys", Self::Record(fields)) => Some(Self::List(
                fields.keys().map(|name| Self::Text(name.clone())).collect(),
            )),
            ("values", Self::Record(fields)) => Some(Self::List(fields.values().cloned().collect())),
            ("join", Self::List(items)) => {
                let separator = match arguments.first() {
                    None => ",",
                    Some(Self::Text(separator)) => separator.as_str(),
                    Some(_) => return None,
                };
                let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
                Some(Self::Text(joined.join(separator)))
            }
            _ => None,
        }
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone, Ord, Hash);

// =============================================================================
// serde
// =============================================================================

#[cfg(feature = "serde")]
mod serde_support {
    use super::{Mapping, Value};
    use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
    use serde::ser::{Serialize, Serializer};
    use std::fmt;

    /// Largest magnitude below which every integral `f64` is exact.
    const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

    impl Serialize for Value {
        #[allow(clippy::cast_possible_truncation)]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Missing | Self::Null => serializer.serialize_unit(),
                Self::Bool(flag) => serializer.serialize_bool(*flag),
                Self::Number(number)
                    if number.fract() == 0.0 && number.abs() < EXACT_INTEGER_LIMIT =>
                {
                    serializer.serialize_i64(*number as i64)
                }
                Self::Number(number) => serializer.serialize_f64(*number),
                Self::Text(text) => serializer.serialize_str(text),
                Self::List(items) => serializer.collect_seq(items),
                Self::Record(fields) => serializer.collect_map(fields),
            }
        }
    }

    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = Value;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a null, boolean, number, string, sequence or map")
        }

        fn visit_unit<E>(self) -> Result<Value, E> {
            Ok(Value::Null)
        }

        fn visit_none<E>(self) -> Result<Value, E> {
            Ok(Value::Null)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
            Value::deserialize(deserializer)
        }

        fn visit_bool<E>(self, flag: bool) -> Result<Value, E> {
            Ok(Value::Bool(flag))
        }

        fn visit_i64<E>(self, number: i64) -> Result<Value, E> {
            Ok(Value::from(number))
        }

        fn visit_u64<E>(self, number: u64) -> Result<Value, E> {
            Ok(Value::from(number))
        }

        fn visit_f64<E>(self, number: f64) -> Result<Value, E> {
            Ok(Value::Number(number))
        }

        fn visit_str<E>(self, text: &str) -> Result<Value, E> {
            Ok(Value::from(text))
        }

        fn visit_string<E>(self, text: String) -> Result<Value, E> {
            Ok(Value::Text(text))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut sequence: A) -> Result<Value, A::Error> {
            let mut items = Vec::with_capacity(sequence.size_hint().unwrap_or(0));
            while let Some(item) = sequence.next_element()? {
                items.push(item);
            }
            Ok(Value::List(items))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
            let mut fields = Mapping::new();
            while let Some((name, item)) = map.next_entry::<String, Value>()? {
                fields.insert(name, item);
            }
            Ok(Value::Record(fields))
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ValueVisitor)
        }
    }
}
