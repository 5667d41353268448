//! Field-name or function accessors.

use std::fmt;

use crate::error::InvalidArgumentError;
use crate::value::{FieldAccess, Value};

/// Boxed key-deriving function held by [`Accessor::Function`].
type KeyFunction<'f, T> = Box<dyn Fn(&T) -> Value + 'f>;

/// Resolved accessor, uniform over both forms.
pub(crate) type ResolvedAccessor<'f, T> =
    Box<dyn Fn(&T) -> Result<Value, InvalidArgumentError> + 'f>;

/// Derives a key from an element, either by reading a named field or by
/// calling a function.
///
/// An accessor is resolved to a single callable before the algorithm
/// using it starts, so the choice between the two forms is made once per
/// call rather than once per element.
///
/// # Examples
///
/// ```rust
/// use combinars::collection::Accessor;
/// use combinars::record;
/// use combinars::structure::sort_by_accessor;
/// use combinars::value::Value;
///
/// let people = vec![
///     record! { "name" => "Lin", "age" => 41 },
///     record! { "name" => "Ada", "age" => 36 },
/// ];
///
/// let by_age = sort_by_accessor(&people, Accessor::Field("age")).unwrap();
/// assert_eq!(by_age[0], people[1]);
///
/// let by_name_length = sort_by_accessor(
///     &people,
///     Accessor::function(|person: &Value| Value::from(person.to_string().len())),
/// )
/// .unwrap();
/// assert_eq!(by_name_length.len(), 2);
/// ```
pub enum Accessor<'f, T> {
    /// Reads the named field; absent fields read as [`Value::Missing`].
    Field(&'f str),
    /// Calls the function on the element.
    Function(KeyFunction<'f, T>),
}

impl<'f, T: 'f> Accessor<'f, T> {
    /// Wraps a function as an accessor.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&T) -> Value + 'f,
    {
        Self::Function(Box::new(function))
    }

    /// Resolves the accessor into a callable for `operation`.
    ///
    /// The field form fails with [`InvalidArgumentError`] for elements that
    /// are not records.
    pub(crate) fn resolve(self, operation: &'static str) -> ResolvedAccessor<'f, T>
    where
        T: FieldAccess,
    {
        match self {
            Self::Field(name) => Box::new(move |element: &T| {
                if element.is_record() {
                    Ok(element.field(name).unwrap_or(Value::Missing))
                } else {
                    Err(InvalidArgumentError::new(
                        operation,
                        format!("field `{name}` read from an element that is not a record"),
                    ))
                }
            }),
            Self::Function(function) => Box::new(move |element: &T| Ok(function(element))),
        }
    }
}

impl<'f, T> From<&'f str> for Accessor<'f, T> {
    fn from(name: &'f str) -> Self {
        Self::Field(name)
    }
}

impl<T> fmt::Debug for Accessor<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => formatter.debug_tuple("Field").field(name).finish(),
            Self::Function(_) => formatter.write_str("Function(<fn>)"),
        }
    }
}
