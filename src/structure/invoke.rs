//! Per-element method calls.

use std::fmt;

use crate::collection::{IntoCollection, map};
use crate::error::InvalidArgumentError;
use crate::value::{Dispatch, Value};

type MethodFunction<'f, T> = Box<dyn Fn(&T, &[Value]) -> Value + 'f>;

type ResolvedMethod<'f, T> =
    Box<dyn Fn(&T, &[Value]) -> Result<Value, InvalidArgumentError> + 'f>;

/// The method [`invoke`] calls on every element: a method name looked up
/// through [`Dispatch`], or a function that receives the element as its
/// receiver.
pub enum Method<'f, T> {
    /// Calls the named method through [`Dispatch`].
    Named(&'f str),
    /// Calls the function with the element and the arguments.
    Function(MethodFunction<'f, T>),
}

impl<'f, T: 'f> Method<'f, T> {
    /// Wraps a function as a method.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&T, &[Value]) -> Value + 'f,
    {
        Self::Function(Box::new(function))
    }

    fn resolve(self) -> ResolvedMethod<'f, T>
    where
        T: Dispatch,
    {
        match self {
            Self::Named(name) => Box::new(move |receiver: &T, arguments: &[Value]| {
                receiver.dispatch(name, arguments).ok_or_else(|| {
                    InvalidArgumentError::new(
                        "invoke",
                        format!("element has no method `{name}`"),
                    )
                })
            }),
            Self::Function(function) => {
                Box::new(move |receiver: &T, arguments: &[Value]| Ok(function(receiver, arguments)))
            }
        }
    }
}

impl<'f, T> From<&'f str> for Method<'f, T> {
    fn from(name: &'f str) -> Self {
        Self::Named(name)
    }
}

impl<T> fmt::Debug for Method<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => formatter.debug_tuple("Named").field(name).finish(),
            Self::Function(_) => formatter.write_str("Function(<fn>)"),
        }
    }
}

/// Calls `method` with `arguments` on every element and collects the
/// results in order.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] if a named method is not available on
/// some element.
///
/// # Examples
///
/// ```rust
/// use combinars::list;
/// use combinars::structure::{Method, invoke};
/// use combinars::value::Value;
///
/// let words = [Value::from("ab"), Value::from("cd")];
/// assert_eq!(
///     invoke(&words, "to_uppercase".into(), &[]).unwrap(),
///     vec![Value::from("AB"), Value::from("CD")]
/// );
///
/// let lists = [list![3, 1, 2], list![5, 4]];
/// assert_eq!(
///     invoke(&lists, Method::Named("sort"), &[]).unwrap(),
///     vec![list![1, 2, 3], list![4, 5]]
/// );
///
/// let repeat = Method::function(|word: &Value, arguments: &[Value]| {
///     let times = arguments[0].as_number().unwrap_or(1.0) as usize;
///     Value::from(word.as_text().unwrap_or_default().repeat(times))
/// });
/// assert_eq!(
///     invoke(&words, repeat, &[Value::from(2)]).unwrap(),
///     vec![Value::from("abab"), Value::from("cdcd")]
/// );
/// ```
pub fn invoke<'a, C>(
    collection: C,
    method: Method<'_, C::Item>,
    arguments: &[Value],
) -> Result<Vec<Value>, InvalidArgumentError>
where
    C: IntoCollection<'a>,
    C::Item: Dispatch,
{
    let call = method.resolve();
    map(collection, |receiver| call(receiver, arguments))
        .into_iter()
        .collect()
}
