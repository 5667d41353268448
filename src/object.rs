//! Shallow merges of string-keyed mappings.
//!
//! Both helpers mutate and return the target; sources are read-only and
//! visited left to right through [`each`], each in ascending key order.
//! Values are cloned, never merged recursively.
//!
//! # Examples
//!
//! ```rust
//! use combinars::object::{defaults, extend};
//! use combinars::value::Mapping;
//!
//! let mut settings = Mapping::from([("color".to_owned(), "red")]);
//! let overrides = Mapping::from([("color".to_owned(), "blue"), ("size".to_owned(), "xl")]);
//! extend(&mut settings, &[&overrides]);
//! assert_eq!(settings["color"], "blue");
//!
//! let mut options = Mapping::from([("color".to_owned(), "red")]);
//! defaults(&mut options, &[&overrides]);
//! assert_eq!(options["color"], "red");
//! assert_eq!(options["size"], "xl");
//! ```

use crate::collection::{Key, each};
use crate::value::Mapping;

/// Copies every entry of every source into `target`.
///
/// Later sources overwrite earlier ones, and any source overwrites the
/// target's own entries. Returns `target`.
pub fn extend<'t, V: Clone>(
    target: &'t mut Mapping<V>,
    sources: &[&Mapping<V>],
) -> &'t mut Mapping<V> {
    for source in sources {
        each(*source, |value, key, _| {
            if let Key::Name(name) = key {
                target.insert(name.to_owned(), value.clone());
            }
        });
    }
    target
}

/// Fills in the entries `target` does not hold yet.
///
/// Existing entries are never replaced, whatever their value; among the
/// sources the first one to define a key wins. Returns `target`.
pub fn defaults<'t, V: Clone>(
    target: &'t mut Mapping<V>,
    sources: &[&Mapping<V>],
) -> &'t mut Mapping<V> {
    for source in sources {
        each(*source, |value, key, _| {
            if let Key::Name(name) = key {
                target
                    .entry(name.to_owned())
                    .or_insert_with(|| value.clone());
            }
        });
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn mapping(entries: &[(&str, i32)]) -> Mapping<i32> {
        entries
            .iter()
            .map(|&(name, value)| (name.to_owned(), value))
            .collect()
    }

    #[test]
    fn test_extend_later_source_wins() {
        let mut target = mapping(&[("a", 1)]);
        extend(&mut target, &[&mapping(&[("a", 2)]), &mapping(&[("a", 3)])]);
        assert_eq!(target, mapping(&[("a", 3)]));
    }

    #[test]
    fn test_defaults_first_source_wins() {
        let mut target = Mapping::new();
        defaults(&mut target, &[&mapping(&[("b", 2)]), &mapping(&[("b", 9)])]);
        assert_eq!(target, mapping(&[("b", 2)]));
    }

    #[test]
    fn test_defaults_keeps_null_values() {
        let mut target = Mapping::from([("a".to_owned(), Value::Null)]);
        let source = Mapping::from([("a".to_owned(), Value::from(1))]);
        defaults(&mut target, &[&source]);
        assert_eq!(target["a"], Value::Null);
    }

    #[test]
    fn test_no_sources_leaves_target() {
        let mut target = mapping(&[("a", 1)]);
        assert_eq!(extend(&mut target, &[]), &mapping(&[("a", 1)]));
    }
}
