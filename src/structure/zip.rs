//! Index-aligned merging of sequences.

/// Merges sequences position by position.
///
/// The result is as long as the longest input. Row `i` holds
/// `Some(sequences[j][i])` for every input `j`, or `None` where input `j`
/// is shorter than `i + 1`. Unequal lengths are never an error.
///
/// # Examples
///
/// ```rust
/// use combinars::structure::zip;
///
/// let rows = zip(&[vec![1, 2, 3], vec![10, 20]]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some(1), Some(10)],
///         vec![Some(2), Some(20)],
///         vec![Some(3), None],
///     ]
/// );
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .max()
        .unwrap_or(0);

    (0..longest)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.as_ref().get(index).cloned())
                .collect()
        })
        .collect()
}
