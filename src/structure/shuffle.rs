//! Uniformly random permutations.

/// A source of uniformly distributed numbers in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next number in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
///
/// # Examples
///
/// ```rust
/// use combinars::structure::{RngSource, shuffle_with};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut random = RngSource(StdRng::seed_from_u64(7));
/// let shuffled = shuffle_with(&[1, 2, 3, 4], &mut random);
/// assert_eq!(shuffled.len(), 4);
/// ```
#[cfg(feature = "random")]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

#[cfg(feature = "random")]
impl<R: rand::Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Returns a uniformly random permutation of `items` drawn from `random`.
///
/// Uses the Fisher–Yates shuffle on a copy; `items` is untouched. Empty and
/// single-element inputs come back as they are without consulting
/// `random`.
///
/// # Examples
///
/// ```rust
/// use combinars::structure::{RandomSource, shuffle_with};
///
/// /// Always picks the lowest remaining position.
/// struct Lowest;
///
/// impl RandomSource for Lowest {
///     fn next_unit(&mut self) -> f64 {
///         0.0
///     }
/// }
///
/// assert_eq!(shuffle_with(&[1, 2, 3], &mut Lowest), vec![2, 3, 1]);
/// ```
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn shuffle_with<T, R>(items: &[T], random: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut shuffled = items.to_vec();
    for index in (1..shuffled.len()).rev() {
        let pick = (random.next_unit() * (index + 1) as f64) as usize;
        shuffled.swap(index, pick.min(index));
    }
    shuffled
}

/// Returns a uniformly random permutation of `items` using the thread-local
/// generator.
///
/// # Examples
///
/// ```rust
/// use combinars::structure::shuffle;
///
/// let mut shuffled = shuffle(&[3, 1, 2]);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, vec![1, 2, 3]);
/// ```
#[cfg(feature = "random")]
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut random = RngSource(rand::thread_rng());
    shuffle_with(items, &mut random)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sequence {
        values: Vec<f64>,
        calls: usize,
    }

    impl RandomSource for Sequence {
        fn next_unit(&mut self) -> f64 {
            let value = self.values[self.calls % self.values.len()];
            self.calls += 1;
            value
        }
    }

    #[test]
    fn test_fixed_points_do_not_consume_randomness() {
        let mut random = Sequence { values: vec![0.5], calls: 0 };
        let empty: [u8; 0] = [];
        assert!(shuffle_with(&empty, &mut random).is_empty());
        assert_eq!(shuffle_with(&['x'], &mut random), vec!['x']);
        assert_eq!(random.calls, 0);
    }

    #[test]
    fn test_highest_draw_keeps_order() {
        let mut random = Sequence { values: vec![0.999_999], calls: 0 };
        assert_eq!(shuffle_with(&[1, 2, 3, 4], &mut random), vec![1, 2, 3, 4]);
        assert_eq!(random.calls, 3);
    }

    #[test]
    fn test_out_of_range_draw_is_clamped() {
        let mut random = Sequence { values: vec![1.0], calls: 0 };
        assert_eq!(shuffle_with(&[1, 2, 3], &mut random), vec![1, 2, 3]);
    }
}
