//! Single-pass summation over an integer sequence.
//!
//! The accumulator starts at zero and is scoped to one call. Summation
//! is commutative and associative over the input multiset, so argument
//! order never changes the result. No overflow checks: plain `i64`
//! semantics apply (panic in debug builds, wrapping in release).

use funcs_common::sequence::fold_left;

/// Sums all elements of a sequence in one pass, starting from zero.
///
/// An empty sequence sums to zero.
///
/// # Examples
/// ```
/// use funcs_variadic::sum_up;
/// assert_eq!(sum_up(&[1, 2, 2, 2]), 7);
/// assert_eq!(sum_up(&[]), 0);
/// ```
pub fn sum_up(numbers: &[i64]) -> i64 {
    fold_left(|sum, &num| sum + num, 0, numbers)
}

/// Sums any number of integer arguments.
///
/// The arguments are collected into a sequence and handed to
/// [`sum_up`]; calling with no arguments yields zero. A trailing comma
/// is accepted.
///
/// # Examples
/// ```
/// assert_eq!(funcs_variadic::sum_up!(1, 2, 3, 4, 5, 6), 21);
/// assert_eq!(funcs_variadic::sum_up!(), 0);
/// ```
#[macro_export]
macro_rules! sum_up {
    () => {
        0_i64
    };
    ($($num:expr),+ $(,)?) => {
        $crate::sum_up(&[$($num),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sum_up_sequence() {
        assert_eq!(sum_up(&[1, 2, 2, 2]), 7);
    }

    #[test]
    fn test_sum_up_empty_is_zero() {
        assert_eq!(sum_up(&[]), 0);
        assert_eq!(sum_up!(), 0);
    }

    #[test]
    fn test_sum_up_variadic() {
        assert_eq!(sum_up!(1, 2, 3, 4, 5, 6), 21);
        assert_eq!(sum_up!(2, 55, 66, 7, 8, 1, 1, 1, 25), 166);
    }

    #[test]
    fn test_variadic_accepts_trailing_comma_and_expressions() {
        assert_eq!(sum_up!(1 + 1, 2 * 2,), 6);
    }

    proptest! {
        /// The fold agrees with `Iterator::sum` for any input.
        #[test]
        fn agrees_with_iterator_sum(
            numbers in proptest::collection::vec(-1_000_i64..1_000, 0..100)
        ) {
            let expected: i64 = numbers.iter().sum();
            prop_assert_eq!(sum_up(&numbers), expected);
        }

        /// Summation is insensitive to element order.
        #[test]
        fn order_does_not_matter(
            numbers in proptest::collection::vec(-1_000_i64..1_000, 0..100)
        ) {
            let reversed: Vec<i64> = numbers.iter().rev().copied().collect();
            prop_assert_eq!(sum_up(&numbers), sum_up(&reversed));
        }
    }
}
