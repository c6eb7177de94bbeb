use derive_more::Display;

/// The triangular number of some `n`, printed as a bare decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub struct Triangular(pub i64);

/// Returns `n * (n + 1) / 2`.
///
/// Exact whenever `n * (n + 1)` fits in an `i64`. Past that point the product wraps in two's
/// complement before the division, in debug and release builds alike.
pub fn sum_to_n(n: i64) -> i64 {
    n.wrapping_mul(n.wrapping_add(1)) / 2
}

/// Like [`sum_to_n`], but `None` when the intermediate product overflows.
pub fn checked_sum_to_n(n: i64) -> Option<i64> {
    n.checked_add(1)
        .and_then(|next| n.checked_mul(next))
        .map(|product| product / 2)
}

impl From<i64> for Triangular {
    fn from(n: i64) -> Self {
        Triangular(sum_to_n(n))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 3)]
    #[case(10, 55)]
    #[case(100, 5050)]
    #[case(-1, 0)]
    #[case(-5, 10)]
    #[case(3_037_000_499, 4_611_686_016_981_624_750)]
    fn closed_form(#[case] n: i64, #[case] expected: i64) {
        assert_eq!(sum_to_n(n), expected);
        assert_eq!(checked_sum_to_n(n), Some(expected));
    }

    #[test]
    fn matches_running_sum() {
        let mut total = 0;
        for n in 0..=2000 {
            total += n;
            assert_eq!(sum_to_n(n), total, "n = {n}");
        }
    }

    #[rstest]
    #[case(3_037_000_500, -4_611_686_016_836_150_558)]
    #[case(i64::MAX, i64::MAX.wrapping_mul(i64::MIN) / 2)]
    #[case(i64::MAX, -4_611_686_018_427_387_904)]
    #[case(i64::MIN, -4_611_686_018_427_387_904)]
    #[case(4_294_967_296, 2_147_483_648)]
    fn overflow_wraps(#[case] n: i64, #[case] wrapped: i64) {
        assert_eq!(checked_sum_to_n(n), None);
        assert_eq!(sum_to_n(n), wrapped);
    }

    #[test]
    fn displays_as_decimal() {
        assert_eq!(Triangular::from(100).to_string(), "5050");
        assert_eq!(Triangular::from(-5).to_string(), "10");
        assert_eq!(Triangular::from(-6).to_string(), "15");
    }
}
