//! Aggregation over filtered record subsets.
//!
//! All functions are pure and total. Empty inputs produce zero values and
//! division by a non-positive whole produces a zero percentage rather than NaN.

pub mod status;

use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Add;

/// Count and sum of a numeric projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals<T> {
    pub count: usize,
    pub sum: T,
}

impl<T: Default> Default for Totals<T> {
    fn default() -> Self {
        Self {
            count: 0,
            sum: T::default(),
        }
    }
}

/// Counts `records` and sums `value` over them.
pub fn totals<'a, R, T, I, F>(records: I, value: F) -> Totals<T>
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    T: Add<Output = T> + Default,
    F: Fn(&R) -> T,
{
    records
        .into_iter()
        .fold(Totals::default(), |acc, record| Totals {
            count: acc.count + 1,
            sum: acc.sum + value(record),
        })
}

/// Sums `value` per key. Every key in `keys` appears in the result, with a
/// zero sum when no record carries it. Records whose key is not declared are
/// ignored.
pub fn partition_sum<'a, R, K, T, I, KF, VF>(
    records: I,
    keys: &[K],
    key: KF,
    value: VF,
) -> BTreeMap<K, T>
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    K: Ord + Clone,
    T: Add<Output = T> + Default,
    KF: Fn(&R) -> K,
    VF: Fn(&R) -> T,
{
    let mut sums: BTreeMap<K, T> = keys.iter().cloned().map(|k| (k, T::default())).collect();
    for record in records {
        if let Some(slot) = sums.get_mut(&key(record)) {
            let current = std::mem::take(slot);
            *slot = current + value(record);
        }
    }
    sums
}

/// Raw and display forms of a percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentage {
    /// Unclamped `part / whole * 100`
    pub raw: f64,
    /// `raw` clamped to `[0, 100]` for progress-bar style rendering
    pub display: f64,
}

impl Percentage {
    pub const ZERO: Percentage = Percentage {
        raw: 0.0,
        display: 0.0,
    };
}

pub fn percentage(part: f64, whole: f64) -> Percentage {
    if !whole.is_finite() || whole <= 0.0 || !part.is_finite() {
        return Percentage::ZERO;
    }
    let raw = part / whole * 100.0;
    Percentage {
        raw,
        display: raw.clamp(0.0, 100.0),
    }
}

/// Arithmetic mean of `value` over `records`; zero for an empty input.
pub fn mean<'a, R, I, F>(records: I, value: F) -> f64
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    F: Fn(&R) -> f64,
{
    let (count, sum) = records
        .into_iter()
        .fold((0usize, 0.0f64), |(count, sum), record| {
            (count + 1, sum + value(record))
        });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Number of distinct keys among `records`
pub fn distinct_count<'a, R, K, I, F>(records: I, key: F) -> usize
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    K: Ord,
    F: Fn(&R) -> K,
{
    records
        .into_iter()
        .map(key)
        .collect::<std::collections::BTreeSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Status {
        Paid,
        Pending,
    }

    struct Row {
        amount: Decimal,
        status: Status,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                amount: dec!(15420.50),
                status: Status::Paid,
            },
            Row {
                amount: dec!(8750.00),
                status: Status::Pending,
            },
            Row {
                amount: dec!(12300.75),
                status: Status::Paid,
            },
        ]
    }

    #[test]
    fn totals_of_empty_input_are_zero() {
        let empty: Vec<Row> = Vec::new();
        let t = totals(&empty, |r: &Row| r.amount);
        assert_eq!(
            t,
            Totals {
                count: 0,
                sum: Decimal::ZERO
            }
        );
    }

    #[test]
    fn totals_sum_exact_decimals() {
        let t = totals(&rows(), |r: &Row| r.amount);
        assert_eq!(t.count, 3);
        assert_eq!(t.sum, dec!(36471.25));
    }

    #[test]
    fn partition_sum_keeps_every_declared_key() {
        let paid_only: Vec<Row> = rows()
            .into_iter()
            .filter(|r| r.status == Status::Paid)
            .collect();
        let sums = partition_sum(
            &paid_only,
            &[Status::Paid, Status::Pending],
            |r: &Row| r.status,
            |r: &Row| r.amount,
        );
        assert_eq!(sums[&Status::Paid], dec!(27721.25));
        assert_eq!(sums[&Status::Pending], Decimal::ZERO);
    }

    #[test]
    fn percentage_clamps_display_but_not_raw() {
        let p = percentage(62450.0, 60000.0);
        assert!(p.raw > 100.0);
        assert_eq!(p.display, 100.0);

        let p = percentage(-5.0, 10.0);
        assert_eq!(p.raw, -50.0);
        assert_eq!(p.display, 0.0);
    }

    #[test]
    fn percentage_of_non_positive_whole_is_zero() {
        assert_eq!(percentage(5.0, 0.0), Percentage::ZERO);
        assert_eq!(percentage(5.0, -1.0), Percentage::ZERO);
        assert_eq!(percentage(f64::NAN, 10.0), Percentage::ZERO);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(mean(&empty, |v: &f64| *v), 0.0);
        assert_eq!(mean(&[4.8, 4.6, 4.2], |v: &f64| *v), (4.8 + 4.6 + 4.2) / 3.0);
    }

    #[test]
    fn distinct_count_ignores_duplicates() {
        assert_eq!(distinct_count(&rows(), |r: &Row| r.status), 2);
    }
}
