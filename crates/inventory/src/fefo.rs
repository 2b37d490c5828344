//! FEFO (First-Expired, First-Out) ordering and expiration alerts.

use core::cmp::Ordering;

use chrono::{Days, NaiveDate};

use lotkeeper_core::{DomainError, DomainResult};

use crate::batch::Batch;

/// Total FEFO order: earliest expiration first, ties broken by ascending id.
pub fn fefo_cmp(a: &Batch, b: &Batch) -> Ordering {
    a.expiration_date()
        .cmp(&b.expiration_date())
        .then_with(|| a.id_typed().cmp(&b.id_typed()))
}

/// Return every batch in FEFO order.
///
/// Depleted batches are kept; callers that only want stock on hand filter
/// before calling. The input slice is left untouched.
pub fn fefo_order(batches: &[Batch]) -> Vec<Batch> {
    let mut ordered = batches.to_vec();
    ordered.sort_by(fefo_cmp);
    ordered
}

/// Non-depleted batches expiring on or before `today + threshold_days`, in
/// FEFO order (most urgent first).
///
/// Already-expired batches with stock are included. A negative threshold is
/// rejected with [`DomainError::InvalidArgument`]. A cutoff past the last
/// representable date saturates, so every batch with stock alerts.
pub fn expiration_alerts(
    batches: &[Batch],
    threshold_days: i64,
    today: NaiveDate,
) -> DomainResult<Vec<Batch>> {
    let cutoff = alert_cutoff(threshold_days, today)?;

    let mut alerts: Vec<Batch> = batches
        .iter()
        .filter(|b| !b.is_depleted())
        .filter(|b| b.expiration_date() <= cutoff)
        .cloned()
        .collect();
    alerts.sort_by(fefo_cmp);

    tracing::debug!(
        threshold_days,
        %today,
        %cutoff,
        scanned = batches.len(),
        alerts = alerts.len(),
        "expiration alerts computed"
    );
    Ok(alerts)
}

/// Last expiration date (inclusive) that still raises an alert.
pub(crate) fn alert_cutoff(threshold_days: i64, today: NaiveDate) -> DomainResult<NaiveDate> {
    let days = u64::try_from(threshold_days).map_err(|_| {
        DomainError::invalid_argument(format!("threshold_days must be >= 0 (got {threshold_days})"))
    })?;
    Ok(today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotkeeper_core::{BatchId, ProductId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 1, 1)
    }

    fn batch(id: u64, product: u64, expires: NaiveDate, quantity: u32) -> Batch {
        Batch::new(BatchId::new(id), ProductId::new(product), expires, quantity)
    }

    /// The five lots of the original mock inventory, pinned to 2025-01-01.
    fn mock_batches() -> Vec<Batch> {
        vec![
            batch(101, 1, date(2025, 1, 6), 50),   // Leche Entera
            batch(102, 2, date(2025, 1, 16), 120), // Jamón Cocido
            batch(103, 3, date(2025, 1, 3), 30),   // Yogur Frutilla
            batch(104, 4, date(2025, 3, 2), 200),  // Queso Cremoso
            batch(105, 1, date(2025, 1, 21), 80),  // Leche Entera
        ]
    }

    fn ids(batches: &[Batch]) -> Vec<u64> {
        batches.iter().map(|b| b.id_typed().get()).collect()
    }

    #[test]
    fn fefo_order_sorts_by_expiration() {
        let ordered = fefo_order(&mock_batches());
        assert_eq!(ids(&ordered), vec![103, 101, 102, 105, 104]);
    }

    #[test]
    fn fefo_order_does_not_touch_input() {
        let input = mock_batches();
        let _ = fefo_order(&input);
        assert_eq!(ids(&input), vec![101, 102, 103, 104, 105]);
    }

    #[test]
    fn fefo_order_breaks_ties_by_id() {
        let same_day = date(2025, 1, 10);
        let input = vec![batch(9, 1, same_day, 1), batch(3, 2, same_day, 1), batch(5, 3, same_day, 1)];
        assert_eq!(ids(&fefo_order(&input)), vec![3, 5, 9]);
    }

    #[test]
    fn fefo_order_keeps_depleted_batches() {
        let mut input = mock_batches();
        input.push(batch(106, 2, date(2025, 1, 2), 0));
        let ordered = fefo_order(&input);
        assert_eq!(ids(&ordered), vec![106, 103, 101, 102, 105, 104]);
    }

    #[test]
    fn fefo_order_of_nothing_is_nothing() {
        assert!(fefo_order(&[]).is_empty());
    }

    #[test]
    fn alerts_within_five_days_include_boundary() {
        let alerts = expiration_alerts(&mock_batches(), 5, today()).unwrap();
        assert_eq!(ids(&alerts), vec![103, 101]);
    }

    #[test]
    fn alerts_within_fifteen_days() {
        let alerts = expiration_alerts(&mock_batches(), 15, today()).unwrap();
        assert_eq!(ids(&alerts), vec![103, 101, 102]);
    }

    #[test]
    fn alerts_skip_depleted_batches() {
        let mut input = mock_batches();
        input.push(batch(106, 2, date(2025, 1, 2), 0));

        let alerts = expiration_alerts(&input, 5, today()).unwrap();
        assert_eq!(ids(&alerts), vec![103, 101]);
        assert!(ids(&fefo_order(&input)).contains(&106));
    }

    #[test]
    fn zero_threshold_only_reports_today_or_earlier() {
        let input = vec![
            batch(1, 1, date(2024, 12, 30), 4),
            batch(2, 1, today(), 4),
            batch(3, 1, date(2025, 1, 2), 4),
        ];
        let alerts = expiration_alerts(&input, 0, today()).unwrap();
        assert_eq!(ids(&alerts), vec![1, 2]);
    }

    #[test]
    fn negative_threshold_is_invalid_argument() {
        let err = expiration_alerts(&mock_batches(), -1, today()).unwrap_err();
        match err {
            DomainError::InvalidArgument(msg) => assert!(msg.contains("-1")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn huge_threshold_saturates_instead_of_failing() {
        let alerts = expiration_alerts(&mock_batches(), i64::MAX, today()).unwrap();
        assert_eq!(ids(&alerts), vec![103, 101, 102, 105, 104]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_batches() -> impl Strategy<Value = Vec<Batch>> {
            prop::collection::vec((0u64..50, 0i64..120, 0u32..5), 0..40).prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (product, offset, qty))| {
                        // Ids may repeat across products; uniqueness is not required here.
                        let id = (i as u64) % 17;
                        let expires = date(2024, 12, 1) + chrono::Days::new(offset as u64);
                        batch(id, product, expires, qty)
                    })
                    .collect()
            })
        }

        fn sorted_multiset(batches: &[Batch]) -> Vec<(u64, u64, NaiveDate, u32)> {
            let mut keys: Vec<_> = batches
                .iter()
                .map(|b| (b.id_typed().get(), b.product_id().get(), b.expiration_date(), b.quantity()))
                .collect();
            keys.sort();
            keys
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: FEFO ordering neither loses nor duplicates batches.
            #[test]
            fn fefo_order_is_a_permutation(batches in arb_batches()) {
                let ordered = fefo_order(&batches);
                prop_assert_eq!(ordered.len(), batches.len());
                prop_assert_eq!(sorted_multiset(&ordered), sorted_multiset(&batches));
            }

            /// Property: output is non-decreasing by (expiration_date, id).
            #[test]
            fn fefo_order_is_sorted(batches in arb_batches()) {
                let ordered = fefo_order(&batches);
                for pair in ordered.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    prop_assert!(a.expiration_date() <= b.expiration_date());
                    if a.expiration_date() == b.expiration_date() {
                        prop_assert!(a.id_typed() <= b.id_typed());
                    }
                }
            }

            /// Property: ordering an ordered sequence changes nothing.
            #[test]
            fn fefo_order_is_idempotent(batches in arb_batches()) {
                let once = fefo_order(&batches);
                let twice = fefo_order(&once);
                prop_assert_eq!(once, twice);
            }

            /// Property: alerts are in-stock input batches inside the window.
            #[test]
            fn alerts_are_bounded_subset(batches in arb_batches(), threshold in 0i64..90) {
                let today = date(2025, 1, 1);
                let cutoff = today + chrono::Days::new(threshold as u64);
                let alerts = expiration_alerts(&batches, threshold, today).unwrap();

                for alert in &alerts {
                    prop_assert!(batches.contains(alert));
                    prop_assert!(alert.quantity() > 0);
                    prop_assert!(alert.expiration_date() <= cutoff);
                }
                let expected = batches
                    .iter()
                    .filter(|b| b.quantity() > 0 && b.expiration_date() <= cutoff)
                    .count();
                prop_assert_eq!(alerts.len(), expected);
                prop_assert_eq!(fefo_order(&alerts), alerts);
            }

            /// Property: every negative threshold is rejected.
            #[test]
            fn negative_thresholds_are_rejected(batches in arb_batches(), threshold in i64::MIN..0) {
                let result = expiration_alerts(&batches, threshold, date(2025, 1, 1));
                prop_assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
            }
        }
    }
}
