use crate::api::OrakelClient;
use crate::domain::{PlayerRecord, StatSeries, StatValue};
use crate::http::Transport;

const AVERAGES_SERIES: &str = "Averages";
const CHECKOUT_SERIES: &str = "Checkout Pcnt";
const MAXIMUMS_SERIES: &str = "180's per leg";

/// Fetch the performance-portal series for the player and fold them into
/// the record. An absent endpoint leaves the record untouched.
pub async fn merge_additional_stats<T: Transport>(
    client: &OrakelClient<T>,
    record: &mut PlayerRecord,
) {
    let Some(series) = client.fetch_stat_series(&record.key).await else {
        return;
    };
    fold_series_into_record(record, series);
}

/// Store the series under `additional_stats`, then derive any scalar field
/// the fanout left absent: the base value as the mean of the series, the
/// "actual" value as its most recent sample, kept raw. Fields that are
/// already present are never overwritten, so a second application is a
/// no-op.
pub fn fold_series_into_record(record: &mut PlayerRecord, series: Vec<StatSeries>) {
    for s in series {
        record.additional_stats.insert(s.name, s.samples);
    }

    if record.average.is_none() {
        record.average = series_mean(record, AVERAGES_SERIES).map(StatValue::Number);
    }
    if record.average_actual.is_none() {
        record.average_actual = last_sample(record, AVERAGES_SERIES);
    }

    if record.checkout_pcnt.is_none() {
        record.checkout_pcnt =
            series_mean(record, CHECKOUT_SERIES).map(|mean| StatValue::Text(format!("{mean:.2}%")));
    }
    if record.checkout_pcnt_actual.is_none() {
        record.checkout_pcnt_actual = last_sample(record, CHECKOUT_SERIES);
    }

    if record.maximum_per_leg.is_none() {
        record.maximum_per_leg = series_mean(record, MAXIMUMS_SERIES).map(StatValue::Number);
    }
    if record.maximum_per_leg_actual.is_none() {
        record.maximum_per_leg_actual = last_sample(record, MAXIMUMS_SERIES);
    }
}

/// Arithmetic mean over the numeric samples of a series. Missing samples
/// count neither toward the sum nor the divisor; a series with no numeric
/// samples (or no series at all) yields nothing.
fn series_mean(record: &PlayerRecord, series_name: &str) -> Option<f64> {
    let samples = record.additional_stats.get(series_name)?;
    let values: Vec<f64> = samples
        .iter()
        .flatten()
        .filter_map(StatValue::as_number)
        .collect();

    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Most recent sample of a series, in its original raw representation
fn last_sample(record: &PlayerRecord, series_name: &str) -> Option<StatValue> {
    record
        .additional_stats
        .get(series_name)?
        .last()
        .cloned()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, samples: &[Option<StatValue>]) -> StatSeries {
        StatSeries {
            name: name.to_string(),
            samples: samples.to_vec(),
        }
    }

    fn text(s: &str) -> Option<StatValue> {
        Some(StatValue::Text(s.to_string()))
    }

    #[test]
    fn derives_average_as_mean_and_actual_as_last() {
        let mut record = PlayerRecord::default();
        fold_series_into_record(
            &mut record,
            vec![series(AVERAGES_SERIES, &[text("50"), text("60"), text("70")])],
        );

        assert_eq!(record.average, Some(StatValue::Number(60.0)));
        assert_eq!(record.average_actual, Some(StatValue::Text("70".into())));
    }

    #[test]
    fn derives_checkout_as_two_decimal_percent() {
        let mut record = PlayerRecord::default();
        fold_series_into_record(
            &mut record,
            vec![series(CHECKOUT_SERIES, &[text("40%"), text("50%"), text("60%")])],
        );

        assert_eq!(record.checkout_pcnt, Some(StatValue::Text("50.00%".into())));
        assert_eq!(
            record.checkout_pcnt_actual,
            Some(StatValue::Text("60%".into()))
        );
    }

    #[test]
    fn derives_maximums_per_leg_as_plain_number() {
        let mut record = PlayerRecord::default();
        fold_series_into_record(
            &mut record,
            vec![series(
                MAXIMUMS_SERIES,
                &[Some(StatValue::Number(0.2)), Some(StatValue::Number(0.4))],
            )],
        );

        assert_eq!(record.maximum_per_leg, Some(StatValue::Number(0.3)));
        assert_eq!(
            record.maximum_per_leg_actual,
            Some(StatValue::Number(0.4))
        );
    }

    #[test]
    fn null_samples_are_excluded_from_the_mean() {
        let mut record = PlayerRecord::default();
        fold_series_into_record(
            &mut record,
            vec![series(
                AVERAGES_SERIES,
                &[None, text("50"), None, Some(StatValue::Number(70.0))],
            )],
        );

        assert_eq!(record.average, Some(StatValue::Number(60.0)));
    }

    #[test]
    fn absent_series_derives_nothing() {
        let mut record = PlayerRecord::default();
        fold_series_into_record(&mut record, vec![series("Darts Per Leg", &[text("15")])]);

        assert_eq!(record.average, None);
        assert_eq!(record.checkout_pcnt, None);
        assert_eq!(record.maximum_per_leg, None);
        assert!(record.additional_stats.contains_key("Darts Per Leg"));
    }

    #[test]
    fn existing_fields_are_never_overwritten() {
        let mut record = PlayerRecord::default();
        record.average = Some(StatValue::Number(97.5));

        fold_series_into_record(
            &mut record,
            vec![series(AVERAGES_SERIES, &[text("50"), text("60")])],
        );

        assert_eq!(record.average, Some(StatValue::Number(97.5)));
        // but the absent twin is still derived
        assert_eq!(record.average_actual, Some(StatValue::Text("60".into())));
    }

    #[test]
    fn folding_twice_is_idempotent() {
        let make_series = || {
            vec![
                series(AVERAGES_SERIES, &[text("50"), text("60"), text("70")]),
                series(CHECKOUT_SERIES, &[text("40%"), text("60%")]),
            ]
        };

        let mut record = PlayerRecord::default();
        fold_series_into_record(&mut record, make_series());
        let once = record.clone();

        fold_series_into_record(&mut record, make_series());
        assert_eq!(record, once);
    }
}
