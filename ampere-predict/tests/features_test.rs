use ampere_core::models::TelemetryRecord;
use ampere_predict::features::{derive, FeatureVector};
use proptest::prelude::*;
use test_fixtures::sample_record;

#[test]
fn derives_avg_power_and_end_time() {
    let derived = derive(&sample_record());
    assert_eq!(derived.avg_power, Some(2.0));
    assert_eq!(derived.connection_end_time, Some(3.0));
}

#[test]
fn zero_duration_yields_no_avg_power() {
    let record = TelemetryRecord::new(8.0, 0.0, 5.0, "Wed");
    let derived = derive(&record);
    assert_eq!(derived.avg_power, None);
    // End time is still defined: 8.0 + 0.0.
    assert_eq!(derived.connection_end_time, Some(8.0));
}

#[test]
fn missing_inputs_yield_no_derived_values() {
    let record = TelemetryRecord {
        connection_time_decimal: Some(8.0),
        charging_duration_hours: None,
        kwh_delivered: Some(5.0),
        day_indicator: Some("Wed".into()),
    };
    let derived = derive(&record);
    assert_eq!(derived.avg_power, None);
    assert_eq!(derived.connection_end_time, None);
}

#[test]
fn feature_vector_is_ordered_as_the_model_expects() {
    let record = sample_record();
    let derived = derive(&record);
    let vector = FeatureVector::try_from_parts(&record, &derived).unwrap();
    assert_eq!(vector.0, [1.0, 2.0, 2.0, 3.0]);
}

#[test]
fn missing_features_are_reported_by_name() {
    let record = TelemetryRecord::new(8.0, 0.0, 5.0, "Wed");
    let derived = derive(&record);
    let missing = FeatureVector::try_from_parts(&record, &derived).unwrap_err();
    assert_eq!(missing, vec!["avg_power"]);

    let record = TelemetryRecord {
        connection_time_decimal: None,
        charging_duration_hours: Some(2.0),
        kwh_delivered: None,
        day_indicator: None,
    };
    let derived = derive(&record);
    let missing = FeatureVector::try_from_parts(&record, &derived).unwrap_err();
    assert_eq!(missing, vec!["connectionTime_decimal", "avg_power"]);
}

proptest! {
    // Derivation is total and the zero-duration guard always holds.
    #[test]
    fn derivation_never_panics_and_guards_division(
        start in proptest::option::of(-24.0f64..48.0),
        duration in proptest::option::of(0.0f64..24.0),
        kwh in proptest::option::of(0.0f64..100.0),
    ) {
        let record = TelemetryRecord {
            connection_time_decimal: start,
            charging_duration_hours: duration,
            kwh_delivered: kwh,
            day_indicator: Some("Mon".into()),
        };
        let derived = derive(&record);

        match (kwh, duration) {
            (Some(k), Some(d)) if d != 0.0 => prop_assert_eq!(derived.avg_power, Some(k / d)),
            _ => prop_assert_eq!(derived.avg_power, None),
        }
        match (start, duration) {
            (Some(s), Some(d)) => prop_assert_eq!(derived.connection_end_time, Some(s + d)),
            _ => prop_assert_eq!(derived.connection_end_time, None),
        }
    }
}
