use ampere_core::models::{new_document_id, PredictionDocument, RawDocument, TelemetryRecord};

fn sample_record() -> TelemetryRecord {
    TelemetryRecord::new(1.0, 2.0, 4.0, "Mon")
}

#[test]
fn telemetry_deserializes_wire_field_names() {
    let json = r#"{
        "connectionTime_decimal": 9.5,
        "chargingDuration": 2.25,
        "kWhDelivered": 11.4,
        "dayIndicator": "Tue"
    }"#;
    let record: TelemetryRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.connection_time_decimal, Some(9.5));
    assert_eq!(record.charging_duration_hours, Some(2.25));
    assert_eq!(record.kwh_delivered, Some(11.4));
    assert_eq!(record.day_indicator.as_deref(), Some("Tue"));
    assert!(record.is_complete());
}

#[test]
fn telemetry_tolerates_missing_and_null_fields() {
    let record: TelemetryRecord =
        serde_json::from_str(r#"{"connectionTime_decimal": 1.0, "chargingDuration": null}"#)
            .unwrap();
    assert_eq!(record.connection_time_decimal, Some(1.0));
    assert_eq!(record.charging_duration_hours, None);
    assert_eq!(record.kwh_delivered, None);
    assert!(!record.is_complete());
}

#[test]
fn non_finite_numbers_count_as_incomplete() {
    let mut record = sample_record();
    record.kwh_delivered = Some(f64::NAN);
    assert!(!record.is_complete());
    record.kwh_delivered = Some(f64::INFINITY);
    assert!(!record.is_complete());
}

#[test]
fn raw_document_flattens_record_fields() {
    let doc = RawDocument::assign(sample_record());
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["id"], serde_json::json!(doc.id));
    assert_eq!(value["connectionTime_decimal"], serde_json::json!(1.0));
    assert_eq!(value["dayIndicator"], serde_json::json!("Mon"));
    // No nested "record" object on the wire.
    assert!(value.get("record").is_none());
}

#[test]
fn prediction_document_uses_wire_name_for_predicted_kwh() {
    let doc = PredictionDocument::assign(sample_record(), 3.5);
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["predicted_kWh"], serde_json::json!(3.5));
    assert_eq!(doc.partition_key(), Some("Mon"));
}

#[test]
fn assigned_identities_are_always_fresh() {
    let raw = RawDocument::assign(sample_record());
    let prediction = PredictionDocument::assign(raw.record.clone(), 3.5);
    assert_ne!(raw.id, prediction.id);

    let other = PredictionDocument::assign(raw.record.clone(), 3.5);
    assert_ne!(prediction.id, other.id);
}

#[test]
fn document_ids_are_valid_uuids() {
    let id = new_document_id();
    assert!(uuid::Uuid::parse_str(&id).is_ok());
}
