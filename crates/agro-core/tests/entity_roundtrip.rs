//! Serde roundtrip and JsonSchema validation tests for the CLI response types.

use agro_core::capabilities::InstructionInfo;
use agro_core::entities::Equipment;
use agro_core::enums::*;
use agro_core::responses::*;
use agro_core::variants::{PumpingUnit, Variant};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn pump() -> Equipment {
    Equipment::new(
        "UB-001",
        "Bomba Hidráulica Principal",
        "PumpMaster",
        750.0,
        "Sala de Máquinas",
        Variant::PumpingUnit(PumpingUnit::new(15.0, 8000.0)),
    )
    .unwrap()
}

roundtrip_and_validate!(
    equipment_row_roundtrip,
    EquipmentRow,
    EquipmentRow::from(&pump())
);

roundtrip_and_validate!(
    equipment_details_roundtrip,
    EquipmentDetails,
    EquipmentDetails::from(&pump())
);

roundtrip_and_validate!(
    fleet_stats_roundtrip,
    FleetStats,
    FleetStats::from_records(&[pump()])
);

roundtrip_and_validate!(
    exercise_report_roundtrip,
    ExerciseReport,
    ExerciseReport {
        code: "UB-001".into(),
        name: "Bomba Hidráulica Principal".into(),
        reading: Some("Presión: 3.20 bar".into()),
        vocabulary: vec![InstructionInfo {
            keyword: "ENCENDER".into(),
            matching: MatchMode::Exact,
            description: "Pone la bomba en marcha".into(),
        }],
        operation: Some(OperationOutcome {
            instruction: "ENCENDER".into(),
            accepted: true,
            status: "BOMBEANDO".into(),
        }),
        log_tail: vec!["2026-01-01 10:00:00 - Bomba encendida".into()],
        log_total: 3,
    }
);

roundtrip_and_validate!(
    exercise_report_without_capabilities,
    ExerciseReport,
    ExerciseReport {
        code: "MT-001".into(),
        name: "Termómetro Exterior".into(),
        reading: None,
        vocabulary: vec![],
        operation: None,
        log_tail: vec![],
        log_total: 0,
    }
);

#[test]
fn details_json_is_flat() {
    let value = serde_json::to_value(EquipmentDetails::from(&pump())).unwrap();
    assert_eq!(value["code"], "UB-001");
    assert_eq!(value["kind"], "pumping_unit");
    assert_eq!(value["category"], "Sistema de Bombeo");
    assert_eq!(value["status"], "DETENIDA");
    assert_eq!(
        value["capabilities"],
        serde_json::json!(["actionable", "measurable", "loggable"])
    );
}

#[test]
fn equipment_serializes_with_tagged_variant() {
    let value = serde_json::to_value(pump()).unwrap();
    assert_eq!(value["code"], "UB-001");
    assert_eq!(value["variant"]["kind"], "pumping_unit");
    assert_eq!(value["logbook"].as_array().map(Vec::len), Some(1));
}
