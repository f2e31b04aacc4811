//! Human-readable views shared by the menu and the `table` output format.

use std::fmt::Write as _;

use agro_core::entities::Equipment;
use agro_core::enums::Capability;
use agro_core::responses::{EquipmentDetails, ExerciseReport};

use super::table::render_entity_table;

fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Message shown for a lookup miss by code.
pub fn not_found(code: &str) -> String {
    format!("No existe ningún equipo con código {code}")
}

/// Aligned listing in registry order with a total line.
pub fn equipment_listing(records: &[&Equipment]) -> String {
    if records.is_empty() {
        return "No hay equipos registrados todavía.".to_string();
    }

    let headers = ["Código", "Nombre", "Marca", "Consumo (W)", "Categoría", "Estado"];
    let rows = records
        .iter()
        .map(|equipment| {
            vec![
                equipment.code().to_string(),
                equipment.name().to_string(),
                equipment.manufacturer().to_string(),
                format!("{:.2}", equipment.power_w()),
                equipment.category().to_string(),
                operational_label(equipment).to_string(),
            ]
        })
        .collect::<Vec<_>>();

    format!(
        "{}\nTotal: {} equipos",
        render_entity_table(&headers, &rows, super::table_options()),
        records.len()
    )
}

const fn operational_label(equipment: &Equipment) -> &'static str {
    if equipment.is_operational() {
        "Operativo"
    } else {
        "Inactivo"
    }
}

/// Numbered listing, expected in ascending power order.
pub fn power_ranking(records: &[&Equipment]) -> String {
    if records.is_empty() {
        return "No hay equipos para ordenar.".to_string();
    }

    let headers = ["#", "Código", "Nombre", "Consumo (W)"];
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, equipment)| {
            vec![
                (index + 1).to_string(),
                equipment.code().to_string(),
                equipment.name().to_string(),
                format!("{:.2}", equipment.power_w()),
            ]
        })
        .collect::<Vec<_>>();

    format!(
        "{}\nDel que menos consume al que más.",
        render_entity_table(&headers, &rows, super::table_options())
    )
}

/// Full summaries of every name match.
pub fn search_results(text: &str, records: &[&Equipment]) -> String {
    if records.is_empty() {
        return format!("Ningún equipo coincide con: {text}");
    }

    let mut out = format!("Se encontraron {} equipo(s):\n", records.len());
    for equipment in records {
        let _ = write!(out, "\n{}\n{}", rule(60), equipment.summary());
    }
    out
}

/// Summary followed by one line per supported capability.
pub fn details(details: &EquipmentDetails) -> String {
    let mut out = details.summary.clone();
    out.push_str("\n--- Capacidades ---\n");
    for capability in &details.capabilities {
        let line = match capability {
            Capability::Measurable => "✓ Puede medir datos",
            Capability::Actionable => "✓ Puede ejecutar acciones",
            Capability::Loggable => "✓ Lleva bitácora",
        };
        out.push_str(line);
        out.push('\n');
    }
    if let Some(status) = &details.status {
        let _ = writeln!(out, "Estado actual: {status}");
    }
    out
}

/// Result of exercising a record from the command line.
pub fn exercise(report: &ExerciseReport) -> String {
    let mut out = format!("Probando: {} ({})\n{}\n", report.name, report.code, rule(60));
    let mut any = false;

    if let Some(reading) = &report.reading {
        any = true;
        let _ = write!(out, "\n[Medición]\n{reading}\n");
    }

    if !report.vocabulary.is_empty() {
        any = true;
        out.push_str("\n[Ejecución]\nComandos disponibles:\n");
        for info in &report.vocabulary {
            let _ = writeln!(out, "  - {}: {}", info.keyword, info.description);
        }
        match &report.operation {
            Some(outcome) if outcome.accepted => {
                let _ = writeln!(
                    out,
                    "✓ {} ejecutado. Estado: {}",
                    outcome.instruction, outcome.status
                );
            }
            Some(outcome) => {
                let _ = writeln!(
                    out,
                    "✗ Instrucción no reconocida: {}. Estado: {}",
                    outcome.instruction, outcome.status
                );
            }
            None => out.push_str("(sin instrucción; usá --instruction para enviar una)\n"),
        }
    }

    if report.log_total > 0 {
        any = true;
        out.push_str(&log_section(&report.log_tail, report.log_total));
    }

    if !any {
        out.push_str("\nEste equipo no tiene capacidades para probar.\n");
    }
    out
}

/// Logbook tail block used after exercising a record.
pub fn log_section(tail: &[String], total: usize) -> String {
    let mut out = String::from("\n[Auditoría]\nÚltimos registros en la bitácora:\n");
    for line in tail {
        let _ = writeln!(out, "  {line}");
    }
    let _ = writeln!(out, "\nTotal de registros: {total}");
    out
}

#[cfg(test)]
mod tests {
    use agro_core::capabilities::InstructionInfo;
    use agro_core::enums::MatchMode;
    use agro_core::responses::OperationOutcome;
    use agro_core::variants::{PumpingUnit, ThermalMeter, Variant};
    use pretty_assertions::assert_eq;

    use super::*;

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

    fn meter() -> Equipment {
        Equipment::new(
            "MT-001",
            "Termómetro Exterior",
            "TempSafe",
            25.0,
            "Área Externa",
            Variant::ThermalMeter(ThermalMeter::new("-20°C a 50°C")),
        )
        .unwrap()
    }

    #[test]
    fn listing_has_total_line() {
        let (pump, meter) = (pump(), meter());
        let text = equipment_listing(&[&pump, &meter]);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Código"));
        assert!(lines[2].contains("Sistema de Bombeo"));
        assert!(lines[3].contains("Medidor Térmico"));
        assert_eq!(lines[4], "Total: 2 equipos");
    }

    #[test]
    fn listing_shows_operational_state() {
        let (pump, mut meter) = (pump(), meter());
        meter.set_operational(false);
        let text = equipment_listing(&[&pump, &meter]);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].ends_with("Estado"));
        assert!(lines[2].ends_with("Operativo"));
        assert!(lines[3].ends_with("Inactivo"));
    }

    #[test]
    fn empty_views_say_so() {
        assert_eq!(equipment_listing(&[]), "No hay equipos registrados todavía.");
        assert_eq!(power_ranking(&[]), "No hay equipos para ordenar.");
        assert_eq!(search_results("zzz", &[]), "Ningún equipo coincide con: zzz");
    }

    #[test]
    fn ranking_is_numbered() {
        let (pump, meter) = (pump(), meter());
        let text = power_ranking(&[&meter, &pump]);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].trim_start().starts_with("1  MT-001"));
        assert!(lines[3].trim_start().starts_with("2  UB-001"));
    }

    #[test]
    fn details_list_capabilities_and_status() {
        let text = details(&EquipmentDetails::from(&pump()));
        assert!(text.starts_with("=== UNIDAD DE BOMBEO ==="));
        assert!(text.contains("✓ Puede medir datos\n"));
        assert!(text.contains("✓ Puede ejecutar acciones\n"));
        assert!(text.contains("✓ Lleva bitácora\n"));
        assert!(text.ends_with("Estado actual: DETENIDA\n"));
    }

    #[test]
    fn exercise_reports_rejected_instruction() {
        let report = ExerciseReport {
            code: "UB-001".into(),
            name: "Bomba".into(),
            reading: None,
            vocabulary: vec![InstructionInfo {
                keyword: "ENCENDER".into(),
                matching: MatchMode::Exact,
                description: "Enciende la bomba".into(),
            }],
            operation: Some(OperationOutcome {
                instruction: "VOLAR".into(),
                accepted: false,
                status: "DETENIDA".into(),
            }),
            log_tail: vec!["2026-01-01 00:00:00 - Unidad de bombeo inicializada".into()],
            log_total: 1,
        };
        let text = exercise(&report);
        assert!(text.contains("  - ENCENDER: Enciende la bomba\n"));
        assert!(text.contains("✗ Instrucción no reconocida: VOLAR. Estado: DETENIDA\n"));
        assert!(text.ends_with("Total de registros: 1\n"));
    }
}
