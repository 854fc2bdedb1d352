//! The KPI catalog: declarative definitions for every supported metric.
//!
//! Display text is hard-coded in Italian; ordering here is the display
//! order of the selection surface.

use super::KpiKind;
use crate::models::{InputSpec, KpiDefinition};

pub(super) fn definitions() -> Vec<KpiDefinition> {
    vec![
        KpiDefinition {
            id: "mtbf".to_string(),
            title: "MTBF (Tempo Medio Tra Guasti)".to_string(),
            description: "Il Mean Time Between Failure indica l'affidabilità degli asset \
                          misurando il tempo medio operativo tra due guasti consecutivi."
                .to_string(),
            unit: "ore".to_string(),
            inputs: vec![
                InputSpec::new("operatingTime", "Tempo operativo totale")
                    .with_placeholder("Es. 1000")
                    .with_unit("ore"),
                InputSpec::new("failures", "Numero di guasti").with_placeholder("Es. 4"),
            ],
            kind: KpiKind::Mtbf,
        },
        KpiDefinition {
            id: "mttr".to_string(),
            title: "MTTR (Tempo Medio di Riparazione)".to_string(),
            description: "Il Mean Time To Repair misura la manutenibilità, ovvero il tempo \
                          medio necessario per riparare un guasto e ripristinare l'operatività."
                .to_string(),
            unit: "ore".to_string(),
            inputs: vec![
                InputSpec::new("downtime", "Tempo totale di fermo")
                    .with_placeholder("Es. 20")
                    .with_unit("ore"),
                InputSpec::new("incidents", "Numero di interventi").with_placeholder("Es. 5"),
            ],
            kind: KpiKind::Mttr,
        },
        KpiDefinition {
            id: "planned-maintenance".to_string(),
            title: "Percentuale Manutenzione Pianificata".to_string(),
            description: "Misura la proattività del team: rapporta le ore spese in manutenzione \
                          programmata rispetto al totale delle ore di manutenzione."
                .to_string(),
            unit: "%".to_string(),
            inputs: vec![
                InputSpec::new("plannedHours", "Ore manutenzione programmata")
                    .with_placeholder("Es. 40")
                    .with_unit("ore"),
                InputSpec::new("totalHours", "Ore totali di manutenzione")
                    .with_placeholder("Es. 60")
                    .with_unit("ore"),
            ],
            kind: KpiKind::PlannedMaintenance,
        },
        KpiDefinition {
            id: "oee".to_string(),
            title: "OEE (Overall Equipment Effectiveness)".to_string(),
            description: "Lo standard globale per misurare la produttività manifatturiera. \
                          Combina Disponibilità, Prestazioni e Qualità in un unico indice."
                .to_string(),
            unit: "%".to_string(),
            inputs: vec![
                InputSpec::new("availability", "Disponibilità")
                    .with_placeholder("0-100")
                    .with_unit("%"),
                InputSpec::new("performance", "Efficienza Operativa")
                    .with_placeholder("0-100")
                    .with_unit("%"),
                InputSpec::new("quality", "Qualità")
                    .with_placeholder("0-100")
                    .with_unit("%"),
            ],
            kind: KpiKind::Oee,
        },
        KpiDefinition {
            id: "schedule-compliance".to_string(),
            title: "Aderenza alla Pianificazione (Schedule Compliance)".to_string(),
            description: "Verifica se la manutenzione viene eseguita quando previsto. \
                          È cruciale per l'efficienza operativa."
                .to_string(),
            unit: "%".to_string(),
            inputs: vec![
                InputSpec::new("completed", "Ordini di lavoro completati in tempo")
                    .with_placeholder("Es. 45"),
                InputSpec::new("planned", "Ordini di lavoro pianificati totali")
                    .with_placeholder("Es. 50"),
            ],
            kind: KpiKind::ScheduleCompliance,
        },
        KpiDefinition {
            id: "equipment-downtime".to_string(),
            title: "Tempo di Fermo (Equipment Downtime)".to_string(),
            description: "La percentuale di tempo in cui l'asset non è produttivo rispetto al \
                          tempo totale osservato."
                .to_string(),
            unit: "%".to_string(),
            inputs: vec![
                InputSpec::new("downtime", "Ore di downtime")
                    .with_placeholder("Es. 10")
                    .with_unit("ore"),
                InputSpec::new("totalTime", "Periodo totale osservato")
                    .with_placeholder("Es. 160")
                    .with_unit("ore"),
            ],
            kind: KpiKind::EquipmentDowntime,
        },
        KpiDefinition {
            id: "equipment-availability".to_string(),
            title: "Disponibilità Asset (Availability)".to_string(),
            description: "La probabilità che una macchina sia operativa e pronta all'uso \
                          quando richiesto."
                .to_string(),
            unit: "%".to_string(),
            inputs: vec![
                InputSpec::new("availableTime", "Tempo disponibile")
                    .with_placeholder("Es. 100")
                    .with_unit("ore"),
                InputSpec::new("plannedDowntime", "Downtime pianificato")
                    .with_placeholder("Es. 5")
                    .with_unit("ore"),
            ],
            kind: KpiKind::EquipmentAvailability,
        },
        KpiDefinition {
            id: "performance-efficiency".to_string(),
            title: "Efficienza Prestazionale".to_string(),
            description: "Confronta la velocità reale di produzione con quella ideale \
                          progettuale."
                .to_string(),
            unit: "%".to_string(),
            inputs: vec![
                InputSpec::new("unitsProduced", "Numero unità prodotte").with_placeholder("Es. 1000"),
                InputSpec::new("idealCycleTime", "Tempo ciclo ideale per unità")
                    .with_placeholder("Es. 0.5")
                    .with_unit("minuti"),
                InputSpec::new("operatingTime", "Tempo operativo effettivo")
                    .with_placeholder("Es. 600")
                    .with_unit("minuti"),
            ],
            kind: KpiKind::PerformanceEfficiency,
        },
        KpiDefinition {
            id: "quality-rate".to_string(),
            title: "Tasso di Qualità".to_string(),
            description: "Percentuale di output conforme agli standard di qualità \
                          (Good Parts / Total Parts)."
                .to_string(),
            unit: "%".to_string(),
            inputs: vec![
                InputSpec::new("acceptableUnits", "Numero unità di qualità accettabile")
                    .with_placeholder("Es. 950"),
                InputSpec::new("totalUnits", "Numero unità prodotte").with_placeholder("Es. 1000"),
            ],
            kind: KpiKind::QualityRate,
        },
    ]
}
