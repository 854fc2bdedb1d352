//! Static KPI registry.
//!
//! The registry is fixed configuration data: an ordered list of KPI
//! definitions built once at process start. It has no side effects and no
//! failure mode beyond a lookup miss, which falls back to the first entry
//! (the default selection policy).
//!
//! Each KPI's formula and interpretation live on [`KpiKind`], a closed enum
//! dispatched by `match`: the set of KPIs is known at build time, so no
//! dynamic dispatch is needed.

mod catalog;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::KpiDefinition;

/// Closed set of KPI formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KpiKind {
    Mtbf,
    Mttr,
    PlannedMaintenance,
    Oee,
    ScheduleCompliance,
    EquipmentDowntime,
    EquipmentAvailability,
    PerformanceEfficiency,
    QualityRate,
}

/// Safe-parse policy inside formulas: a missing or NaN entry reads as zero.
///
/// This runs before each formula's null-condition check. The evaluation
/// pipeline's presence check already rejects blank required fields, but the
/// zero-default stays the authoritative fallback should optional inputs be
/// added later.
fn value_or_zero(values: &HashMap<String, f64>, key: &str) -> f64 {
    values.get(key).copied().filter(|v| !v.is_nan()).unwrap_or(0.0)
}

impl KpiKind {
    /// Evaluate the formula over the numeric input map.
    ///
    /// Returns `None` when the formula is undefined for the given inputs
    /// (division by zero).
    pub fn calculate(&self, values: &HashMap<String, f64>) -> Option<f64> {
        let v = |key: &str| value_or_zero(values, key);

        match self {
            KpiKind::Mtbf => {
                let failures = v("failures");
                if failures == 0.0 {
                    return None;
                }
                Some(v("operatingTime") / failures)
            }
            KpiKind::Mttr => {
                let incidents = v("incidents");
                if incidents == 0.0 {
                    return None;
                }
                Some(v("downtime") / incidents)
            }
            KpiKind::PlannedMaintenance => {
                let total = v("totalHours");
                if total == 0.0 {
                    return None;
                }
                Some(v("plannedHours") / total * 100.0)
            }
            // Division-free: inputs are percentages (e.g. 90 for 90%)
            KpiKind::Oee => Some(
                (v("availability") / 100.0)
                    * (v("performance") / 100.0)
                    * (v("quality") / 100.0)
                    * 100.0,
            ),
            KpiKind::ScheduleCompliance => {
                let planned = v("planned");
                if planned == 0.0 {
                    return None;
                }
                Some(v("completed") / planned * 100.0)
            }
            KpiKind::EquipmentDowntime => {
                let total = v("totalTime");
                if total == 0.0 {
                    return None;
                }
                Some(v("downtime") / total * 100.0)
            }
            KpiKind::EquipmentAvailability => {
                let available = v("availableTime");
                if available == 0.0 {
                    return None;
                }
                Some((available - v("plannedDowntime")) / available * 100.0)
            }
            KpiKind::PerformanceEfficiency => {
                let op_time = v("operatingTime");
                if op_time == 0.0 {
                    return None;
                }
                Some(v("unitsProduced") * v("idealCycleTime") / op_time * 100.0)
            }
            KpiKind::QualityRate => {
                let total = v("totalUnits");
                if total == 0.0 {
                    return None;
                }
                Some(v("acceptableUnits") / total * 100.0)
            }
        }
    }

    /// Interpretation message for a computed value.
    pub fn interpret(&self, value: f64) -> String {
        match self {
            KpiKind::Mtbf => {
                "Maggiore è questo valore, maggiore è l'affidabilità del sistema.".to_string()
            }
            KpiKind::Mttr => format!(
                "Il tempo medio di ripristino è di {:.2} unità di tempo.",
                value
            ),
            KpiKind::PlannedMaintenance => if value >= 80.0 {
                "Ottimo livello di prevenzione."
            } else {
                "Troppa manutenzione reattiva (guasti imprevisti)."
            }
            .to_string(),
            KpiKind::Oee => if value >= 85.0 {
                "OEE di classe mondiale."
            } else if value >= 60.0 {
                "Valore tipico, margini di miglioramento."
            } else {
                "Bassa efficienza complessiva."
            }
            .to_string(),
            KpiKind::ScheduleCompliance => if value >= 90.0 {
                "Ottima aderenza alla pianificazione."
            } else if value >= 70.0 {
                "Aderenza accettabile, ma migliorabile."
            } else {
                "Necessario rivedere i processi di pianificazione."
            }
            .to_string(),
            KpiKind::EquipmentDowntime => if value <= 5.0 {
                "Downtime minimo, ottima continuità."
            } else if value <= 15.0 {
                "Downtime nella media."
            } else {
                "Downtime critico, investigare le cause."
            }
            .to_string(),
            KpiKind::EquipmentAvailability => if value >= 90.0 {
                "Disponibilità eccellente."
            } else {
                "Disponibilità migliorabile tramite manutenzione predittiva."
            }
            .to_string(),
            KpiKind::PerformanceEfficiency => if value >= 95.0 {
                "Efficienza produttiva ottimale."
            } else {
                "Possibili rallentamenti o micro-fermate rilevati."
            }
            .to_string(),
            KpiKind::QualityRate => if value >= 98.0 {
                "Qualità eccellente."
            } else {
                "Tasso di scarto elevato, controllare i processi."
            }
            .to_string(),
        }
    }
}

/// Ordered, immutable collection of KPI definitions.
pub struct Registry {
    definitions: Vec<KpiDefinition>,
}

impl Registry {
    fn new() -> Self {
        let definitions = catalog::definitions();
        debug_assert!(!definitions.is_empty());
        Self { definitions }
    }

    /// All definitions, in display order.
    pub fn definitions(&self) -> &[KpiDefinition] {
        &self.definitions
    }

    /// Lookup by id.
    pub fn get(&self, id: &str) -> Option<&KpiDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Lookup by id, falling back to the first definition when the id is
    /// unknown. This is the default selection policy.
    pub fn get_or_default(&self, id: &str) -> &KpiDefinition {
        self.get(id).unwrap_or_else(|| self.default_definition())
    }

    /// The default selection: the first definition in registry order.
    pub fn default_definition(&self) -> &KpiDefinition {
        &self.definitions[0]
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Global registry accessor. Built lazily on first use and shared for the
/// life of the process.
pub fn get_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::new)
}
