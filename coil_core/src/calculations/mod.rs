//! # Coil Calculations
//!
//! This module contains the calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Metrics` / `*Plan` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<_, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`coil`] - Coil volume, weight, and unwound length
//! - [`cuts`] - Cut planning (remainder and scale-to-fit modes)

pub mod coil;
pub mod cuts;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use coil::{calculate, CoilInput, CoilMetrics};
pub use cuts::{parse_cut_list, plan_cuts, CutEntry, CutMode, CutPlan, CutRequest, ParsedCuts};

/// A coil together with its cut request, as stored in a project.
///
/// Metrics and plans are recomputed from this on demand; nothing derived is
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoilItem {
    /// Coil geometry and metal
    pub input: CoilInput,

    /// Requested cuts for this coil
    pub cuts: CutRequest,
}

impl CoilItem {
    /// Compute metrics and cut plan in one step.
    pub fn evaluate(&self) -> crate::errors::CalcResult<(CoilMetrics, CutPlan)> {
        let metrics = coil::calculate(&self.input)?;
        let plan = cuts::plan_cuts(&self.input, &metrics, &self.cuts)?;
        Ok((metrics, plan))
    }
}

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Coil with cut plan
    Coil(CoilItem),
    // Future: Sheet(SheetItem) for flat-sheet blanking
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Coil(c) => &c.input.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Coil(_) => "Coil",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Metal;

    fn item() -> CoilItem {
        CoilItem {
            input: CoilInput {
                label: "C-7".to_string(),
                inner_radius_mm: 250.0,
                outer_radius_mm: 600.0,
                width_mm: 1250.0,
                metal: Metal::Aluminium,
                thickness_mm: Some(1.5),
            },
            cuts: CutRequest {
                widths_mm: vec![400.0, 400.0],
                mode: CutMode::Remainder,
            },
        }
    }

    #[test]
    fn test_item_evaluate() {
        let (metrics, plan) = item().evaluate().unwrap();
        assert!(metrics.weight_kg > 0.0);
        assert!(metrics.unwound_length_m.is_some());
        assert_eq!(plan.entries.len(), 3);
        assert!(plan.remainder().is_some());
    }

    #[test]
    fn test_calculation_item_accessors() {
        let wrapped = CalculationItem::Coil(item());
        assert_eq!(wrapped.label(), "C-7");
        assert_eq!(wrapped.calc_type(), "Coil");
    }

    #[test]
    fn test_calculation_item_serialization() {
        let wrapped = CalculationItem::Coil(item());
        let json = serde_json::to_string(&wrapped).unwrap();
        assert!(json.contains("\"type\":\"Coil\""));

        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.label(), "C-7");
    }
}
