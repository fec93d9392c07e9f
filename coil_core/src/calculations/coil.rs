//! # Coil Metrics Calculation
//!
//! Derives volume, weight, linear weight, and unwound strip length for a
//! wound metal coil from its geometry and metal.
//!
//! ## Assumptions
//!
//! - The coil cross-section is a clean annulus (outer circle minus bore);
//!   winding gaps and strip camber are ignored
//! - Density is uniform through the wound volume
//! - Unwound length treats the wound strip as a solid annulus of the given
//!   strip thickness, so it is only available when `thickness_mm` is supplied
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use coil_core::calculations::coil::{calculate, CoilInput};
//! use coil_core::materials::Metal;
//!
//! let input = CoilInput {
//!     label: "C-1".to_string(),
//!     inner_radius_mm: 300.0,
//!     outer_radius_mm: 800.0,
//!     width_mm: 300.0,
//!     metal: Metal::Steel,
//!     thickness_mm: Some(3.0),
//! };
//!
//! let metrics = calculate(&input).unwrap();
//!
//! println!("Weight: {:.1} kg", metrics.weight_kg);
//! println!("Per mm: {:.3} kg/mm", metrics.weight_per_mm_kg);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::Metal;

/// Input parameters for a coil.
///
/// All dimensions are in millimeters, matching how coils are specified on
/// the slitting line.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "inner_radius_mm": 300.0,
///   "outer_radius_mm": 800.0,
///   "width_mm": 300.0,
///   "metal": "Steel",
///   "thickness_mm": 3.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoilInput {
    /// User label for this coil (e.g., "C-1", "Order 4711 master")
    pub label: String,

    /// Bore radius in mm
    pub inner_radius_mm: f64,

    /// Outer radius in mm
    pub outer_radius_mm: f64,

    /// Axial width in mm
    pub width_mm: f64,

    /// Strip metal (selects the density)
    pub metal: Metal,

    /// Strip thickness in mm; enables the unwound length result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_mm: Option<f64>,
}

impl CoilInput {
    /// Validate input parameters.
    ///
    /// A degenerate annulus (outer <= inner) would make the volume zero or
    /// negative, so it is rejected before any arithmetic runs.
    pub fn validate(&self) -> CalcResult<()> {
        if self.inner_radius_mm <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "inner_radius_mm",
                self.inner_radius_mm.to_string(),
                "Inner radius must be positive",
            ));
        }
        if self.outer_radius_mm <= self.inner_radius_mm {
            return Err(CalcError::invalid_geometry(
                "outer_radius_mm",
                self.outer_radius_mm.to_string(),
                "Outer radius must exceed inner radius",
            ));
        }
        if self.width_mm <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "width_mm",
                self.width_mm.to_string(),
                "Width must be positive",
            ));
        }
        if let Some(t) = self.thickness_mm {
            if t <= 0.0 {
                return Err(CalcError::invalid_geometry(
                    "thickness_mm",
                    t.to_string(),
                    "Strip thickness must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Annulus cross-section area in mm²: π(ro² − ri²)
    pub fn annulus_area_mm2(&self) -> f64 {
        PI * (self.outer_radius_mm.powi(2) - self.inner_radius_mm.powi(2))
    }
}

/// Derived coil metrics.
///
/// All values are unrounded doubles; rounding for display is the caller's
/// concern.
///
/// ## JSON Example
///
/// ```json
/// {
///   "volume_mm3": 518362787.8,
///   "weight_kg": 4069.1,
///   "weight_per_mm_kg": 13.56,
///   "unwound_length_m": 576.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoilMetrics {
    /// Wound volume in mm³
    pub volume_mm3: f64,

    /// Total coil weight in kg
    pub weight_kg: f64,

    /// Weight per mm of coil width in kg/mm
    ///
    /// This is the number the cut planner multiplies slice widths by.
    pub weight_per_mm_kg: f64,

    /// Unwound strip length in m; None when no strip thickness was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unwound_length_m: Option<f64>,
}

/// Calculate derived metrics for a coil.
///
/// Pure function: no side effects, deterministic, all arithmetic in f64.
///
/// # Errors
///
/// Returns [`CalcError::InvalidGeometry`] when radii, width, or thickness
/// violate their constraints.
pub fn calculate(input: &CoilInput) -> CalcResult<CoilMetrics> {
    input.validate()?;

    let annulus_mm2 = input.annulus_area_mm2();
    let volume_mm3 = annulus_mm2 * input.width_mm;

    // Table stores g/cm³; the formula needs g/mm³
    let density_g_mm3 = input.metal.density_g_cm3() / 1000.0;

    let weight_kg = volume_mm3 * density_g_mm3 / 1000.0;
    let weight_per_mm_kg = weight_kg / input.width_mm;

    let unwound_length_m = input.thickness_mm.map(|t| annulus_mm2 / t / 1000.0);

    Ok(CoilMetrics {
        volume_mm3,
        weight_kg,
        weight_per_mm_kg,
        unwound_length_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel_coil() -> CoilInput {
        CoilInput {
            label: "C-1".to_string(),
            inner_radius_mm: 300.0,
            outer_radius_mm: 800.0,
            width_mm: 300.0,
            metal: Metal::Steel,
            thickness_mm: None,
        }
    }

    fn approx_eq(a: f64, b: f64, rel_tol: f64) -> bool {
        (a - b).abs() <= rel_tol * b.abs().max(a.abs())
    }

    #[test]
    fn test_steel_coil_metrics() {
        let metrics = calculate(&steel_coil()).unwrap();

        // volume = π * (800² − 300²) * 300
        let expected_volume = PI * (800.0_f64.powi(2) - 300.0_f64.powi(2)) * 300.0;
        assert!(approx_eq(metrics.volume_mm3, expected_volume, 1e-12));

        // weight = volume * 7.85 g/cm³ / 1e6
        let expected_weight = expected_volume * 7.85 / 1.0e6;
        assert!(approx_eq(metrics.weight_kg, expected_weight, 1e-12));

        // Ballpark sanity: a 500 mm build-up of 300 mm steel strip is ~4 t
        assert!(metrics.weight_kg > 4000.0 && metrics.weight_kg < 4150.0);
    }

    #[test]
    fn test_weight_per_mm_is_weight_over_width() {
        let metrics = calculate(&steel_coil()).unwrap();
        assert_eq!(metrics.weight_per_mm_kg, metrics.weight_kg / 300.0);
    }

    #[test]
    fn test_calculate_is_deterministic() {
        let input = steel_coil();
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unwound_length() {
        let mut input = steel_coil();
        input.thickness_mm = Some(3.0);

        let metrics = calculate(&input).unwrap();
        let expected = PI * (800.0_f64.powi(2) - 300.0_f64.powi(2)) / 3.0 / 1000.0;
        let length = metrics.unwound_length_m.unwrap();
        assert!(approx_eq(length, expected, 1e-12));

        // π * 550000 / 3 / 1000 ≈ 576 m
        assert!(length > 570.0 && length < 580.0);
    }

    #[test]
    fn test_no_thickness_no_length() {
        let metrics = calculate(&steel_coil()).unwrap();
        assert!(metrics.unwound_length_m.is_none());
    }

    #[test]
    fn test_density_affects_weight() {
        let steel = calculate(&steel_coil()).unwrap();

        let mut alu_input = steel_coil();
        alu_input.metal = Metal::Aluminium;
        let alu = calculate(&alu_input).unwrap();

        assert_eq!(steel.volume_mm3, alu.volume_mm3);
        assert!(approx_eq(alu.weight_kg / steel.weight_kg, 2.70 / 7.85, 1e-12));
    }

    #[test]
    fn test_zero_thickness_annulus_rejected() {
        let mut input = steel_coil();
        input.outer_radius_mm = input.inner_radius_mm;

        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_inverted_radii_rejected() {
        let mut input = steel_coil();
        input.inner_radius_mm = 800.0;
        input.outer_radius_mm = 300.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_nonpositive_dimensions_rejected() {
        let mut input = steel_coil();
        input.inner_radius_mm = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = steel_coil();
        input.width_mm = -10.0;
        assert!(calculate(&input).is_err());

        let mut input = steel_coil();
        input.thickness_mm = Some(0.0);
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_input_serialization() {
        let input = steel_coil();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"metal\":\"Steel\""));
        // Absent thickness is omitted, not null
        assert!(!json.contains("thickness_mm"));

        let roundtrip: CoilInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
