//! # Unit Types
//!
//! Type-safe wrappers for the metric units used in coil calculations.
//! These provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Coil processing uses a small, consistent set of metric units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! Coil dimensions and cut lists come off the slitting line in millimeters,
//! so the engine works in mm internally:
//! - Length: millimeters (mm), meters (m)
//! - Mass: grams (g), kilograms (kg)
//! - Volume: cubic millimeters (mm³), cubic centimeters (cm³)
//! - Density: grams per cubic centimeter (g/cm³), grams per cubic millimeter (g/mm³)
//!
//! ## Example
//!
//! ```rust
//! use coil_core::units::{Meters, Millimeters, GramsPerCm3, GramsPerMm3};
//!
//! let width = Millimeters(300.0);
//! let width_m: Meters = width.into();
//! assert_eq!(width_m.0, 0.3);
//!
//! let steel = GramsPerCm3(7.85);
//! let per_mm3: GramsPerMm3 = steel.into();
//! assert!((per_mm3.0 - 0.00785).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / 1000.0)
    }
}

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Self {
        Grams(kg.0 * 1000.0)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMillimeters(pub f64);

/// Volume in cubic centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicCentimeters(pub f64);

impl From<CubicMillimeters> for CubicCentimeters {
    fn from(mm3: CubicMillimeters) -> Self {
        CubicCentimeters(mm3.0 / 1000.0)
    }
}

impl From<CubicCentimeters> for CubicMillimeters {
    fn from(cm3: CubicCentimeters) -> Self {
        CubicMillimeters(cm3.0 * 1000.0)
    }
}

// ============================================================================
// Density Units
// ============================================================================

/// Density in grams per cubic centimeter (the unit density tables are quoted in)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GramsPerCm3(pub f64);

/// Density in grams per cubic millimeter (the unit the volume formula needs)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GramsPerMm3(pub f64);

impl From<GramsPerCm3> for GramsPerMm3 {
    fn from(d: GramsPerCm3) -> Self {
        GramsPerMm3(d.0 / 1000.0)
    }
}

impl From<GramsPerMm3> for GramsPerCm3 {
    fn from(d: GramsPerMm3) -> Self {
        GramsPerCm3(d.0 * 1000.0)
    }
}

// ============================================================================
// Linear Mass Density
// ============================================================================

/// Weight per millimeter of coil width (kg/mm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerMm(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Grams);
impl_arithmetic!(Kilograms);
impl_arithmetic!(CubicMillimeters);
impl_arithmetic!(CubicCentimeters);
impl_arithmetic!(GramsPerCm3);
impl_arithmetic!(GramsPerMm3);
impl_arithmetic!(KgPerMm);
