//! # Cut Planning
//!
//! Turns a list of requested slice widths into an ordered cut plan with
//! per-slice weights, using the coil's weight-per-mm from
//! [`crate::calculations::coil`].
//!
//! ## Distribution Modes
//!
//! - [`CutMode::Remainder`]: requested widths are taken literally; leftover
//!   width becomes a trailing remainder slice. If the requests exceed the
//!   coil width, the plan is flagged as over-allocated instead of failing —
//!   whether that is a hard stop is a decision for the caller's UI.
//! - [`CutMode::ScaleToFit`]: requested widths are rescaled proportionally
//!   so they sum to the coil width exactly; no remainder ever exists.
//!
//! ## Example
//!
//! ```rust
//! use coil_core::calculations::coil::{calculate, CoilInput};
//! use coil_core::calculations::cuts::{plan_cuts, CutMode, CutRequest};
//! use coil_core::materials::Metal;
//!
//! let input = CoilInput {
//!     label: "C-1".to_string(),
//!     inner_radius_mm: 300.0,
//!     outer_radius_mm: 800.0,
//!     width_mm: 300.0,
//!     metal: Metal::Steel,
//!     thickness_mm: None,
//! };
//! let metrics = calculate(&input).unwrap();
//!
//! let request = CutRequest {
//!     widths_mm: vec![100.0, 150.0],
//!     mode: CutMode::Remainder,
//! };
//! let plan = plan_cuts(&input, &metrics, &request).unwrap();
//!
//! assert_eq!(plan.entries.len(), 3); // two cuts plus a 50 mm remainder
//! assert!(plan.entries[2].is_remainder);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::coil::{CoilInput, CoilMetrics};
use crate::errors::{CalcError, CalcResult};

/// Widths closer to the full coil width than this leave no remainder slice.
///
/// Keeps float noise from producing spurious near-zero remainder entries.
pub const REMAINDER_EPSILON_MM: f64 = 1e-6;

/// How requested widths are distributed across the coil width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutMode {
    /// Take widths literally; leftover width becomes a trailing remainder
    Remainder,
    /// Rescale widths proportionally so they sum to the coil width exactly
    ScaleToFit,
}

impl Default for CutMode {
    fn default() -> Self {
        CutMode::Remainder
    }
}

impl std::fmt::Display for CutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CutMode::Remainder => write!(f, "Remainder"),
            CutMode::ScaleToFit => write!(f, "Scale to fit"),
        }
    }
}

/// A requested set of slice widths plus the distribution mode.
///
/// ## JSON Example
///
/// ```json
/// { "widths_mm": [100.0, 150.0], "mode": "Remainder" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutRequest {
    /// Requested slice widths in mm, in slitting order
    pub widths_mm: Vec<f64>,

    /// Distribution mode
    #[serde(default)]
    pub mode: CutMode,
}

/// Result of parsing a raw comma-separated width list.
///
/// Parsing is deliberately forgiving: blank tokens are dropped silently,
/// while tokens that are present but unusable (not a number, or not
/// positive) are skipped *and reported* so the UI can warn about typos
/// instead of letting them vanish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCuts {
    /// Successfully parsed positive widths, input order preserved
    pub widths_mm: Vec<f64>,

    /// Tokens that were skipped (malformed or non-positive)
    pub rejected: Vec<String>,
}

impl ParsedCuts {
    /// Whether any tokens were skipped during parsing
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Parse a raw comma-separated cut list (e.g., `"100, 150, 75"`).
///
/// # Example
///
/// ```rust
/// use coil_core::calculations::cuts::parse_cut_list;
///
/// let parsed = parse_cut_list("100, , 150, abc, -20");
/// assert_eq!(parsed.widths_mm, vec![100.0, 150.0]);
/// assert_eq!(parsed.rejected, vec!["abc", "-20"]);
/// ```
pub fn parse_cut_list(raw: &str) -> ParsedCuts {
    let mut widths_mm = Vec::new();
    let mut rejected = Vec::new();

    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<f64>() {
            Ok(w) if w > 0.0 && w.is_finite() => widths_mm.push(w),
            _ => rejected.push(token.to_string()),
        }
    }

    ParsedCuts { widths_mm, rejected }
}

/// One slice in a cut plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutEntry {
    /// Display label ("Cut 1", "Cut 2", ..., "Rest")
    pub label: String,

    /// Slice width in mm (rescaled width in ScaleToFit mode)
    pub width_mm: f64,

    /// Slice weight in kg
    pub weight_kg: f64,

    /// True for the trailing remainder slice
    pub is_remainder: bool,
}

/// Ordered cut plan for one coil.
///
/// Exposes both the requested and available totals so the caller can decide
/// how to present an over-allocation; the planner itself never fails on one.
///
/// ## JSON Example
///
/// ```json
/// {
///   "entries": [
///     { "label": "Cut 1", "width_mm": 100.0, "weight_kg": 1356.4, "is_remainder": false },
///     { "label": "Rest", "width_mm": 200.0, "weight_kg": 2712.8, "is_remainder": true }
///   ],
///   "requested_mm": 100.0,
///   "available_mm": 300.0,
///   "over_allocated": false,
///   "excess_mm": 0.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPlan {
    /// Slices in slitting order; remainder (if any) is always last
    pub entries: Vec<CutEntry>,

    /// Sum of requested widths in mm (before any rescaling)
    pub requested_mm: f64,

    /// Total coil width in mm
    pub available_mm: f64,

    /// True when requested widths exceed the coil width (Remainder mode only)
    pub over_allocated: bool,

    /// Amount by which requests exceed the coil width, 0 when not over-allocated
    pub excess_mm: f64,

    /// Rescale factor applied to every width (ScaleToFit mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_factor: Option<f64>,
}

impl CutPlan {
    /// Sum of all slice widths, remainder included
    pub fn total_width_mm(&self) -> f64 {
        self.entries.iter().map(|e| e.width_mm).sum()
    }

    /// Sum of all slice weights, remainder included
    pub fn total_weight_kg(&self) -> f64 {
        self.entries.iter().map(|e| e.weight_kg).sum()
    }

    /// The remainder slice, if the plan has one
    pub fn remainder(&self) -> Option<&CutEntry> {
        self.entries.iter().find(|e| e.is_remainder)
    }
}

/// Plan the cuts for a coil.
///
/// Slice weights come from `metrics.weight_per_mm_kg`; the metrics must have
/// been computed from the same `input` (the planner re-validates geometry to
/// keep the pairing honest).
///
/// # Errors
///
/// - [`CalcError::InvalidGeometry`] if the coil input itself is invalid
/// - [`CalcError::InvalidCutWidth`] for a zero/negative/non-finite width, or
///   an empty request in ScaleToFit mode (no scale factor exists for an
///   empty sum)
pub fn plan_cuts(
    input: &CoilInput,
    metrics: &CoilMetrics,
    request: &CutRequest,
) -> CalcResult<CutPlan> {
    input.validate()?;

    for &w in &request.widths_mm {
        if w <= 0.0 || !w.is_finite() {
            return Err(CalcError::invalid_cut_width(
                w.to_string(),
                "Cut width must be a positive number",
            ));
        }
    }

    let requested_mm: f64 = request.widths_mm.iter().sum();
    let available_mm = input.width_mm;
    let per_mm = metrics.weight_per_mm_kg;

    match request.mode {
        CutMode::Remainder => {
            let mut entries: Vec<CutEntry> = request
                .widths_mm
                .iter()
                .enumerate()
                .map(|(i, &w)| CutEntry {
                    label: format!("Cut {}", i + 1),
                    width_mm: w,
                    weight_kg: per_mm * w,
                    is_remainder: false,
                })
                .collect();

            let rest = available_mm - requested_mm;
            let over_allocated = rest < -REMAINDER_EPSILON_MM;

            if rest > REMAINDER_EPSILON_MM {
                entries.push(CutEntry {
                    label: "Rest".to_string(),
                    width_mm: rest,
                    weight_kg: per_mm * rest,
                    is_remainder: true,
                });
            }

            Ok(CutPlan {
                entries,
                requested_mm,
                available_mm,
                over_allocated,
                excess_mm: if over_allocated { requested_mm - available_mm } else { 0.0 },
                scale_factor: None,
            })
        }
        CutMode::ScaleToFit => {
            if request.widths_mm.is_empty() {
                return Err(CalcError::invalid_cut_width(
                    "[]".to_string(),
                    "Scale-to-fit needs at least one requested width",
                ));
            }

            let scale = available_mm / requested_mm;
            let entries = request
                .widths_mm
                .iter()
                .enumerate()
                .map(|(i, &w)| {
                    let scaled = w * scale;
                    CutEntry {
                        label: format!("Cut {}", i + 1),
                        width_mm: scaled,
                        weight_kg: per_mm * scaled,
                        is_remainder: false,
                    }
                })
                .collect();

            Ok(CutPlan {
                entries,
                requested_mm,
                available_mm,
                over_allocated: false,
                excess_mm: 0.0,
                scale_factor: Some(scale),
            })
        }
    }
}
