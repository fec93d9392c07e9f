//! Metal Density Database
//!
//! Densities for common strip metals, keyed by metal code. The builtin table
//! covers the five metals the slitting line handles; custom alloys can be
//! added with [`MetalDb::insert`].
//!
//! Densities are stored in g/cm³ as quoted by supplier data sheets. The
//! weight formula needs g/mm³, so callers divide by 1000 (or go through
//! [`crate::units::GramsPerMm3`]). Storing g/cm³ and converting explicitly
//! avoids the classic mistake of mixing the two units in one table.
//!
//! ## Example
//!
//! ```rust
//! use coil_core::materials::density::builtin_metals;
//!
//! let db = builtin_metals();
//! let copper = db.lookup("copper").unwrap();
//! assert_eq!(copper.density_g_cm3, 8.96);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Physical properties of a strip metal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalProperties {
    /// Display label (e.g., "Steel")
    pub label: String,

    /// Density in g/cm³
    pub density_g_cm3: f64,

    /// Tint color the external 3D viewer renders the coil with (0xRRGGBB)
    ///
    /// The viewer consumes raw coil parameters, not computed results; the
    /// color rides along as the one material-derived rendering input.
    pub color_hex: u32,
}

impl MetalProperties {
    /// Density converted to g/mm³ (table stores g/cm³)
    pub fn density_g_mm3(&self) -> f64 {
        self.density_g_cm3 / 1000.0
    }
}

impl std::fmt::Display for MetalProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2} g/cm³)", self.label, self.density_g_cm3)
    }
}

/// Metal density database
///
/// Holds all known metals in memory for fast lookup, indexed by
/// uppercase code (e.g., "STEEL").
#[derive(Debug, Clone, Default)]
pub struct MetalDb {
    metals: HashMap<String, MetalProperties>,
}

impl MetalDb {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a metal into the database
    ///
    /// The key is derived from the label, uppercased. Inserting an existing
    /// key replaces the previous entry, which is how callers override a
    /// builtin density with a mill-specific alloy value.
    pub fn insert(&mut self, props: MetalProperties) {
        let key = props.label.to_uppercase();
        self.metals.insert(key, props);
    }

    /// Look up a metal by code or label
    ///
    /// Matching is case-insensitive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use coil_core::materials::density::builtin_metals;
    ///
    /// let db = builtin_metals();
    /// let steel = db.lookup("STEEL").unwrap();
    /// let also_steel = db.lookup("steel").unwrap(); // Also works
    /// assert_eq!(steel, also_steel);
    /// ```
    pub fn lookup(&self, name: &str) -> CalcResult<&MetalProperties> {
        let key = name.trim().to_uppercase();
        self.metals
            .get(&key)
            .ok_or_else(|| CalcError::metal_not_found(name))
    }

    /// Get all metal labels in the database
    pub fn all_labels(&self) -> Vec<&str> {
        self.metals.values().map(|p| p.label.as_str()).collect()
    }

    /// Get the number of metals in the database
    pub fn len(&self) -> usize {
        self.metals.len()
    }

    /// Check if the database is empty
    pub fn is_empty(&self) -> bool {
        self.metals.is_empty()
    }
}

/// Build a database with the builtin strip metals.
///
/// Densities per standard handbook values; colors match what the external
/// viewer uses for each metal's base tint.
pub fn builtin_metals() -> MetalDb {
    let mut db = MetalDb::new();

    let builtin = [
        ("Steel", 7.85, 0x8c8c8c),
        ("Copper", 8.96, 0xb87333),
        ("Aluminium", 2.70, 0xd9d9d9),
        ("Brass", 8.50, 0xcfa93f),
        ("Zinc", 7.14, 0xa8b0b8),
    ];

    for (label, density, color) in builtin {
        db.insert(MetalProperties {
            label: label.to_string(),
            density_g_cm3: density,
            color_hex: color,
        });
    }

    db
}

static BUILTIN_DB: Lazy<MetalDb> = Lazy::new(builtin_metals);

/// The process-wide builtin density table.
///
/// Read-only after initialization; callers needing custom alloys should
/// clone it and insert their own entries.
pub fn metal_db() -> &'static MetalDb {
    &BUILTIN_DB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_metals() {
        let db = builtin_metals();
        assert_eq!(db.len(), 5);
        assert!(!db.is_empty());

        let steel = db.lookup("STEEL").unwrap();
        assert_eq!(steel.density_g_cm3, 7.85);

        // Case-insensitive lookup
        let steel_lower = db.lookup("steel").unwrap();
        assert_eq!(steel.label, steel_lower.label);
    }

    #[test]
    fn test_density_conversion() {
        let db = builtin_metals();
        let steel = db.lookup("Steel").unwrap();
        assert!((steel.density_g_mm3() - 0.00785).abs() < 1e-12);
    }

    #[test]
    fn test_metal_not_found() {
        let db = builtin_metals();
        let result = db.lookup("tungsten");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().error_code(), "METAL_NOT_FOUND");
    }

    #[test]
    fn test_custom_alloy_insert() {
        let mut db = builtin_metals();
        db.insert(MetalProperties {
            label: "DC01".to_string(),
            density_g_cm3: 7.87,
            color_hex: 0x9a9a9a,
        });

        assert_eq!(db.len(), 6);
        let alloy = db.lookup("dc01").unwrap();
        assert_eq!(alloy.density_g_cm3, 7.87);
    }

    #[test]
    fn test_insert_overrides() {
        let mut db = builtin_metals();
        db.insert(MetalProperties {
            label: "Steel".to_string(),
            density_g_cm3: 7.90,
            color_hex: 0x8c8c8c,
        });

        assert_eq!(db.len(), 5);
        assert_eq!(db.lookup("steel").unwrap().density_g_cm3, 7.90);
    }

    #[test]
    fn test_properties_display() {
        let db = builtin_metals();
        let copper = db.lookup("Copper").unwrap();
        let display = format!("{}", copper);
        assert!(display.contains("Copper"));
        assert!(display.contains("8.96"));
    }

    #[test]
    fn test_process_wide_table() {
        let steel = metal_db().lookup("STEEL").unwrap();
        assert_eq!(steel.density_g_cm3, 7.85);
    }
}
