//! # Materials Database
//!
//! Metal definitions and density lookups for coil weight calculations.
//!
//! ## Metal Types
//!
//! The slitting line handles five strip metals: steel, copper, aluminium,
//! brass, and zinc. Densities are stored in g/cm³ (the unit supplier data
//! sheets quote) and converted to g/mm³ at the point of use.
//!
//! ## Example
//!
//! ```rust
//! use coil_core::materials::{Metal, metal_db};
//!
//! let steel = metal_db().lookup(Metal::Steel.code()).unwrap();
//! assert_eq!(steel.density_g_cm3, 7.85);
//! ```

pub mod density;

// Re-export density database types
pub use density::{builtin_metals, metal_db, MetalDb, MetalProperties};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Strip metals supported by the builtin density table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metal {
    /// Carbon steel strip
    Steel,
    /// Copper strip
    Copper,
    /// Aluminium strip
    Aluminium,
    /// Brass strip
    Brass,
    /// Zinc strip
    Zinc,
}

impl Metal {
    /// All metal variants for UI selection
    pub const ALL: [Metal; 5] = [
        Metal::Steel,
        Metal::Copper,
        Metal::Aluminium,
        Metal::Brass,
        Metal::Zinc,
    ];

    /// Get the code string for density table lookup (e.g., "STEEL")
    pub fn code(&self) -> &'static str {
        match self {
            Metal::Steel => "STEEL",
            Metal::Copper => "COPPER",
            Metal::Aluminium => "ALUMINIUM",
            Metal::Brass => "BRASS",
            Metal::Zinc => "ZINC",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "STEEL" | "ST" | "STAHL" => Ok(Metal::Steel),
            "COPPER" | "CU" | "KUPFER" => Ok(Metal::Copper),
            "ALUMINIUM" | "ALUMINUM" | "AL" | "ALU" => Ok(Metal::Aluminium),
            "BRASS" | "MESSING" => Ok(Metal::Brass),
            "ZINC" | "ZN" | "ZINK" => Ok(Metal::Zinc),
            _ => Err(CalcError::metal_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Metal::Steel => "Steel",
            Metal::Copper => "Copper",
            Metal::Aluminium => "Aluminium",
            Metal::Brass => "Brass",
            Metal::Zinc => "Zinc",
        }
    }

    /// Density in g/cm³ from the builtin table.
    ///
    /// Enum variants always exist in the builtin table, so this cannot fail.
    pub fn density_g_cm3(&self) -> f64 {
        metal_db()
            .lookup(self.code())
            .map(|p| p.density_g_cm3)
            .unwrap_or_default()
    }

    /// Viewer tint color for this metal (0xRRGGBB)
    pub fn color_hex(&self) -> u32 {
        metal_db()
            .lookup(self.code())
            .map(|p| p.color_hex)
            .unwrap_or(0x888888)
    }
}

impl std::fmt::Display for Metal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metal_from_str_flexible() {
        assert_eq!(Metal::from_str_flexible("steel").unwrap(), Metal::Steel);
        assert_eq!(Metal::from_str_flexible("Cu").unwrap(), Metal::Copper);
        assert_eq!(Metal::from_str_flexible("ALU").unwrap(), Metal::Aluminium);
        assert_eq!(Metal::from_str_flexible("aluminum").unwrap(), Metal::Aluminium);
        assert_eq!(Metal::from_str_flexible("Messing").unwrap(), Metal::Brass);
        assert!(Metal::from_str_flexible("titanium").is_err());
    }

    #[test]
    fn test_metal_densities() {
        assert_eq!(Metal::Steel.density_g_cm3(), 7.85);
        assert_eq!(Metal::Copper.density_g_cm3(), 8.96);
        assert_eq!(Metal::Aluminium.density_g_cm3(), 2.70);
        assert_eq!(Metal::Brass.density_g_cm3(), 8.50);
        assert_eq!(Metal::Zinc.density_g_cm3(), 7.14);
    }

    #[test]
    fn test_metal_display() {
        assert_eq!(Metal::Steel.to_string(), "Steel");
        assert_eq!(Metal::Aluminium.to_string(), "Aluminium");
    }

    #[test]
    fn test_metal_serialization() {
        let metal = Metal::Copper;
        let json = serde_json::to_string(&metal).unwrap();
        assert_eq!(json, "\"Copper\"");

        let roundtrip: Metal = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Metal::Copper);
    }

    #[test]
    fn test_all_metals_in_builtin_table() {
        for metal in Metal::ALL {
            assert!(metal.density_g_cm3() > 0.0, "{} missing density", metal);
        }
    }
}
