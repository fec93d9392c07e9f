//! # Project Data Structures
//!
//! The `Project` struct is the root container for a slitting order's coil
//! calculations. Projects serialize to `.coil` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, planner, order info, timestamps)
//! ├── settings: GlobalSettings (default metal, default cut mode)
//! └── items: HashMap<Uuid, CalculationItem> (all coils)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use coil_core::project::Project;
//!
//! let project = Project::new("Jane Planner", "ORD-4711", "Acme Metals");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//!
//! // Save to file (see file_io module for atomic saves)
//! # let _ = json;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CalculationItem, CutMode};
use crate::materials::Metal;

/// Current schema version for .coil files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.coil` files.
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, planner, order info)
    pub meta: ProjectMetadata,

    /// Global settings (default metal, default cut mode)
    pub settings: GlobalSettings,

    /// All coil calculations, keyed by UUID
    ///
    /// Using a HashMap instead of a Vec provides:
    /// - O(1) lookup by id
    /// - No duplicate ID issues
    /// - Stable references when items are reordered in the UI
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `planner` - Name of the responsible planner
    /// * `order_id` - Order number (e.g., "ORD-4711")
    /// * `customer` - Customer name
    ///
    /// # Example
    ///
    /// ```rust
    /// use coil_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "ORD-001", "Client Corp");
    /// assert_eq!(project.meta.planner, "John Doe");
    /// ```
    pub fn new(
        planner: impl Into<String>,
        order_id: impl Into<String>,
        customer: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                planner: planner.into(),
                order_id: order_id.into(),
                customer: customer.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a calculation item by UUID.
    ///
    /// Note: This method updates the modified timestamp when an item is
    /// found. The caller should be aware that getting a mutable reference
    /// marks the project as modified.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Get the number of items in the project.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible planner
    pub planner: String,

    /// Order number
    pub order_id: String,

    /// Customer name
    pub customer: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default metal for new coils
    pub default_metal: Metal,

    /// Default cut distribution mode for new coils
    pub default_cut_mode: CutMode,

    /// Default strip thickness in mm for new coils, if the mill runs one gauge
    pub default_thickness_mm: Option<f64>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            default_metal: Metal::Steel,
            default_cut_mode: CutMode::Remainder,
            default_thickness_mm: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{CoilInput, CoilItem, CutRequest};

    fn coil_item(label: &str) -> CalculationItem {
        CalculationItem::Coil(CoilItem {
            input: CoilInput {
                label: label.to_string(),
                inner_radius_mm: 300.0,
                outer_radius_mm: 800.0,
                width_mm: 300.0,
                metal: Metal::Steel,
                thickness_mm: None,
            },
            cuts: CutRequest {
                widths_mm: vec![100.0, 150.0],
                mode: CutMode::Remainder,
            },
        })
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "ORD-001", "Acme Metals");
        assert_eq!(project.meta.planner, "John Doe");
        assert_eq!(project.meta.order_id, "ORD-001");
        assert_eq!(project.meta.customer, "Acme Metals");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_project_serialization() {
        let project = Project::new("Jane Planner", "ORD-4711", "Test Customer");
        let json = serde_json::to_string_pretty(&project).unwrap();

        // Should contain key fields
        assert!(json.contains("Jane Planner"));
        assert!(json.contains("ORD-4711"));
        assert!(json.contains("Steel"));

        // Roundtrip
        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.planner, "Jane Planner");
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Planner", "ORD-001", "Customer");

        let id = project.add_item(coil_item("C-1"));
        assert_eq!(project.item_count(), 1);
        assert!(project.get_item(&id).is_some());
        assert_eq!(project.get_item(&id).unwrap().label(), "C-1");

        let removed = project.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut project = Project::new("Planner", "ORD-001", "Customer");
        let before = project.meta.modified;
        project.add_item(coil_item("C-2"));
        assert!(project.meta.modified >= before);
    }

    #[test]
    fn test_default_settings() {
        let settings = GlobalSettings::default();
        assert_eq!(settings.default_metal, Metal::Steel);
        assert_eq!(settings.default_cut_mode, CutMode::Remainder);
        assert!(settings.default_thickness_mm.is_none());
    }
}
