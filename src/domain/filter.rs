// SPDX-License-Identifier: MPL-2.0
//! Filter catalog types for the domain layer.
//!
//! This module contains pure value types without rendering logic. The
//! interpretation of transform descriptors (turning `"sepia(0.8)"` into a
//! pixel operation) lives in the media layer.
//!
//! # Identity rules
//!
//! - A preset's `name` is its unique equality key within a catalog.
//! - The catalog is immutable and ordered; the first entry is the identity
//!   filter and the default selection.

use std::fmt;

// =============================================================================
// Filter Preset
// =============================================================================

/// Transform descriptor for the identity filter.
pub const IDENTITY_TRANSFORM: &str = "none";

/// A named color filter.
///
/// `transform` is an opaque descriptor in filter-function shorthand
/// (e.g. `"sepia(0.8)"` or `"grayscale(1) contrast(1.15)"`). The preset
/// itself never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPreset {
    /// Display label and unique identity within a catalog.
    pub name: String,
    /// Opaque transform descriptor consumed by the render layer.
    pub transform: String,
}

impl FilterPreset {
    #[must_use]
    pub fn new(name: impl Into<String>, transform: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: transform.into(),
        }
    }

    /// Returns `true` if this preset leaves pixels untouched.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.transform == IDENTITY_TRANSFORM
    }
}

// Preset names double as pick labels in the dialog.
impl fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// =============================================================================
// Filter Catalog
// =============================================================================

/// Immutable ordered list of filter presets.
///
/// Invariants, enforced at construction:
/// - at least one entry;
/// - the first entry is the identity filter;
/// - names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCatalog {
    presets: Vec<FilterPreset>,
}

impl FilterCatalog {
    /// Builds a catalog from an ordered preset list.
    ///
    /// Returns `None` if the list is empty, the first entry is not the
    /// identity filter, or two entries share a name.
    #[must_use]
    pub fn new(presets: Vec<FilterPreset>) -> Option<Self> {
        let first = presets.first()?;
        if !first.is_identity() {
            return None;
        }
        for (index, preset) in presets.iter().enumerate() {
            if presets[..index].iter().any(|p| p.name == preset.name) {
                return None;
            }
        }
        Some(Self { presets })
    }

    /// The product catalog shipped with the application.
    ///
    /// Covers every filter function the render layer understands so the
    /// whole pipeline stays exercised by real presets.
    #[must_use]
    pub fn builtin() -> Self {
        let presets = vec![
            FilterPreset::new("Original", IDENTITY_TRANSFORM),
            FilterPreset::new("Noir", "grayscale(1) contrast(1.15)"),
            FilterPreset::new("Sepia", "sepia(0.8)"),
            FilterPreset::new("Chrome", "saturate(1.45) contrast(1.08)"),
            FilterPreset::new("Fade", "saturate(0.72) brightness(1.08)"),
            FilterPreset::new("Warm", "sepia(0.25) saturate(1.2)"),
            FilterPreset::new("Cool", "hue-rotate(-12deg) saturate(1.05)"),
            FilterPreset::new("Negative", "invert(1)"),
        ];
        // The builtin list satisfies the constructor invariants.
        Self { presets }
    }

    /// The default selection: the identity filter at position zero.
    #[must_use]
    pub fn default_preset(&self) -> &FilterPreset {
        &self.presets[0]
    }

    /// All presets in catalog order.
    #[must_use]
    pub fn presets(&self) -> &[FilterPreset] {
        &self.presets
    }

    /// Membership test by name.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.presets.iter().any(|p| p.name == name)
    }

    /// Membership test for a preset value.
    #[must_use]
    pub fn contains(&self, preset: &FilterPreset) -> bool {
        self.contains_name(&preset.name)
    }

    /// Looks up a preset by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FilterPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for FilterCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
