//! Transaction category model.

use serde::{Deserialize, Serialize};

use super::{CategoryId, CategoryKind};

/// A transaction category with its display metadata.
///
/// Categories are embedded into transactions at write time (the
/// original document store denormalizes them), so reports carry full
/// icon/color metadata without a join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Display name. Also the grouping key for category reports — two
    /// categories with different ids but the same name collapse into
    /// one total.
    pub name: String,
    /// Icon identifier for the client.
    pub icon: String,
    /// Icon foreground color (hex).
    pub icon_color: String,
    /// Icon background color (hex).
    pub background_color: String,
    /// Whether this category records income or expense.
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}
