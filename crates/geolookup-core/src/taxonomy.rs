// crates/geolookup-core/src/taxonomy.rs

//! Static event-category taxonomy used for display and client-side
//! filtering of search results. Hardcoded reference data, analogous to the
//! bundled city dataset: read-only, total lookups, no errors.

use serde::{Deserialize, Serialize};

/// Whether a category belongs to volunteer work or commercial events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Volunteer,
    Commercial,
}

/// One entry of the category taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier used in filter parameters.
    pub id: &'static str,
    /// Human-readable label shown in the UI.
    pub label: &'static str,
    pub kind: CategoryKind,
}

/// The full category taxonomy, in display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        id: "environment",
        label: "Environment & Nature",
        kind: CategoryKind::Volunteer,
    },
    Category {
        id: "education",
        label: "Education & Mentoring",
        kind: CategoryKind::Volunteer,
    },
    Category {
        id: "health",
        label: "Health & Care",
        kind: CategoryKind::Volunteer,
    },
    Category {
        id: "animals",
        label: "Animal Welfare",
        kind: CategoryKind::Volunteer,
    },
    Category {
        id: "community",
        label: "Community & Neighborhood",
        kind: CategoryKind::Volunteer,
    },
    Category {
        id: "food-rescue",
        label: "Food Rescue",
        kind: CategoryKind::Volunteer,
    },
    Category {
        id: "crisis-support",
        label: "Crisis Support",
        kind: CategoryKind::Volunteer,
    },
    Category {
        id: "sports",
        label: "Sports & Recreation",
        kind: CategoryKind::Commercial,
    },
    Category {
        id: "concerts",
        label: "Concerts & Nightlife",
        kind: CategoryKind::Commercial,
    },
    Category {
        id: "workshops",
        label: "Workshops & Classes",
        kind: CategoryKind::Commercial,
    },
    Category {
        id: "food-drink",
        label: "Food & Drink",
        kind: CategoryKind::Commercial,
    },
    Category {
        id: "markets",
        label: "Markets & Fairs",
        kind: CategoryKind::Commercial,
    },
    Category {
        id: "networking",
        label: "Networking & Meetups",
        kind: CategoryKind::Commercial,
    },
];

/// Find a category by its stable id (ASCII case-insensitive).
///
/// Unknown ids yield `None`, never an error.
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

/// All categories of the given kind, in display order.
pub fn categories_for(kind: CategoryKind) -> Vec<&'static Category> {
    CATEGORIES.iter().filter(|c| c.kind == kind).collect()
}

/// Display labels for the whole taxonomy, in display order.
pub fn labels() -> Vec<&'static str> {
    CATEGORIES.iter().map(|c| c.label).collect()
}
