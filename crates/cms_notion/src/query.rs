//! Collection query grammar, serialized to the upstream JSON shapes.
//!
//! Only the constructs this service issues: equality on checkbox, select
//! and rich-text properties, a logical AND, and a single-property sort.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Filter {
    Checkbox { property: String, checkbox: BoolCondition },
    Select { property: String, select: TextCondition },
    RichText { property: String, rich_text: TextCondition },
    And { and: Vec<Filter> },
}

impl Filter {
    pub fn checkbox_equals(property: &str, equals: bool) -> Self {
        Filter::Checkbox {
            property: property.to_string(),
            checkbox: BoolCondition { equals },
        }
    }

    pub fn select_equals(property: &str, equals: &str) -> Self {
        Filter::Select {
            property: property.to_string(),
            select: TextCondition { equals: equals.to_string() },
        }
    }

    pub fn rich_text_equals(property: &str, equals: &str) -> Self {
        Filter::RichText {
            property: property.to_string(),
            rich_text: TextCondition { equals: equals.to_string() },
        }
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::And { and: filters }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoolCondition {
    pub equals: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextCondition {
    pub equals: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sort {
    pub property: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn descending(property: &str) -> Self {
        Self {
            property: property.to_string(),
            direction: SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}
