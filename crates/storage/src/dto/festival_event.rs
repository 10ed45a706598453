use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A category as offered within one event, with its slot cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryAllocation {
    pub category_id: i32,
    pub name: String,
    pub min_class: i16,
    pub max_class: i16,
    pub max_participants: i16,
}

impl CategoryAllocation {
    pub fn accepts_class(&self, class: i16) -> bool {
        (self.min_class..=self.max_class).contains(&class)
    }
}

/// A festival event together with the categories linked to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FestivalEventDetail {
    pub event_id: i32,
    pub name: String,
    pub categories: Vec<CategoryAllocation>,
}

impl FestivalEventDetail {
    pub fn category(&self, category_id: i32) -> Option<&CategoryAllocation> {
        self.categories.iter().find(|c| c.category_id == category_id)
    }

    pub fn total_slots(&self) -> usize {
        self.categories
            .iter()
            .map(|c| usize::try_from(c.max_participants).unwrap_or(0))
            .sum()
    }
}
