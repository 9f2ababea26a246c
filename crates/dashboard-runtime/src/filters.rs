//! Filter state and the input events that change it.

use data_pipeline::{category_options, CategorySelection, NormalizedDataset};
use sales_core::{CategoryDimension, Region};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current values of every dashboard control.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Slider year; `None` means the slider default.
    pub selected_year: Option<i32>,
    /// Raw contents of the free-text year box.
    pub free_text_year: String,
    pub selected_region: Region,
    pub category: CategorySelection,
}

/// A change to one control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterEvent {
    YearSlid(i32),
    YearTextEdited(String),
    RegionSelected(Region),
    CategoryTypeSelected(CategoryDimension),
    CategoryValueSelected(String),
}

impl FilterState {
    /// State on first load: every control at its default.
    pub fn initial(data: &NormalizedDataset) -> Self {
        let dimension = CategoryDimension::default();
        let options = category_options(data.records(), dimension);
        Self {
            category: CategorySelection::first_of(dimension, &options),
            ..Self::default()
        }
    }

    /// Next state after `event`. Switching the category type resets the
    /// category value to the first option of the new type.
    pub fn apply(&self, event: FilterEvent, data: &NormalizedDataset) -> Self {
        debug!(?event, "filter input changed");
        let mut next = self.clone();
        match event {
            FilterEvent::YearSlid(year) => next.selected_year = Some(year),
            FilterEvent::YearTextEdited(text) => next.free_text_year = text,
            FilterEvent::RegionSelected(region) => next.selected_region = region,
            FilterEvent::CategoryTypeSelected(dimension) => {
                let options = category_options(data.records(), dimension);
                next.category = self.category.with_dimension(dimension, &options);
            }
            FilterEvent::CategoryValueSelected(value) => next.category.value = Some(value),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::scenario;
    use data_pipeline::normalize_years;
    use sales_core::YearRange;

    #[test]
    fn initial_state_selects_first_genre() {
        let data = normalize_years(&scenario(), YearRange::default());
        let s = FilterState::initial(&data);
        assert_eq!(s.category.dimension, CategoryDimension::Genre);
        assert_eq!(s.category.value.as_deref(), Some("Sports"));
        assert_eq!(s.selected_region, Region::NaSales);
        assert_eq!(s.selected_year, None);
    }

    #[test]
    fn category_type_change_resets_value() {
        let data = normalize_years(&scenario(), YearRange::default());
        let s = FilterState::initial(&data)
            .apply(FilterEvent::CategoryValueSelected("Action".into()), &data)
            .apply(
                FilterEvent::CategoryTypeSelected(CategoryDimension::Platform),
                &data,
            );
        assert_eq!(s.category.dimension, CategoryDimension::Platform);
        assert_eq!(s.category.value.as_deref(), Some("Wii"));
    }

    #[test]
    fn scalar_events_update_one_field() {
        let data = normalize_years(&scenario(), YearRange::default());
        let s0 = FilterState::initial(&data);
        let s1 = s0
            .apply(FilterEvent::YearSlid(2006), &data)
            .apply(FilterEvent::YearTextEdited("2005".into()), &data)
            .apply(FilterEvent::RegionSelected(Region::JpSales), &data);
        assert_eq!(s1.selected_year, Some(2006));
        assert_eq!(s1.free_text_year, "2005");
        assert_eq!(s1.selected_region, Region::JpSales);
        assert_eq!(s1.category, s0.category);
    }
}
