// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{
    CapacityFilter, CatalogItem, Category, EquipmentCategory, GalleryCategory, GalleryProject,
};

/// Category selection with an `All` sentinel that matches every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Category> CategoryFilter<C> {
    pub const ALL_LABEL: &'static str = "All";

    pub fn matches(self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category.label(),
        }
    }

    /// Every selectable value in display order, sentinel first.
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(C::ALL.iter().copied().map(Self::Only))
            .collect()
    }

    pub fn cycle(self, delta: isize) -> Self {
        let options = Self::options();
        let current = options
            .iter()
            .position(|option| *option == self)
            .unwrap_or(0) as isize;
        let len = options.len() as isize;
        options[(current + delta).rem_euclid(len) as usize]
    }
}

/// Equipment page filter state. Each half is set independently; last write wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub category: CategoryFilter<EquipmentCategory>,
    pub capacity: CapacityFilter,
}

impl FilterSelection {
    pub fn select_category(&mut self, category: CategoryFilter<EquipmentCategory>) {
        self.category = category;
    }

    pub fn select_capacity(&mut self, capacity: CapacityFilter) {
        self.capacity = capacity;
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.capacity.is_sentinel()
    }

    pub fn apply<'a>(&self, catalog: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        apply_filters(catalog, self.category, &self.capacity)
    }
}

/// Returns the catalog items matching both predicates, in catalog order.
///
/// An empty result is a normal outcome; callers render a "no results" state.
pub fn apply_filters<'a>(
    catalog: &'a [CatalogItem],
    category: CategoryFilter<EquipmentCategory>,
    capacity: &CapacityFilter,
) -> Vec<&'a CatalogItem> {
    catalog
        .iter()
        .filter(|item| category.matches(item.category) && capacity.matches(item.capacity_num()))
        .collect()
}

pub fn filter_projects(
    projects: &[GalleryProject],
    category: CategoryFilter<GalleryCategory>,
) -> Vec<&GalleryProject> {
    projects
        .iter()
        .filter(|project| category.matches(project.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{CategoryFilter, FilterSelection, apply_filters, filter_projects};
    use crate::{
        Capacity, CapacityFilter, CatalogItem, EquipmentCategory, GalleryCategory, GalleryProject,
        GalleryProjectId,
    };

    fn item(name: &str, capacity: Capacity, category: EquipmentCategory) -> CatalogItem {
        CatalogItem {
            name: name.to_owned(),
            capacity,
            category,
            features: Vec::new(),
            image: None,
        }
    }

    fn fleet() -> Vec<CatalogItem> {
        let tons = [800, 400, 320, 275, 275, 250, 160, 110, 100];
        let mut items = tons
            .iter()
            .enumerate()
            .map(|(index, tons)| {
                item(
                    &format!("crane-{index}"),
                    Capacity::Tons(*tons),
                    EquipmentCategory::CrawlerCrane,
                )
            })
            .collect::<Vec<_>>();
        items.push(item(
            "axle puller",
            Capacity::Support,
            EquipmentCategory::SupportEquipment,
        ));
        items
    }

    fn capacities(items: &[&CatalogItem]) -> Vec<u32> {
        items.iter().map(|item| item.capacity_num()).collect()
    }

    #[test]
    fn sentinels_return_whole_catalog() {
        let catalog = fleet();
        let result = apply_filters(&catalog, CategoryFilter::All, &CapacityFilter::AllCapacities);
        assert_eq!(result.len(), catalog.len());
        assert!(result.iter().zip(catalog.iter()).all(|(l, r)| *l == r));
    }

    #[test]
    fn mid_range_excludes_upper_bound() {
        let catalog = fleet();
        let filter = CapacityFilter::range("200-400 Ton", 200, Some(400));
        let result = apply_filters(&catalog, CategoryFilter::All, &filter);
        assert_eq!(capacities(&result), vec![320, 275, 275, 250]);
    }

    #[test]
    fn open_ended_range_includes_lower_bound() {
        let catalog = fleet();
        let filter = CapacityFilter::range("400+ Ton", 400, None);
        let result = apply_filters(&catalog, CategoryFilter::All, &filter);
        assert_eq!(capacities(&result), vec![800, 400]);
    }

    #[test]
    fn support_equipment_only_matches_sentinel_capacity() {
        let catalog = fleet();
        let support = CategoryFilter::Only(EquipmentCategory::SupportEquipment);

        let all = apply_filters(&catalog, support, &CapacityFilter::AllCapacities);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "axle puller");

        let ranged = apply_filters(
            &catalog,
            support,
            &CapacityFilter::range("100-200 Ton", 100, Some(200)),
        );
        assert!(ranged.is_empty());
    }

    #[test]
    fn selection_is_last_write_wins() {
        let catalog = fleet();
        let mut selection = FilterSelection::default();
        assert!(selection.is_unfiltered());

        selection.select_capacity(CapacityFilter::range("100-200 Ton", 100, Some(200)));
        selection.select_capacity(CapacityFilter::range("400+ Ton", 400, None));
        selection.select_category(CategoryFilter::Only(EquipmentCategory::CrawlerCrane));

        assert!(!selection.is_unfiltered());
        assert_eq!(capacities(&selection.apply(&catalog)), vec![800, 400]);
    }

    #[test]
    fn category_filter_cycles_through_sentinel() {
        let mut filter = CategoryFilter::<GalleryCategory>::All;
        let mut seen = Vec::new();
        for _ in 0..5 {
            filter = filter.cycle(1);
            seen.push(filter.label());
        }
        assert_eq!(
            seen,
            vec!["Industrial", "Power & Energy", "Infrastructure", "Oil & Gas", "All"]
        );
        assert_eq!(
            CategoryFilter::<GalleryCategory>::All.cycle(-1),
            CategoryFilter::Only(GalleryCategory::OilGas)
        );
    }

    #[test]
    fn category_filter_options_put_sentinel_first() {
        let labels = CategoryFilter::<EquipmentCategory>::options()
            .into_iter()
            .map(CategoryFilter::label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["All", "Crawler Crane", "Support Equipment"]);
        assert!(
            CategoryFilter::<EquipmentCategory>::All.matches(EquipmentCategory::SupportEquipment)
        );
        assert!(
            !CategoryFilter::Only(EquipmentCategory::CrawlerCrane)
                .matches(EquipmentCategory::SupportEquipment)
        );
    }

    #[test]
    fn project_filter_keeps_order() {
        let projects = [
            (1, GalleryCategory::Industrial),
            (2, GalleryCategory::PowerEnergy),
            (3, GalleryCategory::Infrastructure),
            (5, GalleryCategory::Industrial),
        ]
        .into_iter()
        .map(|(id, category)| GalleryProject {
            id: GalleryProjectId::new(id),
            title: format!("project {id}"),
            category,
            images: vec!["a.jpg".to_owned()],
        })
        .collect::<Vec<_>>();

        let industrial = filter_projects(
            &projects,
            CategoryFilter::Only(GalleryCategory::Industrial),
        );
        let ids = industrial.iter().map(|p| p.id.get()).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 5]);

        assert_eq!(filter_projects(&projects, CategoryFilter::All).len(), 4);
        assert!(
            filter_projects(&projects, CategoryFilter::Only(GalleryCategory::OilGas)).is_empty()
        );
    }
}
