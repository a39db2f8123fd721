// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use altech_app::{
    Capacity, CapacityFilter, CatalogItem, Category, CategoryFilter, EquipmentCategory,
    GalleryCategory, GalleryProject, GalleryProjectId,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

const MANUFACTURERS: [&str; 8] = [
    "Zoomlion",
    "Kobelco",
    "Hitachi Sumitomo",
    "Liebherr",
    "Manitowoc",
    "Sany",
    "XCMG",
    "Tadano",
];

const SERIES: [&str; 6] = ["ZCC", "CK", "SCX", "LR", "MLC", "SCC"];

const FEATURES: [&str; 12] = [
    "Heavy duty lifting",
    "Quick assembly",
    "Remote operation capable",
    "Fuel efficient",
    "Compact footprint",
    "High precision controls",
    "Excellent load charts",
    "Modern safety systems",
    "Easy transportation",
    "Versatile boom configurations",
    "Reliable operation",
    "Urban project ready",
];

const SUPPORT_KINDS: [&str; 5] = [
    "Axle Puller System",
    "Hydraulic Trailer",
    "Girder Launcher",
    "Counterweight Carrier",
    "Self-Propelled Transporter",
];

const SITES: [&str; 10] = [
    "Cement Plant",
    "Power Station",
    "Rail Bridge",
    "Petrochemical Complex",
    "Steel Unit",
    "Highway Overpass",
    "Wind Farm",
    "Port Terminal",
    "Refinery",
    "Metro Viaduct",
];

const REGIONS: [&str; 8] = [
    "Gujarat",
    "Maharashtra",
    "Andhra Pradesh",
    "Karnataka",
    "Tamil Nadu",
    "Rajasthan",
    "Odisha",
    "Punjab",
];

/// Tonnage edges used for generated capacity buckets. Generated cranes land
/// on these edges often so boundary handling gets exercised.
const TONNAGE_EDGES: [u32; 6] = [50, 100, 200, 400, 800, 1200];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator for catalogs, capacity buckets and galleries.
#[derive(Debug, Clone)]
pub struct FleetFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl FleetFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    /// A catalog of `len` uniquely named items, mixing cranes and support kit.
    pub fn catalog(&mut self, len: usize) -> Vec<CatalogItem> {
        (0..len).map(|index| self.catalog_item(index)).collect()
    }

    pub fn catalog_item(&mut self, index: usize) -> CatalogItem {
        let support = self.rng.int_n(5) == 0;
        let features = (0..self.int_range(1, 4))
            .map(|_| (*self.pick(&FEATURES)).to_owned())
            .collect();

        if support {
            return CatalogItem {
                name: format!("{} #{}", self.pick(&SUPPORT_KINDS), index + 1),
                capacity: Capacity::Support,
                category: EquipmentCategory::SupportEquipment,
                features,
                image: None,
            };
        }

        let tons = self.tonnage();
        CatalogItem {
            name: format!(
                "{} {}{} #{}",
                self.pick(&MANUFACTURERS),
                self.pick(&SERIES),
                tons * 10,
                index + 1
            ),
            capacity: Capacity::Tons(tons),
            category: EquipmentCategory::CrawlerCrane,
            features,
            image: self
                .rng
                .bool()
                .then(|| format!("https://cdn.example.com/fleet/{}.jpg", index + 1)),
        }
    }

    /// The sentinel followed by adjacent ranges over [`TONNAGE_EDGES`], last
    /// one open-ended.
    pub fn capacity_filters(&self) -> Vec<CapacityFilter> {
        let mut filters = vec![CapacityFilter::AllCapacities];
        for pair in TONNAGE_EDGES.windows(2) {
            filters.push(CapacityFilter::range(
                format!("{}-{} Ton", pair[0], pair[1]),
                pair[0],
                Some(pair[1]),
            ));
        }
        let last = TONNAGE_EDGES[TONNAGE_EDGES.len() - 1];
        filters.push(CapacityFilter::range(format!("{last}+ Ton"), last, None));
        filters
    }

    pub fn capacity_filter(&mut self) -> CapacityFilter {
        let filters = self.capacity_filters();
        filters[self.rng.int_n(filters.len())].clone()
    }

    pub fn equipment_category(&mut self) -> CategoryFilter<EquipmentCategory> {
        self.category_filter()
    }

    pub fn gallery_category(&mut self) -> CategoryFilter<GalleryCategory> {
        self.category_filter()
    }

    /// A gallery of `len` projects, each with 1..=`max_images` images.
    pub fn gallery(&mut self, len: usize, max_images: usize) -> Vec<GalleryProject> {
        (0..len)
            .map(|index| {
                let image_count = self.int_range(1, max_images.max(1));
                let id = index as i64 + 1;
                GalleryProject {
                    id: GalleryProjectId::new(id),
                    title: format!("{} {}", self.pick(&REGIONS), self.pick(&SITES)),
                    category: *self.pick(GalleryCategory::ALL),
                    images: (0..image_count)
                        .map(|image| format!("https://cdn.example.com/gallery/{id}/{image}.jpg"))
                        .collect(),
                }
            })
            .collect()
    }

    fn category_filter<C: Category>(&mut self) -> CategoryFilter<C> {
        let options = CategoryFilter::<C>::options();
        options[self.rng.int_n(options.len())]
    }

    fn tonnage(&mut self) -> u32 {
        if self.rng.bool() {
            return *self.pick(&TONNAGE_EDGES);
        }
        self.int_range(10, 1500) as u32
    }

    fn int_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        min + self.rng.int_n(max - min + 1)
    }

    fn pick<'a, T>(&mut self, values: &'a [T]) -> &'a T {
        &values[self.rng.int_n(values.len())]
    }
}

pub fn temp_content_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("content.toml");
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::FleetFaker;
    use altech_app::{Capacity, EquipmentCategory};
    use std::collections::BTreeSet;

    #[test]
    fn same_seed_same_catalog() {
        let mut left = FleetFaker::new(42);
        let mut right = FleetFaker::new(42);
        assert_eq!(left.catalog(25), right.catalog(25));
    }

    #[test]
    fn zero_seed_is_normalized() {
        assert_eq!(FleetFaker::new(0).seed(), 1);
    }

    #[test]
    fn catalog_names_are_unique_and_categories_consistent() {
        let mut faker = FleetFaker::new(7);
        let catalog = faker.catalog(200);

        let names = catalog
            .iter()
            .map(|item| item.name.as_str())
            .collect::<BTreeSet<_>>();
        assert_eq!(names.len(), catalog.len());

        for item in &catalog {
            match item.category {
                EquipmentCategory::SupportEquipment => {
                    assert_eq!(item.capacity, Capacity::Support)
                }
                EquipmentCategory::CrawlerCrane => assert!(item.capacity_num() > 0),
            }
            assert!(!item.features.is_empty());
        }
    }

    #[test]
    fn capacity_filters_start_with_sentinel() {
        let filters = FleetFaker::new(3).capacity_filters();
        assert!(filters[0].is_sentinel());
        assert_eq!(filters.iter().filter(|f| f.is_sentinel()).count(), 1);
        assert_eq!(filters.last().map(|f| f.label()), Some("1200+ Ton"));
    }

    #[test]
    fn gallery_projects_have_images() {
        let mut faker = FleetFaker::new(11);
        let gallery = faker.gallery(30, 6);
        assert_eq!(gallery.len(), 30);
        assert!(
            gallery
                .iter()
                .all(|project| (1..=6).contains(&project.images.len()))
        );
    }
}
