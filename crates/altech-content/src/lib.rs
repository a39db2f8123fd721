// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod builtin;
mod overrides;
mod validation;

use altech_app::{
    CapacityFilter, CatalogItem, FeaturedProject, FeaturedProjectId, FleetStat, GalleryProject,
    GalleryProjectId, ServiceOffering,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub use builtin::builtin;
pub use overrides::{CONTENT_VERSION, ContentOverrides, example_overrides};
pub use validation::validate;

pub const APP_NAME: &str = "altech";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub company: String,
    pub tagline: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub body: String,
    pub strengths: Vec<String>,
    pub years_of_excellence: String,
}

/// Everything the site shows. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub about: AboutContent,
    pub catalog: Vec<CatalogItem>,
    pub capacity_filters: Vec<CapacityFilter>,
    pub gallery: Vec<GalleryProject>,
    pub services: Vec<ServiceOffering>,
    pub featured_equipment: Vec<String>,
    pub featured_projects: Vec<FeaturedProject>,
    pub clients: Vec<String>,
    pub fleet_stats: Vec<FleetStat>,
}

impl SiteContent {
    pub fn gallery_project(&self, id: GalleryProjectId) -> Option<&GalleryProject> {
        self.gallery.iter().find(|project| project.id == id)
    }

    pub fn featured_project(&self, id: FeaturedProjectId) -> Option<&FeaturedProject> {
        self.featured_projects
            .iter()
            .find(|project| project.id == id)
    }

    pub fn catalog_item(&self, name: &str) -> Option<&CatalogItem> {
        self.catalog.iter().find(|item| item.name == name)
    }

    pub fn featured_catalog_items(&self) -> Vec<&CatalogItem> {
        self.featured_equipment
            .iter()
            .filter_map(|name| self.catalog_item(name))
            .collect()
    }

    pub fn image_count(&self) -> usize {
        self.gallery.iter().map(|project| project.images.len()).sum()
    }
}

/// Builds the site content: built-ins, then the optional override file, then
/// invariant checks over the result.
pub fn load_content(override_path: Option<&Path>) -> Result<SiteContent> {
    let mut content = builtin();
    if let Some(path) = override_path {
        let overrides = ContentOverrides::load(path)?;
        overrides.apply(&mut content);
    }
    validate(&content)?;

    info!(
        equipment = content.catalog.len(),
        capacity_filters = content.capacity_filters.len(),
        gallery_projects = content.gallery.len(),
        images = content.image_count(),
        "content loaded"
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::{builtin, load_content};
    use altech_app::{FeaturedProjectId, GalleryProjectId};

    #[test]
    fn lookups_by_id_and_name() {
        let content = builtin();
        let project = content
            .gallery_project(GalleryProjectId::new(2))
            .expect("project 2 exists");
        assert_eq!(project.title, "NTPC Power Station");
        assert!(content.gallery_project(GalleryProjectId::new(99)).is_none());

        let featured = content
            .featured_project(FeaturedProjectId::new(1))
            .expect("featured project 1 exists");
        assert_eq!(featured.location, "Gujarat");

        assert!(content.catalog_item("Kobelco CK 1600-2").is_some());
        assert!(content.catalog_item("kobelco ck 1600-2").is_none());
    }

    #[test]
    fn featured_items_follow_configured_order() {
        let content = builtin();
        let names = content
            .featured_catalog_items()
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Zoomlion ZCC9800W",
                "Zoomlion ZCC4000V",
                "Hitachi Sumitomo SCX 2800"
            ]
        );
    }

    #[test]
    fn load_without_overrides_is_builtin() -> anyhow::Result<()> {
        let content = load_content(None)?;
        assert_eq!(content, builtin());
        assert_eq!(content.image_count(), 21);
        Ok(())
    }
}
