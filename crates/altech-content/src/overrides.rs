// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use altech_app::{
    CapacityFilter, CatalogItem, FeaturedProject, GalleryProject, ServiceOffering,
};
use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::SiteContent;

pub const CONTENT_VERSION: i64 = 1;

/// Sections of a content file. Each present section replaces the built-in
/// one wholesale; absent sections keep the built-ins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentOverrides {
    pub version: i64,
    pub catalog: Option<Vec<CatalogItem>>,
    pub capacity_filters: Option<Vec<CapacityFilter>>,
    pub gallery: Option<Vec<GalleryProject>>,
    pub services: Option<Vec<ServiceOffering>>,
    pub featured_equipment: Option<Vec<String>>,
    pub featured_projects: Option<Vec<FeaturedProject>>,
    pub clients: Option<Vec<String>>,
}

impl ContentOverrides {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read content file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("load content file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let value: toml::Value = toml::from_str(raw).context("parse TOML content")?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!("content file is missing `version = {CONTENT_VERSION}` at the top level")
            })?;
        if version != CONTENT_VERSION {
            bail!("unsupported content version {version}; expected version = {CONTENT_VERSION}");
        }

        let overrides: Self = value.try_into().context("decode content sections")?;
        if overrides.is_empty() {
            warn!("content file has no sections; built-in content is used unchanged");
        }
        Ok(overrides)
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_none()
            && self.capacity_filters.is_none()
            && self.gallery.is_none()
            && self.services.is_none()
            && self.featured_equipment.is_none()
            && self.featured_projects.is_none()
            && self.clients.is_none()
    }

    pub fn apply(self, content: &mut SiteContent) {
        if let Some(catalog) = self.catalog {
            // Featured names refer to the built-in catalog; drop the ones that vanished.
            if self.featured_equipment.is_none() {
                content
                    .featured_equipment
                    .retain(|name| catalog.iter().any(|item| &item.name == name));
            }
            content.catalog = catalog;
        }
        if let Some(filters) = self.capacity_filters {
            content.capacity_filters = filters;
        }
        if let Some(gallery) = self.gallery {
            content.gallery = gallery;
        }
        if let Some(services) = self.services {
            content.services = services;
        }
        if let Some(featured) = self.featured_equipment {
            content.featured_equipment = featured;
        }
        if let Some(projects) = self.featured_projects {
            content.featured_projects = projects;
        }
        if let Some(clients) = self.clients {
            content.clients = clients;
        }
    }
}

pub fn example_overrides() -> String {
    format!(
        "# altech content overrides\n# Every section is optional; a present section replaces the built-in one.\n\nversion = {CONTENT_VERSION}\n\n[[catalog]]\nname = \"Zoomlion ZCC9800W\"\ncapacity = \"800 TON\"\ncategory = \"Crawler Crane\"\nfeatures = [\"Max hub height: 168m\", \"WTG erection specialist\"]\n\n[[catalog]]\nname = \"Axle Puller System\"\ncapacity = \"SUPPORT\"\ncategory = \"Support Equipment\"\nfeatures = [\"Girder transportation\"]\n\n[[capacity_filters]]\nkind = \"all_capacities\"\n\n[[capacity_filters]]\nkind = \"range\"\nlabel = \"400+ Ton\"\nmin = 400\n\n[[gallery]]\nid = 1\ntitle = \"Aditya Birla Cement Plant\"\ncategory = \"Industrial\"\nimages = [\"https://images.unsplash.com/photo-1504307651254-35680f356dfd?w=1200\"]\n"
    )
}

#[cfg(test)]
mod tests {
    use super::{ContentOverrides, example_overrides};
    use crate::builtin;
    use altech_app::{Capacity, CapacityFilter, EquipmentCategory};

    #[test]
    fn example_parses_and_applies() -> anyhow::Result<()> {
        let overrides = ContentOverrides::parse(&example_overrides())?;
        assert!(!overrides.is_empty());

        let mut content = builtin();
        overrides.apply(&mut content);

        assert_eq!(content.catalog.len(), 2);
        assert_eq!(content.catalog[0].capacity, Capacity::Tons(800));
        assert_eq!(
            content.catalog[1].category,
            EquipmentCategory::SupportEquipment
        );
        assert_eq!(
            content.capacity_filters,
            vec![
                CapacityFilter::AllCapacities,
                CapacityFilter::range("400+ Ton", 400, None),
            ]
        );
        assert_eq!(content.gallery.len(), 1);
        assert_eq!(content.featured_equipment, vec!["Zoomlion ZCC9800W"]);
        assert_eq!(content.services, builtin().services);
        Ok(())
    }

    #[test]
    fn missing_version_is_rejected() {
        let error = ContentOverrides::parse("[[clients]]\n").expect_err("no version");
        assert!(error.to_string().contains("version = 1"));
    }

    #[test]
    fn wrong_version_is_rejected() {
        let error = ContentOverrides::parse("version = 7\n").expect_err("bad version");
        assert!(error.to_string().contains("unsupported content version 7"));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let raw = "version = 1\n[[catalog]]\nname = \"Tower\"\ncapacity = \"50 TON\"\ncategory = \"Tower Crane\"\n";
        let error = ContentOverrides::parse(raw).expect_err("unknown category");
        assert!(format!("{error:#}").contains("decode content sections"));
    }

    #[test]
    fn malformed_capacity_is_rejected() {
        let raw = "version = 1\n[[catalog]]\nname = \"Tower\"\ncapacity = \"fifty\"\ncategory = \"Crawler Crane\"\n";
        let error = ContentOverrides::parse(raw).expect_err("bad capacity");
        assert!(format!("{error:#}").contains("<N> TON"));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let error = ContentOverrides::parse("version = 1\n[theme]\nmode = \"dark\"\n")
            .expect_err("unknown section");
        assert!(format!("{error:#}").contains("theme"));
    }

    #[test]
    fn version_only_file_keeps_builtins() -> anyhow::Result<()> {
        let overrides = ContentOverrides::parse("version = 1\n")?;
        assert!(overrides.is_empty());
        let mut content = builtin();
        overrides.apply(&mut content);
        assert_eq!(content, builtin());
        Ok(())
    }
}
