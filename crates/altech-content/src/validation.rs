// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use altech_app::CapacityFilter;
use anyhow::{Result, bail};
use std::collections::BTreeSet;

use crate::SiteContent;

/// Checks the static-data invariants the controllers rely on.
pub fn validate(content: &SiteContent) -> Result<()> {
    validate_catalog(content)?;
    validate_capacity_filters(&content.capacity_filters)?;
    validate_gallery(content)?;
    validate_featured(content)?;
    Ok(())
}

fn validate_catalog(content: &SiteContent) -> Result<()> {
    let mut names = BTreeSet::new();
    for (index, item) in content.catalog.iter().enumerate() {
        if item.name.trim().is_empty() {
            bail!("catalog entry {} has an empty name", index + 1);
        }
        if !names.insert(item.name.as_str()) {
            bail!(
                "catalog name {:?} appears more than once; equipment names must be unique",
                item.name
            );
        }
    }
    Ok(())
}

fn validate_capacity_filters(filters: &[CapacityFilter]) -> Result<()> {
    match filters.first() {
        Some(CapacityFilter::AllCapacities) => {}
        Some(other) => bail!(
            "capacity filter {:?} is listed first; the first filter must be kind = \"all_capacities\"",
            other.label()
        ),
        None => bail!("capacity_filters is empty; at least the all_capacities filter is required"),
    }

    let sentinels = filters.iter().filter(|filter| filter.is_sentinel()).count();
    if sentinels != 1 {
        bail!("capacity_filters has {sentinels} all_capacities entries; expected exactly one");
    }

    let mut labels = BTreeSet::new();
    for filter in filters {
        if let CapacityFilter::Range { label, min, max } = filter {
            if label.trim().is_empty() {
                bail!("capacity filter starting at {min} has an empty label");
            }
            if let Some(max) = max
                && max <= min
            {
                bail!("capacity filter {label:?} has max {max} <= min {min}; ranges are [min, max)");
            }
        }
        if !labels.insert(filter.label()) {
            bail!(
                "capacity filter label {:?} appears more than once",
                filter.label()
            );
        }
    }
    Ok(())
}

fn validate_gallery(content: &SiteContent) -> Result<()> {
    let mut ids = BTreeSet::new();
    for project in &content.gallery {
        if !ids.insert(project.id) {
            bail!("gallery project id {} appears more than once", project.id);
        }
        if project.title.trim().is_empty() {
            bail!("gallery project {} has an empty title", project.id);
        }
        if project.images.is_empty() {
            bail!(
                "gallery project {} ({:?}) has no images; every project needs at least one",
                project.id,
                project.title
            );
        }
    }
    Ok(())
}

fn validate_featured(content: &SiteContent) -> Result<()> {
    for name in &content.featured_equipment {
        if content.catalog_item(name).is_none() {
            bail!("featured equipment {name:?} is not in the catalog");
        }
    }

    let mut ids = BTreeSet::new();
    for project in &content.featured_projects {
        if !ids.insert(project.id) {
            bail!("featured project id {} appears more than once", project.id);
        }
    }
    Ok(())
}
