// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::*;

/// A closed set of category values that can drive a [`crate::CategoryFilter`].
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    #[serde(rename = "Crawler Crane")]
    CrawlerCrane,
    #[serde(rename = "Support Equipment")]
    SupportEquipment,
}

impl Category for EquipmentCategory {
    const ALL: &'static [Self] = &[Self::CrawlerCrane, Self::SupportEquipment];

    fn label(self) -> &'static str {
        match self {
            Self::CrawlerCrane => "Crawler Crane",
            Self::SupportEquipment => "Support Equipment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryCategory {
    #[serde(rename = "Industrial")]
    Industrial,
    #[serde(rename = "Power & Energy")]
    PowerEnergy,
    #[serde(rename = "Infrastructure")]
    Infrastructure,
    #[serde(rename = "Oil & Gas")]
    OilGas,
}

impl Category for GalleryCategory {
    const ALL: &'static [Self] = &[
        Self::Industrial,
        Self::PowerEnergy,
        Self::Infrastructure,
        Self::OilGas,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Industrial => "Industrial",
            Self::PowerEnergy => "Power & Energy",
            Self::Infrastructure => "Infrastructure",
            Self::OilGas => "Oil & Gas",
        }
    }
}

/// Lifting capacity of a catalog item.
///
/// The label shown to users ("800 TON", "SUPPORT") and the numeric value used
/// for range filtering are both derived from this value. Support equipment
/// carries the numeric sentinel `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Capacity {
    Tons(u32),
    Support,
}

impl Capacity {
    pub const SUPPORT_LABEL: &'static str = "SUPPORT";

    pub const fn tons(self) -> u32 {
        match self {
            Self::Tons(tons) => tons,
            Self::Support => 0,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Tons(tons) => format!("{tons} TON"),
            Self::Support => Self::SUPPORT_LABEL.to_owned(),
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(Self::SUPPORT_LABEL) {
            return Ok(Self::Support);
        }

        let upper = trimmed.to_ascii_uppercase();
        let number = upper
            .strip_suffix("TONS")
            .or_else(|| upper.strip_suffix("TON"))
            .ok_or_else(|| {
                anyhow!("capacity {value:?} must look like \"<N> TON\" or \"SUPPORT\"")
            })?
            .trim();
        let tons: u32 = number
            .parse()
            .map_err(|_| anyhow!("capacity {value:?} has a non-numeric tonnage {number:?}"))?;
        if tons == 0 {
            bail!("capacity {value:?} is zero; use \"SUPPORT\" for non-lifting equipment");
        }
        Ok(Self::Tons(tons))
    }
}

impl TryFrom<String> for Capacity {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Capacity> for String {
    fn from(value: Capacity) -> Self {
        value.label()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub capacity: Capacity,
    pub category: EquipmentCategory,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl CatalogItem {
    pub const fn capacity_num(&self) -> u32 {
        self.capacity.tons()
    }

    pub fn capacity_label(&self) -> String {
        self.capacity.label()
    }
}

/// Named half-open capacity bucket `[min, max)`; `max = None` is unbounded.
///
/// `AllCapacities` matches every item, including support equipment whose
/// numeric capacity falls outside any range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CapacityFilter {
    #[default]
    AllCapacities,
    Range {
        label: String,
        min: u32,
        #[serde(default)]
        max: Option<u32>,
    },
}

impl CapacityFilter {
    pub const ALL_LABEL: &'static str = "All Capacities";

    pub fn range(label: impl Into<String>, min: u32, max: Option<u32>) -> Self {
        Self::Range {
            label: label.into(),
            min,
            max,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::AllCapacities => Self::ALL_LABEL,
            Self::Range { label, .. } => label,
        }
    }

    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Self::AllCapacities)
    }

    pub fn matches(&self, capacity_num: u32) -> bool {
        match self {
            Self::AllCapacities => true,
            Self::Range { min, max, .. } => {
                capacity_num >= *min && max.is_none_or(|max| capacity_num < max)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryProject {
    pub id: GalleryProjectId,
    pub title: String,
    pub category: GalleryCategory,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedProject {
    pub id: FeaturedProjectId,
    pub title: String,
    pub location: String,
    pub client: String,
    pub category: String,
    #[serde(default)]
    pub tonnage: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    Home,
    About,
    Services,
    Equipment,
    Gallery,
}

impl PageKind {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Equipment,
        Self::Gallery,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Equipment => "equipment",
            Self::Gallery => "gallery",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(Self::Home),
            "about" => Some(Self::About),
            "services" => Some(Self::Services),
            "equipment" => Some(Self::Equipment),
            "gallery" => Some(Self::Gallery),
            _ => None,
        }
    }
}
