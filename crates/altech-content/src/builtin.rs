// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use altech_app::{
    Capacity, CapacityFilter, CatalogItem, EquipmentCategory, FeaturedProject, FeaturedProjectId,
    FleetStat, GalleryCategory, GalleryProject, GalleryProjectId, ServiceOffering,
};

use crate::{AboutContent, SiteContent};

const UNSPLASH: &str = "https://images.unsplash.com";

pub fn builtin() -> SiteContent {
    SiteContent {
        about: about(),
        catalog: catalog(),
        capacity_filters: capacity_filters(),
        gallery: gallery(),
        services: services(),
        featured_equipment: vec![
            "Zoomlion ZCC9800W".to_owned(),
            "Zoomlion ZCC4000V".to_owned(),
            "Hitachi Sumitomo SCX 2800".to_owned(),
        ],
        featured_projects: featured_projects(),
        clients: [
            "Larsen & Toubro",
            "Tata Projects",
            "Shapoorji Pallonji",
            "Afcons Infrastructure",
            "Sarens",
            "J. Kumar Infraprojects",
        ]
        .map(str::to_owned)
        .to_vec(),
        fleet_stats: [
            ("10+", "Advanced Cranes"),
            ("800T", "Max Capacity"),
            ("168m", "Max Hub Height"),
            ("24/7", "Support Available"),
        ]
        .map(|(value, label)| FleetStat {
            value: value.to_owned(),
            label: label.to_owned(),
        })
        .to_vec(),
    }
}

fn about() -> AboutContent {
    AboutContent {
        company: "ALTECH Equipments Pvt. Ltd.".to_owned(),
        tagline: "India's Premier Heavy Lifting Company".to_owned(),
        hero_title: "PRECISION LIFTING".to_owned(),
        hero_subtitle: "Delivering excellence in crane rental, WTG erection, and girder \
                        installation with over 2 lakh tons of successful projects and an \
                        impeccable zero-incident safety record."
            .to_owned(),
        body: "Altech Equipments Pvt. Ltd. is a premier crane rental and heavy-lifting \
               company in India. We specialize in wind turbine erection, girder \
               installation, and large-scale infrastructure projects. Our fleet of \
               advanced cranes combined with expert manpower ensures precision, safety, \
               and efficiency in every project."
            .to_owned(),
        strengths: [
            "Advanced Equipment",
            "Expert Manpower",
            "Zero Incident Record",
            "Industry Leaders",
        ]
        .map(str::to_owned)
        .to_vec(),
        years_of_excellence: "15+".to_owned(),
    }
}

fn crane(name: &str, tons: u32, features: [&str; 4]) -> CatalogItem {
    CatalogItem {
        name: name.to_owned(),
        capacity: Capacity::Tons(tons),
        category: EquipmentCategory::CrawlerCrane,
        features: features.map(str::to_owned).to_vec(),
        image: None,
    }
}

fn catalog() -> Vec<CatalogItem> {
    let mut items = vec![
        crane(
            "Zoomlion ZCC9800W",
            800,
            [
                "Max hub height: 168m",
                "WTG erection specialist",
                "Advanced hydraulic system",
                "Remote operation capable",
            ],
        ),
        crane(
            "Zoomlion ZCC4000V",
            400,
            [
                "Heavy duty lifting",
                "Versatile boom configurations",
                "High precision controls",
                "Excellent stability",
            ],
        ),
        crane(
            "Zoomlion ZCC3200V",
            320,
            [
                "Multi-purpose operations",
                "Quick assembly",
                "Strong lifting capacity",
                "Modern safety systems",
            ],
        ),
        crane(
            "Hitachi Sumitomo SCX 2800",
            275,
            [
                "Japanese precision engineering",
                "High reliability",
                "Smooth operation",
                "Excellent load charts",
            ],
        ),
        crane(
            "Kobelco CK 2750G-2",
            275,
            [
                "G-series advancement",
                "Fuel efficient",
                "Enhanced safety features",
                "Compact design",
            ],
        ),
        crane(
            "Kobelco CK 2500-2",
            250,
            [
                "Proven performance",
                "Easy maintenance",
                "Strong boom system",
                "Versatile applications",
            ],
        ),
        crane(
            "Kobelco CK 1600-2",
            160,
            [
                "Medium capacity workhorse",
                "Quick setup time",
                "Reliable operation",
                "Cost effective",
            ],
        ),
        crane(
            "Kobelco CK 1100G-2",
            110,
            [
                "G-series technology",
                "Compact footprint",
                "Efficient fuel consumption",
                "Urban project ready",
            ],
        ),
        crane(
            "Kobelco CK 1000G-2",
            100,
            [
                "Entry-level heavy crane",
                "Easy transportation",
                "Quick mobilization",
                "Versatile use cases",
            ],
        ),
    ];

    let image = |path: &str| Some(format!("{UNSPLASH}/{path}?w=800&auto=format&fit=crop"));
    items[0].image = image("photo-1504307651254-35680f356dfd");
    items[1].image = image("photo-1589939705384-5185137a7f0f");
    items[3].image = image("photo-1581094288338-2314dddb7ece");

    items.push(CatalogItem {
        name: "Axle Puller System".to_owned(),
        capacity: Capacity::Support,
        category: EquipmentCategory::SupportEquipment,
        features: [
            "Girder transportation",
            "Heavy load movement",
            "Precision positioning",
            "Multi-axle configuration",
        ]
        .map(str::to_owned)
        .to_vec(),
        image: None,
    });
    items
}

fn capacity_filters() -> Vec<CapacityFilter> {
    vec![
        CapacityFilter::AllCapacities,
        CapacityFilter::range("100-200 Ton", 100, Some(200)),
        CapacityFilter::range("200-400 Ton", 200, Some(400)),
        CapacityFilter::range("400+ Ton", 400, None),
    ]
}

fn project(id: i64, title: &str, category: GalleryCategory, photos: &[&str]) -> GalleryProject {
    GalleryProject {
        id: GalleryProjectId::new(id),
        title: title.to_owned(),
        category,
        images: photos
            .iter()
            .map(|photo| format!("{UNSPLASH}/photo-{photo}?w=1200"))
            .collect(),
    }
}

fn gallery() -> Vec<GalleryProject> {
    vec![
        project(
            1,
            "Aditya Birla Cement Plant",
            GalleryCategory::Industrial,
            &[
                "1504307651254-35680f356dfd",
                "1581094794329-c8112a89af12",
                "1590846406792-0adc7f938f1d",
                "1565008447742-97f6f38c985c",
            ],
        ),
        project(
            2,
            "NTPC Power Station",
            GalleryCategory::PowerEnergy,
            &[
                "1558618666-fcd25c85cd64",
                "1473341304170-971dccb5ac1e",
                "1532601224476-15c79f2f7a51",
            ],
        ),
        project(
            3,
            "Metro Rail Bridge",
            GalleryCategory::Infrastructure,
            &[
                "1545558014-8692077e9b5c",
                "1477959858617-67f85cf4f1df",
                "1513828583688-c52646db42da",
                "1486406146926-c627a92ad1ab",
            ],
        ),
        project(
            4,
            "Petrochemical Complex",
            GalleryCategory::OilGas,
            &[
                "1518709766631-a6a7f45921c3",
                "1586953135231-bea68ce78065",
                "1611270629569-8b357cb88da9",
            ],
        ),
        project(
            5,
            "Steel Manufacturing Unit",
            GalleryCategory::Industrial,
            &[
                "1504917595217-d4dc5ebe6122",
                "1567789884554-0b844b597180",
                "1553062407-98eeb64c6a62",
                "1621905252507-b35492cc74b4",
            ],
        ),
        project(
            6,
            "Highway Overpass Construction",
            GalleryCategory::Infrastructure,
            &[
                "1515162816999-a0c47dc192f7",
                "1449824913935-59a10b8d2000",
                "1485871981521-5b1fd3805eee",
            ],
        ),
    ]
}

fn services() -> Vec<ServiceOffering> {
    [
        (
            "Wind Turbine Erection",
            "Specialized WTG erection services using advanced crawler cranes for hub heights up to 168m.",
        ),
        (
            "Girder Erection",
            "Expert erection of PSC, RCC, and Steel girders up to 250 MT for bridges and flyovers.",
        ),
        (
            "Heavy Lifting",
            "State-of-the-art crawler cranes with capacities from 100T to 800T for critical lifts.",
        ),
        (
            "Infrastructure Projects",
            "Comprehensive support for highway, railway, and industrial infrastructure development.",
        ),
    ]
    .map(|(title, description)| ServiceOffering {
        title: title.to_owned(),
        description: description.to_owned(),
    })
    .to_vec()
}

fn featured_projects() -> Vec<FeaturedProject> {
    vec![
        FeaturedProject {
            id: FeaturedProjectId::new(1),
            title: "SHMA Road - Vadodara Mumbai Expressway".to_owned(),
            location: "Gujarat".to_owned(),
            client: "Larsen & Toubro".to_owned(),
            category: "Highway".to_owned(),
            tonnage: Some("16,000 Tons".to_owned()),
            duration: Some("40 Days".to_owned()),
            description: "Erected 195 nos of full span PSC girders in record time with zero \
                          incidents."
                .to_owned(),
            highlights: vec![
                "195 full span PSC girders".to_owned(),
                "Zero incidents".to_owned(),
            ],
        },
        FeaturedProject {
            id: FeaturedProjectId::new(2),
            title: "MAPI Road Project".to_owned(),
            location: "Andhra Pradesh".to_owned(),
            client: "Larsen & Toubro".to_owned(),
            category: "Highway".to_owned(),
            tonnage: Some("30,000 Tons".to_owned()),
            duration: Some("Ongoing".to_owned()),
            description: "Large-scale PSC girder erection for major highway infrastructure \
                          project."
                .to_owned(),
            highlights: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::builtin;
    use altech_app::{
        CapacityFilter, CategoryFilter, EquipmentCategory, GalleryCategory, apply_filters,
        filter_projects,
    };

    #[test]
    fn builtin_catalog_shape() {
        let content = builtin();
        assert_eq!(content.catalog.len(), 10);
        let support = content
            .catalog
            .iter()
            .filter(|item| item.category == EquipmentCategory::SupportEquipment)
            .count();
        assert_eq!(support, 1);
        assert_eq!(content.capacity_filters[0], CapacityFilter::AllCapacities);
    }

    #[test]
    fn builtin_mid_range_bucket() {
        let content = builtin();
        let result = apply_filters(
            &content.catalog,
            CategoryFilter::All,
            &content.capacity_filters[2],
        );
        let tons = result
            .iter()
            .map(|item| item.capacity_num())
            .collect::<Vec<_>>();
        assert_eq!(content.capacity_filters[2].label(), "200-400 Ton");
        assert_eq!(tons, vec![320, 275, 275, 250]);
    }

    #[test]
    fn builtin_gallery_categories() {
        let content = builtin();
        let infra = filter_projects(
            &content.gallery,
            CategoryFilter::Only(GalleryCategory::Infrastructure),
        );
        let titles = infra.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec!["Metro Rail Bridge", "Highway Overpass Construction"]
        );
        assert!(content.gallery.iter().all(|p| !p.images.is_empty()));
    }
}
