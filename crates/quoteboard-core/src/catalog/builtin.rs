//! Built-in SEO service catalog
//!
//! Six category groups and eighteen services. Hours on per-page categories are
//! per page; the engine multiplies them by the weighted page count.

use crate::models::{
    BillingType, CalculationMethod, CategoryGroup, CategoryId, Preset, ServiceDefinition,
};

use Preset::{Advanced, Essential, Premium};

const ALL: &[Preset] = &[Essential, Advanced, Premium];
const ADVANCED_UP: &[Preset] = &[Advanced, Premium];
const PREMIUM_ONLY: &[Preset] = &[Premium];

pub fn category_groups() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup::new(
            CategoryId::InitGlobal,
            "Initial: OnPage Global / Technisches Setup",
            BillingType::OneTime,
            CalculationMethod::Global,
        ),
        CategoryGroup::new(
            CategoryId::InitOffpageGlobal,
            "Initial: OffPage / Externe Signale",
            BillingType::OneTime,
            CalculationMethod::Global,
        ),
        CategoryGroup::new(
            CategoryId::InitSingle,
            "Initial: Pro Seite Optimierung",
            BillingType::OneTime,
            CalculationMethod::PerPage,
        ),
        CategoryGroup::new(
            CategoryId::RunGlobal,
            "Laufend: Monitoring & Reporting",
            BillingType::Monthly,
            CalculationMethod::Global,
        ),
        CategoryGroup::new(
            CategoryId::RunSingle,
            "Laufend: Content Pflege",
            BillingType::Monthly,
            CalculationMethod::PerPage,
        ),
        CategoryGroup::new(
            CategoryId::RunOffpageGlobal,
            "Laufend: Linkaufbau & PR",
            BillingType::Monthly,
            CalculationMethod::Global,
        ),
    ]
}

pub fn service_definitions() -> Vec<ServiceDefinition> {
    use CategoryId::*;

    let raw: [(&str, &str, CategoryId, f64, &[Preset]); 18] = [
        // Initial onpage, global
        ("arch", "Themenstruktur & URL-Logik", InitGlobal, 2.0, ALL),
        ("tech_setup", "XML-Sitemap, Robots.txt, SSL", InitGlobal, 1.0, ALL),
        ("perf", "PageSpeed & Core Web Vitals Check", InitGlobal, 3.0, ALL),
        ("schema_glob", "Globales Schema (Organization, LocalBiz)", InitGlobal, 1.0, ALL),
        ("ux_setup", "Setup UX-Tools (Heatmaps/Clarity)", InitGlobal, 0.5, ADVANCED_UP),
        // Initial offpage, global
        ("gbp_setup", "Google Business Profil Setup", InitOffpageGlobal, 2.5, ALL),
        ("dir_sub", "Eintragung Branchenverzeichnisse", InitOffpageGlobal, 2.0, ADVANCED_UP),
        ("bl_audit", "Backlink-Audit (Status Quo)", InitOffpageGlobal, 1.5, ADVANCED_UP),
        // Initial onpage, per page
        ("meta", "Meta-Daten (Title/Desc.)", InitSingle, 0.3, ALL),
        ("content_struct", "Content-Struktur & Semantik", InitSingle, 0.5, ALL),
        ("ki_opt", "KI-Optimierung (Answer Targets)", InitSingle, 0.5, ALL),
        ("eeat", "E-E-A-T (Autoren, Quellen)", InitSingle, 0.3, ALL),
        ("faq", "FAQ-Blöcke & Schema", InitSingle, 0.4, ALL),
        ("int_link", "Interne Verlinkung Strategie", InitSingle, 0.3, ADVANCED_UP),
        // Recurring
        ("mon_tech", "Technisches Monitoring", RunGlobal, 0.5, ADVANCED_UP),
        ("rep", "Reporting & Analyse", RunGlobal, 1.0, ADVANCED_UP),
        ("cont_upd", "Content Freshness Updates", RunSingle, 0.2, PREMIUM_ONLY),
        ("link_build", "Aktiver Linkaufbau", RunOffpageGlobal, 4.0, PREMIUM_ONLY),
    ];

    raw.into_iter()
        .map(|(id, name, category, hours, presets)| {
            ServiceDefinition::new(id, name, category, hours, presets)
        })
        .collect()
}
