//! Static reference data: category groups and service definitions
//!
//! A [`Catalog`] is validated once at construction and never mutated. Each
//! service is pre-joined with the index of its category group, so pricing
//! code reads the billing type and calculation method without searching.
//!
//! # Examples
//!
//! ```
//! use quoteboard_core::catalog::Catalog;
//! use quoteboard_core::models::{CalculationMethod, CategoryId};
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.groups().len(), 6);
//!
//! let meta = catalog.service("meta").unwrap();
//! assert_eq!(meta.definition.category, CategoryId::InitSingle);
//! assert_eq!(
//!     catalog.group_of(meta).calculation_method,
//!     CalculationMethod::PerPage
//! );
//! ```

mod builtin;

use crate::error::CoreError;
use crate::models::{CategoryGroup, CategoryId, ServiceDefinition};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Built-in catalog, constructed on first use
static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| {
    let catalog = Catalog::new(builtin::category_groups(), builtin::service_definitions())
        .unwrap_or_else(|e| panic!("built-in catalog is invalid: {e}"));
    tracing::debug!(
        groups = catalog.groups.len(),
        services = catalog.services.len(),
        "Built-in catalog loaded"
    );
    Arc::new(catalog)
});

/// A service definition joined with its category group
#[derive(Debug, Clone)]
pub struct CatalogService {
    pub definition: ServiceDefinition,
    group_index: usize,
}

impl CatalogService {
    pub fn id(&self) -> &str {
        &self.definition.id
    }
}

/// Validated, read-only set of category groups and services
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<CategoryGroup>,
    services: Vec<CatalogService>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, checking its invariants
    ///
    /// Fails when a group id repeats, a service id repeats, a service points
    /// at a category without a group, or a default hours value is negative
    /// or not finite.
    pub fn new(
        groups: Vec<CategoryGroup>,
        definitions: Vec<ServiceDefinition>,
    ) -> Result<Self, CoreError> {
        let mut group_positions: HashMap<CategoryId, usize> = HashMap::new();
        for (position, group) in groups.iter().enumerate() {
            if group_positions.insert(group.id, position).is_some() {
                return Err(CoreError::DuplicateCategory { id: group.id });
            }
        }

        let mut services = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for definition in definitions {
            let group_index = *group_positions.get(&definition.category).ok_or_else(|| {
                CoreError::UnknownCategory {
                    service: definition.id.clone(),
                    category: definition.category,
                }
            })?;

            if !definition.default_hours.is_finite() || definition.default_hours < 0.0 {
                return Err(CoreError::InvalidDefaultHours {
                    service: definition.id.clone(),
                    hours: definition.default_hours,
                });
            }

            if index.insert(definition.id.clone(), services.len()).is_some() {
                return Err(CoreError::DuplicateService {
                    id: definition.id.clone(),
                });
            }

            services.push(CatalogService {
                definition,
                group_index,
            });
        }

        Ok(Self {
            groups,
            services,
            index,
        })
    }

    /// Shared built-in catalog
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    /// Category groups in display order
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Services in definition order
    pub fn services(&self) -> &[CatalogService] {
        &self.services
    }

    pub fn group(&self, id: CategoryId) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn service(&self, id: &str) -> Option<&CatalogService> {
        self.position(id).map(|pos| &self.services[pos])
    }

    /// Position of a service in [`Catalog::services`]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Category group of a service belonging to this catalog
    pub fn group_of(&self, service: &CatalogService) -> &CategoryGroup {
        &self.groups[service.group_index]
    }

    pub fn services_in(&self, category: CategoryId) -> impl Iterator<Item = &CatalogService> {
        self.services
            .iter()
            .filter(move |s| s.definition.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingType, CalculationMethod, Preset};

    fn group(id: CategoryId) -> CategoryGroup {
        CategoryGroup::new(id, "Test", BillingType::OneTime, CalculationMethod::Global)
    }

    fn service(id: &str, category: CategoryId, hours: f64) -> ServiceDefinition {
        ServiceDefinition::new(id, id, category, hours, &[Preset::Essential])
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.groups().len(), 6);
        assert_eq!(catalog.services().len(), 18);

        let ids: Vec<_> = catalog.groups().iter().map(|g| g.id).collect();
        assert_eq!(ids, CategoryId::all());
    }

    #[test]
    fn test_builtin_catalog_is_shared() {
        let a = Catalog::builtin();
        let b = Catalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_builtin_group_types() {
        let catalog = Catalog::builtin();
        let run_single = catalog.group(CategoryId::RunSingle).unwrap();
        assert_eq!(run_single.billing_type, BillingType::Monthly);
        assert_eq!(run_single.calculation_method, CalculationMethod::PerPage);

        let init_offpage = catalog.group(CategoryId::InitOffpageGlobal).unwrap();
        assert_eq!(init_offpage.billing_type, BillingType::OneTime);
        assert_eq!(init_offpage.calculation_method, CalculationMethod::Global);
    }

    #[test]
    fn test_builtin_preset_sizes() {
        let catalog = Catalog::builtin();
        let count = |preset| {
            catalog
                .services()
                .iter()
                .filter(|s| s.definition.in_preset(preset))
                .count()
        };
        assert_eq!(count(Preset::Essential), 10);
        assert_eq!(count(Preset::Advanced), 16);
        assert_eq!(count(Preset::Premium), 18);
    }

    #[test]
    fn test_services_in_category() {
        let catalog = Catalog::builtin();
        let ids: Vec<_> = catalog
            .services_in(CategoryId::RunGlobal)
            .map(|s| s.id())
            .collect();
        assert_eq!(ids, vec!["mon_tech", "rep"]);
    }

    #[test]
    fn test_rejects_duplicate_group() {
        let err = Catalog::new(
            vec![group(CategoryId::InitGlobal), group(CategoryId::InitGlobal)],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateCategory { .. }));
    }

    #[test]
    fn test_rejects_duplicate_service() {
        let err = Catalog::new(
            vec![group(CategoryId::InitGlobal)],
            vec![
                service("a", CategoryId::InitGlobal, 1.0),
                service("a", CategoryId::InitGlobal, 2.0),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateService { id } if id == "a"));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let err = Catalog::new(
            vec![group(CategoryId::InitGlobal)],
            vec![service("a", CategoryId::RunSingle, 1.0)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownCategory {
                category: CategoryId::RunSingle,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_or_nan_hours() {
        for hours in [-0.5, f64::NAN, f64::INFINITY] {
            let err = Catalog::new(
                vec![group(CategoryId::InitGlobal)],
                vec![service("a", CategoryId::InitGlobal, hours)],
            )
            .unwrap_err();
            assert!(matches!(err, CoreError::InvalidDefaultHours { .. }));
        }
    }

    #[test]
    fn test_group_of_uses_prejoined_index() {
        let catalog = Catalog::new(
            vec![group(CategoryId::RunGlobal), group(CategoryId::InitGlobal)],
            vec![service("a", CategoryId::InitGlobal, 1.0)],
        )
        .unwrap();
        let svc = catalog.service("a").unwrap();
        assert_eq!(catalog.group_of(svc).id, CategoryId::InitGlobal);
        assert_eq!(catalog.position("a"), Some(0));
        assert!(catalog.service("missing").is_none());
    }
}
