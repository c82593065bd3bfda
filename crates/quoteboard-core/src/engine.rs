//! Pricing engine: mutable quote configuration over a read-only catalog
//!
//! The engine owns the session state (global parameters plus one
//! active/hours pair per catalog service) and derives line-item costs and
//! totals from it on every read. Nothing is cached, so a read after any
//! mutation always reflects the latest state.
//!
//! Mutations never fail. Numbers are clamped to `>= 0` and unknown service
//! ids are ignored; the returned `bool` tells the caller whether the id was
//! found.

use crate::catalog::Catalog;
use crate::models::{
    clamp_non_negative, BillingType, CalculationMethod, CategoryGroup, CategoryId,
    GlobalParameters, Parameter, PresetSelection, ServiceDefinition,
};
use crate::pricing;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Mutable per-service state
#[derive(Debug, Clone, Copy, PartialEq)]
struct ServiceState {
    active: bool,
    current_hours: f64,
}

impl ServiceState {
    fn baseline(definition: &ServiceDefinition) -> Self {
        Self {
            active: false,
            current_hours: definition.default_hours,
        }
    }
}

/// Read-only view of one service's configuration
#[derive(Debug, Clone, Copy)]
pub struct ServiceConfiguration<'a> {
    pub definition: &'a ServiceDefinition,
    pub group: &'a CategoryGroup,
    pub active: bool,
    pub current_hours: f64,
}

impl ServiceConfiguration<'_> {
    pub fn id(&self) -> &str {
        &self.definition.id
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn billing_type(&self) -> BillingType {
        self.group.billing_type
    }

    pub fn calculation_method(&self) -> CalculationMethod {
        self.group.calculation_method
    }

    /// True when the hours were edited away from the catalog default
    pub fn hours_modified(&self) -> bool {
        self.current_hours != self.definition.default_hours
    }
}

/// Command issued by a presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    SetParameter(Parameter, f64),
    ToggleService(String),
    SetServiceHours(String, f64),
    ApplyPreset(PresetSelection),
}

/// Aggregated one-time and monthly figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QuoteTotals {
    pub initial_cost: f64,
    pub monthly_cost: f64,
    /// Effective hours (page multiplier applied) billed once
    pub initial_hours: f64,
    /// Effective hours (page multiplier applied) billed monthly
    pub monthly_hours: f64,
}

impl QuoteTotals {
    pub fn is_zero(&self) -> bool {
        self.initial_cost == 0.0
            && self.monthly_cost == 0.0
            && self.initial_hours == 0.0
            && self.monthly_hours == 0.0
    }
}

/// One active service in a [`QuoteSnapshot`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub category: CategoryId,
    pub billing_type: BillingType,
    pub hours: f64,
    pub multiplier: f64,
    pub effective_hours: f64,
    pub cost: f64,
}

/// Owned picture of the current quote, for rendering outside the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSnapshot {
    pub parameters: GlobalParameters,
    pub page_multiplier: f64,
    pub items: Vec<LineItem>,
    pub totals: QuoteTotals,
}

/// Session-scoped pricing engine
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: Arc<Catalog>,
    params: GlobalParameters,
    /// Parallel to `catalog.services()`
    states: Vec<ServiceState>,
}

impl PricingEngine {
    /// Start a session: every service inactive at its default hours
    pub fn new(catalog: Arc<Catalog>, params: GlobalParameters) -> Self {
        let states = catalog
            .services()
            .iter()
            .map(|s| ServiceState::baseline(&s.definition))
            .collect();
        Self {
            catalog,
            params: GlobalParameters::new(
                params.hourly_rate,
                params.standard_page_count,
                params.pillar_page_count,
            ),
            states,
        }
    }

    /// Built-in catalog with default parameters
    pub fn with_defaults() -> Self {
        Self::new(Catalog::builtin(), GlobalParameters::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn parameters(&self) -> &GlobalParameters {
        &self.params
    }

    // ===================
    // Commands
    // ===================

    /// Store `max(0, value)`; NaN and infinities are stored as 0
    pub fn set_parameter(&mut self, parameter: Parameter, value: f64) {
        self.params.set(parameter, value);
    }

    /// Flip a service's active flag, leaving its hours alone
    pub fn toggle_service(&mut self, id: &str) -> bool {
        match self.state_mut(id) {
            Some(state) => {
                state.active = !state.active;
                true
            }
            None => false,
        }
    }

    /// Store `max(0, hours)` as the service's current hours
    pub fn set_service_hours(&mut self, id: &str, hours: f64) -> bool {
        match self.state_mut(id) {
            Some(state) => {
                state.current_hours = clamp_non_negative(hours);
                true
            }
            None => false,
        }
    }

    /// Overwrite every service's state from a preset
    ///
    /// A named preset activates exactly its members; `Clear` deactivates
    /// everything. Either way every service's hours go back to the default,
    /// including services that stay active.
    pub fn apply_preset(&mut self, selection: impl Into<PresetSelection>) {
        let selection = selection.into();
        for (state, service) in self.states.iter_mut().zip(self.catalog.services()) {
            let active = match selection {
                PresetSelection::Named(preset) => service.definition.in_preset(preset),
                PresetSelection::Clear => false,
            };
            *state = ServiceState {
                active,
                current_hours: service.definition.default_hours,
            };
        }
        debug!(preset = %selection, active = self.active_count(), "Preset applied");
    }

    /// Dispatch a command; returns false only for an unknown service id
    pub fn apply(&mut self, command: EngineCommand) -> bool {
        match command {
            EngineCommand::SetParameter(parameter, value) => {
                self.set_parameter(parameter, value);
                true
            }
            EngineCommand::ToggleService(id) => self.toggle_service(&id),
            EngineCommand::SetServiceHours(id, hours) => self.set_service_hours(&id, hours),
            EngineCommand::ApplyPreset(selection) => {
                self.apply_preset(selection);
                true
            }
        }
    }

    fn state_mut(&mut self, id: &str) -> Option<&mut ServiceState> {
        match self.catalog.position(id) {
            Some(pos) => self.states.get_mut(pos),
            None => {
                debug!(service = id, "Ignoring unknown service id");
                None
            }
        }
    }

    // ===================
    // Queries
    // ===================

    /// All services in catalog order
    pub fn services(&self) -> impl Iterator<Item = ServiceConfiguration<'_>> + '_ {
        let catalog: &Catalog = &self.catalog;
        catalog
            .services()
            .iter()
            .zip(&self.states)
            .map(move |(service, state)| ServiceConfiguration {
                definition: &service.definition,
                group: catalog.group_of(service),
                active: state.active,
                current_hours: state.current_hours,
            })
    }

    pub fn service(&self, id: &str) -> Option<ServiceConfiguration<'_>> {
        let pos = self.catalog.position(id)?;
        let service = &self.catalog.services()[pos];
        let state = self.states[pos];
        Some(ServiceConfiguration {
            definition: &service.definition,
            group: self.catalog.group_of(service),
            active: state.active,
            current_hours: state.current_hours,
        })
    }

    /// Services grouped by category in group order; empty groups are skipped
    pub fn grouped_services(&self) -> Vec<(&CategoryGroup, Vec<ServiceConfiguration<'_>>)> {
        self.catalog
            .groups()
            .iter()
            .filter_map(|group| {
                let members: Vec<_> = self
                    .services()
                    .filter(|s| s.definition.category == group.id)
                    .collect();
                (!members.is_empty()).then_some((group, members))
            })
            .collect()
    }

    /// Current multiplier for per-page services
    pub fn page_multiplier(&self) -> f64 {
        pricing::page_multiplier(CalculationMethod::PerPage, &self.params)
    }

    /// Cost of one service under the current parameters
    pub fn compute_service_cost(&self, service: &ServiceConfiguration<'_>) -> f64 {
        pricing::service_cost(
            service.active,
            service.current_hours,
            service.calculation_method(),
            &self.params,
        )
    }

    /// Cost of a service by id; unknown ids cost 0
    pub fn service_cost(&self, id: &str) -> f64 {
        self.service(id)
            .map(|s| self.compute_service_cost(&s))
            .unwrap_or(0.0)
    }

    /// Sum cost and effective hours of active services per billing bucket
    pub fn compute_totals(&self) -> QuoteTotals {
        let mut totals = QuoteTotals::default();

        for service in self.services().filter(|s| s.active) {
            let cost = self.compute_service_cost(&service);
            let hours = pricing::effective_hours(
                service.current_hours,
                service.calculation_method(),
                &self.params,
            );

            match service.billing_type() {
                BillingType::OneTime => {
                    totals.initial_cost += cost;
                    totals.initial_hours += hours;
                }
                BillingType::Monthly => {
                    totals.monthly_cost += cost;
                    totals.monthly_hours += hours;
                }
            }
        }

        totals
    }

    pub fn active_count(&self) -> usize {
        self.states.iter().filter(|s| s.active).count()
    }

    /// Owned copy of the active line items and totals
    pub fn snapshot(&self) -> QuoteSnapshot {
        let items = self
            .services()
            .filter(|s| s.active)
            .map(|s| {
                let multiplier = pricing::page_multiplier(s.calculation_method(), &self.params);
                LineItem {
                    id: s.id().to_string(),
                    name: s.name().to_string(),
                    category: s.definition.category,
                    billing_type: s.billing_type(),
                    hours: s.current_hours,
                    multiplier,
                    effective_hours: pricing::effective_hours(
                        s.current_hours,
                        s.calculation_method(),
                        &self.params,
                    ),
                    cost: self.compute_service_cost(&s),
                }
            })
            .collect();

        QuoteSnapshot {
            parameters: self.params,
            page_multiplier: self.page_multiplier(),
            items,
            totals: self.compute_totals(),
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryGroup, Preset};

    /// Two-service catalog: A is global/one-time, B is per-page/monthly
    fn small_engine() -> PricingEngine {
        let catalog = Catalog::new(
            vec![
                CategoryGroup::new(
                    CategoryId::InitGlobal,
                    "Setup",
                    BillingType::OneTime,
                    CalculationMethod::Global,
                ),
                CategoryGroup::new(
                    CategoryId::RunSingle,
                    "Content",
                    BillingType::Monthly,
                    CalculationMethod::PerPage,
                ),
            ],
            vec![
                ServiceDefinition::new(
                    "A",
                    "Service A",
                    CategoryId::InitGlobal,
                    2.0,
                    &[Preset::Essential, Preset::Premium],
                ),
                ServiceDefinition::new("B", "Service B", CategoryId::RunSingle, 0.5, &[Preset::Premium]),
            ],
        )
        .unwrap();
        PricingEngine::new(Arc::new(catalog), GlobalParameters::new(100.0, 10.0, 2.0))
    }

    #[test]
    fn test_session_starts_inactive_at_default_hours() {
        let engine = PricingEngine::with_defaults();
        assert_eq!(engine.active_count(), 0);
        for service in engine.services() {
            assert!(!service.active);
            assert_eq!(service.current_hours, service.definition.default_hours);
        }
        assert!(engine.compute_totals().is_zero());
    }

    #[test]
    fn test_toggle_then_clear() {
        let mut engine = small_engine();
        assert!(engine.toggle_service("A"));
        assert_eq!(engine.service_cost("A"), 200.0);

        engine.apply_preset(PresetSelection::Clear);
        assert_eq!(engine.service_cost("A"), 0.0);
        assert_eq!(engine.service("A").unwrap().current_hours, 2.0);
    }

    #[test]
    fn test_toggle_keeps_hours() {
        let mut engine = small_engine();
        engine.set_service_hours("A", 7.5);
        engine.toggle_service("A");
        engine.toggle_service("A");
        let a = engine.service("A").unwrap();
        assert!(!a.active);
        assert_eq!(a.current_hours, 7.5);
        assert!(a.hours_modified());
    }

    #[test]
    fn test_per_page_monthly_scenario() {
        let mut engine = small_engine();
        engine.set_parameter(Parameter::HourlyRate, 50.0);
        engine.toggle_service("B");

        assert_eq!(engine.page_multiplier(), 13.0);
        assert_eq!(engine.service_cost("B"), 325.0);

        let totals = engine.compute_totals();
        assert_eq!(totals.monthly_cost, 325.0);
        assert_eq!(totals.monthly_hours, 6.5);
        assert_eq!(totals.initial_cost, 0.0);
        assert_eq!(totals.initial_hours, 0.0);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut engine = small_engine();
        let before = engine.snapshot();
        assert!(!engine.toggle_service("nope"));
        assert!(!engine.set_service_hours("nope", 3.0));
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.service_cost("nope"), 0.0);
    }

    #[test]
    fn test_clamping() {
        let mut engine = small_engine();
        engine.set_parameter(Parameter::HourlyRate, -5.0);
        assert_eq!(engine.parameters().hourly_rate, 0.0);

        engine.set_service_hours("A", -1.0);
        assert_eq!(engine.service("A").unwrap().current_hours, 0.0);

        engine.set_service_hours("A", f64::NAN);
        assert_eq!(engine.service("A").unwrap().current_hours, 0.0);
    }

    #[test]
    fn test_infinite_input_is_clamped() {
        let mut engine = small_engine();
        engine.toggle_service("A");
        engine.toggle_service("B");

        engine.set_parameter(Parameter::HourlyRate, f64::INFINITY);
        engine.set_service_hours("A", 0.0);
        assert_eq!(engine.parameters().hourly_rate, 0.0);
        assert_eq!(engine.service_cost("A"), 0.0);

        engine.set_parameter(Parameter::StandardPageCount, 0.0);
        engine.set_parameter(Parameter::PillarPageCount, 0.0);
        engine.set_service_hours("B", f64::INFINITY);
        assert_eq!(engine.service("B").unwrap().current_hours, 0.0);

        let totals = engine.compute_totals();
        for value in [
            totals.initial_cost,
            totals.monthly_cost,
            totals.initial_hours,
            totals.monthly_hours,
        ] {
            assert!(!value.is_nan());
        }
        assert!(totals.is_zero());
    }

    #[test]
    fn test_huge_finite_inputs_never_yield_nan() {
        let mut engine = small_engine();
        engine.toggle_service("A");
        engine.toggle_service("B");
        engine.set_parameter(Parameter::StandardPageCount, f64::MAX);
        engine.set_parameter(Parameter::PillarPageCount, f64::MAX);
        engine.set_parameter(Parameter::HourlyRate, 0.0);
        engine.set_service_hours("B", f64::MAX);

        let totals = engine.compute_totals();
        assert_eq!(totals.monthly_cost, 0.0);
        assert!(!totals.monthly_hours.is_nan());
        assert!(engine
            .snapshot()
            .items
            .iter()
            .all(|item| !item.cost.is_nan() && !item.effective_hours.is_nan()));
    }

    #[test]
    fn test_preset_is_total_overwrite() {
        let mut engine = small_engine();
        engine.toggle_service("B");
        engine.set_service_hours("A", 9.0);

        engine.apply_preset(Preset::Essential);

        let a = engine.service("A").unwrap();
        let b = engine.service("B").unwrap();
        assert!(a.active);
        assert_eq!(a.current_hours, 2.0);
        assert!(!b.active);
    }

    #[test]
    fn test_preset_rebaselines_already_active_service() {
        let mut engine = small_engine();
        engine.apply_preset(Preset::Premium);
        engine.set_service_hours("B", 3.0);
        engine.apply_preset(Preset::Premium);
        assert_eq!(engine.service("B").unwrap().current_hours, 0.5);
    }

    #[test]
    fn test_apply_commands() {
        let mut engine = small_engine();
        assert!(engine.apply(EngineCommand::ApplyPreset(PresetSelection::Named(
            Preset::Premium
        ))));
        assert!(engine.apply(EngineCommand::SetParameter(Parameter::PillarPageCount, 0.0)));
        assert!(engine.apply(EngineCommand::SetServiceHours("A".to_string(), 1.0)));
        assert!(!engine.apply(EngineCommand::ToggleService("Z".to_string())));

        let totals = engine.compute_totals();
        assert_eq!(totals.initial_cost, 100.0);
        // B: 0.5h × 10 pages × 100/h
        assert_eq!(totals.monthly_cost, 500.0);
    }

    #[test]
    fn test_totals_follow_parameter_changes() {
        let mut engine = small_engine();
        engine.apply_preset(Preset::Premium);
        let before = engine.compute_totals();
        engine.set_parameter(Parameter::StandardPageCount, 20.0);
        let after = engine.compute_totals();
        assert_eq!(before.initial_cost, after.initial_cost);
        assert!(after.monthly_cost > before.monthly_cost);
        // Repeated reads agree
        assert_eq!(engine.compute_totals(), after);
    }

    #[test]
    fn test_grouped_services_skips_empty_groups() {
        let engine = PricingEngine::with_defaults();
        let groups = engine.grouped_services();
        assert_eq!(groups.len(), 6);
        assert_eq!(groups[0].0.id, CategoryId::InitGlobal);
        assert_eq!(groups[0].1.len(), 5);

        let catalog = Catalog::new(
            vec![
                CategoryGroup::new(
                    CategoryId::InitGlobal,
                    "Empty",
                    BillingType::OneTime,
                    CalculationMethod::Global,
                ),
                CategoryGroup::new(
                    CategoryId::RunGlobal,
                    "Monitoring",
                    BillingType::Monthly,
                    CalculationMethod::Global,
                ),
            ],
            vec![ServiceDefinition::new("rep", "Reporting", CategoryId::RunGlobal, 1.0, &[])],
        )
        .unwrap();
        let engine = PricingEngine::new(Arc::new(catalog), GlobalParameters::default());
        let groups = engine.grouped_services();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0.id, CategoryId::RunGlobal);
    }

    #[test]
    fn test_snapshot_lists_active_items_only() {
        let mut engine = small_engine();
        engine.toggle_service("B");
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        let item = &snapshot.items[0];
        assert_eq!(item.id, "B");
        assert_eq!(item.multiplier, 13.0);
        assert_eq!(item.effective_hours, 6.5);
        assert_eq!(item.cost, 650.0);
        assert_eq!(snapshot.totals.monthly_cost, 650.0);
    }

    #[test]
    fn test_engines_are_independent() {
        let mut first = PricingEngine::with_defaults();
        let second = PricingEngine::with_defaults();
        first.apply_preset(Preset::Premium);
        assert_eq!(first.active_count(), 18);
        assert_eq!(second.active_count(), 0);
    }
}
