//! Non-interactive commands: `quote` and `catalog`
//!
//! Builds quotes from command-line flags and prints them as tables or JSON.

use chrono::{DateTime, Utc};
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Row, Table};
use quoteboard_core::error::CoreError;
use quoteboard_core::format::{format_currency, format_hours, format_number};
use quoteboard_core::models::{CategoryGroup, ServiceDefinition};
use quoteboard_core::{Catalog, EngineCommand, PricingEngine, QuoteSnapshot};
use serde::Serialize;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug)]
pub enum CliError {
    UnknownService { id: String },
    Core(CoreError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::UnknownService { id } => {
                write!(
                    f,
                    "Unknown service '{}' (run 'quoteboard catalog' to list ids)",
                    id
                )
            }
            CliError::Core(e) => match e.suggestion() {
                Some(hint) => write!(f, "{}\n  {}", e, hint),
                None => write!(f, "{}", e),
            },
        }
    }
}

impl std::error::Error for CliError {}

impl From<CoreError> for CliError {
    fn from(e: CoreError) -> Self {
        CliError::Core(e)
    }
}

// ============================================================================
// Flag handling
// ============================================================================

/// Parse `SERVICE=HOURS` (decimal comma accepted)
pub fn parse_hours_assignment(input: &str) -> Result<(String, f64), CoreError> {
    let invalid = || CoreError::InvalidHoursAssignment {
        input: input.to_string(),
    };

    let (id, hours) = input.split_once('=').ok_or_else(invalid)?;
    let id = id.trim();
    if id.is_empty() {
        return Err(invalid());
    }
    let hours: f64 = hours
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| invalid())?;

    Ok((id.to_string(), hours))
}

/// Apply `--toggle` ids then `--hours` overrides
pub fn apply_quote_flags(
    engine: &mut PricingEngine,
    toggles: &[String],
    hours: &[String],
) -> Result<(), CliError> {
    let mut commands = Vec::with_capacity(toggles.len() + hours.len());
    for id in toggles {
        commands.push((id.clone(), EngineCommand::ToggleService(id.clone())));
    }
    for assignment in hours {
        let (id, value) = parse_hours_assignment(assignment)?;
        commands.push((id.clone(), EngineCommand::SetServiceHours(id, value)));
    }

    for (id, command) in commands {
        if !engine.apply(command) {
            return Err(CliError::UnknownService { id });
        }
    }

    Ok(())
}

// ============================================================================
// Output
// ============================================================================

#[derive(Serialize)]
struct QuoteReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    snapshot: &'a QuoteSnapshot,
}

/// Format a quote (human or JSON)
pub fn format_quote(snapshot: &QuoteSnapshot, json: bool, no_color: bool) -> String {
    if json {
        let report = QuoteReport {
            generated_at: Utc::now(),
            snapshot,
        };
        return serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string());
    }

    let params = &snapshot.parameters;
    let mut lines = vec![format!(
        "Stundensatz: {} │ Seiten: {} + {} Pillar │ Faktor: {}",
        format_currency(params.hourly_rate),
        format_number(params.standard_page_count),
        format_number(params.pillar_page_count),
        format_number(snapshot.page_multiplier),
    )];

    if snapshot.items.is_empty() {
        lines.push("Keine Leistungen ausgewählt.".to_string());
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let headers = ["Leistung", "Abrechnung", "Std.", "Faktor", "Aufwand", "Kosten"];
        if no_color {
            table.set_header(headers.to_vec());
        } else {
            table.set_header(
                headers
                    .iter()
                    .map(|h| Cell::new(h).fg(Color::Cyan))
                    .collect::<Vec<_>>(),
            );
        }

        for item in &snapshot.items {
            table.add_row(Row::from(vec![
                Cell::new(&item.name),
                Cell::new(item.billing_type.display_name()),
                Cell::new(format_hours(item.hours)).set_alignment(CellAlignment::Right),
                Cell::new(format!("× {}", format_number(item.multiplier)))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format_hours(item.effective_hours)).set_alignment(CellAlignment::Right),
                Cell::new(format_currency(item.cost)).set_alignment(CellAlignment::Right),
            ]));
        }

        lines.push(table.to_string());
    }

    let totals = &snapshot.totals;
    lines.push(format!(
        "Setup / Einmalig:      {:>14}   ({})",
        format_currency(totals.initial_cost),
        format_hours(totals.initial_hours)
    ));
    lines.push(format!(
        "Betreuung / Monatlich: {:>14}   ({})",
        format_currency(totals.monthly_cost),
        format_hours(totals.monthly_hours)
    ));

    lines.join("\n")
}

#[derive(Serialize)]
struct CatalogGroupReport<'a> {
    #[serde(flatten)]
    group: &'a CategoryGroup,
    services: Vec<&'a ServiceDefinition>,
}

/// Format the catalog grouped by category (human or JSON)
pub fn format_catalog(catalog: &Catalog, json: bool, no_color: bool) -> String {
    if json {
        let report: Vec<_> = catalog
            .groups()
            .iter()
            .map(|group| CatalogGroupReport {
                group,
                services: catalog
                    .services_in(group.id)
                    .map(|s| &s.definition)
                    .collect(),
            })
            .collect();
        return serde_json::to_string_pretty(&report).unwrap_or_else(|_| "[]".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers = ["ID", "Leistung", "Std.", "Pakete"];
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }

    for group in catalog.groups() {
        let title = format!(
            "{} [{} · {}]",
            group.label,
            group.billing_type.display_name(),
            group.calculation_method.display_name()
        );
        let title = if no_color {
            Cell::new(title)
        } else {
            Cell::new(title).fg(Color::Yellow)
        };
        table.add_row(Row::from(vec![title]));

        for service in catalog.services_in(group.id) {
            let definition = &service.definition;
            let presets = definition
                .presets
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(Row::from(vec![
                Cell::new(&definition.id),
                Cell::new(&definition.name),
                Cell::new(format_hours(definition.default_hours)).set_alignment(CellAlignment::Right),
                Cell::new(presets),
            ]));
        }
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoteboard_core::models::Preset;

    #[test]
    fn test_parse_hours_assignment() {
        assert_eq!(
            parse_hours_assignment("meta=0.5").unwrap(),
            ("meta".to_string(), 0.5)
        );
        assert_eq!(
            parse_hours_assignment(" faq = 1,5 ").unwrap(),
            ("faq".to_string(), 1.5)
        );
        // Negative values parse; the engine clamps them
        assert_eq!(
            parse_hours_assignment("arch=-2").unwrap(),
            ("arch".to_string(), -2.0)
        );
    }

    #[test]
    fn test_parse_hours_assignment_invalid() {
        for input in ["meta", "=2", "meta=", "meta=abc"] {
            assert!(
                matches!(
                    parse_hours_assignment(input),
                    Err(CoreError::InvalidHoursAssignment { .. })
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_apply_quote_flags_order() {
        let mut engine = PricingEngine::with_defaults();
        engine.apply_preset(Preset::Essential);

        // arch is in essential, so the toggle switches it off again
        apply_quote_flags(
            &mut engine,
            &["arch".to_string(), "rep".to_string()],
            &["meta=1".to_string()],
        )
        .unwrap();

        assert!(!engine.service("arch").unwrap().active);
        assert!(engine.service("rep").unwrap().active);
        assert_eq!(engine.service("meta").unwrap().current_hours, 1.0);
    }

    #[test]
    fn test_apply_quote_flags_unknown_service() {
        let mut engine = PricingEngine::with_defaults();
        let err = apply_quote_flags(&mut engine, &["nope".to_string()], &[]).unwrap_err();
        assert!(matches!(err, CliError::UnknownService { ref id } if id == "nope"));

        let err = apply_quote_flags(&mut engine, &[], &["ghost=3".to_string()]).unwrap_err();
        assert!(err.to_string().contains("ghost"));
        assert_eq!(engine.active_count(), 0);
    }

    #[test]
    fn test_apply_quote_flags_bad_assignment() {
        let mut engine = PricingEngine::with_defaults();
        let err = apply_quote_flags(&mut engine, &[], &["meta:2".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::InvalidHoursAssignment { .. })));
        assert!(err.to_string().contains("--hours meta=0.5"));
    }

    #[test]
    fn test_format_quote_table() {
        let mut engine = PricingEngine::with_defaults();
        engine.toggle_service("arch");
        let output = format_quote(&engine.snapshot(), false, true);

        assert!(output.contains("Themenstruktur & URL-Logik"));
        assert!(output.contains("240,00 €"));
        assert!(output.contains("Faktor: 13"));
    }

    #[test]
    fn test_format_quote_empty() {
        let engine = PricingEngine::with_defaults();
        let output = format_quote(&engine.snapshot(), false, true);
        assert!(output.contains("Keine Leistungen ausgewählt."));
        assert!(output.contains("0,00 €"));
    }

    #[test]
    fn test_format_quote_json() {
        let mut engine = PricingEngine::with_defaults();
        engine.toggle_service("arch");
        let output = format_quote(&engine.snapshot(), true, false);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["generated_at"].is_string());
        assert_eq!(value["totals"]["initial_cost"], 240.0);
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
        assert_eq!(value["items"][0]["id"], "arch");
    }

    #[test]
    fn test_format_catalog() {
        let catalog = Catalog::builtin();
        let output = format_catalog(&catalog, false, true);
        assert!(output.contains("link_build"));
        assert!(output.contains("Laufend: Content Pflege"));

        let json = format_catalog(&catalog, true, true);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let groups = value.as_array().unwrap();
        assert_eq!(groups.len(), 6);
        let services: usize = groups
            .iter()
            .map(|g| g["services"].as_array().unwrap().len())
            .sum();
        assert_eq!(services, 18);
    }
}
