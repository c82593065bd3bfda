//! TUI application state and key handling
//!
//! The app never computes prices itself: every key press becomes an
//! [`EngineCommand`] and every figure on screen is read back from the engine.

use crate::components::{EditTarget, HelpModal, NumberInput, Toast, ToastManager};
use crossterm::event::KeyCode;
use quoteboard_core::models::{ColorScheme, Parameter, Preset, PresetSelection};
use quoteboard_core::{EngineCommand, PricingEngine};

/// Step used by the `+` / `-` keys
pub const HOURS_STEP: f64 = 0.1;

/// TUI Application state
pub struct App {
    /// Quote being configured
    pub engine: PricingEngine,

    /// Service ids in display order (grouped by category)
    order: Vec<String>,

    /// Index into `order`
    pub selected: usize,

    /// Number being typed, if an edit is in progress
    pub input: Option<NumberInput>,

    pub help_modal: HelpModal,

    pub toast_manager: ToastManager,

    pub color_scheme: ColorScheme,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(engine: PricingEngine, color_scheme: ColorScheme) -> Self {
        let order = engine
            .grouped_services()
            .into_iter()
            .flat_map(|(_, services)| services.into_iter().map(|s| s.id().to_string()))
            .collect();

        Self {
            engine,
            order,
            selected: 0,
            input: None,
            help_modal: HelpModal::new(),
            toast_manager: ToastManager::new(),
            color_scheme,
            should_quit: false,
        }
    }

    /// Id of the highlighted service
    pub fn selected_id(&self) -> Option<&str> {
        self.order.get(self.selected).map(String::as_str)
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        if self.help_modal.is_visible() {
            if matches!(key, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.help_modal.hide();
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.help_modal.toggle(),

            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.order.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.order.len().saturating_sub(1);
            }

            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_id().map(str::to_string) {
                    self.engine.apply(EngineCommand::ToggleService(id));
                }
            }
            KeyCode::Char('+') => self.nudge_hours(HOURS_STEP),
            KeyCode::Char('-') => self.nudge_hours(-HOURS_STEP),
            KeyCode::Char('e') => self.start_hours_edit(),

            KeyCode::Char('r') => self.start_parameter_edit(Parameter::HourlyRate),
            KeyCode::Char('s') => self.start_parameter_edit(Parameter::StandardPageCount),
            KeyCode::Char('p') => self.start_parameter_edit(Parameter::PillarPageCount),

            KeyCode::Char('1') => self.apply_preset(Preset::Essential.into()),
            KeyCode::Char('2') => self.apply_preset(Preset::Advanced.into()),
            KeyCode::Char('3') => self.apply_preset(Preset::Premium.into()),
            KeyCode::Char('0') => self.apply_preset(PresetSelection::Clear),

            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyCode) {
        let Some(input) = self.input.as_mut() else {
            return;
        };

        match key {
            KeyCode::Esc => self.input = None,
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.clear(),
            KeyCode::Enter => {
                let value = input.value();
                let clamped = !input.is_valid() || value < 0.0;
                let command = match &input.target {
                    EditTarget::Hours { service_id, .. } => {
                        EngineCommand::SetServiceHours(service_id.clone(), value)
                    }
                    EditTarget::Parameter(parameter) => {
                        EngineCommand::SetParameter(*parameter, value)
                    }
                };
                self.engine.apply(command);
                self.input = None;
                if clamped {
                    self.toast_manager
                        .push(Toast::warning("Ungültige Eingabe, Wert auf 0 gesetzt"));
                }
            }
            KeyCode::Char(c) => input.push(c),
            _ => {}
        }
    }

    fn nudge_hours(&mut self, delta: f64) {
        let Some(service) = self.selected_id().and_then(|id| self.engine.service(id)) else {
            return;
        };
        // Round to the step so repeated nudges don't accumulate float noise
        let hours = ((service.current_hours + delta) * 10.0).round() / 10.0;
        let id = service.id().to_string();
        self.engine.apply(EngineCommand::SetServiceHours(id, hours));
    }

    fn start_hours_edit(&mut self) {
        let Some(service) = self.selected_id().and_then(|id| self.engine.service(id)) else {
            return;
        };
        let target = EditTarget::Hours {
            service_id: service.id().to_string(),
            name: service.name().to_string(),
        };
        self.input = Some(NumberInput::new(target, service.current_hours));
    }

    fn start_parameter_edit(&mut self, parameter: Parameter) {
        let current = self.engine.parameters().get(parameter);
        self.input = Some(NumberInput::new(EditTarget::Parameter(parameter), current));
    }

    fn apply_preset(&mut self, selection: PresetSelection) {
        self.engine.apply(EngineCommand::ApplyPreset(selection));
        let toast = match selection {
            PresetSelection::Named(preset) => Toast::success(format!(
                "Paket {} angewendet ({} Leistungen)",
                preset.display_name(),
                self.engine.active_count()
            )),
            PresetSelection::Clear => Toast::info("Alles zurückgesetzt"),
        };
        self.toast_manager.push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ToastType;

    fn app() -> App {
        App::new(PricingEngine::with_defaults(), ColorScheme::Dark)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_order_follows_groups() {
        let app = app();
        assert_eq!(app.selected_id(), Some("arch"));
        assert_eq!(app.order.len(), 18);
        assert_eq!(app.order.last().map(String::as_str), Some("link_build"));
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected, 0);
        app.handle_key(KeyCode::Char('G'));
        assert_eq!(app.selected, 17);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected, 17);
        app.handle_key(KeyCode::Char('g'));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_space_toggles_selected_service() {
        let mut app = app();
        app.handle_key(KeyCode::Char(' '));
        assert!(app.engine.service("arch").unwrap().active);
        // 2h × 120/h
        assert_eq!(app.engine.compute_totals().initial_cost, 240.0);
        app.handle_key(KeyCode::Enter);
        assert!(!app.engine.service("arch").unwrap().active);
    }

    #[test]
    fn test_nudge_hours() {
        let mut app = app();
        app.handle_key(KeyCode::Char('+'));
        assert_eq!(app.engine.service("arch").unwrap().current_hours, 2.1);
        for _ in 0..30 {
            app.handle_key(KeyCode::Char('-'));
        }
        assert_eq!(app.engine.service("arch").unwrap().current_hours, 0.0);
    }

    #[test]
    fn test_edit_hours_via_input() {
        let mut app = app();
        app.handle_key(KeyCode::Char('e'));
        assert!(app.input.is_some());
        app.handle_key(KeyCode::Backspace);
        type_text(&mut app, "3,5");
        app.handle_key(KeyCode::Enter);
        assert!(app.input.is_none());
        assert_eq!(app.engine.service("arch").unwrap().current_hours, 3.5);
    }

    #[test]
    fn test_keys_while_editing_do_not_leak() {
        let mut app = app();
        app.handle_key(KeyCode::Char('r'));
        // 'q' and '1' are ignored by the number buffer, not treated as commands
        type_text(&mut app, "q1");
        assert!(!app.should_quit);
        assert_eq!(app.engine.active_count(), 0);
        app.handle_key(KeyCode::Esc);
        assert!(app.input.is_none());
        assert_eq!(app.engine.parameters().hourly_rate, 120.0);
    }

    #[test]
    fn test_edit_parameter_empty_input_clamps_to_zero() {
        let mut app = app();
        app.handle_key(KeyCode::Char('p'));
        app.handle_key(KeyCode::Backspace);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine.parameters().pillar_page_count, 0.0);
        assert!(app.toast_manager.latest().unwrap().message.contains("auf 0"));
    }

    #[test]
    fn test_negative_rate_clamps() {
        let mut app = app();
        app.handle_key(KeyCode::Char('r'));
        for _ in 0..3 {
            app.handle_key(KeyCode::Backspace);
        }
        type_text(&mut app, "-5");
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine.parameters().hourly_rate, 0.0);

        let toast = app.toast_manager.latest().unwrap();
        assert_eq!(toast.toast_type, ToastType::Warning);
    }

    #[test]
    fn test_delete_clears_buffer() {
        let mut app = app();
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Delete);
        assert_eq!(app.input.as_ref().unwrap().buffer(), "");
        type_text(&mut app, "25");
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine.parameters().standard_page_count, 25.0);
        assert!(app.toast_manager.is_empty());
    }

    #[test]
    fn test_presets_and_clear() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.engine.active_count(), 18);
        assert!(app
            .toast_manager
            .latest()
            .unwrap()
            .message
            .contains("Premium"));

        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.engine.active_count(), 10);

        app.handle_key(KeyCode::Char('0'));
        assert_eq!(app.engine.active_count(), 0);
        assert!(app.engine.compute_totals().is_zero());
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('?'));
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.engine.active_count(), 0);
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.help_modal.is_visible());
        assert!(!app.should_quit);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
