//! TUI rendering logic

use crate::app::App;
use crate::theme::{text_color, BillingColor, StatusColor};
use quoteboard_core::format::{format_currency, format_hours, format_number};
use quoteboard_core::models::{BillingType, CalculationMethod, ColorScheme, Parameter, Preset};
use quoteboard_core::pricing::PILLAR_PAGE_WEIGHT;
use quoteboard_core::{PricingEngine, ServiceConfiguration};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Main UI renderer
#[derive(Default)]
pub struct Ui {
    list_state: ListState,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the full UI
    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header + presets
                Constraint::Min(0),    // Sidebar + services
                Constraint::Length(4), // Totals
                Constraint::Length(1), // Status bar
            ])
            .split(size);

        self.render_header(frame, chunks[0], app.color_scheme);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(chunks[1]);

        self.render_sidebar(frame, body[0], &app.engine, app.color_scheme);
        self.render_services(frame, body[1], app);
        self.render_totals(frame, chunks[2], &app.engine, app.color_scheme);
        self.render_status_bar(frame, chunks[3], app);

        // Overlays
        if let Some(input) = &app.input {
            input.render(frame, size);
        }
        app.help_modal.render(frame, size);
        app.toast_manager.render(frame, size);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, scheme: ColorScheme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(StatusColor::Neutral.to_color(scheme)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(56)])
            .split(inner);

        let focus = StatusColor::Focus.to_color(scheme);
        let title = Paragraph::new(Line::from(vec![
            Span::styled("◈ ", Style::default().fg(focus)),
            Span::styled("quoteboard", Style::default().fg(text_color(scheme)).bold()),
            Span::styled(
                "  Leistungskonfiguration",
                Style::default().fg(StatusColor::Neutral.to_color(scheme)),
            ),
        ]));
        frame.render_widget(title, halves[0]);

        let mut spans = Vec::new();
        for (key, preset) in ['1', '2', '3'].iter().zip(Preset::all()) {
            spans.push(Span::styled(format!(" {} ", key), Style::default().fg(focus).bold()));
            spans.push(Span::raw(format!("{} ", preset.display_name())));
        }
        spans.push(Span::styled(" │ ", Style::default().fg(StatusColor::Neutral.to_color(scheme))));
        spans.push(Span::styled(
            "0 ",
            Style::default().fg(StatusColor::Error.to_color(scheme)).bold(),
        ));
        spans.push(Span::raw("Reset"));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
            halves[1],
        );
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect, engine: &PricingEngine, scheme: ColorScheme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(StatusColor::Neutral.to_color(scheme)))
            .title(Span::styled(
                " Basis-Parameter ",
                Style::default().fg(text_color(scheme)).bold(),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let params = engine.parameters();
        let focus = StatusColor::Focus.to_color(scheme);
        let neutral = StatusColor::Neutral.to_color(scheme);

        let mut lines = Vec::new();
        for (key, parameter) in [
            ('r', Parameter::HourlyRate),
            ('s', Parameter::StandardPageCount),
            ('p', Parameter::PillarPageCount),
        ] {
            let value = match parameter {
                Parameter::HourlyRate => format_currency(params.hourly_rate),
                _ => format_number(params.get(parameter)),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", key), Style::default().fg(focus).bold()),
                Span::styled(parameter.display_name(), Style::default().fg(neutral)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", value),
                Style::default().fg(text_color(scheme)).bold(),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("Faktor: ", Style::default().fg(neutral)),
            Span::styled(
                format_number(engine.page_multiplier()),
                Style::default().fg(text_color(scheme)),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Hinweis: Pillar Pages werden mit dem Faktor {}x gewichtet.",
                format_number(PILLAR_PAGE_WEIGHT)
            ),
            Style::default().fg(StatusColor::Info.to_color(scheme)),
        )));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    fn render_services(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let scheme = app.color_scheme;
        let engine = &app.engine;
        let selected_id = app.selected_id();

        let mut items = Vec::new();
        let mut selected_row = None;

        for (group, services) in engine.grouped_services() {
            let badge_color = BillingColor::for_type(group.billing_type, scheme);
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", BillingColor::icon(group.billing_type)),
                    Style::default().fg(badge_color),
                ),
                Span::styled(
                    group.label.to_uppercase(),
                    Style::default().fg(text_color(scheme)).bold(),
                ),
                Span::styled(
                    format!("  [{}]", group.billing_type.display_name()),
                    Style::default().fg(badge_color),
                ),
            ])));

            for service in services {
                if Some(service.id()) == selected_id {
                    selected_row = Some(items.len());
                }
                items.push(ListItem::new(service_line(engine, &service, scheme)));
            }
            items.push(ListItem::new(Line::from("")));
        }

        self.list_state.select(selected_row);

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(StatusColor::Focus.to_color(scheme)))
                    .title(Span::styled(
                        format!(
                            " Leistungen ({} aktiv) ",
                            engine.active_count()
                        ),
                        Style::default().fg(text_color(scheme)).bold(),
                    )),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_totals(&self, frame: &mut Frame, area: Rect, engine: &PricingEngine, scheme: ColorScheme) {
        let totals = engine.compute_totals();
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(StatusColor::Neutral.to_color(scheme)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, 4); 4])
            .split(inner);

        let neutral = StatusColor::Neutral.to_color(scheme);
        let one_time = BillingColor::for_type(BillingType::OneTime, scheme);
        let monthly = BillingColor::for_type(BillingType::Monthly, scheme);

        let cells = [
            ("PROJEKT-AUFWAND", format_hours(totals.initial_hours), one_time),
            ("MONATL. AUFWAND", format_hours(totals.monthly_hours), monthly),
            ("SETUP / EINMALIG", format_currency(totals.initial_cost), one_time),
            ("BETREUUNG / MONATLICH", format_currency(totals.monthly_cost), monthly),
        ];

        for ((label, value, color), column) in cells.into_iter().zip(columns.iter()) {
            let text = vec![
                Line::from(Span::styled(label, Style::default().fg(neutral))),
                Line::from(Span::styled(value, Style::default().fg(color).bold())),
            ];
            frame.render_widget(
                Paragraph::new(text).alignment(Alignment::Center),
                *column,
            );
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, app: &App) {
        let hint = if app.input.is_some() {
            "Enter übernehmen │ Esc abbrechen"
        } else {
            "Space an/aus │ +/- Std. │ e Std. │ r/s/p Parameter │ 1-3 Paket │ 0 Reset │ ? Hilfe"
        };

        let status = Line::from(vec![
            Span::styled(" q", Style::default().fg(StatusColor::Focus.to_color(app.color_scheme)).bold()),
            Span::raw(" quit │ "),
            Span::raw(hint),
        ]);

        frame.render_widget(
            Paragraph::new(status).style(Style::default().bg(StatusColor::Neutral.to_color(app.color_scheme))),
            area,
        );
    }
}

/// One service row: checkbox, name, method, hours, factor, cost
fn service_line(
    engine: &PricingEngine,
    service: &ServiceConfiguration<'_>,
    scheme: ColorScheme,
) -> Line<'static> {
    let neutral = StatusColor::Neutral.to_color(scheme);
    let (checkbox, name_style) = if service.active {
        (
            Span::styled("[✓] ", Style::default().fg(StatusColor::Success.to_color(scheme))),
            Style::default().fg(text_color(scheme)).bold(),
        )
    } else {
        (Span::styled("[ ] ", Style::default().fg(neutral)), Style::default().fg(neutral))
    };

    let factor = match service.calculation_method() {
        CalculationMethod::PerPage => format!("× {} ", format_number(engine.page_multiplier())),
        CalculationMethod::Global => String::new(),
    };

    let hours_style = if service.hours_modified() {
        Style::default().fg(StatusColor::Warning.to_color(scheme))
    } else {
        Style::default().fg(neutral)
    };

    Line::from(vec![
        checkbox,
        Span::styled(format!("{:<42}", service.name()), name_style),
        Span::styled(
            format!("{:<18}", service.calculation_method().display_name()),
            Style::default().fg(neutral),
        ),
        Span::styled(format!("{:>10} ", format_hours(service.current_hours)), hours_style),
        Span::styled(format!("{:>8}", factor), Style::default().fg(neutral)),
        Span::styled(
            format!("{:>14}", format_currency(engine.compute_service_cost(service))),
            name_style,
        ),
    ])
}
