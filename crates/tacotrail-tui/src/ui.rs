// UI rendering logic
use crate::{App, InputMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, List, ListItem, Paragraph, Wrap,
    },
    Frame,
};
use tacotrail_maps::MapScene;

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Filter chips
            Constraint::Min(8),    // Map + venue list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_search_input(frame, app, chunks[1]);
    render_filter_chips(frame, app, chunks[2]);

    // Map on top, cards below - same shape as the phone layout
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[3]);

    render_map(frame, app, content_chunks[0]);
    render_venue_list(frame, app, content_chunks[1]);
    render_status_bar(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "🌮 Chattanooga Taco Trail",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "{}/{} venues",
                app.visible.len(),
                app.browser.catalog().len()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.input_mode == InputMode::Searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let text = if app.search_text().is_empty() && app.input_mode != InputMode::Searching {
        Span::styled(
            "Search tacos, ingredients... (press /)",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(app.search_text().to_string())
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search"),
    );
    frame.render_widget(input, area);
}

fn chip(label: &str, active: bool) -> Span<'_> {
    if active {
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(Color::DarkGray))
    }
}

fn render_filter_chips(frame: &mut Frame, app: &App, area: Rect) {
    let criteria = app.browser.criteria();
    let chips = Line::from(vec![
        chip("🥬 Vegetarian [v]", criteria.vegetarian),
        Span::raw(" "),
        chip("🌱 Vegan [V]", criteria.vegan),
        Span::raw(" "),
        chip("🌾 Gluten-Free [g]", criteria.gluten_free),
        Span::raw(" "),
        chip("❤️ Favorites [o]", criteria.favorites_only),
    ]);
    frame.render_widget(Paragraph::new(chips), area);
}

fn render_map(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.input_mode == InputMode::Map;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Map");

    match app.presenter.scene() {
        MapScene::Interactive {
            center,
            latitude_span,
            longitude_span,
            markers,
            user_position,
        } => {
            let selected = app.selected_index;
            let canvas = Canvas::default()
                .block(block)
                .marker(symbols::Marker::Braille)
                .x_bounds([
                    center.longitude - longitude_span / 2.0,
                    center.longitude + longitude_span / 2.0,
                ])
                .y_bounds([
                    center.latitude - latitude_span / 2.0,
                    center.latitude + latitude_span / 2.0,
                ])
                .paint(move |ctx| {
                    let coords: Vec<(f64, f64)> = markers
                        .iter()
                        .map(|m| (m.coord.longitude, m.coord.latitude))
                        .collect();
                    ctx.draw(&Points {
                        coords: &coords,
                        color: Color::LightRed,
                    });

                    for (index, marker) in markers.iter().enumerate() {
                        let style = if index == selected {
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        ctx.print(
                            marker.coord.longitude,
                            marker.coord.latitude,
                            Line::from(Span::styled(format!("📍{}", marker.title), style)),
                        );
                    }

                    if let Some(position) = user_position {
                        ctx.print(
                            position.longitude,
                            position.latitude,
                            Line::from(Span::styled(
                                "@ you",
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            )),
                        );
                    }
                });
            frame.render_widget(canvas, area);
        }
        MapScene::Embedded { embed_url, strip } => {
            let inner_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(2), Constraint::Length(1)])
                .split(block.inner(area));
            frame.render_widget(block, area);

            let mut lines = vec![
                Line::from(Span::styled(
                    "Embedded map (open in a browser):",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    embed_url.to_string(),
                    Style::default().fg(Color::Blue),
                )),
            ];
            if strip.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No venues match the current filters",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: true }),
                inner_chunks[0],
            );

            // Numbered strip - the tappable stand-in for markers
            let mut spans = Vec::new();
            for (index, entry) in strip.iter().enumerate() {
                let style = if index == app.selected_index {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                spans.push(Span::styled(
                    format!(" {} {} ", entry.number, entry.label),
                    style,
                ));
                spans.push(Span::raw(" "));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), inner_chunks[1]);
        }
    }
}

fn render_venue_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .visible
        .iter()
        .map(|venue| {
            let favorite = if app.browser.is_favorite(&venue.id) {
                "❤️"
            } else {
                "🤍"
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(
                    venue.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(favorite),
            ])];

            if let Some(description) = &venue.description {
                lines.push(Line::from(Span::styled(
                    description.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(Span::styled(
                venue.address.clone(),
                Style::default().fg(Color::DarkGray),
            )));

            let mut detail_spans = vec![Span::styled(
                format!("⭐ {}", venue.featured_item_display()),
                Style::default().fg(Color::LightRed),
            )];
            for specialty in &venue.specialties {
                detail_spans.push(Span::raw("  "));
                detail_spans.push(Span::styled(
                    format!("🌮 {}", specialty),
                    Style::default().fg(Color::LightYellow),
                ));
            }
            lines.push(Line::from(detail_spans));

            let mut badge_spans = Vec::new();
            if venue.dietary.vegetarian {
                badge_spans.push(Span::raw("🥬 "));
            }
            if venue.dietary.vegan {
                badge_spans.push(Span::raw("🌱 "));
            }
            if venue.dietary.gluten_free {
                badge_spans.push(Span::raw("🌾 "));
            }
            if let Some(website) = &venue.website {
                badge_spans.push(Span::styled(
                    website.clone(),
                    Style::default().fg(Color::Blue),
                ));
            }
            if !badge_spans.is_empty() {
                lines.push(Line::from(badge_spans));
            }
            lines.push(Line::from(""));

            ListItem::new(lines)
        })
        .collect();

    let title = if app.visible.is_empty() {
        "Venues - nothing matches, try clearing filters [c]"
    } else {
        "Venues"
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Rgb(60, 30, 30)))
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(error) = &app.error_message {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(status) = &app.status_message {
        Line::from(Span::styled(status.clone(), Style::default().fg(Color::Green)))
    } else {
        let hints = match app.input_mode {
            InputMode::Normal => {
                "j/k: navigate | f: favorite | d: directions | w: website | Enter: pin | Tab: map | /: search | c: clear | q: quit"
            }
            InputMode::Searching => "type to filter | Enter/Esc: done",
            InputMode::Map => "arrows: pan | +/-: zoom | j/k: cycle pins | Enter: tap pin | m: full map | Esc: back",
        };
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };

    frame.render_widget(Paragraph::new(line), area);
}
