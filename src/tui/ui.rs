use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::{App, AppMode, FormField, SettingsField};
use crate::core::MAX_SAVED_PROMPTS;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    match app.mode {
        AppMode::KeyEntry => draw_key_entry(frame, app),
        AppMode::Form => draw_form(frame, app),
        AppMode::Result => draw_result(frame, app),
        AppMode::Prompts => draw_prompts(frame, app),
        AppMode::Settings => draw_settings(frame, app),
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Partner Creator",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " - Ads for local businesses",
            Style::default().fg(Color::Gray),
        ),
    ])])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(title, area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let (message, style) = if let Some(err) = &app.error_message {
        (err.as_str(), Style::default().fg(Color::Red))
    } else if let Some(status) = &app.status_message {
        (status.as_str(), Style::default().fg(Color::Green))
    } else if app.generating {
        ("Generating your ad...", Style::default().fg(Color::Yellow))
    } else {
        ("Ready", Style::default().fg(Color::Gray))
    };

    let status = Paragraph::new(message)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

/// Draw the key entry screen
fn draw_key_entry(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Intro
            Constraint::Length(3), // Key input
            Constraint::Length(3), // Status
            Constraint::Min(0),
            Constraint::Length(2), // Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);

    let intro = Paragraph::new(
        "Create stunning ads for your business in seconds.\n\
         Connect your Gemini API key to get started.",
    )
    .style(Style::default().fg(Color::White))
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[1]);

    let input = Paragraph::new(app.key_input.as_str())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title("API key (Enter to connect, Esc to quit)"),
        );
    frame.render_widget(input, chunks[2]);

    // Show cursor
    frame.set_cursor_position((
        chunks[2].x + app.key_input.len() as u16 + 1,
        chunks[2].y + 1,
    ));

    draw_status(frame, app, chunks[3]);

    let help = Paragraph::new("Get a key at ai.google.dev | Enter: Connect | Esc: Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[5]);
}

/// Draw the ad form
fn draw_form(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Form rows
            Constraint::Length(3), // Status bar
            Constraint::Length(2), // Help line
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);

    let fields = app.fields();
    let items: Vec<ListItem> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let is_selected = i == app.form_selected;

            let label_style = if is_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            if *field == FormField::Generate {
                let value = app.field_value(*field);
                let style = if app.generating {
                    Style::default().fg(Color::Yellow)
                } else if is_selected {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                return ListItem::new(Line::from(Span::styled(value, style)));
            }

            let value = if app.editing && is_selected {
                format!("{}▏", app.edit_buffer)
            } else {
                app.field_value(*field)
            };

            let value_style = if app.editing && is_selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<24}", field.label()), label_style),
                Span::styled(value, value_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("New Ad ({})", app.field_value(FormField::Mode))),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_widget(list, chunks[1]);

    draw_status(frame, app, chunks[2]);

    let help_text = if app.editing {
        "Enter: Save | Esc: Cancel".to_string()
    } else {
        let mut help =
            "↑↓: Navigate | Enter: Edit/Toggle | Tab: Mode | p: Prompts | s: Settings".to_string();
        if app.result.is_some() {
            help.push_str(" | r: Result");
        }
        help.push_str(" | q: Quit");
        help
    };
    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

/// Draw the result screen
fn draw_result(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let Some(ad) = &app.result else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Details
            Constraint::Length(3), // Status
            Constraint::Length(2), // Help
        ])
        .split(area);

    let header = Paragraph::new(vec![Line::from(vec![Span::styled(
        "Your Ad",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )])])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let lines = vec![
        Line::from(vec![
            Span::styled("Created: ", Style::default().fg(Color::Gray)),
            Span::styled(
                ad.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Format: ", Style::default().fg(Color::Gray)),
            Span::styled("9:16 vertical, PNG", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("File: ", Style::default().fg(Color::Gray)),
            Span::styled(ad.file_name(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Prompt:",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            ad.prompt_used.as_str(),
            Style::default().fg(Color::White),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("Press d to save into {}", app.config.output.directory),
            Style::default().fg(Color::Gray),
        )]),
    ];

    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: true });
    frame.render_widget(details, chunks[1]);

    draw_status(frame, app, chunks[2]);

    let help = Paragraph::new("d: Download | Esc/q: Back")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

/// Draw the prompt library screen
fn draw_prompts(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header or name input
            Constraint::Min(6),    // Prompt list
            Constraint::Length(3), // Status
            Constraint::Length(2), // Help
        ])
        .split(frame.area());

    if app.naming_prompt {
        let input = Paragraph::new(app.name_buffer.as_str())
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title("Name for the current base prompt (Enter to save, Esc to cancel)"),
            );
        frame.render_widget(input, chunks[0]);

        frame.set_cursor_position((
            chunks[0].x + app.name_buffer.len() as u16 + 1,
            chunks[0].y + 1,
        ));
    } else {
        let header = Paragraph::new(format!(
            "Saved Prompts ({}/{})",
            app.config.branding.saved_prompts.len(),
            MAX_SAVED_PROMPTS
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);
    }

    let items: Vec<ListItem> = if app.config.branding.saved_prompts.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "(no saved prompts - press n to save the current base prompt)",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        app.config
            .branding
            .saved_prompts
            .iter()
            .enumerate()
            .map(|(i, saved)| {
                let is_selected = i == app.prompt_selected;
                let is_active =
                    app.config.branding.active_prompt_id.as_deref() == Some(saved.id.as_str());

                let marker = if is_active { "● " } else { "  " };
                let name_style = if is_selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(format!("{:<12}", saved.id), name_style),
                    Span::styled(format!("{:<16}", saved.name), name_style),
                    Span::styled(
                        preview(&saved.prompt, 48),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_widget(list, chunks[1]);

    draw_status(frame, app, chunks[2]);

    let help_text = if app.naming_prompt {
        "Enter: Save | Esc: Cancel"
    } else {
        "↑↓: Navigate | Enter: Activate/Deactivate | n: New | d: Delete | Esc/q: Back"
    };
    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

/// Draw settings screen
fn draw_settings(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Settings list
            Constraint::Length(3), // Status
            Constraint::Length(2), // Help
        ])
        .split(area);

    // Header
    let header = Paragraph::new("Settings")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    // Settings list
    let fields = SettingsField::all();
    let items: Vec<ListItem> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let is_selected = i == app.settings_selected;
            let value = if app.settings_editing && is_selected {
                format!("{}▏", app.settings_edit_buffer)
            } else {
                app.get_settings_value(field)
            };

            let has_options = app.get_settings_options(field).is_some();
            let hint = if has_options { " [←→]" } else { "" };

            let content = Line::from(vec![
                Span::styled(
                    format!("{:<20}", field.label()),
                    if is_selected {
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
                Span::styled(
                    format!("{}{}", value, hint),
                    if is_selected && app.settings_editing {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::Gray)
                    },
                ),
            ]);

            ListItem::new(content)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_widget(list, chunks[1]);

    // Status
    draw_status(frame, app, chunks[2]);

    // Help
    let help_text = if app.settings_editing {
        "Enter: Save | Esc: Cancel"
    } else {
        "↑↓: Navigate | Enter/Space: Edit/Toggle | Esc/q: Back"
    };
    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

fn preview(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
