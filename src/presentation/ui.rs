use crate::application::{App, AuthField, AuthTab, FormField, Page, ProfileField, ThemeMode};
use crate::presentation::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    // The landing screen always uses the dark palette.
    let palette = match app.page {
        Page::Landing => Palette::dark(),
        _ => Palette::for_mode(app.theme_mode),
    };

    let background =
        Block::default().style(Style::default().bg(palette.background).fg(palette.text));
    f.render_widget(background, f.area());

    if app.page == Page::Landing {
        render_landing(f, &palette, f.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, &palette, chunks[0]);
    match app.page {
        Page::Home => render_home(f, &palette, chunks[1]),
        Page::Auth => render_auth(f, app, &palette, chunks[1]),
        Page::Profile => render_profile(f, app, &palette, chunks[1]),
        Page::Landing => {}
    }
    render_status_bar(f, app, &palette, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let session_hint = if app.session.is_authenticated() {
        "signed in · [p] profile · [x] sign out"
    } else {
        "[a] sign in"
    };
    let theme_icon = match app.theme_mode {
        ThemeMode::Dark => "☾",
        ThemeMode::Light => "☀",
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " TextTales ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("| [h] home | {} [t] theme | {}", theme_icon, session_hint)),
    ]))
    .style(Style::default().bg(palette.primary).fg(Color::White));
    f.render_widget(header, area);
}

fn render_landing(f: &mut Frame, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(area);

    let splash = Paragraph::new(vec![
        Line::from(Span::styled(
            "P U B L I S H   W I T H   P O W E R",
            Style::default().fg(palette.secondary),
        )),
        Line::default(),
        Line::from(Span::styled(
            "T E X T T A L E S",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "The Future of Blogging",
            Style::default().fg(palette.text_secondary),
        )),
        Line::default(),
        Line::from(Span::styled(
            "[s] Sign Up    [l] Log In    [Enter] Browse",
            Style::default().fg(palette.secondary),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(splash, chunks[1]);
}

fn render_home(f: &mut Frame, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            "Share Your Thoughts in TextTales",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("TextTales is the simplest way to create, manage, and share your blog posts."),
        Line::from("With full Markdown support, you can write in a way that feels natural and intuitive."),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(palette.text));
    f.render_widget(hero, chunks[0]);

    let features = [
        ("📝", "Markdown Support", "Write posts using the intuitive Markdown syntax."),
        ("🏷", "Organize with Tags", "Easily categorize your posts with tags."),
        ("💬", "Engage with Comments", "Allow readers to comment and discuss your posts."),
    ];
    let mut lines = Vec::new();
    for (icon, title, description) in features {
        lines.push(Line::from(vec![
            Span::raw(format!("{}  ", icon)),
            Span::styled(
                title,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            description,
            Style::default().fg(palette.text_secondary),
        )));
        lines.push(Line::default());
    }
    let feature_list = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(feature_list, chunks[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "TextTales · About · Privacy Policy · Licensing · Contact",
        Style::default().fg(palette.text_secondary),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}

fn render_auth(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let box_area = centered_rect(area, 58, 22);
    f.render_widget(Clear, box_area);

    let selected = Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let unselected = Style::default().fg(palette.text_secondary);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                " Sign In ",
                if app.auth_tab == AuthTab::SignIn { selected } else { unselected },
            ),
            Span::raw("    "),
            Span::styled(
                " Sign Up ",
                if app.auth_tab == AuthTab::SignUp { selected } else { unselected },
            ),
        ])
        .alignment(Alignment::Center),
        Line::default(),
    ];

    if let Some(error) = &app.form_error {
        lines.push(
            Line::from(Span::styled(error.clone(), Style::default().fg(palette.error)))
                .alignment(Alignment::Center),
        );
        lines.push(Line::default());
    }

    for field in app.auth_fields() {
        let focused = *field == app.auth_focus;
        match field {
            AuthField::Username => push_field_lines(
                &mut lines,
                "Username",
                &app.username,
                focused,
                false,
                app.username_error.as_deref(),
                palette,
            ),
            AuthField::Email => {
                let label = match app.auth_tab {
                    AuthTab::SignIn => "Email or Username",
                    AuthTab::SignUp => "Email",
                };
                push_field_lines(
                    &mut lines,
                    label,
                    &app.email,
                    focused,
                    false,
                    app.email_error.as_deref(),
                    palette,
                );
            }
            AuthField::Password => {
                let error = if app.password_touched {
                    app.password_error.as_deref()
                } else {
                    None
                };
                push_field_lines(
                    &mut lines,
                    "Password",
                    &app.password,
                    focused,
                    !app.show_password,
                    error,
                    palette,
                );
                if app.auth_tab == AuthTab::SignUp {
                    push_checklist_lines(&mut lines, app, palette);
                }
            }
            AuthField::ConfirmPassword => push_field_lines(
                &mut lines,
                "Confirm Password",
                &app.confirm_password,
                focused,
                !app.show_password,
                None,
                palette,
            ),
        }
    }

    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "Or sign in with:  Google · Apple · GitHub",
            Style::default().fg(palette.text_secondary),
        ))
        .alignment(Alignment::Center),
    );

    let title = match app.auth_tab {
        AuthTab::SignIn => "Sign In",
        AuthTab::SignUp => "Sign Up",
    };
    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().bg(palette.surface).fg(palette.text));
    f.render_widget(form, box_area);
}

fn render_profile(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let box_area = centered_rect(area, 58, 20);
    f.render_widget(Clear, box_area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Update Your Profile",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];

    let username_label = if app.editing_username {
        "Username"
    } else {
        "Username (read-only, Ctrl+E to edit)"
    };
    push_field_lines(
        &mut lines,
        username_label,
        &app.profile_username,
        app.profile_focus == ProfileField::Username,
        false,
        app.profile_username_error.as_deref(),
        palette,
    );

    let email_label = if app.editing_email {
        "Email"
    } else {
        "Email (read-only, Ctrl+E to edit)"
    };
    push_field_lines(
        &mut lines,
        email_label,
        &app.profile_email,
        app.profile_focus == ProfileField::Email,
        false,
        app.profile_email_error.as_deref(),
        palette,
    );

    lines.push(Line::default());
    if app.show_password_fields {
        push_field_lines(
            &mut lines,
            "New Password",
            &app.new_password,
            app.profile_focus == ProfileField::NewPassword,
            true,
            app.new_password_error.as_deref(),
            palette,
        );
        push_field_lines(
            &mut lines,
            "Confirm New Password",
            &app.confirm_new_password,
            app.profile_focus == ProfileField::ConfirmNewPassword,
            true,
            None,
            palette,
        );
    } else {
        lines.push(Line::from(Span::styled(
            "[Ctrl+P] Change Password",
            Style::default().fg(palette.secondary),
        )));
    }

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Profile"))
        .style(Style::default().bg(palette.surface).fg(palette.text));
    f.render_widget(form, box_area);
}

fn render_status_bar(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let text = if let Some(status) = &app.status_message {
        status.clone()
    } else {
        match app.page {
            Page::Landing => String::new(),
            Page::Home => {
                "[a] sign in/up | [p] profile | [t] theme | [Esc] splash | q: quit".to_string()
            }
            Page::Auth => {
                "Tab: switch tab | ↑↓: fields | Ctrl+R: show/hide password | Enter: submit | Esc: back"
                    .to_string()
            }
            Page::Profile => {
                "↑↓: fields | Ctrl+E: edit field | Ctrl+P: change password | Enter: save | Esc: back"
                    .to_string()
            }
        }
    };

    let bar = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(palette.text));
    f.render_widget(bar, area);
}

// Label, value with cursor, then an inline error when present.
fn push_field_lines(
    lines: &mut Vec<Line<'static>>,
    label: &'static str,
    field: &FormField,
    focused: bool,
    masked: bool,
    error: Option<&str>,
    palette: &Palette,
) {
    let label_style = if focused {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_secondary)
    };
    let marker = if focused { "> " } else { "  " };
    lines.push(Line::from(vec![
        Span::raw(marker),
        Span::styled(label, label_style),
    ]));
    lines.push(input_line(field, focused, masked, palette));
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(palette.error),
        )));
    }
    lines.push(Line::default());
}

fn input_line(field: &FormField, focused: bool, masked: bool, palette: &Palette) -> Line<'static> {
    let display: Vec<char> = if masked {
        field.value.chars().map(|_| '•').collect()
    } else {
        field.value.chars().collect()
    };

    if !focused {
        let text: String = display.into_iter().collect();
        return Line::from(Span::raw(format!("  {}", text)));
    }

    let cursor_chars = field.value[..field.cursor].chars().count();
    let before: String = display[..cursor_chars].iter().collect();
    let after: String = display[cursor_chars..].iter().collect();
    Line::from(vec![
        Span::raw(format!("  {}", before)),
        Span::styled("▏", Style::default().fg(palette.primary)),
        Span::raw(after),
    ])
}

fn push_checklist_lines(lines: &mut Vec<Line<'static>>, app: &App, palette: &Palette) {
    let items = [
        (app.password_checks.min_length, "at least 8 characters"),
        (app.password_checks.has_uppercase, "an uppercase letter"),
        (app.password_checks.has_lowercase, "a lowercase letter"),
        (app.password_checks.has_number, "a number"),
        (
            app.password_checks.has_special_char,
            "a special character (!@#$%^&*-)",
        ),
    ];
    for (met, label) in items {
        let (mark, style) = if met {
            ("✓", Style::default().fg(Color::Green))
        } else {
            ("✗", Style::default().fg(palette.text_secondary))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("    {} ", mark), style),
            Span::styled(label, Style::default().fg(palette.text_secondary)),
        ]));
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
