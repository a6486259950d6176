use crate::tui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(v_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(h_chunks[1]);

    // --- Assignments ---
    let window = state.schedule.window;
    let title = format!(
        " Chores {} to {} ",
        window.start.format("%Y-%m-%d"),
        window.end.format("%Y-%m-%d")
    );

    let mut lines: Vec<Line> = Vec::new();
    let date_label = format!("{}", state.selected.format("%A, %b %d %Y"));
    let mut pos_label = match (window.week_index(state.selected), window.day_offset(state.selected))
    {
        (Some(w), Some(d)) => format!("  (week {}, day {})", w, d),
        _ => String::new(),
    };
    if !state.can_prev() {
        pos_label.push_str("  [first day]");
    }
    if !state.can_next() {
        pos_label.push_str("  [last day]");
    }
    lines.push(Line::from(vec![
        Span::styled(date_label, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(pos_label, Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    match state.assignments() {
        Some(a) => {
            let card = |label: &str, who: &str| {
                Line::from(vec![
                    Span::styled(format!("{:<28}", label), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        who.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ])
            };
            lines.push(card("Trash (weekly)", &a.trash));
            lines.push(card("Vacuum (weekly)", &a.vacuum));
            lines.push(card("Bathroom + Shower, Group 1", &a.bathroom_group1));
            lines.push(card("Bathroom + Shower, Group 2", &a.bathroom_group2));
            match &a.living_room {
                Some(who) => lines.push(card("Living Room + Table", who)),
                None => lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<28}", "Living Room + Table"),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        "No duty today",
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Selected date is outside the semester window.",
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    let assignments = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(assignments, h_chunks[0]);

    // --- Slideshow ---
    let show_title = if state.loading {
        " Slideshow (Loading...) ".to_string()
    } else {
        format!(" Slideshow ({}) ", state.slideshow.entries.len())
    };
    let show_text = match state.slideshow.current_entry() {
        Some(entry) => format!(
            "Showing {}/{}\n\n{}",
            state.slideshow.current + 1,
            state.slideshow.entries.len(),
            entry.name
        ),
        None => "No images.".to_string(),
    };
    let slideshow = Paragraph::new(show_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(show_title));
    f.render_widget(slideshow, side_chunks[0]);

    // --- Upload link / QR ---
    let upload_text = if state.upload_url.is_empty() {
        "No upload page configured.".to_string()
    } else {
        let qr_line = match &state.qr_path {
            Some(path) => format!("QR image: {}", path.display()),
            None => "QR image: not fetched yet".to_string(),
        };
        format!("{}\n\n{}", state.upload_url, qr_line)
    };
    let upload = Paragraph::new(upload_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Upload "));
    f.render_widget(upload, side_chunks[1]);

    // --- Footer ---
    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[1]);
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help_text = "h/l:Day | t:Today | g/G:Start/End | r:Refresh | q:Quit";
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );
    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);
}
