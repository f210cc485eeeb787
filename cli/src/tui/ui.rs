use liftlog_core::{ExerciseSummary, WeekSummary};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::summary::muscle_label;
use crate::tui::app::App;

const BAR_WIDTH: u16 = 5;
const BAR_GAP: u16 = 1;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let header = Paragraph::new(format!("LIFTLOG  {}", app.archetype.version_label()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    draw_exercise_list(f, app, content_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(8)])
        .split(content_chunks[1]);

    match app.selected() {
        Some((name, exercise)) => {
            draw_load_chart(f, name, exercise, right_chunks[0]);
            draw_info_panel(f, exercise, app.latest_week(), right_chunks[1]);
        }
        None => {
            f.render_widget(
                Paragraph::new("No exercises recorded").alignment(Alignment::Center),
                content_chunks[1],
            );
        }
    }

    let footer = Paragraph::new("j/k: Navigate | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_exercise_list(f: &mut Frame, app: &mut App, area: Rect) {
    // borders plus the highlight symbol
    let width = usize::from(area.width.saturating_sub(5));
    let items: Vec<ListItem> = app
        .names
        .iter()
        .map(|name| ListItem::new(fit_label(name, width)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Exercises ({}) ", app.names.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.state);
}

fn draw_load_chart(f: &mut Frame, name: &str, exercise: &ExerciseSummary, area: Rect) {
    let visible = usize::from(area.width.saturating_sub(2) / (BAR_WIDTH + BAR_GAP)).max(1);
    let skip = exercise.weeks.len().saturating_sub(visible);

    let bars: Vec<Bar> = exercise
        .weeks
        .iter()
        .skip(skip)
        .map(|(week, summary)| {
            let value = summary.load.round() as u64;
            Bar::default()
                .label(week.get(5..).unwrap_or(week.as_str()))
                .value(value)
                .style(Style::default().fg(Color::Green))
                .text_value(compact_load(summary.load))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} weekly load ", name)),
        )
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

fn draw_info_panel(
    f: &mut Frame,
    exercise: &ExerciseSummary,
    latest: Option<(&str, &WeekSummary)>,
    area: Rect,
) {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Blue));

    let mut lines = vec![
        Line::from(vec![label("Muscles:   "), Span::raw(muscle_label(exercise))]),
        Line::from(vec![
            label("Weeks:     "),
            Span::raw(format!("{} ({} sets)", exercise.weeks.len(), exercise.total_sets())),
        ]),
    ];
    if let Some((week, summary)) = latest {
        lines.push(Line::from(vec![
            label("Latest:    "),
            Span::styled(week.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(vec![
            label("           "),
            Span::raw(format!(
                "max {:.1} kg, {} sets, {} reps, load {:.1}",
                summary.max, summary.sets, summary.max_reps, summary.load
            )),
        ]));
    }

    let info = Paragraph::new(lines).block(
        Block::default()
            .title(" Detail ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(info, area);
}

/// Truncates `label` to `width` terminal columns, marking the cut with `…`.
fn fit_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        return label.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        fitted.push(c);
        used += w;
    }
    fitted.push('…');
    fitted
}

fn compact_load(load: f64) -> String {
    if load >= 1000.0 {
        format!("{:.1}k", load / 1000.0)
    } else {
        format!("{:.0}", load)
    }
}
