use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use uiloop::TickMonitor;

use super::screens::{DemoState, ScreenId};
use super::theme::*;

pub fn render(frame: &mut Frame, state: &DemoState, monitor: &TickMonitor) {
    let area = frame.area();

    // Main vertical layout: title, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_title(frame, main_layout[0], state);

    match state.screen {
        ScreenId::Counters => render_counters(frame, main_layout[1], state, monitor),
        ScreenId::Sketch => render_sketch(frame, main_layout[1], state),
    }

    render_hotkeys(frame, main_layout[2]);
}

fn render_title(frame: &mut Frame, area: Rect, state: &DemoState) {
    let line = Line::from(vec![
        Span::styled("uiloop", Style::default().fg(TITLE_CORAL)),
        Span::styled(" · ", Style::default().fg(TEXT_DIM)),
        Span::styled(state.screen.title(), Style::default().fg(TITLE_GOLD)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_counters(frame: &mut Frame, area: Rect, state: &DemoState, monitor: &TickMonitor) {
    let label = |text: &'static str| Span::styled(format!("{:<12}", text), Style::default().fg(TEXT_DIM));
    let value = |text: String| Span::styled(text, Style::default().fg(TEXT_WHITE));

    let last_click = state
        .last_click
        .map(|c| format!("{:?} at ({}, {})", c.kind, c.x, c.y))
        .unwrap_or_else(|| "-".to_string());
    let last_gesture = state
        .last_gesture
        .map(|g| format!("{:?} v={}", g.kind, g.velocity))
        .unwrap_or_else(|| "-".to_string());
    let last_key = state
        .last_key
        .map(|k| k.to_string())
        .unwrap_or_else(|| "-".to_string());

    let overrun_style = if monitor.overruns() > 0 {
        Style::default().fg(WARN_RED)
    } else {
        Style::default().fg(OK_GREEN)
    };

    let lines = vec![
        Line::from(vec![label("ticks"), value(state.ticks.to_string())]),
        Line::from(vec![
            label("clicks"),
            value(format!("{} (last: {})", state.clicks, last_click)),
        ]),
        Line::from(vec![
            label("drags"),
            value(format!(
                "{} (total: {}, {})",
                state.drags, state.drag_total.0, state.drag_total.1
            )),
        ]),
        Line::from(vec![
            label("gestures"),
            value(format!("{} (last: {})", state.gestures, last_gesture)),
        ]),
        Line::from(vec![label("last key"), value(last_key)]),
        Line::from(vec![label("transitions"), value(state.transitions.to_string())]),
        Line::default(),
        Line::from(vec![
            label("tick max"),
            value(format!("{:?}", monitor.max())),
        ]),
        Line::from(vec![
            label("overruns"),
            Span::styled(
                format!("{} (budget {:?})", monitor.overruns(), monitor.budget()),
                overrun_style,
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_sketch(frame: &mut Frame, area: Rect, state: &DemoState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
        .title(Span::styled(
            format!(" {} points ", state.trail.len()),
            Style::default().fg(TEXT_DIM),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buffer = frame.buffer_mut();
    for &(x, y) in &state.trail {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            continue;
        };
        let position = Position::new(x, y);
        if !inner.contains(position) {
            continue;
        }
        if let Some(cell) = buffer.cell_mut(position) {
            cell.set_symbol("•").set_fg(TRAIL_BLUE);
        }
    }
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(TITLE_GOLD));
    let desc = |d: &'static str| Span::styled(d, Style::default().fg(TEXT_DIM));

    let line = Line::from(vec![
        key("n"),
        desc(" next screen  "),
        key("c"),
        desc(" clear sketch  "),
        key("drag"),
        desc(" draw  "),
        key("q"),
        desc(" quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
