//! Terminal rendering

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    if app.loading {
        let loading = Paragraph::new("Loading...")
            .block(Block::default().title("ToDo List").borders(Borders::ALL));
        frame.render_widget(loading, frame.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .title("New task (Enter to add)")
            .borders(Borders::ALL),
    );
    frame.render_widget(input, chunks[0]);

    let list_block = Block::default()
        .title("Tasks (Tab: toggle, Del: delete, Esc: quit)")
        .borders(Borders::ALL);

    if app.tasks.is_empty() {
        let placeholder = Paragraph::new("No tasks yet. Add your first!")
            .style(Style::default().fg(Color::DarkGray))
            .block(list_block);
        frame.render_widget(placeholder, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let marker = if task.completed { "[x] " } else { "[ ] " };
            let text_style = if task.completed {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(task.text.as_str(), text_style),
            ]);
            let item = ListItem::new(line);
            if i == app.selected {
                item.style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(list_block);
    frame.render_widget(list, chunks[1]);

    // Footer only renders once at least one task exists.
    let counts = app.counts();
    let footer = Paragraph::new(format!(
        "Total: {} | Done: {} | Left: {}",
        counts.total, counts.completed, counts.remaining
    ))
    .style(Style::default().fg(Color::Cyan));
    frame.render_widget(footer, chunks[2]);
}
