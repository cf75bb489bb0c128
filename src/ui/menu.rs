use crate::ui::layout::calculate_menu_chunks;
use crate::utils::truncate_string;
use crate::word_bank::WordBank;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const MAX_CATEGORY_WIDTH: usize = 40;

pub fn draw_menu(f: &mut Frame, word_bank: &WordBank, selected_index: usize) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Choose a Category")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let items: Vec<ListItem> = word_bank
        .category_names()
        .map(|name| {
            let count = word_bank.words(name).map_or(0, <[_]>::len);
            ListItem::new(Line::from(vec![
                Span::from(truncate_string(name, MAX_CATEGORY_WIDTH)),
                Span::styled(
                    format!("  ({} words)", count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Categories")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_symbol("> ")
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default().with_selected(Some(selected_index));
    f.render_stateful_widget(list, layout.list_area, &mut state);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Start Quiz  "),
        Span::styled(
            "q/Esc/Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
