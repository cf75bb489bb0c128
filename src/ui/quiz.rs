use crate::models::{AnswerResult, QuizSession};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{cursor_column, input_scroll};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const ANSWER_PLACEHOLDER: &str = "Translate to Swedish";

fn key_span(label: &str) -> Span<'_> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn result_color(result: AnswerResult) -> Color {
    match result {
        AnswerResult::Unanswered => Color::White,
        AnswerResult::Correct => Color::Green,
        AnswerResult::Incorrect => Color::Red,
    }
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());

    // Completion is rendered by the summary view.
    let Some(word) = session.current_word() else {
        return;
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            session.category.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from("   "),
        Span::styled(
            format!("Score: {}", session.score),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from("   "),
        Span::from(format!("{}/{}", session.position + 1, session.len())),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let border_style = Style::default().fg(result_color(session.last_result));

    let question = Paragraph::new(Text::from(Line::from(Span::styled(
        word.source_term.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Word"),
    );
    f.render_widget(question, layout.question_area);

    let answer_line = if session.input_buffer.is_empty() && !session.is_locked() {
        Line::from(Span::styled(
            ANSWER_PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(session.input_buffer.as_str())
    };
    let field_width = layout.answer_area.width.saturating_sub(2);
    let column = cursor_column(&session.input_buffer, session.cursor_position);
    let (scroll_x, visible_column) = input_scroll(column, field_width);

    let answer = Paragraph::new(answer_line)
        .scroll((0, scroll_x))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Your Answer"),
        );
    f.render_widget(answer, layout.answer_area);

    if !session.is_locked() {
        let cursor_x = layout
            .answer_area
            .x
            .saturating_add(1)
            .saturating_add(visible_column);
        let cursor_y = layout.answer_area.y.saturating_add(1);
        f.set_cursor_position((cursor_x, cursor_y));
    }

    let feedback_line = match session.last_result {
        AnswerResult::Unanswered => Line::from(""),
        AnswerResult::Correct if session.celebrating => Line::from(Span::styled(
            "*** Correct! Well done! ***",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        AnswerResult::Correct => Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green),
        )),
        AnswerResult::Incorrect => Line::from(Span::styled(
            "Incorrect, try again",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
    };
    let feedback = Paragraph::new(feedback_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback, layout.feedback_area);

    let mut help_spans = Vec::new();
    if session.is_locked() {
        help_spans.extend([key_span("→/Enter"), Span::from(" Next  ")]);
    } else {
        help_spans.extend([key_span("Enter"), Span::from(" Submit  ")]);
    }
    help_spans.extend([
        key_span("Esc"),
        Span::from(" Back to Categories  "),
        key_span("Ctrl+C"),
        Span::from(" Exit"),
    ]);
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
