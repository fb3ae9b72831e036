use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use quizbook_lib::quiz::{Answer, Question};
use quizbook_lib::recall::algorithm::{format_interval, preview_intervals};

use super::app_state::{Screen, TuiState};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Main layout: content area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    let main_area = outer[0];
    let status_area = outer[1];

    match state.screen {
        Screen::ReviewPrompt => draw_review_prompt(f, main_area, state, false),
        Screen::ReviewRevealed => draw_review_prompt(f, main_area, state, true),
        Screen::ReviewSummary => draw_review_summary(f, main_area, state),
        Screen::Question | Screen::AnswerInput => draw_question(f, main_area, state),
        Screen::Score => draw_score(f, main_area, state),
        Screen::ReviewAnswers => draw_review_answers(f, main_area, state),
    }

    draw_status(f, status_area, state);
}

// ==================== Recall review flow ====================

fn draw_review_prompt(f: &mut Frame, area: Rect, state: &TuiState, revealed: bool) {
    let Some(review) = state.review.as_ref() else { return };
    let Some(item) = review.current() else { return };

    let title = format!(" Recall review ({}/{}) ", review.position() + 1, review.total());
    let block = Block::default().borders(Borders::ALL).title(title);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            item.question.prompt().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Question::MultipleChoice { options, .. } = &item.question {
        for (i, option) in options.iter().enumerate() {
            lines.push(Line::from(format!("  {}) {}", (b'a' + i as u8) as char, option)));
        }
        lines.push(Line::from(""));
    }

    if revealed {
        lines.push(Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                item.question.correct_display(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
        if let Some(explanation) = item.question.explanation() {
            lines.push(Line::from(""));
            lines.push(Line::from(explanation.to_string()));
        }

        let [forgot, good, easy] = preview_intervals(item);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "1: Forgot ({})   2: Good ({})   3: Easy ({})",
                format_interval(forgot),
                format_interval(good),
                format_interval(easy)
            ),
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_review_summary(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(review) = state.review.as_ref() else { return };
    let summary = review.summary();

    let block = Block::default().borders(Borders::ALL).title(" Recall review ");

    let lines: Vec<Line> = if review.total() == 0 {
        vec![
            Line::from(""),
            Line::from("  Nothing due for review."),
            Line::from(""),
            Line::from("  Add questions from a quiz review, or come back later."),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Review complete",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("  Reviewed: {}", summary.reviewed)),
            Line::from(vec![
                Span::raw("  Forgot:   "),
                Span::styled(summary.forgot.to_string(), Style::default().fg(Color::Red)),
            ]),
            Line::from(vec![
                Span::raw("  Good:     "),
                Span::styled(summary.good.to_string(), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(vec![
                Span::raw("  Easy:     "),
                Span::styled(summary.easy.to_string(), Style::default().fg(Color::Green)),
            ]),
        ]
    };

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

// ==================== Quiz-taking flow ====================

fn draw_question(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(session) = state.session.as_ref() else { return };
    let Some(question) = session.current() else { return };

    let title = format!(
        " {} — question {}/{} ({} answered) ",
        session.title(),
        session.position() + 1,
        session.len(),
        session.answered_count()
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            question.prompt().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let selected_style = Style::default().fg(Color::Black).bg(Color::Cyan);

    match question {
        Question::MultipleChoice { options, .. } => {
            let recorded = match session.current_answer() {
                Some(Answer::Choice { index }) => Some(*index),
                _ => None,
            };
            for (i, option) in options.iter().enumerate() {
                let marker = if recorded == Some(i) { "●" } else { " " };
                let text = format!(" {} {}) {}", marker, (b'a' + i as u8) as char, option);
                let line = if i == state.selected_option {
                    Line::from(Span::styled(text, selected_style))
                } else {
                    Line::from(text)
                };
                lines.push(line);
            }
        }
        Question::TrueFalse { .. } => {
            let recorded = match session.current_answer() {
                Some(Answer::Bool { value }) => Some(*value),
                _ => None,
            };
            for (i, label) in ["True", "False"].iter().enumerate() {
                let value = i == 0;
                let marker = if recorded == Some(value) { "●" } else { " " };
                let text = format!(" {} {}", marker, label);
                let line = if i == state.selected_option {
                    Line::from(Span::styled(text, selected_style))
                } else {
                    Line::from(text)
                };
                lines.push(line);
            }
        }
        Question::ShortAnswer { .. } => {
            match session.current_answer() {
                Some(Answer::Text { value }) => {
                    lines.push(Line::from(vec![
                        Span::raw(" Your answer: "),
                        Span::styled(value.clone(), Style::default().fg(Color::Cyan)),
                    ]));
                }
                _ => {
                    lines.push(Line::from(" (no answer yet)"));
                }
            }
            lines.push(Line::from(""));
            lines.push(Line::from(" Press Enter to type an answer."));
        }
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_score(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(session) = state.session.as_ref() else { return };
    let Some(outcome) = state.outcome.as_ref() else { return };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} — result ", session.title()));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Score: {}/{} ({}%)", outcome.score, outcome.total, outcome.percentage),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("  Time taken: {}", format_secs(outcome.time_taken_secs))),
        Line::from(format!("  Missed: {}", outcome.missed().count())),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}

fn draw_review_answers(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(outcome) = state.outcome.as_ref() else { return };
    let Some(graded) = outcome.review.get(state.review_index) else { return };

    let title = format!(" Review {}/{} ", state.review_index + 1, outcome.review.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    let verdict = if graded.correct {
        Span::styled("correct", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("wrong", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    };

    let given = match &graded.given {
        Some(answer) => answer.display(&graded.question),
        None => "(not answered)".to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}. {}", graded.index + 1, graded.question.prompt()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Your answer: "),
            Span::raw(given),
            Span::raw("  ("),
            verdict,
            Span::raw(")"),
        ]),
        Line::from(format!("Correct answer: {}", graded.question.correct_display())),
    ];

    if let Some(explanation) = graded.question.explanation() {
        lines.push(Line::from(""));
        lines.push(Line::from(explanation.to_string()));
    }

    if !graded.correct {
        lines.push(Line::from(""));
        if state.added_to_recall.contains(&state.review_index) {
            lines.push(Line::from(Span::styled(
                "In the recall deck",
                Style::default().fg(Color::Green),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "a: add to recall deck",
                Style::default().fg(Color::Cyan),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

// ==================== Status bar ====================

fn draw_status(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    if state.screen == Screen::AnswerInput {
        let text = format!(" Answer: {}█", state.input_text);
        let prompt = Paragraph::new(text)
            .style(Style::default().bg(Color::Blue).fg(Color::White));
        f.render_widget(prompt, area);
        return;
    }

    let hints = match state.screen {
        Screen::ReviewPrompt => " Space: reveal  s: skip  q: quit ",
        Screen::ReviewRevealed => " 1: forgot  2: good  3: easy  q: quit ",
        Screen::ReviewSummary => " q: quit ",
        Screen::Question => " j/k: select  Enter: answer  h/l: prev/next  f: finish  q: quit ",
        Screen::Score => " Enter: review answers  q: quit ",
        Screen::ReviewAnswers => " j/k: navigate  a: add to recall  Esc: score  q: quit ",
        Screen::AnswerInput => unreachable!(),
    };

    let status = Paragraph::new(hints)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}

fn format_secs(secs: i64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
