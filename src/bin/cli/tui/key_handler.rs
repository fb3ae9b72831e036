use crossterm::event::{KeyCode, KeyEvent};

use quizbook_lib::recall::Performance;

use super::app_state::{Screen, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    match state.screen {
        Screen::ReviewPrompt => handle_review_prompt_key(state, key),
        Screen::ReviewRevealed => handle_review_revealed_key(state, key),
        Screen::ReviewSummary => handle_terminal_screen_key(state, key),
        Screen::Question => handle_question_key(state, key),
        Screen::AnswerInput => handle_input_key(state, key),
        Screen::Score => handle_score_key(state, key),
        Screen::ReviewAnswers => handle_review_answers_key(state, key),
    }
}

fn handle_review_prompt_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char(' ') | KeyCode::Enter => state.reveal(),
        KeyCode::Char('s') => state.skip_review_item(),
        _ => {}
    }
}

fn handle_review_revealed_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char('1') => state.rate(Performance::Forgot),
        KeyCode::Char('2') => state.rate(Performance::Good),
        KeyCode::Char('3') => state.rate(Performance::Easy),
        _ => {}
    }
}

fn handle_terminal_screen_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => state.quit = true,
        _ => {}
    }
}

fn handle_question_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.select_next_option(),
        KeyCode::Char('k') | KeyCode::Up => state.select_previous_option(),
        KeyCode::Enter | KeyCode::Char(' ') => state.confirm_answer(),
        KeyCode::Char('l') | KeyCode::Right => state.next_question(),
        KeyCode::Char('h') | KeyCode::Left => state.previous_question(),
        KeyCode::Char('f') => state.finish_quiz(),
        _ => {}
    }
}

fn handle_input_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.input_text.clear();
            state.screen = Screen::Question;
        }
        KeyCode::Enter => state.submit_input(),
        KeyCode::Backspace => {
            state.input_text.pop();
        }
        KeyCode::Char(c) => {
            state.input_text.push(c);
        }
        _ => {}
    }
}

fn handle_score_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Enter | KeyCode::Char('r') => state.screen = Screen::ReviewAnswers,
        _ => {}
    }
}

fn handle_review_answers_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Esc => state.screen = Screen::Score,
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => {
            state.next_review_answer()
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => {
            state.previous_review_answer()
        }
        KeyCode::Char('a') => state.add_current_to_recall(),
        _ => {}
    }
}
