//! Key bindings for each screen.
//!
//! Keys are translated into a [`Command`] by pure functions of the screen
//! state, then applied to the [`App`] in one place.

use crate::ui::app::App;
use crate::ui::detail::DetailState;
use crate::ui::form::{FormIntent, FormState};
use crate::ui::list::{ListIntent, ListViewState};
use crate::ui::route::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the shell to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    Quit,
    Navigate(Route),
    /// Re-activate the current route.
    Reload,
    List(ListIntent),
    Form(FormIntent),
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    let command = command_for(app, key);
    app.apply(command);
}

pub fn command_for(app: &App, key: KeyEvent) -> Command {
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return Command::Quit;
    }
    match app.route() {
        Route::List => list_command(key, app.list_state()),
        Route::Create | Route::Edit(_) => form_command(key, app.form_state()),
        Route::Detail(_) => detail_command(key, app.detail_state(), app.route()),
    }
}

pub fn list_command(key: KeyEvent, state: &ListViewState) -> Command {
    if is_ctrl_char(key, 'n') {
        return Command::Navigate(Route::Create);
    }
    if is_ctrl_char(key, 'r') {
        return Command::Reload;
    }
    let Some(snapshot) = state.snapshot() else {
        return Command::None;
    };

    if snapshot.confirm_delete.is_some() {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Command::List(ListIntent::ConfirmDelete)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Command::List(ListIntent::CancelDelete)
            }
            _ => Command::None,
        };
    }
    if snapshot.notice.is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Command::List(ListIntent::DismissNotice),
            _ => Command::None,
        };
    }

    let selected = snapshot.selected_book().map(|book| book.id.clone());
    if is_ctrl_char(key, 'e') {
        return selected.map_or(Command::None, |id| Command::Navigate(Route::Edit(id)));
    }
    if is_ctrl_char(key, 'd') {
        return Command::List(ListIntent::RequestDelete);
    }

    match key.code {
        KeyCode::Enter => selected.map_or(Command::None, |id| Command::Navigate(Route::Detail(id))),
        KeyCode::Up => Command::List(ListIntent::SelectUp),
        KeyCode::Down => Command::List(ListIntent::SelectDown),
        KeyCode::Left | KeyCode::PageUp => Command::List(ListIntent::PrevPage),
        KeyCode::Right | KeyCode::PageDown => Command::List(ListIntent::NextPage),
        KeyCode::Backspace => Command::List(ListIntent::FilterBackspace),
        KeyCode::Esc => Command::List(ListIntent::ClearFilter),
        KeyCode::Char(ch) if is_plain(key) => Command::List(ListIntent::FilterInput { ch }),
        _ => Command::None,
    }
}

pub fn form_command(key: KeyEvent, state: &FormState) -> Command {
    let Some(snapshot) = state.snapshot() else {
        return match key.code {
            KeyCode::Esc => Command::Navigate(Route::List),
            _ => Command::None,
        };
    };

    if snapshot.notice.is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Command::Form(FormIntent::DismissNotice),
            _ => Command::None,
        };
    }
    if snapshot.submitting {
        return Command::None;
    }

    match key.code {
        KeyCode::Esc => Command::Navigate(Route::List),
        KeyCode::Enter => Command::Form(FormIntent::Submit),
        KeyCode::Tab | KeyCode::Down => Command::Form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Command::Form(FormIntent::FocusPrev),
        KeyCode::Backspace => Command::Form(FormIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => Command::Form(FormIntent::Input { ch }),
        _ => Command::None,
    }
}

pub fn detail_command(key: KeyEvent, state: &DetailState, route: &Route) -> Command {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => Command::Navigate(Route::List),
        KeyCode::Char('r') => Command::Reload,
        KeyCode::Char('e') => match (state.book(), route) {
            (Some(_), Route::Detail(id)) => Command::Navigate(Route::Edit(id.clone())),
            _ => Command::None,
        },
        _ => Command::None,
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
