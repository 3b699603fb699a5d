//! Keyboard input handling and interactive loop.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Stylize;

use treeselect::Selection;

use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::{colors, icons, icons_ascii, warning_icon};

use super::menu::{Picker, PickerAction};

/// Convert a keyboard event to a picker action
///
/// While the search line is being edited, printable keys go to the query.
pub fn key_to_action(key: KeyEvent, searching: bool) -> Option<PickerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(PickerAction::Quit);
    }

    if searching {
        return match key.code {
            KeyCode::Char(c) => Some(PickerAction::SearchInput(c)),
            KeyCode::Backspace => Some(PickerAction::SearchBackspace),
            KeyCode::Enter => Some(PickerAction::EndSearch),
            KeyCode::Esc => Some(PickerAction::CancelSearch),
            KeyCode::Up => Some(PickerAction::Up),
            KeyCode::Down => Some(PickerAction::Down),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PickerAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PickerAction::Down),
        KeyCode::Char(' ') => Some(PickerAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(PickerAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(PickerAction::Collapse),
        KeyCode::Char('a') => Some(PickerAction::SelectAll),
        KeyCode::Char('n') => Some(PickerAction::SelectNone),
        KeyCode::Char('i') => Some(PickerAction::Invert),
        KeyCode::Char('/') => Some(PickerAction::StartSearch),
        KeyCode::Enter => Some(PickerAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(PickerAction::Quit),
        _ => None,
    }
}

fn render_ui(
    stdout: &mut io::Stdout,
    picker: &Picker,
    caps: &TerminalCapabilities,
) -> io::Result<()> {
    use crossterm::{cursor, execute, terminal};

    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let unicode = caps.supports_unicode;
    let width = usize::from(caps.width).clamp(20, 80);

    let title = format!("treeselect · {}", picker.control().container_id());
    if caps.supports_color {
        print!("{}\r\n\r\n", title.with(colors::INFO));
    } else {
        print!("{}\r\n\r\n", title);
    }

    if let Some(search) = picker.render_search_bar(unicode) {
        print!("{}\r\n\r\n", search);
    }

    for line in picker.render(unicode).lines() {
        print!("{}\r\n", line);
    }

    let separator = if unicode {
        icons::SEPARATOR
    } else {
        icons_ascii::SEPARATOR
    };
    print!("{}\r\n", separator.repeat(width));

    for line in picker.render_status_bar(unicode, width).lines() {
        print!("{}\r\n", line);
    }
    if let Some(notice) = picker.notice() {
        print!("{} {}\r\n", warning_icon(unicode), notice);
    }
    print!("\r\n");

    for line in picker.render_help_bar().lines() {
        print!("{}\r\n", line);
    }

    stdout.flush()
}

fn event_loop(
    stdout: &mut io::Stdout,
    picker: &mut Picker,
    caps: &TerminalCapabilities,
) -> io::Result<Option<Selection>> {
    use crossterm::event::{self, Event, KeyEventKind};

    render_ui(stdout, picker, caps)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = key_to_action(key, picker.is_searching()) else {
            continue;
        };
        match action {
            PickerAction::Confirm => return Ok(Some(picker.selection())),
            PickerAction::Quit => return Ok(None),
            _ => {
                picker.handle_action(action);
                render_ui(stdout, picker, caps)?;
            }
        }
    }
}

/// Run the picker interactively
///
/// Returns the selection if confirmed, `None` if the user quit.
pub fn run_interactive(
    picker: &mut Picker,
    caps: &TerminalCapabilities,
) -> io::Result<Option<Selection>> {
    use crossterm::{cursor, execute, terminal};

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let result = event_loop(&mut stdout, picker, caps);

    // Restore the terminal even if the loop failed
    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}
