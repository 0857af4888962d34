use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use taskboard_app::{MessageKey, RowAffordances, SubmitLabel};

use super::view::{Focus, FormField, Ui};
use crate::config::TuiConfig;

fn expect_some<T>(value: Option<T>, ctx: &str) -> T {
    value.map_or_else(|| panic!("{ctx}"), |inner| inner)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn press(ui: &mut Ui, code: KeyCode) {
    ui.handle_key(key(code));
}

fn type_str(ui: &mut Ui, input: &str) {
    for ch in input.chars() {
        press(ui, KeyCode::Char(ch));
    }
}

fn ui() -> Ui {
    Ui::new(&TuiConfig::default())
}

/// Create a task through the form, leaving focus on the title input.
fn add_task(ui: &mut Ui, title: &str, text: &str) {
    ui.focus = Focus::Form(FormField::Title);
    type_str(ui, title);
    press(ui, KeyCode::Tab);
    type_str(ui, text);
    press(ui, KeyCode::Enter);
}

fn banner(ui: &Ui) -> Option<MessageKey> {
    ui.board().banner.as_ref().map(|banner| banner.key)
}

fn titles(ui: &Ui) -> Vec<&str> {
    ui.board().rows.iter().map(|row| row.title.as_str()).collect()
}

#[test]
fn starts_with_an_empty_locked_form() {
    let ui = ui();
    assert_eq!(ui.focus, Focus::Form(FormField::Title));
    assert!(ui.board().rows.is_empty());
    assert!(!ui.board().form.text_enabled);
    assert_eq!(ui.board().form.label, SubmitLabel::Add);
}

#[test]
fn text_input_unlocks_once_a_title_is_typed() {
    let mut ui = ui();
    press(&mut ui, KeyCode::Tab);
    assert_eq!(ui.focus, Focus::Form(FormField::Title));

    type_str(&mut ui, "a");
    assert!(ui.board().form.text_enabled);
    press(&mut ui, KeyCode::Tab);
    assert_eq!(ui.focus, Focus::Form(FormField::Text));

    press(&mut ui, KeyCode::Tab);
    press(&mut ui, KeyCode::Backspace);
    assert!(!ui.board().form.text_enabled);
}

#[test]
fn erasing_the_title_pulls_focus_back_from_text() {
    let mut ui = ui();
    type_str(&mut ui, "a");
    press(&mut ui, KeyCode::Tab);
    type_str(&mut ui, "body");
    ui.focus = Focus::Form(FormField::Title);
    press(&mut ui, KeyCode::Backspace);

    ui.focus = Focus::Form(FormField::Text);
    press(&mut ui, KeyCode::Char('x'));
    assert_eq!(ui.focus, Focus::Form(FormField::Title));
    assert!(ui.board().form.title.is_empty());
    assert_eq!(ui.board().form.text, "body");
}

#[test]
fn submitting_adds_rows_newest_first() {
    let mut ui = ui();
    add_task(&mut ui, "Buy milk", "2%");
    assert_eq!(banner(&ui), Some(MessageKey::TaskAdded));
    assert!(ui.board().form.title.is_empty());
    assert!(!ui.board().form.text_enabled);

    add_task(&mut ui, "Walk dog", "park");
    assert_eq!(titles(&ui), vec!["Walk dog", "Buy milk"]);
    assert_eq!(ui.controller.store().len(), 2);
}

#[test]
fn submitting_with_an_empty_field_warns() {
    let mut ui = ui();
    type_str(&mut ui, "Only title");
    press(&mut ui, KeyCode::Enter);

    assert!(ui.board().rows.is_empty());
    assert_eq!(banner(&ui), Some(MessageKey::FillAllFields));
    assert_eq!(ui.board().form.title, "Only title");
}

#[test]
fn edit_round_trip_updates_the_row_and_resets_the_form() {
    let mut ui = ui();
    add_task(&mut ui, "Buy milk", "2%");
    press(&mut ui, KeyCode::Esc);
    assert_eq!(ui.focus, Focus::List);

    press(&mut ui, KeyCode::Char('e'));
    assert_eq!(ui.focus, Focus::Form(FormField::Title));
    assert_eq!(ui.board().form.title, "Buy milk");
    assert_eq!(ui.board().form.label, SubmitLabel::Edit);
    assert_eq!(ui.board().rows[0].affordances, RowAffordances::EDITING);

    type_str(&mut ui, " now");
    press(&mut ui, KeyCode::Enter);

    assert_eq!(titles(&ui), vec!["Buy milk now"]);
    assert_eq!(ui.board().rows[0].text, "2%");
    assert_eq!(ui.board().rows[0].affordances, RowAffordances::DEFAULT);
    assert_eq!(ui.board().form.label, SubmitLabel::Add);
    assert!(ui.board().form.title.is_empty());
    assert_eq!(banner(&ui), Some(MessageKey::TaskUpdated));
    assert!(ui.controller.store().edit_state().is_idle());
}

#[test]
fn ctrl_x_in_the_form_cancels_the_edit() {
    let mut ui = ui();
    add_task(&mut ui, "Buy milk", "2%");
    press(&mut ui, KeyCode::Esc);
    press(&mut ui, KeyCode::Char('e'));

    ui.handle_key(ctrl('x'));
    assert!(ui.controller.store().edit_state().is_idle());
    assert!(ui.board().form.title.is_empty());
    assert_eq!(ui.board().rows[0].affordances, RowAffordances::DEFAULT);
    assert_eq!(titles(&ui), vec!["Buy milk"]);
}

#[test]
fn editing_another_row_moves_the_edit_slot() {
    let mut ui = ui();
    add_task(&mut ui, "First", "a");
    add_task(&mut ui, "Second", "b");
    press(&mut ui, KeyCode::Esc);

    press(&mut ui, KeyCode::Char('e'));
    press(&mut ui, KeyCode::Esc);
    press(&mut ui, KeyCode::Char('j'));
    press(&mut ui, KeyCode::Char('e'));

    assert_eq!(ui.board().form.title, "First");
    assert_eq!(ui.board().rows[0].affordances, RowAffordances::DEFAULT);
    assert_eq!(ui.board().rows[1].affordances, RowAffordances::EDITING);
}

#[test]
fn deletion_waits_for_an_answer() {
    let mut ui = ui();
    add_task(&mut ui, "Buy milk", "2%");
    press(&mut ui, KeyCode::Esc);

    press(&mut ui, KeyCode::Char('d'));
    let prompt = expect_some(ui.board().confirm.clone(), "confirmation prompt");
    assert_eq!(prompt.title, "Buy milk");

    press(&mut ui, KeyCode::Char('q'));
    assert!(!ui.should_quit);
    assert!(ui.board().confirm.is_some());

    press(&mut ui, KeyCode::Char('n'));
    assert!(ui.board().confirm.is_none());
    assert_eq!(titles(&ui), vec!["Buy milk"]);

    press(&mut ui, KeyCode::Char('d'));
    press(&mut ui, KeyCode::Char('y'));
    assert!(ui.board().rows.is_empty());
    assert!(ui.controller.store().is_empty());
    assert_eq!(banner(&ui), Some(MessageKey::TaskDeleted));
}

#[test]
fn deleting_the_edited_row_resets_the_form() {
    let mut ui = ui();
    add_task(&mut ui, "Buy milk", "2%");
    press(&mut ui, KeyCode::Esc);
    press(&mut ui, KeyCode::Char('e'));
    press(&mut ui, KeyCode::Esc);

    press(&mut ui, KeyCode::Char('d'));
    press(&mut ui, KeyCode::Char('y'));

    assert!(ui.controller.store().edit_state().is_idle());
    assert!(ui.board().form.title.is_empty());
    assert_eq!(ui.board().form.label, SubmitLabel::Add);
}

#[test]
fn selection_stays_within_the_rows() {
    let mut ui = ui();
    add_task(&mut ui, "First", "a");
    add_task(&mut ui, "Second", "b");
    press(&mut ui, KeyCode::Esc);

    press(&mut ui, KeyCode::Up);
    assert_eq!(ui.selected, 0);
    press(&mut ui, KeyCode::Down);
    press(&mut ui, KeyCode::Down);
    assert_eq!(ui.selected, 1);

    press(&mut ui, KeyCode::Char('d'));
    press(&mut ui, KeyCode::Char('y'));
    assert_eq!(ui.selected, 0);
    assert_eq!(titles(&ui), vec!["Second"]);
}

#[test]
fn list_keys_on_an_empty_board_do_nothing() {
    let mut ui = ui();
    press(&mut ui, KeyCode::Esc);
    press(&mut ui, KeyCode::Char('e'));
    press(&mut ui, KeyCode::Char('d'));

    assert_eq!(ui.focus, Focus::List);
    assert!(ui.board().confirm.is_none());
    assert!(ui.board().banner.is_none());
}

#[test]
fn q_quits_from_the_list_but_types_in_the_form() {
    let mut ui = ui();
    press(&mut ui, KeyCode::Char('q'));
    assert!(!ui.should_quit);
    assert_eq!(ui.board().form.title, "q");

    press(&mut ui, KeyCode::Esc);
    press(&mut ui, KeyCode::Char('q'));
    assert!(ui.should_quit);
}

#[test]
fn key_releases_are_ignored() {
    let mut ui = ui();
    let mut release = key(KeyCode::Char('a'));
    release.kind = KeyEventKind::Release;
    ui.handle_key(release);
    assert!(ui.board().form.title.is_empty());
}

#[test]
fn banner_expires_after_its_ttl() {
    let config = TuiConfig {
        message_ttl_ms: 1,
        ..TuiConfig::default()
    };
    let mut ui = Ui::new(&config);
    press(&mut ui, KeyCode::Enter);
    assert!(ui.board().banner.is_some());

    std::thread::sleep(Duration::from_millis(5));
    ui.tick();
    assert!(ui.board().banner.is_none());
}

fn render(ui: &Ui) -> String {
    render_sized(ui, 100, 24)
}

fn render_sized(ui: &Ui, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = expect_some(Terminal::new(backend).ok(), "test terminal");
    expect_some(terminal.draw(|f| ui.draw(f)).ok(), "draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

#[test]
fn renders_rows_affordances_and_status() {
    let mut ui = ui();
    add_task(&mut ui, "Buy milk", "2%");
    let screen = render(&ui);

    assert!(screen.contains("Tasks (1)"));
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("[del] [edit]"));
    assert!(screen.contains("Task added"));
    assert!(screen.contains("[ Add task ]"));
}

#[test]
fn renders_the_confirmation_popup() {
    let mut ui = ui();
    add_task(&mut ui, "Buy milk", "2%");
    press(&mut ui, KeyCode::Esc);
    press(&mut ui, KeyCode::Char('d'));
    let screen = render(&ui);

    assert!(screen.contains("Delete task?"));
    assert!(screen.contains("\"Buy milk\""));
    assert!(screen.contains("y:delete n:keep"));
}

#[test]
fn confirmation_popup_fits_very_wide_terminals() {
    let mut ui = ui();
    add_task(&mut ui, "Buy milk", "2%");
    press(&mut ui, KeyCode::Esc);
    press(&mut ui, KeyCode::Char('d'));
    let screen = render_sized(&ui, 1400, 10);

    assert!(screen.contains("Delete task?"));
}

#[test]
fn backspace_erases_a_whole_grapheme() {
    let mut ui = ui();
    type_str(&mut ui, "ae\u{301}");
    assert_eq!(ui.board().form.title, "ae\u{301}");

    press(&mut ui, KeyCode::Backspace);
    assert_eq!(ui.board().form.title, "a");
    press(&mut ui, KeyCode::Backspace);
    assert!(ui.board().form.title.is_empty());
    assert!(!ui.board().form.text_enabled);
}
