use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use taskboard_app::{Outcome, RowButton};
use taskboard_core::IdGenerator;
use unicode_segmentation::UnicodeSegmentation;

use super::view::{Focus, FormField, Ui};
use crate::config::{Action, ViewType};

impl<G: IdGenerator> Ui<G> {
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.view_type() {
            ViewType::Confirm => self.handle_confirm_key(key),
            ViewType::TaskList => self.handle_task_list_key(key),
            ViewType::Form => self.handle_form_key(key),
        }
        self.normalize();
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let proceed = if self.keybindings.matches(ViewType::Confirm, Action::Accept, &key) {
            true
        } else if self.keybindings.matches(ViewType::Confirm, Action::Decline, &key) {
            false
        } else {
            return;
        };
        let Some(prompt) = self.controller.surface_mut().confirm.take() else {
            return;
        };
        self.controller.confirm_deletion(proceed);
        if let Some(index) = self.board().position(&prompt.id) {
            self.selected = index;
        }
    }

    fn handle_task_list_key(&mut self, key: KeyEvent) {
        let bindings = &self.keybindings;
        let view = ViewType::TaskList;

        if bindings.matches(view, Action::Quit, &key) {
            self.should_quit = true;
        } else if bindings.matches(view, Action::Down, &key) {
            self.select_next();
        } else if bindings.matches(view, Action::Up, &key) {
            self.selected = self.selected.saturating_sub(1);
        } else if bindings.matches(view, Action::FocusForm, &key) {
            self.focus = Focus::Form(FormField::Title);
        } else if bindings.matches(view, Action::EditTask, &key) {
            if let Some(id) = self.selected_task_id()
                && self.controller.row_action(&id, RowButton::Edit) == Outcome::Applied
            {
                self.focus = Focus::Form(FormField::Title);
            }
        } else if bindings.matches(view, Action::CancelEdit, &key) {
            self.controller.cancel_edit();
        } else if bindings.matches(view, Action::DeleteTask, &key)
            && let Some(id) = self.selected_task_id()
        {
            self.controller.row_action(&id, RowButton::Remove);
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Focus::Form(field) = self.focus else {
            return;
        };
        let bindings = &self.keybindings;
        let view = ViewType::Form;

        if bindings.matches(view, Action::Submit, &key) {
            let form = &self.controller.surface().form;
            let (title, text) = (form.title.clone(), form.text.clone());
            if self.controller.submit(&title, &text) == Outcome::Applied {
                self.focus = Focus::Form(FormField::Title);
            }
        } else if bindings.matches(view, Action::NextField, &key) {
            self.focus = Focus::Form(match field {
                FormField::Title => FormField::Text,
                FormField::Text => FormField::Title,
            });
        } else if bindings.matches(view, Action::Leave, &key) {
            self.focus = Focus::List;
        } else if bindings.matches(view, Action::CancelEdit, &key) {
            self.controller.cancel_edit();
        } else {
            self.edit_input(field, key);
        }
    }

    /// Apply a typing key to the focused input.
    fn edit_input(&mut self, field: FormField, key: KeyEvent) {
        let form = &mut self.controller.surface_mut().form;
        let input = match field {
            FormField::Title => &mut form.title,
            FormField::Text if form.text_enabled => &mut form.text,
            FormField::Text => return,
        };
        match key.code {
            KeyCode::Backspace => {
                if let Some((last, _)) = input.grapheme_indices(true).next_back() {
                    input.truncate(last);
                }
            }
            KeyCode::Char(ch)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                input.push(ch);
            }
            _ => return,
        }

        if field == FormField::Title {
            let title = self.controller.surface().form.title.clone();
            self.controller.title_changed(&title);
        }
    }

    fn select_next(&mut self) {
        let len = self.controller.surface().rows.len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Keep selection and focus valid after the board changed underneath.
    fn normalize(&mut self) {
        let len = self.controller.surface().rows.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        if self.focus == Focus::Form(FormField::Text) && !self.controller.surface().form.text_enabled {
            self.focus = Focus::Form(FormField::Title);
        }
    }
}
