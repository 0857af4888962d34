//! Keybindings configuration for the TUI.

use anyhow::{Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Keybindings configuration for all TUI views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    /// Keybindings for the task table.
    pub task_list: TaskListKeyBindings,
    /// Keybindings while typing into the form.
    pub form: FormKeyBindings,
    /// Keybindings for the delete confirmation popup.
    pub confirm: ConfirmKeyBindings,
}

/// Keybindings for the task table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Move down in the table.
    pub down: Vec<String>,
    /// Move up in the table.
    pub up: Vec<String>,
    /// Move focus to the form.
    pub focus_form: Vec<String>,
    /// Load the selected task into the form.
    pub edit_task: Vec<String>,
    /// Leave edit mode.
    pub cancel_edit: Vec<String>,
    /// Delete the selected task.
    pub delete_task: Vec<String>,
}

/// Keybindings while the form has focus.
///
/// Printable characters without modifiers are always typed into the focused
/// input, so bindings here should use special keys or modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormKeyBindings {
    /// Submit the form.
    pub submit: Vec<String>,
    /// Switch between the title and text inputs.
    pub next_field: Vec<String>,
    /// Return focus to the table.
    pub leave: Vec<String>,
    /// Leave edit mode.
    pub cancel_edit: Vec<String>,
}

/// Keybindings for the delete confirmation popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmKeyBindings {
    /// Delete the task.
    pub accept: Vec<String>,
    /// Keep the task.
    pub decline: Vec<String>,
}

impl Default for TaskListKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Q"],
            down: vec_of_strings!["j", "J", "Down"],
            up: vec_of_strings!["k", "K", "Up"],
            focus_form: vec_of_strings!["i", "a", "Tab"],
            edit_task: vec_of_strings!["e", "E", "Enter"],
            cancel_edit: vec_of_strings!["c", "C", "Esc"],
            delete_task: vec_of_strings!["d", "D", "Delete"],
        }
    }
}

impl Default for FormKeyBindings {
    fn default() -> Self {
        Self {
            submit: vec_of_strings!["Enter"],
            next_field: vec_of_strings!["Tab"],
            leave: vec_of_strings!["Esc"],
            cancel_edit: vec_of_strings!["Ctrl+x"],
        }
    }
}

impl Default for ConfirmKeyBindings {
    fn default() -> Self {
        Self {
            accept: vec_of_strings!["y", "Y"],
            decline: vec_of_strings!["n", "N", "Esc"],
        }
    }
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - "j" -> `KeyCode::Char('j')`
/// - "Enter" -> `KeyCode::Enter`
/// - "Ctrl+d" -> `KeyCode::Char('d')` with CONTROL modifier
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    if s.is_empty() {
        bail!("Empty key string");
    }

    // A lone "+" is the plus key, not a separator.
    let (modifier_parts, key_part) = match s.rsplit_once('+') {
        Some((mods, key)) if !mods.is_empty() && !key.is_empty() => (Some(mods), key),
        _ => (None, s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for modifier in modifier_parts.into_iter().flat_map(|mods| mods.split('+')) {
        match modifier {
            "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
            "Alt" => modifiers |= KeyModifiers::ALT,
            "Shift" => modifiers |= KeyModifiers::SHIFT,
            other => bail!("Unknown modifier: {other}"),
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" => Ok(KeyCode::Esc),
        "Backspace" => Ok(KeyCode::Backspace),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Tab" => Ok(KeyCode::Tab),
        "Delete" => Ok(KeyCode::Delete),
        "Insert" => Ok(KeyCode::Insert),
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().ok_or_else(|| anyhow!("Empty char"))?;
            Ok(KeyCode::Char(ch))
        }
        other => bail!("Unknown key: {other}"),
    }
}

/// Validate the keybindings configuration.
///
/// Checks for:
/// - Empty key bindings
/// - Invalid key expressions
/// - Key conflicts within each view
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    for (view, bindings) in collect_bindings(config) {
        for (action, keys) in &bindings {
            if keys.is_empty() {
                bail!("{view}.{action} must have at least one key binding");
            }
            for key in *keys {
                parse_key(key).map_err(|err| anyhow!("{view}.{action}: invalid key '{key}': {err}"))?;
            }
        }
        validate_view_keybindings(view, &bindings)?;
    }
    Ok(())
}

fn validate_view_keybindings(view: &str, bindings: &[(&str, &[String])]) -> Result<()> {
    let mut seen: HashMap<(KeyCode, KeyModifiers), &str> = HashMap::new();
    for (action, keys) in bindings {
        for key in *keys {
            let parsed = parse_key(key)?;
            if let Some(previous) = seen.insert((parsed.code, parsed.modifiers), *action)
                && previous != *action
            {
                bail!("{view}: key '{key}' is bound to both '{previous}' and '{action}'");
            }
        }
    }
    Ok(())
}

type ViewBindings<'a> = Vec<(&'static str, &'a [String])>;

fn collect_bindings(config: &KeyBindingsConfig) -> Vec<(&'static str, ViewBindings<'_>)> {
    let list = &config.task_list;
    let form = &config.form;
    let confirm = &config.confirm;
    vec![
        (
            "task_list",
            vec![
                ("quit", list.quit.as_slice()),
                ("down", list.down.as_slice()),
                ("up", list.up.as_slice()),
                ("focus_form", list.focus_form.as_slice()),
                ("edit_task", list.edit_task.as_slice()),
                ("cancel_edit", list.cancel_edit.as_slice()),
                ("delete_task", list.delete_task.as_slice()),
            ],
        ),
        (
            "form",
            vec![
                ("submit", form.submit.as_slice()),
                ("next_field", form.next_field.as_slice()),
                ("leave", form.leave.as_slice()),
                ("cancel_edit", form.cancel_edit.as_slice()),
            ],
        ),
        (
            "confirm",
            vec![
                ("accept", confirm.accept.as_slice()),
                ("decline", confirm.decline.as_slice()),
            ],
        ),
    ]
}

/// View type for keybinding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    /// Task table.
    TaskList,
    /// Input form.
    Form,
    /// Delete confirmation popup.
    Confirm,
}

/// Action that can be performed in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Move down.
    Down,
    /// Move up.
    Up,
    /// Focus the form.
    FocusForm,
    /// Edit the selected task.
    EditTask,
    /// Leave edit mode.
    CancelEdit,
    /// Delete the selected task.
    DeleteTask,
    /// Submit the form.
    Submit,
    /// Switch form input.
    NextField,
    /// Leave the form.
    Leave,
    /// Confirm deletion.
    Accept,
    /// Decline deletion.
    Decline,
}

impl KeyBindingsConfig {
    /// Help line for a view, built from the first key of each action.
    pub fn generate_help_text(&self, view: ViewType) -> String {
        match view {
            ViewType::TaskList => format!(
                "{}:move {}:form {}:edit {}:cancel edit {}:delete {}:quit",
                Self::format_key_pair(&self.task_list.down, &self.task_list.up),
                Self::format_first_key(&self.task_list.focus_form),
                Self::format_first_key(&self.task_list.edit_task),
                Self::format_first_key(&self.task_list.cancel_edit),
                Self::format_first_key(&self.task_list.delete_task),
                Self::format_first_key(&self.task_list.quit),
            ),
            ViewType::Form => format!(
                "{}:submit {}:next field {}:cancel edit {}:back to list",
                Self::format_first_key(&self.form.submit),
                Self::format_first_key(&self.form.next_field),
                Self::format_first_key(&self.form.cancel_edit),
                Self::format_first_key(&self.form.leave),
            ),
            ViewType::Confirm => format!(
                "{}:delete {}:keep",
                Self::format_first_key(&self.confirm.accept),
                Self::format_first_key(&self.confirm.decline),
            ),
        }
    }

    fn format_first_key(keys: &[String]) -> String {
        keys.first()
            .map_or_else(|| "?".to_string(), |k| Self::format_key_display(k))
    }

    fn format_key_pair(down: &[String], up: &[String]) -> String {
        format!("{}/{}", Self::format_first_key(down), Self::format_first_key(up))
    }

    fn format_key_display(key: &str) -> String {
        match key {
            "Enter" => "↵".to_string(),
            "Backspace" => "BS".to_string(),
            "Delete" => "Del".to_string(),
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "PageUp" => "PgUp".to_string(),
            "PageDown" => "PgDn".to_string(),
            other if other.starts_with("Ctrl+") || other.starts_with("Alt+") => other.replace('+', "-"),
            other => other.to_string(),
        }
    }

    /// Check if a key event matches a configured action in a view.
    pub fn matches(&self, view: ViewType, action: Action, key: &KeyEvent) -> bool {
        self.get_keys(view, action)
            .iter()
            .filter_map(|key_str| parse_key(key_str).ok())
            .any(|expected| expected.code == key.code && expected.modifiers == key.modifiers)
    }

    fn get_keys(&self, view: ViewType, action: Action) -> &[String] {
        match (view, action) {
            (ViewType::TaskList, Action::Quit) => &self.task_list.quit,
            (ViewType::TaskList, Action::Down) => &self.task_list.down,
            (ViewType::TaskList, Action::Up) => &self.task_list.up,
            (ViewType::TaskList, Action::FocusForm) => &self.task_list.focus_form,
            (ViewType::TaskList, Action::EditTask) => &self.task_list.edit_task,
            (ViewType::TaskList, Action::CancelEdit) => &self.task_list.cancel_edit,
            (ViewType::TaskList, Action::DeleteTask) => &self.task_list.delete_task,

            (ViewType::Form, Action::Submit) => &self.form.submit,
            (ViewType::Form, Action::NextField) => &self.form.next_field,
            (ViewType::Form, Action::Leave) => &self.form.leave,
            (ViewType::Form, Action::CancelEdit) => &self.form.cancel_edit,

            (ViewType::Confirm, Action::Accept) => &self.confirm.accept,
            (ViewType::Confirm, Action::Decline) => &self.confirm.decline,

            // Invalid combinations
            _ => &[],
        }
    }
}
