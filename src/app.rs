//! Application state and core logic

use crate::attachments::{capture_files, parse_selection, partition_results, FileReader};
use crate::config::{Theme, BRAND};
use crate::export::ReviewExport;
use crate::platform::is_command;
use crate::state::{
    append_attachments, append_default_item, remove_list_item, AppState, ClientProfile, Form,
    FormAction, FormEffect, FormInput, ListKind,
};
use crate::store::ProfileStore;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where every profile change is persisted
    store: ProfileStore,
    /// Source of attachment bytes
    reader: Arc<dyn FileReader>,
    /// Directory exports are written to
    export_dir: PathBuf,
    pub theme: Theme,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App with the persisted profile loaded
    pub fn new(store: ProfileStore, reader: Arc<dyn FileReader>, export_dir: PathBuf) -> Self {
        let profile = store.load();
        Self {
            state: AppState::new(profile),
            store,
            reader,
            export_dir,
            theme: Theme::brand(),
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Adopt `next` as the current profile and persist it if it differs
    pub fn apply(&mut self, next: ClientProfile) {
        if self.state.replace_profile(next) {
            self.store.save(&self.state.profile);
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c @ '1'..='9') = key.code {
                self.state.goto_step(step_index(c));
                return Ok(());
            }
        }

        if is_command(key.modifiers) {
            match key.code {
                KeyCode::Char('e') => self.export(),
                KeyCode::Char('d') => self.remove_active_row(),
                KeyCode::Char('n') => self.state.next_step(),
                KeyCode::Char('p') => self.state.prev_step(),
                _ => {}
            }
            return Ok(());
        }

        let input = match key.code {
            KeyCode::PageDown => {
                self.state.next_step();
                return Ok(());
            }
            KeyCode::PageUp => {
                self.state.prev_step();
                return Ok(());
            }
            KeyCode::F(n @ 1..=9) => {
                self.state.goto_step(usize::from(n) - 1);
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.form.next_field();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.form.prev_field();
                return Ok(());
            }
            KeyCode::Enter => FormInput::Enter,
            KeyCode::Backspace => FormInput::Backspace,
            KeyCode::Left => FormInput::Left,
            KeyCode::Right => FormInput::Right,
            KeyCode::Char(c) => FormInput::Char(c),
            _ => return Ok(()),
        };

        let profile = self.state.profile.clone();
        match self.state.form.handle(input, &profile) {
            FormEffect::None => {}
            FormEffect::Update(next) => self.apply(next),
            FormEffect::Action(action) => self.run_action(action).await,
        }
        Ok(())
    }

    async fn run_action(&mut self, action: FormAction) {
        match action {
            FormAction::Add(kind) => self.add_row(kind),
            FormAction::AttachFiles => self.attach_files().await,
            FormAction::Export => self.export(),
        }
    }

    /// Append a blank row and move focus onto it
    fn add_row(&mut self, kind: ListKind) {
        let index = kind.len(&self.state.profile);
        let next = append_default_item(&self.state.profile, kind);
        self.apply(next);
        let position = self
            .state
            .form
            .fields
            .iter()
            .position(|f| f.binding.row() == Some((kind, index)));
        if let Some(position) = position {
            self.state.form.set_active_field(position);
        }
    }

    /// Delete the list row holding the focused field
    fn remove_active_row(&mut self) {
        let Some((kind, index)) = self.state.form.active_row() else {
            self.status_message = Some("Nothing to remove here".to_string());
            return;
        };
        let next = remove_list_item(&self.state.profile, kind, index);
        self.apply(next);
        self.status_message = Some("Row removed".to_string());
    }

    /// Read every path typed into the attachment field and append the results
    pub async fn attach_files(&mut self) {
        let paths = parse_selection(&self.state.form.attachment_input);
        if paths.is_empty() {
            self.status_message = Some("Type one or more file paths first".to_string());
            return;
        }

        let results = capture_files(Arc::clone(&self.reader), paths).await;
        let (attached, failed) = partition_results(results);
        let count = attached.len();
        if count > 0 {
            let next = append_attachments(&self.state.profile, attached);
            self.apply(next);
        }
        for err in failed {
            tracing::warn!("attachment rejected: {err}");
            self.push_error(err.to_string());
        }
        self.state.form.attachment_input.clear();
        self.status_message = Some(format!(
            "Attached {count} file{}",
            if count == 1 { "" } else { "s" }
        ));
    }

    /// Render the review and write it to the export directory
    pub fn export(&mut self) {
        let export = ReviewExport::render(&self.state.profile, BRAND);
        match export.save_to(&self.export_dir) {
            Ok(path) => {
                self.status_message = Some(format!("Saved {}", path.display()));
                self.state.last_export = Some(path);
            }
            Err(err) => {
                tracing::warn!("export failed: {err}");
                self.push_error(format!("Export failed: {err}"));
            }
        }
    }
}

fn step_index(digit: char) -> usize {
    digit.to_digit(10).map_or(0, |d| d as usize - 1)
}
