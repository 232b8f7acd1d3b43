//! Application state definitions

use super::forms::WizardForm;
use super::navigator::{Step, StepNavigator};
use super::profile::ClientProfile;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Everything the UI draws from
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub profile: ClientProfile,
    pub navigator: StepNavigator,
    pub form: WizardForm,

    /// Errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
    /// Where the last export was written
    pub last_export: Option<PathBuf>,
}

impl AppState {
    pub fn new(profile: ClientProfile) -> Self {
        let navigator = StepNavigator::new();
        let form = WizardForm::for_step(navigator.current(), &profile);
        Self {
            profile,
            navigator,
            form,
            ..Default::default()
        }
    }

    pub fn current_step(&self) -> Step {
        self.navigator.current()
    }

    pub fn next_step(&mut self) {
        self.navigator.next();
        self.on_step_changed();
    }

    pub fn prev_step(&mut self) {
        self.navigator.prev();
        self.on_step_changed();
    }

    /// Jump to a step by index; out-of-range indices clamp
    pub fn goto_step(&mut self, index: usize) {
        self.navigator.goto(index);
        self.on_step_changed();
    }

    fn on_step_changed(&mut self) {
        self.form.reset(self.navigator.current(), &self.profile);
    }

    /// Swap in a new profile. Returns whether anything changed.
    pub fn replace_profile(&mut self, profile: ClientProfile) -> bool {
        if profile == self.profile {
            return false;
        }
        self.profile = profile;
        self.form.refresh(self.navigator.current(), &self.profile);
        true
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Number of errors behind the one shown
    pub fn pending_error_count(&self) -> usize {
        self.error_queue.len().saturating_sub(1)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
