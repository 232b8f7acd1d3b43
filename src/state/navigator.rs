//! Wizard step navigation

/// The wizard steps, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Personal,
    Advisors,
    Insurance,
    PrioritiesAndPlans,
    Business,
    Introductions,
    Advisor,
    Options,
    Review,
}

impl Step {
    pub const ALL: [Step; 9] = [
        Step::Personal,
        Step::Advisors,
        Step::Insurance,
        Step::PrioritiesAndPlans,
        Step::Business,
        Step::Introductions,
        Step::Advisor,
        Step::Options,
        Step::Review,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn label(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Advisors => "Advisors",
            Self::Insurance => "Insurance",
            Self::PrioritiesAndPlans => "Priorities & Plans",
            Self::Business => "Business",
            Self::Introductions => "Introductions",
            Self::Advisor => "Advisor",
            Self::Options => "Options",
            Self::Review => "Review",
        }
    }

    /// Section heading shown above the step's fields
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Business => "Business (optional)",
            Self::Advisor => "Advisor (private)",
            Self::Review => "Review & Export",
            other => other.label(),
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Current position in the wizard. Every step is reachable at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepNavigator {
    current: usize,
}

impl StepNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Step {
        Step::ALL[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == Step::COUNT - 1
    }

    /// Advance one step, staying put on the last step
    pub fn next(&mut self) {
        self.current = (self.current + 1).min(Step::COUNT - 1);
    }

    /// Go back one step, staying put on the first step
    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump to a step index, clamped into range
    pub fn goto(&mut self, index: usize) {
        self.current = index.min(Step::COUNT - 1);
    }
}
