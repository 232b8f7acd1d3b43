//! Form state management and per-step field layouts

use super::field::{
    ChildKey, DisabilityKey, FieldBinding, FieldKind, FormAction, FormField, LifePolicyKey,
    OptionKey,
};
use crate::state::updates::{Checklist, ContactGroup, ContactKey, ListKind, NumberField, TextField};
use crate::state::{ClientProfile, PolicyHolder, Step};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Key input as the form understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
}

/// What handling one input produced
#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    None,
    Update(ClientProfile),
    Action(FormAction),
}

/// The fields of the current step plus focus and in-progress input
#[derive(Debug, Clone, Default)]
pub struct WizardForm {
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    /// Raw text of the focused numeric field, so partial input like `12.` survives
    pub draft: Option<String>,
    /// Paths typed into the attachment field
    pub attachment_input: String,
}

impl WizardForm {
    pub fn for_step(step: Step, profile: &ClientProfile) -> Self {
        Self {
            fields: fields_for_step(step, profile),
            ..Default::default()
        }
    }

    /// Rebuild the field list after the profile changed, keeping focus in range.
    /// The draft is dropped whenever the layout changes.
    pub fn refresh(&mut self, step: Step, profile: &ClientProfile) {
        let fields = fields_for_step(step, profile);
        if fields != self.fields {
            self.draft = None;
        }
        self.fields = fields;
        if self.active_field_index >= self.fields.len() {
            self.set_active_field(self.fields.len().saturating_sub(1));
        }
    }

    /// Switch to another step's fields with focus on the first one
    pub fn reset(&mut self, step: Step, profile: &ClientProfile) {
        self.fields = fields_for_step(step, profile);
        self.set_active_field(0);
    }

    pub fn active(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active().is_some_and(|f| f.is_multiline())
    }

    /// Text shown for the field at `index`
    pub fn display_value(&self, index: usize, profile: &ClientProfile) -> String {
        let Some(field) = self.fields.get(index) else {
            return String::new();
        };
        if index == self.active_field_index {
            if let Some(draft) = &self.draft {
                return draft.clone();
            }
        }
        match field.binding {
            FieldBinding::AttachmentPaths => self.attachment_input.clone(),
            FieldBinding::Action(_) => field.label.clone(),
            binding => binding.read(profile),
        }
    }

    /// Apply one input to the focused field
    pub fn handle(&mut self, input: FormInput, profile: &ClientProfile) -> FormEffect {
        let Some(field) = self.active().cloned() else {
            return FormEffect::None;
        };
        let binding = field.binding;

        if binding == FieldBinding::AttachmentPaths {
            return self.handle_attachment_input(input);
        }

        match field.kind() {
            FieldKind::Text { multiline } => {
                let mut text = binding.read(profile);
                match input {
                    FormInput::Char(c) => text.push(c),
                    FormInput::Enter if multiline => text.push('\n'),
                    FormInput::Backspace => {
                        if text.pop().is_none() {
                            return FormEffect::None;
                        }
                    }
                    _ => return FormEffect::None,
                }
                FormEffect::Update(binding.write_text(profile, &text))
            }
            FieldKind::Integer | FieldKind::Decimal => {
                let decimal = field.kind() == FieldKind::Decimal;
                let mut text = self
                    .draft
                    .clone()
                    .unwrap_or_else(|| binding.read(profile));
                match input {
                    FormInput::Char(c) if c.is_ascii_digit() => text.push(c),
                    FormInput::Char('.') if decimal && !text.contains('.') => text.push('.'),
                    FormInput::Backspace => {
                        if text.pop().is_none() {
                            return FormEffect::None;
                        }
                    }
                    _ => return FormEffect::None,
                }
                // Digits past the largest storable count are refused
                if !decimal && !text.is_empty() && text.parse::<u32>().is_err() {
                    return FormEffect::None;
                }
                let next = binding.write_text(profile, &text);
                self.draft = Some(text);
                FormEffect::Update(next)
            }
            FieldKind::Choice | FieldKind::Score => match input {
                FormInput::Left | FormInput::Char('-') => {
                    FormEffect::Update(binding.cycle(profile, false))
                }
                FormInput::Right | FormInput::Enter | FormInput::Char(' ') | FormInput::Char('+') => {
                    FormEffect::Update(binding.cycle(profile, true))
                }
                _ => FormEffect::None,
            },
            FieldKind::Toggle => match input {
                FormInput::Enter | FormInput::Char(' ') | FormInput::Left | FormInput::Right => {
                    FormEffect::Update(binding.cycle(profile, true))
                }
                _ => FormEffect::None,
            },
            FieldKind::Button => match (input, binding) {
                (FormInput::Enter | FormInput::Char(' '), FieldBinding::Action(action)) => {
                    FormEffect::Action(action)
                }
                _ => FormEffect::None,
            },
        }
    }

    fn handle_attachment_input(&mut self, input: FormInput) -> FormEffect {
        match input {
            FormInput::Char(c) => self.attachment_input.push(c),
            FormInput::Backspace => {
                self.attachment_input.pop();
            }
            FormInput::Enter => return FormEffect::Action(FormAction::AttachFiles),
            FormInput::Left | FormInput::Right => {}
        }
        FormEffect::None
    }

    /// List row of the focused field, if it belongs to one
    pub fn active_row(&self) -> Option<(ListKind, usize)> {
        self.active().and_then(|f| f.binding.row())
    }
}

impl Form for WizardForm {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
        self.draft = None;
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

/// Field layout of one step, with one group of fields per list row
pub fn fields_for_step(step: Step, profile: &ClientProfile) -> Vec<FormField> {
    match step {
        Step::Personal => personal_fields(profile),
        Step::Advisors => advisor_contact_fields(),
        Step::Insurance => insurance_fields(profile),
        Step::PrioritiesAndPlans => {
            let mut fields = checklist_fields(Checklist::Priorities);
            fields.extend(checklist_fields(Checklist::FuturePlans));
            fields
        }
        Step::Business => checklist_fields(Checklist::BusinessInterests),
        Step::Introductions => introduction_fields(profile),
        Step::Advisor => vec![
            FormField::new("Notes", FieldBinding::Text(TextField::AdvisorNotes)),
            FormField::new("Attach files (paths, ; separated)", FieldBinding::AttachmentPaths)
                .in_section("Illustrations"),
        ],
        Step::Options => option_fields(profile),
        Step::Review => vec![FormField::button("Export PDF", FormAction::Export)],
    }
}

fn text(label: &str, field: TextField) -> FormField {
    FormField::new(label, FieldBinding::Text(field))
}

fn personal_fields(profile: &ClientProfile) -> Vec<FormField> {
    let mut fields = vec![
        text("Name", TextField::Name),
        text("Date", TextField::Date),
        text("Birthdate", TextField::Birthdate),
        FormField::new("Age", FieldBinding::Number(NumberField::Age)),
        text("Home Phone", TextField::HomePhone),
        text("Cell Phone", TextField::CellPhone),
        text("Email", TextField::PersonalEmail),
        text("Address", TextField::Address),
        FormField::new("Home", FieldBinding::Home),
        text("Employer", TextField::Employer),
        text("Position", TextField::Position),
        text("Business Address", TextField::BusinessAddress),
        text("Business Phone", TextField::BusinessPhone),
        text("Business Email", TextField::BusinessEmail),
        text("Name", TextField::SpouseName).in_section("Spouse"),
        FormField::new("Age", FieldBinding::Number(NumberField::SpouseAge)),
        text("Birthdate", TextField::SpouseBirthdate),
        text("Employer", TextField::SpouseEmployer),
        text("Position", TextField::SpousePosition),
        text("Business Address", TextField::SpouseBusinessAddress),
        text("Business Phone", TextField::SpouseBusinessPhone),
        text("Business Email", TextField::SpouseBusinessEmail),
    ];

    for i in 0..profile.children.len() {
        let name = FormField::new("Name", FieldBinding::Child(i, ChildKey::Name));
        fields.push(name.in_section(format!("Child {}", i + 1)));
        fields.push(FormField::new("Age", FieldBinding::Child(i, ChildKey::Age)));
        fields.push(FormField::new("Sex", FieldBinding::Child(i, ChildKey::Sex)));
    }
    let add = FormField::button("+ Add child", FormAction::Add(ListKind::Children));
    fields.push(if profile.children.is_empty() {
        add.in_section("Children")
    } else {
        add
    });
    fields
}

fn advisor_contact_fields() -> Vec<FormField> {
    ContactGroup::ALL
        .iter()
        .flat_map(|&group| {
            [
                FormField::new("Name", FieldBinding::Contact(group, ContactKey::Name))
                    .in_section(group.label()),
                FormField::new("Phone", FieldBinding::Contact(group, ContactKey::Phone)),
            ]
        })
        .collect()
}

fn life_policy_fields(profile: &ClientProfile, holder: PolicyHolder) -> Vec<FormField> {
    let section = match holder {
        PolicyHolder::Client => "Life Insurance (Self)",
        PolicyHolder::Spouse => "Life Insurance (Spouse)",
    };
    let mut fields = Vec::new();
    for i in 0..profile.life_policies(holder).len() {
        let company = FormField::new(
            "Company",
            FieldBinding::LifePolicy(holder, i, LifePolicyKey::Company),
        );
        fields.push(company.in_section(format!("{section} #{}", i + 1)));
        fields.push(FormField::new(
            "Death Benefit",
            FieldBinding::LifePolicy(holder, i, LifePolicyKey::DeathBenefit),
        ));
        fields.push(FormField::new(
            "Cash Value",
            FieldBinding::LifePolicy(holder, i, LifePolicyKey::CashValue),
        ));
        fields.push(FormField::new(
            "Beneficiary",
            FieldBinding::LifePolicy(holder, i, LifePolicyKey::Beneficiary),
        ));
    }
    let add = FormField::button("+ Add policy", FormAction::Add(ListKind::LifePolicies(holder)));
    fields.push(if fields.is_empty() { add.in_section(section) } else { add });
    fields
}

fn insurance_fields(profile: &ClientProfile) -> Vec<FormField> {
    let mut fields = life_policy_fields(profile, PolicyHolder::Client);
    fields.extend(life_policy_fields(profile, PolicyHolder::Spouse));

    for i in 0..profile.di.len() {
        let term = FormField::new("Type", FieldBinding::Disability(i, DisabilityKey::Term));
        fields.push(term.in_section(format!("Disability Income #{}", i + 1)));
        fields.push(FormField::new("Who", FieldBinding::Disability(i, DisabilityKey::Who)));
        fields.push(FormField::new(
            "Company",
            FieldBinding::Disability(i, DisabilityKey::Company),
        ));
        fields.push(FormField::new(
            "Income ($/mo)",
            FieldBinding::Disability(i, DisabilityKey::Income),
        ));
        fields.push(FormField::new(
            "Duration (months)",
            FieldBinding::Disability(i, DisabilityKey::DurationMonths),
        ));
    }
    let add = FormField::button("+ Add DI", FormAction::Add(ListKind::Disability));
    fields.push(if profile.di.is_empty() {
        add.in_section("Disability Income")
    } else {
        add
    });

    fields.push(FormField::new("Health Company", FieldBinding::HealthCompany).in_section("Medical"));
    fields.push(FormField::new("Employer Provided", FieldBinding::EmployerProvided));
    fields
}

fn checklist_fields(checklist: Checklist) -> Vec<FormField> {
    checklist
        .labels()
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let field = FormField::new(label, FieldBinding::Checklist(checklist, label));
            if i == 0 {
                field.in_section(checklist.title())
            } else {
                field
            }
        })
        .collect()
}

fn introduction_fields(profile: &ClientProfile) -> Vec<FormField> {
    let mut fields = Vec::new();
    for i in 0..profile.referrals.len() {
        let name = FormField::new("Name", FieldBinding::Referral(i, ContactKey::Name));
        fields.push(name.in_section(format!("Introduction {}", i + 1)));
        fields.push(FormField::new("Phone", FieldBinding::Referral(i, ContactKey::Phone)));
    }
    fields.push(FormField::button(
        "+ Add introduction",
        FormAction::Add(ListKind::Referrals),
    ));
    fields
}

fn option_fields(profile: &ClientProfile) -> Vec<FormField> {
    let mut fields = Vec::new();
    for i in 0..profile.options.len() {
        let name = FormField::new("Name", FieldBinding::Option(i, OptionKey::Name));
        fields.push(name.in_section(format!("Option {}", i + 1)));
        fields.push(FormField::new("Risk", FieldBinding::Option(i, OptionKey::Risk)));
        fields.push(FormField::new(
            "Guarantees",
            FieldBinding::Option(i, OptionKey::Guarantees),
        ));
        fields.push(FormField::new(
            "Results / Notes",
            FieldBinding::Option(i, OptionKey::ResultSummary),
        ));
        fields.push(FormField::new("Score", FieldBinding::Option(i, OptionKey::Score)));
    }
    fields.push(FormField::button("+ Add option", FormAction::Add(ListKind::Options)));
    fields
}
