//! Form field value objects
//!
//! A [`FormField`] is one editable row of a step. Its [`FieldBinding`] says
//! which part of the profile it reads and writes; fields are rebuilt from the
//! profile after every change so they never hold stale values.

use crate::state::updates::{
    non_empty, parse_number, set_field, set_list_item, set_medical, set_nested, Checklist,
    ChildPatch, ContactGroup, ContactKey, DisabilityPatch, FieldUpdate, LifePolicyPatch,
    ListKind, ListPatch, MedicalUpdate, NumberField, OptionPatch, TextField,
    toggle_membership,
};
use crate::state::{ClientProfile, DisabilityTerm, OwnOrRent, PolicyHolder, Risk};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKey {
    Name,
    Age,
    Sex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifePolicyKey {
    Company,
    DeathBenefit,
    CashValue,
    Beneficiary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabilityKey {
    Term,
    Who,
    Company,
    Income,
    DurationMonths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey {
    Name,
    Risk,
    Guarantees,
    ResultSummary,
    Score,
}

/// Something a button field triggers instead of editing a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Add(ListKind),
    AttachFiles,
    Export,
}

/// Which part of the profile a field edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBinding {
    Text(TextField),
    Number(NumberField),
    Home,
    Contact(ContactGroup, ContactKey),
    Child(usize, ChildKey),
    LifePolicy(PolicyHolder, usize, LifePolicyKey),
    Disability(usize, DisabilityKey),
    HealthCompany,
    EmployerProvided,
    Checklist(Checklist, &'static str),
    Referral(usize, ContactKey),
    Option(usize, OptionKey),
    /// Path entry for attachment capture; the text lives in the form, not the profile
    AttachmentPaths,
    Action(FormAction),
}

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { multiline: bool },
    Integer,
    Decimal,
    Choice,
    Toggle,
    Score,
    Button,
}

impl FieldBinding {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(TextField::AdvisorNotes) => FieldKind::Text { multiline: true },
            Self::Option(_, OptionKey::Guarantees | OptionKey::ResultSummary) => {
                FieldKind::Text { multiline: true }
            }
            Self::Number(_)
            | Self::Child(_, ChildKey::Age)
            | Self::Disability(_, DisabilityKey::DurationMonths) => FieldKind::Integer,
            Self::LifePolicy(_, _, LifePolicyKey::DeathBenefit | LifePolicyKey::CashValue)
            | Self::Disability(_, DisabilityKey::Income) => FieldKind::Decimal,
            Self::Home
            | Self::Disability(_, DisabilityKey::Term | DisabilityKey::Who)
            | Self::Option(_, OptionKey::Risk) => FieldKind::Choice,
            Self::EmployerProvided | Self::Checklist(..) => FieldKind::Toggle,
            Self::Option(_, OptionKey::Score) => FieldKind::Score,
            Self::Action(_) => FieldKind::Button,
            _ => FieldKind::Text { multiline: false },
        }
    }

    /// The list row this field belongs to, if any
    pub fn row(&self) -> Option<(ListKind, usize)> {
        match *self {
            Self::Child(i, _) => Some((ListKind::Children, i)),
            Self::LifePolicy(holder, i, _) => Some((ListKind::LifePolicies(holder), i)),
            Self::Disability(i, _) => Some((ListKind::Disability, i)),
            Self::Referral(i, _) => Some((ListKind::Referrals, i)),
            Self::Option(i, _) => Some((ListKind::Options, i)),
            _ => None,
        }
    }

    /// Current value as editable text
    pub fn read(&self, profile: &ClientProfile) -> String {
        match *self {
            Self::Text(field) => field.get(profile).unwrap_or_default().to_string(),
            Self::Number(field) => fmt_opt(field.get(profile)),
            Self::Home => profile.home_ownership().label().to_string(),
            Self::Contact(group, key) => key.get(group.get(profile)).unwrap_or_default().to_string(),
            Self::Child(i, key) => profile
                .children
                .get(i)
                .map(|c| match key {
                    ChildKey::Name => c.name.clone().unwrap_or_default(),
                    ChildKey::Age => fmt_opt(c.age),
                    ChildKey::Sex => c.sex.clone().unwrap_or_default(),
                })
                .unwrap_or_default(),
            Self::LifePolicy(holder, i, key) => profile
                .life_policies(holder)
                .get(i)
                .map(|p| match key {
                    LifePolicyKey::Company => p.company.clone().unwrap_or_default(),
                    LifePolicyKey::DeathBenefit => fmt_amount(p.death_benefit),
                    LifePolicyKey::CashValue => fmt_amount(p.cash_value),
                    LifePolicyKey::Beneficiary => p.beneficiary.clone().unwrap_or_default(),
                })
                .unwrap_or_default(),
            Self::Disability(i, key) => profile
                .di
                .get(i)
                .map(|d| match key {
                    DisabilityKey::Term => d.term.label().to_string(),
                    DisabilityKey::Who => d.who.label().to_string(),
                    DisabilityKey::Company => d.company.clone().unwrap_or_default(),
                    DisabilityKey::Income => fmt_amount(d.income),
                    DisabilityKey::DurationMonths => fmt_opt(d.duration_months),
                })
                .unwrap_or_default(),
            Self::HealthCompany => profile
                .medical_insurance
                .health_company
                .clone()
                .unwrap_or_default(),
            Self::EmployerProvided => {
                checkbox(profile.medical_insurance.employer_provided.unwrap_or(false))
            }
            Self::Checklist(checklist, label) => checkbox(checklist.contains(profile, label)),
            Self::Referral(i, key) => profile
                .referrals
                .get(i)
                .and_then(|r| key.get(r))
                .unwrap_or_default()
                .to_string(),
            Self::Option(i, key) => profile
                .options
                .get(i)
                .map(|o| match key {
                    OptionKey::Name => o.name.clone(),
                    OptionKey::Risk => o.risk.label().to_string(),
                    OptionKey::Guarantees => o.guarantees.clone().unwrap_or_default(),
                    OptionKey::ResultSummary => o.result_summary.clone().unwrap_or_default(),
                    OptionKey::Score => format!("{}/10", o.score),
                })
                .unwrap_or_default(),
            Self::AttachmentPaths | Self::Action(_) => String::new(),
        }
    }

    /// Write typed text back; numeric fields coerce blank input to unset
    pub fn write_text(&self, profile: &ClientProfile, text: &str) -> ClientProfile {
        let owned = text.to_string();
        match *self {
            Self::Text(field) => set_field(profile, FieldUpdate::Text(field, owned)),
            Self::Number(field) => set_field(profile, FieldUpdate::Number(field, parse_number(text))),
            Self::Contact(group, key) => set_nested(profile, group, key, owned),
            Self::Child(i, key) => {
                let patch = match key {
                    ChildKey::Name => ChildPatch::Name(non_empty(owned)),
                    ChildKey::Age => ChildPatch::Age(parse_number(text)),
                    ChildKey::Sex => ChildPatch::Sex(non_empty(owned)),
                };
                set_list_item(profile, ListPatch::Child(i, patch))
            }
            Self::LifePolicy(holder, i, key) => {
                let patch = match key {
                    LifePolicyKey::Company => LifePolicyPatch::Company(non_empty(owned)),
                    LifePolicyKey::DeathBenefit => LifePolicyPatch::DeathBenefit(parse_number(text)),
                    LifePolicyKey::CashValue => LifePolicyPatch::CashValue(parse_number(text)),
                    LifePolicyKey::Beneficiary => LifePolicyPatch::Beneficiary(non_empty(owned)),
                };
                set_list_item(profile, ListPatch::LifePolicy(holder, i, patch))
            }
            Self::Disability(i, key) => {
                let patch = match key {
                    DisabilityKey::Company => DisabilityPatch::Company(non_empty(owned)),
                    DisabilityKey::Income => DisabilityPatch::Income(parse_number(text)),
                    DisabilityKey::DurationMonths => {
                        DisabilityPatch::DurationMonths(parse_number(text))
                    }
                    DisabilityKey::Term | DisabilityKey::Who => return profile.clone(),
                };
                set_list_item(profile, ListPatch::Disability(i, patch))
            }
            Self::HealthCompany => set_medical(profile, MedicalUpdate::HealthCompany(owned)),
            Self::Referral(i, key) => {
                set_list_item(profile, ListPatch::Referral(i, key, non_empty(owned)))
            }
            Self::Option(i, key) => {
                let patch = match key {
                    OptionKey::Name => OptionPatch::Name(owned),
                    OptionKey::Guarantees => OptionPatch::Guarantees(non_empty(owned)),
                    OptionKey::ResultSummary => OptionPatch::ResultSummary(non_empty(owned)),
                    OptionKey::Risk | OptionKey::Score => return profile.clone(),
                };
                set_list_item(profile, ListPatch::Option(i, patch))
            }
            _ => profile.clone(),
        }
    }

    /// Step a choice, toggle or score field forward or backward
    pub fn cycle(&self, profile: &ClientProfile, forward: bool) -> ClientProfile {
        match *self {
            Self::Home => {
                let next = cycle_value(&OwnOrRent::ALL, profile.home_ownership(), forward);
                set_field(profile, FieldUpdate::Home(next))
            }
            Self::Disability(i, DisabilityKey::Term) => match profile.di.get(i) {
                Some(row) => {
                    let next = cycle_value(&DisabilityTerm::ALL, row.term, forward);
                    set_list_item(profile, ListPatch::Disability(i, DisabilityPatch::Term(next)))
                }
                None => profile.clone(),
            },
            Self::Disability(i, DisabilityKey::Who) => match profile.di.get(i) {
                Some(row) => {
                    let next = cycle_value(&PolicyHolder::ALL, row.who, forward);
                    set_list_item(profile, ListPatch::Disability(i, DisabilityPatch::Who(next)))
                }
                None => profile.clone(),
            },
            Self::Option(i, OptionKey::Risk) => match profile.options.get(i) {
                Some(option) => {
                    let next = cycle_value(&Risk::ALL, option.risk, forward);
                    set_list_item(profile, ListPatch::Option(i, OptionPatch::Risk(next)))
                }
                None => profile.clone(),
            },
            Self::Option(i, OptionKey::Score) => match profile.options.get(i) {
                Some(option) => {
                    let score = if forward {
                        option.score.increment()
                    } else {
                        option.score.decrement()
                    };
                    set_list_item(
                        profile,
                        ListPatch::Option(i, OptionPatch::Score(score.get() as i64)),
                    )
                }
                None => profile.clone(),
            },
            Self::EmployerProvided => {
                let current = profile.medical_insurance.employer_provided.unwrap_or(false);
                set_medical(profile, MedicalUpdate::EmployerProvided(!current))
            }
            Self::Checklist(checklist, label) => toggle_membership(profile, checklist, label),
            _ => profile.clone(),
        }
    }
}

fn cycle_value<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % all.len()
    } else {
        (pos + all.len() - 1) % all.len()
    };
    all[next]
}

fn checkbox(checked: bool) -> String {
    if checked { "[x]" } else { "[ ]" }.to_string()
}

fn fmt_opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn fmt_amount(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Represents a single form row with its label and binding
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: String,
    pub binding: FieldBinding,
    /// Heading rendered above this field when it starts a new group
    pub section: Option<String>,
}

impl FormField {
    pub fn new(label: impl Into<String>, binding: FieldBinding) -> Self {
        Self {
            label: label.into(),
            binding,
            section: None,
        }
    }

    pub fn button(label: impl Into<String>, action: FormAction) -> Self {
        Self::new(label, FieldBinding::Action(action))
    }

    /// Start a new group at this field
    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.binding.kind()
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind(), FieldKind::Text { multiline: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::updates::append_default_item;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kinds() {
        assert_eq!(
            FieldBinding::Text(TextField::Name).kind(),
            FieldKind::Text { multiline: false }
        );
        assert_eq!(
            FieldBinding::Text(TextField::AdvisorNotes).kind(),
            FieldKind::Text { multiline: true }
        );
        assert_eq!(FieldBinding::Number(NumberField::Age).kind(), FieldKind::Integer);
        assert_eq!(
            FieldBinding::LifePolicy(PolicyHolder::Client, 0, LifePolicyKey::CashValue).kind(),
            FieldKind::Decimal
        );
        assert_eq!(FieldBinding::Home.kind(), FieldKind::Choice);
        assert_eq!(
            FieldBinding::Option(0, OptionKey::Score).kind(),
            FieldKind::Score
        );
        assert_eq!(
            FieldBinding::Action(FormAction::Export).kind(),
            FieldKind::Button
        );
    }

    #[test]
    fn test_write_and_read_text() {
        let binding = FieldBinding::Contact(ContactGroup::Attorney, ContactKey::Name);
        let profile = binding.write_text(&ClientProfile::default(), "Saul");
        assert_eq!(binding.read(&profile), "Saul");
        assert_eq!(profile.attorney.name.as_deref(), Some("Saul"));
    }

    #[test]
    fn test_write_decimal_blank_is_unset() {
        let binding = FieldBinding::LifePolicy(PolicyHolder::Client, 0, LifePolicyKey::DeathBenefit);
        let profile = binding.write_text(&ClientProfile::default(), "500000");
        assert_eq!(profile.life_policies_self[0].death_benefit, Some(500_000.0));
        assert_eq!(binding.read(&profile), "500000");
        let cleared = binding.write_text(&profile, "");
        assert_eq!(cleared.life_policies_self[0].death_benefit, None);
    }

    #[test]
    fn test_cycle_home_defaults_from_own() {
        let profile = FieldBinding::Home.cycle(&ClientProfile::default(), true);
        assert_eq!(profile.own_or_rent, Some(OwnOrRent::Rent));
        let back = FieldBinding::Home.cycle(&profile, true);
        assert_eq!(back.own_or_rent, Some(OwnOrRent::Own));
    }

    #[test]
    fn test_cycle_disability_choices() {
        let term = FieldBinding::Disability(0, DisabilityKey::Term);
        let who = FieldBinding::Disability(0, DisabilityKey::Who);
        let profile = term.cycle(&ClientProfile::default(), true);
        let profile = who.cycle(&profile, false);
        assert_eq!(profile.di[0].term, DisabilityTerm::LongTerm);
        assert_eq!(profile.di[0].who, PolicyHolder::Spouse);
    }

    #[test]
    fn test_cycle_score_and_risk() {
        let profile = append_default_item(&ClientProfile::default(), ListKind::Options);
        let score = FieldBinding::Option(0, OptionKey::Score);
        let risk = FieldBinding::Option(0, OptionKey::Risk);
        let profile = score.cycle(&profile, true);
        assert_eq!(score.read(&profile), "6/10");
        let profile = risk.cycle(&profile, false);
        assert_eq!(profile.options[0].risk, Risk::Low);
    }

    #[test]
    fn test_toggle_bindings() {
        let priority = FieldBinding::Checklist(Checklist::Priorities, "Policy review");
        let profile = priority.cycle(&ClientProfile::default(), true);
        assert_eq!(priority.read(&profile), "[x]");
        let profile = FieldBinding::EmployerProvided.cycle(&profile, true);
        assert_eq!(profile.medical_insurance.employer_provided, Some(false));
        assert_eq!(FieldBinding::EmployerProvided.read(&profile), "[ ]");
    }

    #[test]
    fn test_row_of_list_bindings() {
        assert_eq!(
            FieldBinding::Referral(2, ContactKey::Phone).row(),
            Some((ListKind::Referrals, 2))
        );
        assert_eq!(FieldBinding::Text(TextField::Name).row(), None);
    }
}
