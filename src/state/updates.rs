//! Pure update operations over [`ClientProfile`]
//!
//! Every operation borrows the current profile and returns a new one; the
//! previous value is never touched, so callers can compare old and new to
//! decide whether anything needs persisting. Field access goes through
//! enums rather than string keys.

use super::profile::{
    Attachment, Child, ClientProfile, Contact, DisabilityPolicy, DisabilityTerm, LifePolicy,
    OwnOrRent, PlanOption, PolicyHolder, Risk, Score,
};
use std::str::FromStr;

/// Top-level free-text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Date,
    Birthdate,
    HomePhone,
    CellPhone,
    PersonalEmail,
    Address,
    Employer,
    Position,
    BusinessAddress,
    BusinessPhone,
    BusinessEmail,
    SpouseName,
    SpouseBirthdate,
    SpouseEmployer,
    SpousePosition,
    SpouseBusinessAddress,
    SpouseBusinessPhone,
    SpouseBusinessEmail,
    AdvisorNotes,
}

impl TextField {
    fn slot(self, profile: &mut ClientProfile) -> &mut Option<String> {
        match self {
            Self::Name => &mut profile.name,
            Self::Date => &mut profile.date,
            Self::Birthdate => &mut profile.birthdate,
            Self::HomePhone => &mut profile.home_phone,
            Self::CellPhone => &mut profile.cell_phone,
            Self::PersonalEmail => &mut profile.personal_email,
            Self::Address => &mut profile.address,
            Self::Employer => &mut profile.employer,
            Self::Position => &mut profile.position,
            Self::BusinessAddress => &mut profile.business_address,
            Self::BusinessPhone => &mut profile.business_phone,
            Self::BusinessEmail => &mut profile.business_email,
            Self::SpouseName => &mut profile.spouse_name,
            Self::SpouseBirthdate => &mut profile.spouse_birthdate,
            Self::SpouseEmployer => &mut profile.spouse_employer,
            Self::SpousePosition => &mut profile.spouse_position,
            Self::SpouseBusinessAddress => &mut profile.spouse_business_address,
            Self::SpouseBusinessPhone => &mut profile.spouse_business_phone,
            Self::SpouseBusinessEmail => &mut profile.spouse_business_email,
            Self::AdvisorNotes => &mut profile.advisor_notes,
        }
    }

    pub fn get(self, profile: &ClientProfile) -> Option<&str> {
        let value = match self {
            Self::Name => &profile.name,
            Self::Date => &profile.date,
            Self::Birthdate => &profile.birthdate,
            Self::HomePhone => &profile.home_phone,
            Self::CellPhone => &profile.cell_phone,
            Self::PersonalEmail => &profile.personal_email,
            Self::Address => &profile.address,
            Self::Employer => &profile.employer,
            Self::Position => &profile.position,
            Self::BusinessAddress => &profile.business_address,
            Self::BusinessPhone => &profile.business_phone,
            Self::BusinessEmail => &profile.business_email,
            Self::SpouseName => &profile.spouse_name,
            Self::SpouseBirthdate => &profile.spouse_birthdate,
            Self::SpouseEmployer => &profile.spouse_employer,
            Self::SpousePosition => &profile.spouse_position,
            Self::SpouseBusinessAddress => &profile.spouse_business_address,
            Self::SpouseBusinessPhone => &profile.spouse_business_phone,
            Self::SpouseBusinessEmail => &profile.spouse_business_email,
            Self::AdvisorNotes => &profile.advisor_notes,
        };
        value.as_deref()
    }
}

/// Top-level integer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberField {
    Age,
    SpouseAge,
}

impl NumberField {
    fn slot(self, profile: &mut ClientProfile) -> &mut Option<u32> {
        match self {
            Self::Age => &mut profile.age,
            Self::SpouseAge => &mut profile.spouse_age,
        }
    }

    pub fn get(self, profile: &ClientProfile) -> Option<u32> {
        match self {
            Self::Age => profile.age,
            Self::SpouseAge => profile.spouse_age,
        }
    }
}

/// One replacement of a top-level scalar
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Text(TextField, String),
    Number(NumberField, Option<u32>),
    Home(OwnOrRent),
}

/// The three fixed advisor contact slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactGroup {
    Attorney,
    Accountant,
    OtherAdvisor,
}

impl ContactGroup {
    pub const ALL: [ContactGroup; 3] = [
        ContactGroup::Attorney,
        ContactGroup::Accountant,
        ContactGroup::OtherAdvisor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Attorney => "Attorney",
            Self::Accountant => "Accountant",
            Self::OtherAdvisor => "Other Advisor",
        }
    }

    pub fn get(self, profile: &ClientProfile) -> &Contact {
        match self {
            Self::Attorney => &profile.attorney,
            Self::Accountant => &profile.accountant,
            Self::OtherAdvisor => &profile.other_advisor,
        }
    }

    fn slot(self, profile: &mut ClientProfile) -> &mut Contact {
        match self {
            Self::Attorney => &mut profile.attorney,
            Self::Accountant => &mut profile.accountant,
            Self::OtherAdvisor => &mut profile.other_advisor,
        }
    }
}

/// Field within a [`Contact`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKey {
    Name,
    Phone,
}

impl ContactKey {
    pub fn get(self, contact: &Contact) -> Option<&str> {
        match self {
            Self::Name => contact.name.as_deref(),
            Self::Phone => contact.phone.as_deref(),
        }
    }

    fn slot(self, contact: &mut Contact) -> &mut Option<String> {
        match self {
            Self::Name => &mut contact.name,
            Self::Phone => &mut contact.phone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedicalUpdate {
    HealthCompany(String),
    EmployerProvided(bool),
}

/// Checklist (set-valued) fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checklist {
    Priorities,
    FuturePlans,
    BusinessInterests,
}

impl Checklist {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Priorities => "Check what applies",
            Self::FuturePlans => "Future (next two years)",
            Self::BusinessInterests => "Business interests",
        }
    }

    /// Fixed labels offered for this checklist
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Self::Priorities => &[
                "Retirement planning",
                "Long-term care",
                "Mortgage protection",
                "Policy review",
                "Systematic savings",
            ],
            Self::FuturePlans => &[
                "New home",
                "Start business",
                "Marriage",
                "Children",
                "Retirement",
            ],
            Self::BusinessInterests => &[
                "Buy/Sell",
                "Key Employee",
                "Pension",
                "Nonqualified Plans",
                "Group Insurance",
                "BOE Protection",
            ],
        }
    }

    pub fn get(self, profile: &ClientProfile) -> &[String] {
        match self {
            Self::Priorities => &profile.priorities,
            Self::FuturePlans => &profile.future_plans,
            Self::BusinessInterests => &profile.business_interests,
        }
    }

    fn slot(self, profile: &mut ClientProfile) -> &mut Vec<String> {
        match self {
            Self::Priorities => &mut profile.priorities,
            Self::FuturePlans => &mut profile.future_plans,
            Self::BusinessInterests => &mut profile.business_interests,
        }
    }

    pub fn contains(self, profile: &ClientProfile, label: &str) -> bool {
        self.get(profile).iter().any(|l| l == label)
    }
}

/// Repeatable list fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Children,
    LifePolicies(PolicyHolder),
    Disability,
    Referrals,
    Options,
    Attachments,
}

impl ListKind {
    pub fn len(self, profile: &ClientProfile) -> usize {
        match self {
            Self::Children => profile.children.len(),
            Self::LifePolicies(holder) => profile.life_policies(holder).len(),
            Self::Disability => profile.di.len(),
            Self::Referrals => profile.referrals.len(),
            Self::Options => profile.options.len(),
            Self::Attachments => profile.illustration_files.len(),
        }
    }
}

/// A record to append to a list
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Child(Child),
    LifePolicy(PolicyHolder, LifePolicy),
    Disability(DisabilityPolicy),
    Referral(Contact),
    Option(PlanOption),
    Attachment(Attachment),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChildPatch {
    Name(Option<String>),
    Age(Option<u32>),
    Sex(Option<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LifePolicyPatch {
    Company(Option<String>),
    DeathBenefit(Option<f64>),
    CashValue(Option<f64>),
    Beneficiary(Option<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisabilityPatch {
    Company(Option<String>),
    Income(Option<f64>),
    DurationMonths(Option<u32>),
    Term(DisabilityTerm),
    Who(PolicyHolder),
}

/// Option edits; the id is deliberately not patchable
#[derive(Debug, Clone, PartialEq)]
pub enum OptionPatch {
    Name(String),
    Risk(Risk),
    Guarantees(Option<String>),
    ResultSummary(Option<String>),
    Score(i64),
}

/// Replacement of one field inside one list element
#[derive(Debug, Clone, PartialEq)]
pub enum ListPatch {
    Child(usize, ChildPatch),
    LifePolicy(PolicyHolder, usize, LifePolicyPatch),
    Disability(usize, DisabilityPatch),
    Referral(usize, ContactKey, Option<String>),
    Option(usize, OptionPatch),
}

/// Empty text means unset
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Coerce numeric input; blank input is unset rather than zero
pub fn parse_number<T: FromStr>(input: &str) -> Option<T> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Replace one top-level scalar
pub fn set_field(profile: &ClientProfile, update: FieldUpdate) -> ClientProfile {
    let mut next = profile.clone();
    match update {
        FieldUpdate::Text(field, value) => *field.slot(&mut next) = non_empty(value),
        FieldUpdate::Number(field, value) => *field.slot(&mut next) = value,
        FieldUpdate::Home(value) => next.own_or_rent = Some(value),
    }
    next
}

/// Replace one field of an advisor contact slot
pub fn set_nested(
    profile: &ClientProfile,
    group: ContactGroup,
    key: ContactKey,
    value: String,
) -> ClientProfile {
    let mut next = profile.clone();
    *key.slot(group.slot(&mut next)) = non_empty(value);
    next
}

/// Replace one field of the medical insurance group
pub fn set_medical(profile: &ClientProfile, update: MedicalUpdate) -> ClientProfile {
    let mut next = profile.clone();
    match update {
        MedicalUpdate::HealthCompany(value) => {
            next.medical_insurance.health_company = non_empty(value)
        }
        MedicalUpdate::EmployerProvided(value) => {
            next.medical_insurance.employer_provided = Some(value)
        }
    }
    next
}

/// Replace one field of one list element, leaving every other element alone.
///
/// Callers only pass indices they enumerated from the current list. An index
/// outside the list is a caller bug; it is logged and the profile is returned
/// unchanged.
pub fn set_list_item(profile: &ClientProfile, patch: ListPatch) -> ClientProfile {
    let mut next = profile.clone();
    let applied = match patch {
        ListPatch::Child(index, patch) => next.children.get_mut(index).map(|child| match patch {
            ChildPatch::Name(v) => child.name = v,
            ChildPatch::Age(v) => child.age = v,
            ChildPatch::Sex(v) => child.sex = v,
        }),
        ListPatch::LifePolicy(holder, index, patch) => {
            let list = match holder {
                PolicyHolder::Client => &mut next.life_policies_self,
                PolicyHolder::Spouse => &mut next.life_policies_spouse,
            };
            list.get_mut(index).map(|policy| match patch {
                LifePolicyPatch::Company(v) => policy.company = v,
                LifePolicyPatch::DeathBenefit(v) => policy.death_benefit = v,
                LifePolicyPatch::CashValue(v) => policy.cash_value = v,
                LifePolicyPatch::Beneficiary(v) => policy.beneficiary = v,
            })
        }
        ListPatch::Disability(index, patch) => next.di.get_mut(index).map(|row| match patch {
            DisabilityPatch::Company(v) => row.company = v,
            DisabilityPatch::Income(v) => row.income = v,
            DisabilityPatch::DurationMonths(v) => row.duration_months = v,
            DisabilityPatch::Term(v) => row.term = v,
            DisabilityPatch::Who(v) => row.who = v,
        }),
        ListPatch::Referral(index, key, value) => next
            .referrals
            .get_mut(index)
            .map(|contact| *key.slot(contact) = value),
        ListPatch::Option(index, patch) => next.options.get_mut(index).map(|option| match patch {
            OptionPatch::Name(v) => option.name = v,
            OptionPatch::Risk(v) => option.risk = v,
            OptionPatch::Guarantees(v) => option.guarantees = v,
            OptionPatch::ResultSummary(v) => option.result_summary = v,
            OptionPatch::Score(v) => option.score = Score::new(v),
        }),
    };

    if applied.is_none() {
        tracing::warn!("list patch ignored: index out of bounds");
        return profile.clone();
    }
    next
}

/// Append a caller-supplied record
pub fn append_list_item(profile: &ClientProfile, item: ListItem) -> ClientProfile {
    let mut next = profile.clone();
    match item {
        ListItem::Child(child) => next.children.push(child),
        ListItem::LifePolicy(PolicyHolder::Client, policy) => next.life_policies_self.push(policy),
        ListItem::LifePolicy(PolicyHolder::Spouse, policy) => {
            next.life_policies_spouse.push(policy)
        }
        ListItem::Disability(row) => next.di.push(row),
        ListItem::Referral(contact) => next.referrals.push(contact),
        ListItem::Option(option) => next.options.push(option),
        ListItem::Attachment(attachment) => next.illustration_files.push(attachment),
    }
    next
}

/// Append a defaulted record. New options get a fresh id here and keep it.
pub fn append_default_item(profile: &ClientProfile, kind: ListKind) -> ClientProfile {
    let item = match kind {
        ListKind::Children => ListItem::Child(Child::default()),
        ListKind::LifePolicies(holder) => ListItem::LifePolicy(holder, LifePolicy::default()),
        ListKind::Disability => ListItem::Disability(DisabilityPolicy::default()),
        ListKind::Referrals => ListItem::Referral(Contact::default()),
        ListKind::Options => ListItem::Option(PlanOption::new()),
        // Attachments only arrive through file capture
        ListKind::Attachments => return profile.clone(),
    };
    append_list_item(profile, item)
}

/// Append captured attachments as one batch, preserving their order
pub fn append_attachments(profile: &ClientProfile, attachments: Vec<Attachment>) -> ClientProfile {
    let mut next = profile.clone();
    next.illustration_files.extend(attachments);
    next
}

/// Delete one row from a list; out-of-range indices leave the profile unchanged
pub fn remove_list_item(profile: &ClientProfile, kind: ListKind, index: usize) -> ClientProfile {
    if index >= kind.len(profile) {
        tracing::warn!(?kind, index, "remove ignored: index out of bounds");
        return profile.clone();
    }
    let mut next = profile.clone();
    match kind {
        ListKind::Children => {
            next.children.remove(index);
        }
        ListKind::LifePolicies(PolicyHolder::Client) => {
            next.life_policies_self.remove(index);
        }
        ListKind::LifePolicies(PolicyHolder::Spouse) => {
            next.life_policies_spouse.remove(index);
        }
        ListKind::Disability => {
            next.di.remove(index);
        }
        ListKind::Referrals => {
            next.referrals.remove(index);
        }
        ListKind::Options => {
            next.options.remove(index);
        }
        ListKind::Attachments => {
            next.illustration_files.remove(index);
        }
    }
    next
}

/// Add `label` to the checklist if absent, remove it if present
pub fn toggle_membership(profile: &ClientProfile, checklist: Checklist, label: &str) -> ClientProfile {
    let mut next = profile.clone();
    let set = checklist.slot(&mut next);
    if let Some(pos) = set.iter().position(|l| l == label) {
        set.remove(pos);
    } else {
        set.push(label.to_string());
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile_with_three_referrals() -> ClientProfile {
        let mut profile = ClientProfile::default();
        for name in ["Ann", "Bob", "Cid"] {
            profile = append_list_item(
                &profile,
                ListItem::Referral(Contact {
                    name: Some(name.to_string()),
                    phone: None,
                }),
            );
        }
        profile
    }

    mod scalars {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_text_field() {
            let profile = ClientProfile::default();
            let next = set_field(
                &profile,
                FieldUpdate::Text(TextField::Name, "Jane Doe".to_string()),
            );
            assert_eq!(next.name.as_deref(), Some("Jane Doe"));
            assert_eq!(profile.name, None);
        }

        #[test]
        fn test_empty_text_is_unset() {
            let profile = set_field(
                &ClientProfile::default(),
                FieldUpdate::Text(TextField::Address, "1 Main St".to_string()),
            );
            let cleared = set_field(&profile, FieldUpdate::Text(TextField::Address, String::new()));
            assert_eq!(cleared.address, None);
        }

        #[test]
        fn test_number_coercion() {
            assert_eq!(parse_number::<u32>(""), None);
            assert_eq!(parse_number::<u32>("   "), None);
            assert_eq!(parse_number::<u32>("42"), Some(42));
            assert_eq!(parse_number::<f64>("1500.5"), Some(1500.5));
            assert_eq!(parse_number::<u32>("abc"), None);
        }

        #[test]
        fn test_set_number_field_unset() {
            let profile = set_field(
                &ClientProfile::default(),
                FieldUpdate::Number(NumberField::Age, Some(44)),
            );
            assert_eq!(profile.age, Some(44));
            let cleared = set_field(
                &profile,
                FieldUpdate::Number(NumberField::Age, parse_number("")),
            );
            assert_eq!(cleared.age, None);
        }

        #[test]
        fn test_set_home() {
            let next = set_field(&ClientProfile::default(), FieldUpdate::Home(OwnOrRent::Rent));
            assert_eq!(next.own_or_rent, Some(OwnOrRent::Rent));
        }

        #[test]
        fn test_text_field_get_matches_set() {
            let next = set_field(
                &ClientProfile::default(),
                FieldUpdate::Text(TextField::SpouseBusinessEmail, "s@example.com".to_string()),
            );
            assert_eq!(
                TextField::SpouseBusinessEmail.get(&next),
                Some("s@example.com")
            );
            assert_eq!(TextField::BusinessEmail.get(&next), None);
        }
    }

    mod nested {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_nested_only_touches_one_group() {
            let profile = ClientProfile::default();
            let next = set_nested(
                &profile,
                ContactGroup::Accountant,
                ContactKey::Phone,
                "555-0100".to_string(),
            );
            assert_eq!(next.accountant.phone.as_deref(), Some("555-0100"));
            assert_eq!(next.accountant.name, None);
            assert_eq!(next.attorney, profile.attorney);
            assert_eq!(next.other_advisor, profile.other_advisor);
        }

        #[test]
        fn test_set_medical() {
            let profile = ClientProfile::default();
            let next = set_medical(&profile, MedicalUpdate::EmployerProvided(false));
            let next = set_medical(&next, MedicalUpdate::HealthCompany("Acme Health".to_string()));
            assert_eq!(next.medical_insurance.employer_provided, Some(false));
            assert_eq!(
                next.medical_insurance.health_company.as_deref(),
                Some("Acme Health")
            );
        }
    }

    mod lists {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_list_item_changes_only_target() {
            let profile = profile_with_three_referrals();
            for index in 0..3 {
                let next = set_list_item(
                    &profile,
                    ListPatch::Referral(index, ContactKey::Phone, Some("555-0199".to_string())),
                );
                for (i, (before, after)) in
                    profile.referrals.iter().zip(next.referrals.iter()).enumerate()
                {
                    if i == index {
                        assert_eq!(after.phone.as_deref(), Some("555-0199"));
                        assert_eq!(after.name, before.name);
                    } else {
                        assert_eq!(after, before);
                    }
                }
                let mut expected = profile.clone();
                expected.referrals = next.referrals.clone();
                assert_eq!(next, expected);
            }
        }

        #[test]
        fn test_set_list_item_out_of_bounds_is_ignored() {
            let profile = profile_with_three_referrals();
            let next = set_list_item(
                &profile,
                ListPatch::Referral(9, ContactKey::Name, Some("Zed".to_string())),
            );
            assert_eq!(next, profile);
        }

        #[test]
        fn test_life_policy_patch_targets_holder() {
            let profile = ClientProfile::default();
            let next = set_list_item(
                &profile,
                ListPatch::LifePolicy(
                    PolicyHolder::Spouse,
                    0,
                    LifePolicyPatch::DeathBenefit(Some(250_000.0)),
                ),
            );
            assert_eq!(next.life_policies_spouse[0].death_benefit, Some(250_000.0));
            assert_eq!(next.life_policies_self, profile.life_policies_self);
        }

        #[test]
        fn test_disability_patch() {
            let profile = ClientProfile::default();
            let next = set_list_item(
                &profile,
                ListPatch::Disability(0, DisabilityPatch::Term(DisabilityTerm::LongTerm)),
            );
            let next = set_list_item(&next, ListPatch::Disability(0, DisabilityPatch::Who(PolicyHolder::Spouse)));
            assert_eq!(next.di[0].term, DisabilityTerm::LongTerm);
            assert_eq!(next.di[0].who, PolicyHolder::Spouse);
        }

        #[test]
        fn test_append_default_rows() {
            let profile = ClientProfile::default();
            let next = append_default_item(&profile, ListKind::Disability);
            assert_eq!(next.di.len(), 2);
            assert_eq!(next.di[1].term, DisabilityTerm::ShortTerm);
            assert_eq!(next.di[1].who, PolicyHolder::Client);

            let next = append_default_item(&next, ListKind::LifePolicies(PolicyHolder::Client));
            assert_eq!(next.life_policies_self.len(), 2);
            assert_eq!(next.life_policies_spouse.len(), 1);

            let next = append_default_item(&next, ListKind::Children);
            assert_eq!(next.children, vec![Child::default()]);
        }

        #[test]
        fn test_append_default_attachment_is_noop() {
            let profile = ClientProfile::default();
            assert_eq!(append_default_item(&profile, ListKind::Attachments), profile);
        }

        #[test]
        fn test_append_preserves_insertion_order() {
            let profile = profile_with_three_referrals();
            let names: Vec<_> = profile
                .referrals
                .iter()
                .map(|r| r.name.clone().unwrap_or_default())
                .collect();
            assert_eq!(names, vec!["Ann", "Bob", "Cid"]);
        }

        #[test]
        fn test_remove_list_item() {
            let profile = profile_with_three_referrals();
            let next = remove_list_item(&profile, ListKind::Referrals, 1);
            assert_eq!(next.referrals.len(), 2);
            assert_eq!(next.referrals[0].name.as_deref(), Some("Ann"));
            assert_eq!(next.referrals[1].name.as_deref(), Some("Cid"));
            assert_eq!(remove_list_item(&profile, ListKind::Referrals, 3), profile);
        }

        #[test]
        fn test_append_attachments_batch_order() {
            let files = vec![
                Attachment {
                    name: "a.pdf".to_string(),
                    data: "data:application/pdf;base64,".to_string(),
                },
                Attachment {
                    name: "b.png".to_string(),
                    data: "data:image/png;base64,".to_string(),
                },
            ];
            let next = append_attachments(&ClientProfile::default(), files.clone());
            assert_eq!(next.illustration_files, files);
        }
    }

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_added_option_ids_are_unique_and_stable() {
            let mut profile = ClientProfile::default();
            for _ in 0..5 {
                profile = append_default_item(&profile, ListKind::Options);
            }
            let ids: Vec<String> = profile.options.iter().map(|o| o.id.clone()).collect();
            assert!(ids.iter().all(|id| !id.is_empty()));
            let mut unique = ids.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), ids.len());

            let edited = set_list_item(&profile, ListPatch::Option(2, OptionPatch::Name("Plan C".to_string())));
            let edited = set_list_item(&edited, ListPatch::Option(2, OptionPatch::Risk(Risk::High)));
            let edited = set_list_item(&edited, ListPatch::Option(2, OptionPatch::Score(9)));
            assert_eq!(edited.options[2].id, ids[2]);
            assert_eq!(edited.options[2].name, "Plan C");
            assert_eq!(edited.options[2].score.get(), 9);
        }

        #[test]
        fn test_score_patch_clamps() {
            let profile = append_default_item(&ClientProfile::default(), ListKind::Options);
            let high = set_list_item(&profile, ListPatch::Option(0, OptionPatch::Score(15)));
            let low = set_list_item(&profile, ListPatch::Option(0, OptionPatch::Score(-2)));
            assert_eq!(high.options[0].score.get(), 10);
            assert_eq!(low.options[0].score.get(), 1);
        }
    }

    mod checklists {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_adds_then_removes() {
            let profile = ClientProfile::default();
            let once = toggle_membership(&profile, Checklist::Priorities, "Long-term care");
            assert!(Checklist::Priorities.contains(&once, "Long-term care"));
            let twice = toggle_membership(&once, Checklist::Priorities, "Long-term care");
            assert_eq!(twice, profile);
        }

        #[test]
        fn test_toggle_is_involution_on_populated_set() {
            let mut profile = ClientProfile::default();
            for label in Checklist::BusinessInterests.labels().iter().take(3) {
                profile = toggle_membership(&profile, Checklist::BusinessInterests, label);
            }
            for label in Checklist::BusinessInterests.labels() {
                let once = toggle_membership(&profile, Checklist::BusinessInterests, label);
                let twice = toggle_membership(&once, Checklist::BusinessInterests, label);
                let mut sorted_before = profile.business_interests.clone();
                let mut sorted_after = twice.business_interests.clone();
                sorted_before.sort();
                sorted_after.sort();
                assert_eq!(sorted_after, sorted_before);
            }
        }

        #[test]
        fn test_toggle_only_touches_named_checklist() {
            let profile = ClientProfile::default();
            let next = toggle_membership(&profile, Checklist::FuturePlans, "Marriage");
            assert_eq!(next.future_plans, vec!["Marriage".to_string()]);
            assert!(next.priorities.is_empty());
            assert!(next.business_interests.is_empty());
        }
    }
}
