//! Client profile aggregate
//!
//! `ClientProfile` is the single record behind the whole wizard. Field names
//! are persisted in camelCase so documents written by earlier versions of the
//! wizard load unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Home ownership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OwnOrRent {
    #[default]
    Own,
    Rent,
}

impl OwnOrRent {
    pub const ALL: [OwnOrRent; 2] = [OwnOrRent::Own, OwnOrRent::Rent];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Own => "Own",
            Self::Rent => "Rent",
        }
    }
}

/// Whose coverage a policy row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolicyHolder {
    #[default]
    #[serde(rename = "Self")]
    Client,
    Spouse,
}

impl PolicyHolder {
    pub const ALL: [PolicyHolder; 2] = [PolicyHolder::Client, PolicyHolder::Spouse];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Client => "Self",
            Self::Spouse => "Spouse",
        }
    }
}

/// Disability income coverage term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisabilityTerm {
    #[default]
    #[serde(rename = "Short-Term")]
    ShortTerm,
    #[serde(rename = "Long-Term")]
    LongTerm,
}

impl DisabilityTerm {
    pub const ALL: [DisabilityTerm; 2] = [DisabilityTerm::ShortTerm, DisabilityTerm::LongTerm];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortTerm => "Short-Term",
            Self::LongTerm => "Long-Term",
        }
    }
}

/// Risk rating of a planning option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Risk {
    Low,
    #[default]
    Medium,
    High,
}

impl Risk {
    pub const ALL: [Risk; 3] = [Risk::Low, Risk::Medium, Risk::High];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Option score, always within `Score::MIN..=Score::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Build a score, clamping into range
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self::new(self.0 as i64 + 1)
    }

    pub fn decrement(self) -> Self {
        Self::new(self.0 as i64 - 1)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(5)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Ok(Self::new(raw.round() as i64))
    }
}

/// Whole number read leniently. Fractions round; anything negative or
/// non-numeric reads as unset.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let number = match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round().min(u32::MAX as f64) as u32))
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
}

/// Name and phone pair, used for advisor slots and referrals
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifePolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_benefit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<String>,
}

/// Disability income policy
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisabilityPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_months: Option<u32>,
    #[serde(default, rename = "type")]
    pub term: DisabilityTerm,
    #[serde(default)]
    pub who: PolicyHolder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalInsurance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_provided: Option<bool>,
}

impl Default for MedicalInsurance {
    fn default() -> Self {
        Self {
            health_company: None,
            employer_provided: Some(true),
        }
    }
}

/// A file captured as an embedded `data:` URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    #[serde(alias = "dataUrl")]
    pub data: String,
}

/// A planning option presented to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOption {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub risk: Risk,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guarantees: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_summary: Option<String>,
    #[serde(default)]
    pub score: Score,
}

impl PlanOption {
    /// Create a blank option with a freshly generated id
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            risk: Risk::Medium,
            guarantees: None,
            result_summary: None,
            score: Score::default(),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed Option"
        } else {
            &self.name
        }
    }
}

impl Default for PlanOption {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the wizard collects about one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_or_rent: Option<OwnOrRent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    #[serde(deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub spouse_age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_employer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_business_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_business_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_business_email: Option<String>,

    pub children: Vec<Child>,

    pub attorney: Contact,
    pub accountant: Contact,
    pub other_advisor: Contact,

    pub life_policies_self: Vec<LifePolicy>,
    pub life_policies_spouse: Vec<LifePolicy>,
    pub di: Vec<DisabilityPolicy>,
    pub medical_insurance: MedicalInsurance,

    pub priorities: Vec<String>,
    pub future_plans: Vec<String>,
    pub business_interests: Vec<String>,

    pub referrals: Vec<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisor_notes: Option<String>,
    pub illustration_files: Vec<Attachment>,
    pub options: Vec<PlanOption>,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            name: None,
            date: None,
            birthdate: None,
            age: None,
            home_phone: None,
            cell_phone: None,
            personal_email: None,
            address: None,
            own_or_rent: None,
            employer: None,
            position: None,
            business_address: None,
            business_phone: None,
            business_email: None,
            spouse_name: None,
            spouse_age: None,
            spouse_birthdate: None,
            spouse_employer: None,
            spouse_position: None,
            spouse_business_address: None,
            spouse_business_phone: None,
            spouse_business_email: None,
            children: Vec::new(),
            attorney: Contact::default(),
            accountant: Contact::default(),
            other_advisor: Contact::default(),
            life_policies_self: vec![LifePolicy::default()],
            life_policies_spouse: vec![LifePolicy::default()],
            di: vec![DisabilityPolicy::default()],
            medical_insurance: MedicalInsurance::default(),
            priorities: Vec::new(),
            future_plans: Vec::new(),
            business_interests: Vec::new(),
            referrals: Vec::new(),
            advisor_notes: None,
            illustration_files: Vec::new(),
            options: Vec::new(),
        }
    }
}

impl ClientProfile {
    /// Life policies for the given holder
    pub fn life_policies(&self, holder: PolicyHolder) -> &[LifePolicy] {
        match holder {
            PolicyHolder::Client => &self.life_policies_self,
            PolicyHolder::Spouse => &self.life_policies_spouse,
        }
    }

    /// Home ownership as displayed; unset shows as `Own`
    pub fn home_ownership(&self) -> OwnOrRent {
        self.own_or_rent.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_lists() {
            let profile = ClientProfile::default();
            assert!(profile.children.is_empty());
            assert!(profile.priorities.is_empty());
            assert!(profile.future_plans.is_empty());
            assert!(profile.business_interests.is_empty());
            assert!(profile.referrals.is_empty());
            assert!(profile.illustration_files.is_empty());
            assert!(profile.options.is_empty());
        }

        #[test]
        fn test_default_seeded_rows() {
            let profile = ClientProfile::default();
            assert_eq!(profile.life_policies_self, vec![LifePolicy::default()]);
            assert_eq!(profile.life_policies_spouse, vec![LifePolicy::default()]);
            assert_eq!(profile.di.len(), 1);
            assert_eq!(profile.di[0].term, DisabilityTerm::ShortTerm);
            assert_eq!(profile.di[0].who, PolicyHolder::Client);
            assert_eq!(profile.medical_insurance.employer_provided, Some(true));
        }

        #[test]
        fn test_home_ownership_defaults_to_own() {
            let profile = ClientProfile::default();
            assert_eq!(profile.own_or_rent, None);
            assert_eq!(profile.home_ownership(), OwnOrRent::Own);
        }
    }

    mod score {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_clamps() {
            assert_eq!(Score::new(0).get(), 1);
            assert_eq!(Score::new(-4).get(), 1);
            assert_eq!(Score::new(11).get(), 10);
            assert_eq!(Score::new(7).get(), 7);
        }

        #[test]
        fn test_increment_saturates() {
            assert_eq!(Score::new(10).increment().get(), 10);
            assert_eq!(Score::new(1).decrement().get(), 1);
            assert_eq!(Score::new(5).increment().get(), 6);
        }

        #[test]
        fn test_deserialize_clamps() {
            let high: Score = serde_json::from_str("42").unwrap();
            let low: Score = serde_json::from_str("0").unwrap();
            let fractional: Score = serde_json::from_str("6.6").unwrap();
            assert_eq!(high.get(), 10);
            assert_eq!(low.get(), 1);
            assert_eq!(fractional.get(), 7);
        }
    }

    mod serialization {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enum_wire_values() {
            let row = DisabilityPolicy {
                term: DisabilityTerm::LongTerm,
                who: PolicyHolder::Spouse,
                ..Default::default()
            };
            let json = serde_json::to_value(&row).unwrap();
            assert_eq!(json["type"], "Long-Term");
            assert_eq!(json["who"], "Spouse");

            let client = serde_json::to_value(PolicyHolder::Client).unwrap();
            assert_eq!(client, "Self");
        }

        #[test]
        fn test_camel_case_field_names() {
            let profile = ClientProfile {
                personal_email: Some("jane@example.com".to_string()),
                ..Default::default()
            };
            let json = serde_json::to_value(&profile).unwrap();
            assert_eq!(json["personalEmail"], "jane@example.com");
            assert!(json.get("lifePoliciesSelf").is_some());
            assert_eq!(json["medicalInsurance"]["employerProvided"], true);
        }

        #[test]
        fn test_missing_fields_fall_back_to_defaults() {
            let parsed: ClientProfile =
                serde_json::from_str(r#"{"name": "Jane Doe", "priorities": ["Policy review"]}"#)
                    .unwrap();
            assert_eq!(parsed.name.as_deref(), Some("Jane Doe"));
            assert_eq!(parsed.priorities, vec!["Policy review".to_string()]);
            assert_eq!(parsed.di, ClientProfile::default().di);
            assert_eq!(parsed.life_policies_self.len(), 1);
        }

        #[test]
        fn test_legacy_attachment_field_name() {
            let parsed: Attachment =
                serde_json::from_str(r#"{"name": "a.pdf", "dataUrl": "data:application/pdf;base64,AA=="}"#)
                    .unwrap();
            assert_eq!(parsed.data, "data:application/pdf;base64,AA==");
        }

        #[test]
        fn test_stray_numbers_do_not_reset_the_document() {
            let parsed: ClientProfile = serde_json::from_str(
                r#"{
                    "name": "Jane Doe",
                    "age": -1,
                    "spouseAge": 41.6,
                    "children": [{"name": "Sam", "age": "7"}, {"age": null}],
                    "di": [{"durationMonths": "soon"}]
                }"#,
            )
            .unwrap();
            assert_eq!(parsed.name.as_deref(), Some("Jane Doe"));
            assert_eq!(parsed.age, None);
            assert_eq!(parsed.spouse_age, Some(42));
            assert_eq!(parsed.children[0].age, Some(7));
            assert_eq!(parsed.children[1].age, None);
            assert_eq!(parsed.di[0].duration_months, None);
        }

        #[test]
        fn test_blank_di_row_gets_defaults() {
            let parsed: DisabilityPolicy = serde_json::from_str("{}").unwrap();
            assert_eq!(parsed.term, DisabilityTerm::ShortTerm);
            assert_eq!(parsed.who, PolicyHolder::Client);
        }
    }

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_option_defaults() {
            let option = PlanOption::new();
            assert!(!option.id.is_empty());
            assert_eq!(option.name, "");
            assert_eq!(option.risk, Risk::Medium);
            assert_eq!(option.score.get(), 5);
            assert_eq!(option.display_name(), "Unnamed Option");
        }

        #[test]
        fn test_new_options_have_distinct_ids() {
            let a = PlanOption::new();
            let b = PlanOption::new();
            assert_ne!(a.id, b.id);
        }
    }
}
