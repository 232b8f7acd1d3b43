//! Persistent store for the client profile
//!
//! The profile lives under one fixed key. Loading never fails: a missing or
//! unreadable document yields the default profile. Saving is fire-and-forget
//! and only logs failures.

mod backends;
mod traits;

pub use backends::{FileBackend, MemoryBackend};
pub use traits::StorageBackend;

#[cfg(test)]
pub use traits::MockStorageBackend;

use crate::error::StoreError;
use crate::state::ClientProfile;

/// Fixed storage key of the persisted profile
pub const STORAGE_KEY: &str = "tkf-wizard-min";

/// Loads and saves the [`ClientProfile`] through an injected backend
pub struct ProfileStore {
    backend: Box<dyn StorageBackend>,
}

impl ProfileStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// In-memory store, nothing survives the process
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Persisted profile, or the default when absent or unreadable
    pub fn load(&self) -> ClientProfile {
        match self.try_load() {
            Ok(Some(profile)) => {
                tracing::info!("loaded persisted client profile");
                profile
            }
            Ok(None) => {
                tracing::info!("no persisted client profile, starting fresh");
                ClientProfile::default()
            }
            Err(err) => {
                tracing::warn!("discarding unreadable client profile: {err}");
                ClientProfile::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<ClientProfile>, StoreError> {
        let Some(raw) = self.backend.read(STORAGE_KEY)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Serialize and write synchronously; failures are logged only
    pub fn save(&mut self, profile: &ClientProfile) {
        if let Err(err) = self.try_save(profile) {
            tracing::warn!("failed to persist client profile: {err}");
        }
    }

    pub fn try_save(&mut self, profile: &ClientProfile) -> Result<(), StoreError> {
        let json = serde_json::to_string(profile)?;
        self.backend.write(STORAGE_KEY, &json)?;
        tracing::debug!(bytes = json.len(), "persisted client profile");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        append_default_item, set_field, toggle_membership, Attachment, Checklist, FieldUpdate,
        ListKind, NumberField, TextField,
    };
    use pretty_assertions::assert_eq;

    fn populated_profile() -> ClientProfile {
        let mut profile = ClientProfile::default();
        profile = set_field(
            &profile,
            FieldUpdate::Text(TextField::Name, "Jane Doe".to_string()),
        );
        profile = set_field(&profile, FieldUpdate::Number(NumberField::Age, Some(52)));
        profile = toggle_membership(&profile, Checklist::Priorities, "Policy review");
        profile = append_default_item(&profile, ListKind::Options);
        profile = append_default_item(&profile, ListKind::Children);
        profile.life_policies_self[0].death_benefit = Some(125_000.5);
        profile.illustration_files.push(Attachment {
            name: "quote.pdf".to_string(),
            data: "data:application/pdf;base64,JVBERg==".to_string(),
        });
        profile
    }

    #[test]
    fn test_load_empty_store_yields_defaults() {
        let store = ProfileStore::in_memory();
        assert_eq!(store.load(), ClientProfile::default());
    }

    #[test]
    fn test_round_trip() {
        let mut store = ProfileStore::in_memory();
        let profile = populated_profile();
        store.save(&profile);
        assert_eq!(store.load(), profile);
    }

    #[test]
    fn test_round_trip_default_profile() {
        let mut store = ProfileStore::in_memory();
        store.save(&ClientProfile::default());
        assert_eq!(store.load(), ClientProfile::default());
    }

    #[test]
    fn test_corrupt_document_falls_back_to_defaults() {
        let mut backend = MemoryBackend::new();
        backend.write(STORAGE_KEY, "{not json").unwrap();
        let store = ProfileStore::new(backend);
        assert_eq!(store.load(), ClientProfile::default());
    }

    #[test]
    fn test_read_error_falls_back_to_defaults() {
        let mut backend = MockStorageBackend::new();
        backend.expect_read().returning(|_| {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        });
        let store = ProfileStore::new(backend);
        assert_eq!(store.load(), ClientProfile::default());
    }

    #[test]
    fn test_save_writes_under_fixed_key() {
        let mut backend = MockStorageBackend::new();
        backend
            .expect_write()
            .withf(|key, value| key.to_string() == STORAGE_KEY && value.contains("\"name\":\"Jane Doe\""))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut store = ProfileStore::new(backend);
        store.save(&populated_profile());
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let mut backend = MockStorageBackend::new();
        backend
            .expect_write()
            .returning(|_, _| Err(StoreError::Unavailable));
        let mut store = ProfileStore::new(backend);
        store.save(&ClientProfile::default());
        assert!(store.try_save(&ClientProfile::default()).is_err());
    }

    #[test]
    fn test_file_backed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let profile = populated_profile();
        {
            let mut store = ProfileStore::new(FileBackend::new(dir.path()));
            store.save(&profile);
        }
        let reopened = ProfileStore::new(FileBackend::new(dir.path()));
        assert_eq!(reopened.load(), profile);
        assert!(dir.path().join("tkf-wizard-min.json").exists());
    }

    #[test]
    fn test_loads_document_written_by_earlier_wizard() {
        let legacy = r#"{
            "name": "Jane Doe",
            "children": [],
            "attorney": {}, "accountant": {}, "otherAdvisor": {},
            "lifePoliciesSelf": [{}], "lifePoliciesSpouse": [{}],
            "di": [{"type": "Short-Term", "who": "Self"}],
            "medicalInsurance": {"employerProvided": true},
            "priorities": ["Long-term care"], "futurePlans": [], "businessInterests": [],
            "referrals": [],
            "illustrationFiles": [{"name": "a.png", "dataUrl": "data:image/png;base64,AA=="}],
            "options": [{"id": "abc", "name": "Plan A", "risk": "Low", "score": 7}]
        }"#;
        let mut backend = MemoryBackend::new();
        backend.write(STORAGE_KEY, legacy).unwrap();
        let profile = ProfileStore::new(backend).load();
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.options[0].id, "abc");
        assert_eq!(profile.options[0].score.get(), 7);
        assert_eq!(profile.illustration_files[0].data, "data:image/png;base64,AA==");
    }
}
