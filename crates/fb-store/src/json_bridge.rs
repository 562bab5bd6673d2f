use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use fb_core::{
    Activity, ActivityCatalog, ActivityLogEntry, FamilyMember, MoodLogEntry, UserProfile,
    ValidationError, activities, emotions, now_iso8601,
};

use crate::error::{Result, StoreError};
use crate::store::{Household, Store};

pub const EXPORT_VERSION: &str = "1.0";

/// Portable snapshot of one household, field names as the mobile app wrote them.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdExport {
    pub version: String,
    pub timestamp: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub family_members: Vec<FamilyMember>,
    #[serde(default)]
    pub mood_logs: Vec<MoodLogEntry>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub activity_logs: Vec<ActivityLogEntry>,
}

impl HouseholdExport {
    fn from_household(household: Household) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            timestamp: now_iso8601(),
            user: household.user,
            family_members: household.family_members,
            mood_logs: household.mood_logs,
            activities: household.activities,
            activity_logs: household.activity_logs,
        }
    }

    /// Check every record against the catalogs before any of it is written.
    fn validate(self) -> Result<Household> {
        let catalog = if self.activities.is_empty() {
            activities().clone()
        } else {
            ActivityCatalog::new(self.activities.clone(), emotions())?
        };

        if let Some(user) = &self.user {
            if user.id.is_empty() {
                return Err(ValidationError::MissingField("user.id").into());
            }
            if user.name.is_empty() {
                return Err(ValidationError::MissingField("user.name").into());
            }
        }
        if self.family_members.iter().any(|m| m.id.is_empty()) {
            return Err(ValidationError::MissingField("familyMembers.id").into());
        }
        for entry in &self.mood_logs {
            entry.validate(emotions())?;
        }
        for entry in &self.activity_logs {
            entry.validate(&catalog)?;
        }

        Ok(Household {
            user: self.user,
            family_members: self.family_members,
            mood_logs: self.mood_logs,
            activities: self.activities,
            activity_logs: self.activity_logs,
        })
    }
}

impl Store {
    pub fn export_json_string(&self) -> Result<String> {
        let export = HouseholdExport::from_household(self.load_household()?);
        Ok(serde_json::to_string_pretty(&export)?)
    }

    pub fn export_json_file(&self, path: &Path) -> Result<()> {
        let json = self.export_json_string()?;
        fs::write(path, json)?;
        tracing::info!("exported household to {}", path.display());
        Ok(())
    }

    /// Replace the store contents with an export. Nothing is written unless
    /// every entry validates.
    pub fn import_json_str(&self, json: &str) -> Result<()> {
        let export: HouseholdExport = serde_json::from_str(json)
            .map_err(|e| StoreError::InvalidData(format!("invalid JSON: {e}")))?;
        if export.version != EXPORT_VERSION {
            tracing::warn!(
                version = %export.version,
                "importing export written by a different version"
            );
        }
        let household = export.validate()?;
        self.replace_household(&household)?;
        tracing::info!(
            mood_logs = household.mood_logs.len(),
            activity_logs = household.activity_logs.len(),
            "imported household"
        );
        Ok(())
    }

    pub fn import_json_file(&self, path: &Path) -> Result<()> {
        let json = fs::read_to_string(path)?;
        self.import_json_str(&json)
    }
}
