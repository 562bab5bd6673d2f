use std::fmt;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

use fb_core::{
    Activity, ActivityCatalog, ActivityLogEntry, FamilyMember, MoodLogEntry, UserProfile,
    activities, emotions, now_iso8601,
};

use crate::error::{Result, StoreError};
use crate::schema;

/// Named JSON documents held in the `blobs` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    User,
    FamilyMembers,
    MoodLogs,
    Activities,
    ActivityLogs,
}

impl Key {
    pub fn as_str(self) -> &'static str {
        match self {
            Key::User => "user",
            Key::FamilyMembers => "familyMembers",
            Key::MoodLogs => "moodLogs",
            Key::Activities => "activities",
            Key::ActivityLogs => "activityLogs",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one household has stored, loaded in one go.
#[derive(Clone, Debug, Default)]
pub struct Household {
    pub user: Option<UserProfile>,
    pub family_members: Vec<FamilyMember>,
    pub mood_logs: Vec<MoodLogEntry>,
    pub activities: Vec<Activity>,
    pub activity_logs: Vec<ActivityLogEntry>,
}

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        tracing::debug!("opened store at {}", path.display());
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // --- Metadata ---

    pub fn get_metadata(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM metadata WHERE key = ?1")?;
        let result = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(result)
    }

    pub fn set_metadata(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    // --- Raw documents ---

    pub fn get_raw(&self, key: Key) -> Result<Option<String>> {
        get_raw_on(&self.conn, key)
    }

    pub fn put_raw(&self, key: Key, value: &str) -> Result<()> {
        put_raw_on(&self.conn, key, value)
    }

    pub fn remove(&self, key: Key) -> Result<()> {
        self.conn
            .execute("DELETE FROM blobs WHERE key = ?1", [key.as_str()])?;
        Ok(())
    }

    /// Wipe every household document. Schema metadata is kept.
    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM blobs", [])?;
        tracing::info!("cleared household data");
        Ok(())
    }

    // --- Typed documents ---

    pub fn load<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>> {
        load_on(&self.conn, key)
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: Key, value: &T) -> Result<()> {
        save_on(&self.conn, key, value)
    }

    pub fn load_user(&self) -> Result<Option<UserProfile>> {
        self.load(Key::User)
    }

    pub fn save_user(&self, user: &UserProfile) -> Result<()> {
        self.save(Key::User, user)
    }

    pub fn is_onboarded(&self) -> Result<bool> {
        Ok(self.get_raw(Key::User)?.is_some())
    }

    pub fn load_family_members(&self) -> Result<Vec<FamilyMember>> {
        Ok(self.load(Key::FamilyMembers)?.unwrap_or_default())
    }

    pub fn load_mood_logs(&self) -> Result<Vec<MoodLogEntry>> {
        Ok(self.load(Key::MoodLogs)?.unwrap_or_default())
    }

    pub fn load_activity_logs(&self) -> Result<Vec<ActivityLogEntry>> {
        Ok(self.load(Key::ActivityLogs)?.unwrap_or_default())
    }

    /// The stored activity catalog, or the built-in one when none was saved.
    pub fn load_activity_catalog(&self) -> Result<ActivityCatalog> {
        match self.load::<Vec<Activity>>(Key::Activities)? {
            Some(stored) if !stored.is_empty() => Ok(ActivityCatalog::new(stored, emotions())?),
            _ => Ok(activities().clone()),
        }
    }

    // --- Appends ---

    pub fn add_family_member(&self, member: &FamilyMember) -> Result<()> {
        self.append(Key::FamilyMembers, member)?;
        tracing::info!(member = %member.name, role = %member.role, "added family member");
        Ok(())
    }

    pub fn append_mood_log(&self, entry: &MoodLogEntry) -> Result<()> {
        self.append(Key::MoodLogs, entry)?;
        tracing::debug!(mood = %entry.mood, user = %entry.user_id, "logged mood");
        Ok(())
    }

    pub fn append_activity_log(&self, entry: &ActivityLogEntry) -> Result<()> {
        self.append(Key::ActivityLogs, entry)?;
        tracing::debug!(activity = %entry.activity_id, "logged activity");
        Ok(())
    }

    fn append<T: Serialize>(&self, key: Key, item: &T) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let mut items: Vec<serde_json::Value> = load_on(&tx, key)?.unwrap_or_default();
        items.push(serde_json::to_value(item)?);
        save_on(&tx, key, &items)?;
        tx.commit()?;
        Ok(())
    }

    // --- Onboarding ---

    /// Save the profile, seed the household with the user plus `members`,
    /// and store the built-in activity catalog if none exists yet.
    pub fn onboard(&self, user: &UserProfile, members: &[FamilyMember]) -> Result<()> {
        if self.is_onboarded()? {
            return Err(StoreError::InvalidData(
                "household is already onboarded".to_string(),
            ));
        }

        let tx = self.conn.unchecked_transaction()?;

        let mut household = vec![user.as_member()];
        household.extend(members.iter().cloned());

        save_on(&tx, Key::User, user)?;
        save_on(&tx, Key::FamilyMembers, &household)?;
        if get_raw_on(&tx, Key::Activities)?.is_none() {
            save_on(&tx, Key::Activities, activities().as_slice())?;
        }

        tx.commit()?;
        tracing::info!(
            user = %user.name,
            members = household.len(),
            "onboarded household"
        );
        Ok(())
    }

    pub fn load_household(&self) -> Result<Household> {
        Ok(Household {
            user: self.load_user()?,
            family_members: self.load_family_members()?,
            mood_logs: self.load_mood_logs()?,
            activities: self.load(Key::Activities)?.unwrap_or_default(),
            activity_logs: self.load_activity_logs()?,
        })
    }

    /// Replace every stored document with `household` in one transaction.
    pub fn replace_household(&self, household: &Household) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM blobs", [])?;

        if let Some(user) = &household.user {
            save_on(&tx, Key::User, user)?;
        }
        save_on(&tx, Key::FamilyMembers, &household.family_members)?;
        save_on(&tx, Key::MoodLogs, &household.mood_logs)?;
        if !household.activities.is_empty() {
            save_on(&tx, Key::Activities, &household.activities)?;
        }
        save_on(&tx, Key::ActivityLogs, &household.activity_logs)?;

        tx.commit()?;
        Ok(())
    }
}

fn get_raw_on(conn: &Connection, key: Key) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM blobs WHERE key = ?1")?;
    let result = stmt
        .query_row([key.as_str()], |row| row.get(0))
        .optional()?;
    Ok(result)
}

fn put_raw_on(conn: &Connection, key: Key, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)",
        params![key.as_str(), value, now_iso8601()],
    )?;
    Ok(())
}

fn load_on<T: DeserializeOwned>(conn: &Connection, key: Key) -> Result<Option<T>> {
    match get_raw_on(conn, key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::InvalidData(format!("corrupt {key} document: {e}"))),
        None => Ok(None),
    }
}

fn save_on<T: Serialize + ?Sized>(conn: &Connection, key: Key, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    put_raw_on(conn, key, &json)
}
