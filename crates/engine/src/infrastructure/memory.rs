//! In-memory persistence adapter.
//!
//! Implements every repository port over `HashMap`s behind
//! `tokio::sync::RwLock`. Used by the binary and by workflow tests; a
//! database adapter only has to honor the same port contracts.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use lancerlog_domain::{
    Clock, ClockId, Corporation, CorporationId, ExoticGear, GearId, LogEntry, LogEntryId, Pilot,
    PilotId, ReputationChange, ReputationChangeId, UserId,
};

use crate::infrastructure::ports::{
    ClockRepo, CorporationRepo, GearRepo, LogEntryRepo, PilotRepo, RepoError, ReputationRepo,
};

/// All tables of the in-memory store.
#[derive(Default)]
pub struct InMemoryStore {
    pilots: RwLock<HashMap<PilotId, Pilot>>,
    logs: RwLock<HashMap<LogEntryId, LogEntry>>,
    clocks: RwLock<HashMap<ClockId, Clock>>,
    gear: RwLock<HashMap<GearId, ExoticGear>>,
    reputation: RwLock<HashMap<ReputationChangeId, ReputationChange>>,
    corporations: RwLock<HashMap<CorporationId, Corporation>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

fn newest_first(mut logs: Vec<LogEntry>) -> Vec<LogEntry> {
    logs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    logs
}

fn newest_pilots_first(mut pilots: Vec<Pilot>) -> Vec<Pilot> {
    pilots.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then(b.id().cmp(&a.id()))
    });
    pilots
}

#[async_trait]
impl PilotRepo for InMemoryStore {
    async fn get(&self, id: PilotId) -> Result<Option<Pilot>, RepoError> {
        Ok(self.pilots.read().await.get(&id).cloned())
    }

    async fn save(&self, pilot: &Pilot) -> Result<(), RepoError> {
        self.pilots.write().await.insert(pilot.id(), pilot.clone());
        Ok(())
    }

    async fn delete(&self, id: PilotId) -> Result<(), RepoError> {
        if self.pilots.write().await.remove(&id).is_none() {
            return Err(RepoError::not_found("Pilot", id));
        }
        self.logs.write().await.retain(|_, log| log.pilot_id != id);
        self.clocks.write().await.retain(|_, clock| !clock.belongs_to(id));
        self.gear.write().await.retain(|_, gear| gear.pilot_id != id);
        self.reputation
            .write()
            .await
            .retain(|_, change| change.pilot_id != id);
        Ok(())
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Pilot>, RepoError> {
        let pilots = self
            .pilots
            .read()
            .await
            .values()
            .filter(|p| p.user_id() == user_id)
            .cloned()
            .collect();
        Ok(newest_pilots_first(pilots))
    }

    async fn list_all(&self) -> Result<Vec<Pilot>, RepoError> {
        let pilots = self.pilots.read().await.values().cloned().collect();
        Ok(newest_pilots_first(pilots))
    }
}

#[async_trait]
impl LogEntryRepo for InMemoryStore {
    async fn get(&self, id: LogEntryId) -> Result<Option<LogEntry>, RepoError> {
        Ok(self.logs.read().await.get(&id).cloned())
    }

    async fn save(&self, entry: &LogEntry) -> Result<(), RepoError> {
        self.logs.write().await.insert(entry.id, entry.clone());
        Ok(())
    }

    async fn delete(&self, id: LogEntryId) -> Result<(), RepoError> {
        self.logs
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("LogEntry", id))
    }

    async fn list_for_pilot(&self, pilot_id: PilotId) -> Result<Vec<LogEntry>, RepoError> {
        let logs = self
            .logs
            .read()
            .await
            .values()
            .filter(|log| log.pilot_id == pilot_id)
            .cloned()
            .collect();
        Ok(newest_first(logs))
    }

    async fn list_all(&self) -> Result<Vec<LogEntry>, RepoError> {
        let logs = self.logs.read().await.values().cloned().collect();
        Ok(newest_first(logs))
    }
}

#[async_trait]
impl ClockRepo for InMemoryStore {
    async fn get(&self, id: ClockId) -> Result<Option<Clock>, RepoError> {
        Ok(self.clocks.read().await.get(&id).cloned())
    }

    async fn save(&self, clock: &Clock) -> Result<(), RepoError> {
        self.clocks.write().await.insert(clock.id, clock.clone());
        Ok(())
    }

    async fn delete(&self, id: ClockId) -> Result<(), RepoError> {
        self.clocks
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Clock", id))
    }

    async fn list_for_pilot(&self, pilot_id: PilotId) -> Result<Vec<Clock>, RepoError> {
        let mut clocks: Vec<Clock> = self
            .clocks
            .read()
            .await
            .values()
            .filter(|c| c.belongs_to(pilot_id))
            .cloned()
            .collect();
        clocks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(clocks)
    }
}

#[async_trait]
impl GearRepo for InMemoryStore {
    async fn get(&self, id: GearId) -> Result<Option<ExoticGear>, RepoError> {
        Ok(self.gear.read().await.get(&id).cloned())
    }

    async fn save(&self, gear: &ExoticGear) -> Result<(), RepoError> {
        self.gear.write().await.insert(gear.id, gear.clone());
        Ok(())
    }

    async fn list_for_pilot(&self, pilot_id: PilotId) -> Result<Vec<ExoticGear>, RepoError> {
        let mut gear: Vec<ExoticGear> = self
            .gear
            .read()
            .await
            .values()
            .filter(|g| g.pilot_id == pilot_id)
            .cloned()
            .collect();
        gear.sort_by_key(|g| g.acquired_at);
        Ok(gear)
    }

    async fn list_lost_in(&self, log_id: LogEntryId) -> Result<Vec<ExoticGear>, RepoError> {
        Ok(self
            .gear
            .read()
            .await
            .values()
            .filter(|g| g.lost_log_id == Some(log_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CorporationRepo for InMemoryStore {
    async fn get(&self, id: CorporationId) -> Result<Option<Corporation>, RepoError> {
        Ok(self.corporations.read().await.get(&id).cloned())
    }

    async fn save(&self, corporation: &Corporation) -> Result<(), RepoError> {
        let mut corporations = self.corporations.write().await;
        let taken = corporations.values().any(|existing| {
            existing.id != corporation.id
                && existing.name.as_str().eq_ignore_ascii_case(corporation.name.as_str())
        });
        if taken {
            return Err(RepoError::constraint(format!(
                "corporation name already in use: {}",
                corporation.name
            )));
        }
        corporations.insert(corporation.id, corporation.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Corporation>, RepoError> {
        let mut corporations: Vec<Corporation> =
            self.corporations.read().await.values().cloned().collect();
        corporations.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(corporations)
    }
}

#[async_trait]
impl ReputationRepo for InMemoryStore {
    async fn save_change(&self, change: &ReputationChange) -> Result<(), RepoError> {
        self.reputation
            .write()
            .await
            .insert(change.id, change.clone());
        Ok(())
    }

    async fn list_for_pilot(&self, pilot_id: PilotId) -> Result<Vec<ReputationChange>, RepoError> {
        Ok(self
            .reputation
            .read()
            .await
            .values()
            .filter(|c| c.pilot_id == pilot_id)
            .cloned()
            .collect())
    }

    async fn delete_for_log(&self, log_id: LogEntryId) -> Result<(), RepoError> {
        self.reputation
            .write()
            .await
            .retain(|_, change| change.log_entry_id != log_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use lancerlog_domain::{ClockName, CorporationName, GearName, LogType, PilotName};

    #[tokio::test]
    async fn logs_list_newest_first() {
        let store = InMemoryStore::new();
        let pilot = PilotId::new();
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let older = LogEntry::new(pilot, LogType::Game, 1, 25, start);
        let newer = LogEntry::new(pilot, LogType::Trade, 0, 25, start + Duration::days(1));
        LogEntryRepo::save(&store, &older).await.unwrap();
        LogEntryRepo::save(&store, &newer).await.unwrap();
        LogEntryRepo::save(&store, &LogEntry::new(PilotId::new(), LogType::Game, 1, 25, start))
            .await
            .unwrap();

        let listed = LogEntryRepo::list_for_pilot(&store, pilot).await.unwrap();
        assert_eq!(listed.iter().map(|l| l.id).collect::<Vec<_>>(), vec![newer.id, older.id]);
        assert_eq!(LogEntryRepo::list_all(&store).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn deleting_log_leaves_reputation_to_caller() {
        let store = InMemoryStore::new();
        let pilot = PilotId::new();
        let log = LogEntry::new(pilot, LogType::Game, 0, 25, Utc::now());
        let corp = Corporation::new(CorporationName::new("IPS-N").unwrap());
        LogEntryRepo::save(&store, &log).await.unwrap();
        store
            .save_change(&ReputationChange::new(log.id, pilot, corp.id, 1))
            .await
            .unwrap();

        LogEntryRepo::delete(&store, log.id).await.unwrap();
        assert_eq!(
            ReputationRepo::list_for_pilot(&store, pilot).await.unwrap().len(),
            1
        );

        store.delete_for_log(log.id).await.unwrap();
        assert!(ReputationRepo::list_for_pilot(&store, pilot)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn deleting_pilot_removes_owned_rows() {
        let store = InMemoryStore::new();
        let now = Utc::now();
        let pilot = Pilot::new(UserId::new(), PilotName::new("Ace").unwrap(), now);
        let other = Pilot::new(UserId::new(), PilotName::new("Other").unwrap(), now);
        let log = LogEntry::new(pilot.id(), LogType::Game, 2, 25, now);
        let other_log = LogEntry::new(other.id(), LogType::Game, 2, 25, now);
        let clock = Clock::new(Some(pilot.id()), ClockName::new("Debt").unwrap(), 4, 1, now).unwrap();
        let gear = ExoticGear::new(pilot.id(), GearName::new("Cloak").unwrap(), now);
        let corp = Corporation::new(CorporationName::new("IPS-N").unwrap());

        PilotRepo::save(&store, &pilot).await.unwrap();
        PilotRepo::save(&store, &other).await.unwrap();
        LogEntryRepo::save(&store, &log).await.unwrap();
        LogEntryRepo::save(&store, &other_log).await.unwrap();
        ClockRepo::save(&store, &clock).await.unwrap();
        GearRepo::save(&store, &gear).await.unwrap();
        store
            .save_change(&ReputationChange::new(log.id, pilot.id(), corp.id, 1))
            .await
            .unwrap();

        PilotRepo::delete(&store, pilot.id()).await.unwrap();

        assert!(PilotRepo::get(&store, pilot.id()).await.unwrap().is_none());
        assert!(LogEntryRepo::list_for_pilot(&store, pilot.id()).await.unwrap().is_empty());
        assert!(ClockRepo::get(&store, clock.id).await.unwrap().is_none());
        assert!(GearRepo::get(&store, gear.id).await.unwrap().is_none());
        assert!(ReputationRepo::list_for_pilot(&store, pilot.id())
            .await
            .unwrap()
            .is_empty());
        assert_eq!(LogEntryRepo::list_all(&store).await.unwrap(), vec![other_log]);
    }

    #[tokio::test]
    async fn corporation_names_are_unique() {
        let store = InMemoryStore::new();
        let first = Corporation::new(CorporationName::new("Harrison Armory").unwrap());
        CorporationRepo::save(&store, &first).await.unwrap();

        let renamed = first.clone().with_description("Purvis-based");
        CorporationRepo::save(&store, &renamed).await.unwrap();

        let clash = Corporation::new(CorporationName::new("harrison armory").unwrap());
        let err = CorporationRepo::save(&store, &clash).await.unwrap_err();
        assert!(matches!(err, RepoError::ConstraintViolation(_)));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleting_missing_entities_is_not_found() {
        let store = InMemoryStore::new();
        let err = LogEntryRepo::delete(&store, LogEntryId::new()).await.unwrap_err();
        assert!(err.is_not_found());
        let err = PilotRepo::delete(&store, PilotId::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn pilots_are_scoped_to_user() {
        let store = InMemoryStore::new();
        let owner = UserId::new();
        let pilot = Pilot::new(owner, PilotName::new("Ace").unwrap(), Utc::now());
        PilotRepo::save(&store, &pilot).await.unwrap();
        PilotRepo::save(
            &store,
            &Pilot::new(UserId::new(), PilotName::new("Other").unwrap(), Utc::now()),
        )
        .await
        .unwrap();

        let mine = store.list_for_user(owner).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id(), pilot.id());
    }
}
