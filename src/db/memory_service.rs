use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::user::UserModel;

/// In-memory record store. Owns every stored user plus the id counter;
/// nothing else in the process holds or mutates this state directly.
pub struct MemoryService {
    pub(crate) state: RwLock<StoreState>,
}

pub(crate) struct StoreState {
    pub(crate) users: Vec<UserModel>,
    // Last assigned id. Never decremented, ids are never reused.
    pub(crate) last_id: u64,
}

impl MemoryService {
    pub fn new() -> Self {
        MemoryService {
            state: RwLock::new(StoreState {
                users: Vec::new(),
                last_id: 0,
            }),
        }
    }

    /// Store pre-populated with existing records. The counter resumes from
    /// the highest seeded id so later inserts stay strictly increasing.
    pub fn with_records(records: Vec<UserModel>) -> Self {
        let last_id = records.iter().map(|u| u.id).max().unwrap_or(0);
        MemoryService {
            state: RwLock::new(StoreState {
                users: records,
                last_id,
            }),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryService {
    fn default() -> Self {
        Self::new()
    }
}
