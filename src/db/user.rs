use crate::db::memory_service::MemoryService;
use crate::types::{error::AppError, user::RUserCreate, user::UserModel};

impl MemoryService {
    /// Linear scan by email. Absence is a normal result, not an error.
    pub fn get_user_by_email(&self, email: &str) -> Option<UserModel> {
        self.read().users.iter().find(|u| u.email == email).cloned()
    }

    /// Create a user with the next id. Fails on a colliding email without
    /// touching the store; the uniqueness check and the insert happen under
    /// the same write guard.
    pub fn create_user(&self, payload: RUserCreate) -> Result<u64, AppError> {
        let mut state = self.write();

        if state.users.iter().any(|u| u.email == payload.email) {
            return Err(AppError::AlreadyExists);
        }

        state.last_id += 1;
        let user_id = state.last_id;

        state.users.push(UserModel {
            id: user_id,
            name: payload.name,
            email: payload.email,
            activated: false,
        });

        Ok(user_id)
    }

    /// Remove the record matching `email`, if any. Reports whether a removal
    /// occurred; callers treat a miss as a successful no-op.
    pub fn delete_user_by_email(&self, email: &str) -> bool {
        let mut state = self.write();
        match state.users.iter().position(|u| u.email == email) {
            Some(idx) => {
                state.users.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn user_count(&self) -> usize {
        self.read().users.len()
    }
}
