use std::sync::Arc;
use user_registry::db::memory_service::MemoryService;

pub mod client;

pub struct TestContext {
    pub db: Arc<MemoryService>,
}

impl TestContext {
    /// Fresh store seeded with the two well-known records.
    pub fn new() -> TestContext {
        TestContext {
            db: Arc::new(MemoryService::with_records(test_data::initial_users())),
        }
    }
}

// Test data helpers
pub mod test_data {
    use user_registry::types::user::{RUserCreate, UserModel};

    pub fn initial_users() -> Vec<UserModel> {
        vec![
            UserModel {
                id: 1,
                name: "Ivan Ivanov".to_string(),
                email: "i.i.ivanov@mail.com".to_string(),
                activated: false,
            },
            UserModel {
                id: 2,
                name: "Petr Petrov".to_string(),
                email: "p.p.petrov@mail.com".to_string(),
                activated: false,
            },
        ]
    }

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            name: "New User".to_string(),
            email: "new.user@mail.com".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            name: "New User".to_string(),
            email: email.to_string(),
        }
    }
}
