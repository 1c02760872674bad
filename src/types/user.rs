use serde::{Deserialize, Serialize};

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub activated: bool,
}

#[derive(Serialize, Deserialize)]
pub struct RUserCreate {
    pub name: String,
    pub email: String,
}

/// Read response. `activated` is not part of the read contract.
#[derive(Serialize, Deserialize)]
pub struct UserGetRes {
    pub id: u64,
    pub name: String,
    pub email: String,
}
