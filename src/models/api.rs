use crate::models::order::Order;
use crate::models::stage::Stage;
use crate::models::user::User;
use serde::{Deserialize, Serialize};

/// Login form body, accepted as JSON or urlencoded form. Fields default to
/// empty so blank submissions reach the credential validation instead of a
/// body rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Deserialize)]
pub struct TokenQuery {
    pub token: String,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub token: String,
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct OrderIdQuery {
    pub token: String,
    pub id: u64,
}

#[derive(Deserialize)]
pub struct StageQuery {
    pub token: String,
    pub id: u64,
    pub stage: String,
    #[serde(default)]
    pub done: u8,
}

/// Worker identity as shown to the board; the roster password never leaves
/// the server.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub role: Stage,
    pub role_label: String,
}

impl UserInfo {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            role: user.role,
            role_label: user.role.display_name().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

#[derive(Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub user: UserInfo,
}

#[derive(Serialize, Deserialize)]
pub struct OrderListResponse {
    pub success: bool,
    pub orders: Vec<Order>,
}

#[derive(Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: Order,
}

#[derive(Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
