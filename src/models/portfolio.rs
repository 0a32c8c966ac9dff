use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// A named grouping of holdings owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Portfolio {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolio {
    pub name: Option<String>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioQuery {
    pub user_id: Option<Uuid>,
}

impl Portfolio {
    pub(crate) fn new(name: String, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            user_id,
            created_at: Utc::now(),
        }
    }
}
