use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Storage model for a provider row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Provider {
    /// Provider's first name
    pub first_name: String,

    /// Provider's last name
    pub last_name: String,

    /// Provider's area of practice, stored as free text
    pub provider_speciality: String,
}
