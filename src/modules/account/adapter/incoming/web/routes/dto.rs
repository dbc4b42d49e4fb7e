use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::account::application::domain::Account;

// Absent fields decode as empty strings and fail validation downstream.

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    /// E.164 phone number
    #[schema(example = "+15550000001")]
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetAccountRequest {
    /// Account ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateHandleRequest {
    /// Account ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    #[serde(default)]
    pub id: String,

    /// New handle, `@` followed by 2 to 30 letters, digits or underscores
    #[schema(example = "@int_nick_2")]
    #[serde(default)]
    pub handle: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteAccountRequest {
    /// Account ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    #[serde(default)]
    pub id: String,
}

/// Account as seen by callers.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountDto {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "@k3j9x0a1bq")]
    pub handle: String,

    #[schema(example = "+15550000001")]
    pub phone: String,

    #[schema(example = "2026-03-01T10:00:00.000000Z")]
    pub created_at: String,

    #[schema(example = "2026-03-01T10:00:00.000000Z")]
    pub updated_at: String,

    /// Only present once the account is deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            handle: account.handle,
            phone: account.phone,
            created_at: rfc3339(account.created_at),
            updated_at: rfc3339(account.updated_at),
            deleted_at: account.deleted_at.map(rfc3339),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub account: AccountDto,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account: account.into(),
        }
    }
}

/// Empty body returned by DeleteAccount.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteAccountResponse {}

fn rfc3339(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
