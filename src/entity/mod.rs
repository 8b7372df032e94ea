mod campaign;
mod contract;
mod creator;
mod payment;
mod user;

pub use campaign::{Campaign, CampaignStatus};
pub use contract::{Contract, ContractStatus};
pub use creator::Creator;
pub use payment::{Payment, PaymentStatus};
pub use user::{User, UserRole, UserStatus};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::{Result, StoreError};

/// Fresh v4 UUID for records created at runtime; seeded records keep the
/// ids they were loaded with.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn parse_date(entity: &'static str, field: &str, text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| {
        StoreError::Validation(format!("{entity}.{field}: invalid date '{text}': {e}"))
    })
}
