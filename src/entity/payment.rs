use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{fresh_id, parse_date};
use crate::core::{Record, Result, StoreError, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }

    /// Payment workflow: pending -> processing|paid|failed,
    /// processing -> paid|failed. Paid and failed are terminal; a retry
    /// creates a new pending payment rather than reviving a failed one.
    pub fn can_transition(self, to: Self) -> bool {
        use PaymentStatus::*;
        if self == to {
            return true;
        }
        matches!(
            (self, to),
            (Pending, Processing)
                | (Pending, Paid)
                | (Pending, Failed)
                | (Processing, Paid)
                | (Processing, Failed)
        )
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            other => Err(StoreError::Validation(format!(
                "unknown payment status '{other}'"
            ))),
        }
    }
}

/// Payout or invoice row on the payments dashboard. Carries either the
/// receiving creator or the paying brand depending on the view side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub campaign: String,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    pub due_date: NaiveDate,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub payment_link: Option<String>,
}

impl Payment {
    #[allow(clippy::too_many_arguments)]
    pub fn seeded(
        id: &str,
        campaign: &str,
        creator: Option<&str>,
        brand: Option<&str>,
        amount: f64,
        status: PaymentStatus,
        due_date: &str,
        created_at: &str,
    ) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            campaign: campaign.to_string(),
            creator: creator.map(str::to_string),
            brand: brand.map(str::to_string),
            amount,
            currency: "USD".to_string(),
            status,
            due_date: parse_date(Self::ENTITY, "due_date", due_date)?,
            created_at: parse_date(Self::ENTITY, "created_at", created_at)?,
            payment_link: None,
        })
    }

    /// New payment request, pending and dated today.
    pub fn request(campaign: &str, creator: &str, amount: f64, due_date: &str) -> Result<Self> {
        if amount <= 0.0 {
            return Err(StoreError::Validation(format!(
                "payment amount must be positive, got {amount}"
            )));
        }
        Ok(Self {
            id: fresh_id(),
            campaign: campaign.to_string(),
            creator: Some(creator.to_string()),
            brand: None,
            amount,
            currency: "USD".to_string(),
            status: PaymentStatus::Pending,
            due_date: parse_date(Self::ENTITY, "due_date", due_date)?,
            created_at: chrono::Utc::now().date_naive(),
            payment_link: None,
        })
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.payment_link = Some(link.to_string());
        self
    }
}

impl Record for Payment {
    const ENTITY: &'static str = "payment";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.campaign.as_str()];
        if let Some(creator) = &self.creator {
            fields.push(creator);
        }
        if let Some(brand) = &self.brand {
            fields.push(brand);
        }
        fields
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.label().to_string()),
            "currency" => Some(self.currency.clone()),
            _ => None,
        }
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::from(self.id.as_str())),
            "campaign" => Some(Value::from(self.campaign.as_str())),
            "creator" => Some(
                self.creator
                    .as_deref()
                    .map(Value::from)
                    .unwrap_or(Value::Null),
            ),
            "brand" => Some(
                self.brand
                    .as_deref()
                    .map(Value::from)
                    .unwrap_or(Value::Null),
            ),
            "amount" => Some(Value::Float(self.amount)),
            "currency" => Some(Value::from(self.currency.as_str())),
            "status" => Some(Value::from(self.status.label())),
            "due_date" => Some(Value::Text(self.due_date.to_string())),
            "created_at" => Some(Value::Text(self.created_at.to_string())),
            "payment_link" => Some(
                self.payment_link
                    .as_deref()
                    .map(Value::from)
                    .unwrap_or(Value::Null),
            ),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "campaign" => self.campaign = value.into_text(Self::ENTITY, field)?,
            "creator" => {
                self.creator = match value {
                    Value::Null => None,
                    other => Some(other.into_text(Self::ENTITY, field)?),
                }
            }
            "brand" => {
                self.brand = match value {
                    Value::Null => None,
                    other => Some(other.into_text(Self::ENTITY, field)?),
                }
            }
            "amount" => {
                let amount = value.into_f64(Self::ENTITY, field)?;
                if amount <= 0.0 {
                    return Err(StoreError::Validation(format!(
                        "payment amount must be positive, got {amount}"
                    )));
                }
                self.amount = amount;
            }
            "currency" => self.currency = value.into_text(Self::ENTITY, field)?,
            "status" => self.status = value.into_text(Self::ENTITY, field)?.parse()?,
            "due_date" => {
                self.due_date =
                    parse_date(Self::ENTITY, field, &value.into_text(Self::ENTITY, field)?)?
            }
            "created_at" => {
                self.created_at =
                    parse_date(Self::ENTITY, field, &value.into_text(Self::ENTITY, field)?)?
            }
            "payment_link" => {
                self.payment_link = match value {
                    Value::Null => None,
                    other => Some(other.into_text(Self::ENTITY, field)?),
                }
            }
            "id" => {
                return Err(StoreError::Validation("payment id is immutable".into()));
            }
            _ => {
                return Err(StoreError::FieldNotFound {
                    entity: Self::ENTITY,
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    fn status_label(&self) -> Option<&'static str> {
        Some(self.status.label())
    }

    fn valid_transition(&self, field: &str, value: &Value) -> Result<()> {
        if field == "status"
            && let Some(text) = value.as_str()
        {
            let to: PaymentStatus = text.parse()?;
            if !self.status.can_transition(to) {
                return Err(StoreError::IllegalTransition {
                    from: self.status.to_string(),
                    to: to.to_string(),
                });
            }
        }
        Ok(())
    }
}
