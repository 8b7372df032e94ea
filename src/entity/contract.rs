use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{fresh_id, parse_date};
use crate::core::{Record, Result, StoreError, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Drafted,
    Pending,
    Sent,
    Signed,
    Rejected,
    Expired,
}

impl ContractStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Drafted => "drafted",
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Signed => "signed",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }

    /// Contract workflow: drafted|pending -> sent -> signed,
    /// pending -> rejected, sent -> rejected|expired.
    /// Signed, rejected, and expired are terminal.
    pub fn can_transition(self, to: Self) -> bool {
        use ContractStatus::*;
        if self == to {
            return true;
        }
        matches!(
            (self, to),
            (Drafted, Sent)
                | (Pending, Sent)
                | (Pending, Rejected)
                | (Sent, Signed)
                | (Sent, Rejected)
                | (Sent, Expired)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Signed | Self::Rejected | Self::Expired)
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContractStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "drafted" => Ok(Self::Drafted),
            "pending" => Ok(Self::Pending),
            "sent" => Ok(Self::Sent),
            "signed" => Ok(Self::Signed),
            "rejected" => Ok(Self::Rejected),
            "expired" => Ok(Self::Expired),
            other => Err(StoreError::Validation(format!(
                "unknown contract status '{other}'"
            ))),
        }
    }
}

/// Creator contract attached to one campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub creator: String,
    pub campaign: String,
    pub status: ContractStatus,
    pub created_at: NaiveDate,
    pub pdf_url: String,
}

impl Contract {
    pub fn seeded(
        id: &str,
        creator: &str,
        campaign: &str,
        status: ContractStatus,
        created_at: &str,
    ) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            creator: creator.to_string(),
            campaign: campaign.to_string(),
            status,
            created_at: parse_date(Self::ENTITY, "created_at", created_at)?,
            pdf_url: String::new(),
        })
    }

    pub fn with_pdf_url(mut self, url: &str) -> Self {
        self.pdf_url = url.to_string();
        self
    }

    /// Draft a new contract dated today.
    pub fn drafted(creator: &str, campaign: &str) -> Self {
        Self {
            id: fresh_id(),
            creator: creator.to_string(),
            campaign: campaign.to_string(),
            status: ContractStatus::Drafted,
            created_at: chrono::Utc::now().date_naive(),
            pdf_url: String::new(),
        }
    }

    /// Sign this contract. Requires a non-empty signer name and a state
    /// from which signing is legal.
    pub fn sign(&mut self, signer_name: &str) -> Result<()> {
        if signer_name.trim().is_empty() {
            return Err(StoreError::Validation(
                "signer name must not be empty".into(),
            ));
        }
        if !self.status.can_transition(ContractStatus::Signed) {
            return Err(StoreError::IllegalTransition {
                from: self.status.to_string(),
                to: ContractStatus::Signed.to_string(),
            });
        }
        self.status = ContractStatus::Signed;
        Ok(())
    }
}

impl Record for Contract {
    const ENTITY: &'static str = "contract";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.creator, &self.campaign]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::from(self.id.as_str())),
            "creator" => Some(Value::from(self.creator.as_str())),
            "campaign" => Some(Value::from(self.campaign.as_str())),
            "status" => Some(Value::from(self.status.label())),
            "created_at" => Some(Value::Text(self.created_at.to_string())),
            "pdf_url" => Some(Value::from(self.pdf_url.as_str())),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "creator" => self.creator = value.into_text(Self::ENTITY, field)?,
            "campaign" => self.campaign = value.into_text(Self::ENTITY, field)?,
            "status" => self.status = value.into_text(Self::ENTITY, field)?.parse()?,
            "created_at" => {
                self.created_at =
                    parse_date(Self::ENTITY, field, &value.into_text(Self::ENTITY, field)?)?
            }
            "pdf_url" => self.pdf_url = value.into_text(Self::ENTITY, field)?,
            "id" => {
                return Err(StoreError::Validation("contract id is immutable".into()));
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
            let to: ContractStatus = text.parse()?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use ContractStatus::*;
        assert!(Drafted.can_transition(Sent));
        assert!(Pending.can_transition(Sent));
        assert!(Pending.can_transition(Rejected));
        assert!(Sent.can_transition(Signed));
        assert!(Sent.can_transition(Expired));
        assert!(!Drafted.can_transition(Signed));
        assert!(!Signed.can_transition(Sent));
        assert!(!Rejected.can_transition(Pending));
        assert!(Signed.is_terminal());
        assert!(!Sent.is_terminal());
    }

    #[test]
    fn test_sign_requires_name() {
        let mut contract = Contract::seeded(
            "1",
            "Sarah Johnson",
            "Summer Fashion Collection 2024",
            ContractStatus::Sent,
            "2024-01-15",
        )
        .unwrap();

        assert!(contract.sign("   ").is_err());
        assert_eq!(contract.status, ContractStatus::Sent);

        contract.sign("Sarah Johnson").unwrap();
        assert_eq!(contract.status, ContractStatus::Signed);
    }

    #[test]
    fn test_sign_from_terminal_state() {
        let mut contract =
            Contract::seeded("1", "A", "B", ContractStatus::Rejected, "2024-01-05").unwrap();
        let err = contract.sign("A").unwrap_err();
        assert!(matches!(err, StoreError::IllegalTransition { .. }));
    }

    #[test]
    fn test_drafted_constructor() {
        let contract = Contract::drafted("Mike Chen", "Tech Product Launch");
        assert_eq!(contract.status, ContractStatus::Drafted);
        assert!(!contract.id.is_empty());
    }

    #[test]
    fn test_search_covers_creator_and_campaign() {
        let contract =
            Contract::seeded("1", "Mike Chen", "Tech Product Launch", ContractStatus::Signed, "2024-01-10")
                .unwrap();
        assert_eq!(contract.search_text(), vec!["Mike Chen", "Tech Product Launch"]);
    }
}
