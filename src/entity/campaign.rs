use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{fresh_id, parse_date};
use crate::core::{Record, Result, StoreError, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    /// Campaign workflow: draft -> active -> {paused, completed},
    /// paused -> active. Completed is terminal.
    pub fn can_transition(self, to: Self) -> bool {
        use CampaignStatus::*;
        if self == to {
            return true;
        }
        matches!(
            (self, to),
            (Draft, Active) | (Active, Paused) | (Active, Completed) | (Paused, Active)
        )
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CampaignStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            other => Err(StoreError::Validation(format!(
                "unknown campaign status '{other}'"
            ))),
        }
    }
}

/// Influencer-marketing campaign as listed on the brand dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    pub spent: f64,
    pub creators: u32,
    pub engagement: f64,
}

impl Campaign {
    /// Build a campaign with a known id, as loaded from a dataset.
    #[allow(clippy::too_many_arguments)]
    pub fn seeded(
        id: &str,
        name: &str,
        status: CampaignStatus,
        start_date: &str,
        end_date: &str,
        budget: f64,
        spent: f64,
        creators: u32,
        engagement: f64,
    ) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            status,
            start_date: parse_date(Self::ENTITY, "start_date", start_date)?,
            end_date: parse_date(Self::ENTITY, "end_date", end_date)?,
            budget,
            spent,
            creators,
            engagement,
        })
    }

    /// Create a fresh draft campaign with nothing spent yet.
    pub fn draft(name: &str, start_date: &str, end_date: &str, budget: f64) -> Result<Self> {
        Self::seeded(
            &fresh_id(),
            name,
            CampaignStatus::Draft,
            start_date,
            end_date,
            budget,
            0.0,
            0,
            0.0,
        )
    }
}

impl Record for Campaign {
    const ENTITY: &'static str = "campaign";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name]
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
            "name" => Some(Value::from(self.name.as_str())),
            "status" => Some(Value::from(self.status.label())),
            "start_date" => Some(Value::Text(self.start_date.to_string())),
            "end_date" => Some(Value::Text(self.end_date.to_string())),
            "budget" => Some(Value::Float(self.budget)),
            "spent" => Some(Value::Float(self.spent)),
            "creators" => Some(Value::Integer(self.creators as i64)),
            "engagement" => Some(Value::Float(self.engagement)),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "name" => self.name = value.into_text(Self::ENTITY, field)?,
            "status" => self.status = value.into_text(Self::ENTITY, field)?.parse()?,
            "start_date" => {
                self.start_date =
                    parse_date(Self::ENTITY, field, &value.into_text(Self::ENTITY, field)?)?
            }
            "end_date" => {
                self.end_date =
                    parse_date(Self::ENTITY, field, &value.into_text(Self::ENTITY, field)?)?
            }
            "budget" => self.budget = value.into_f64(Self::ENTITY, field)?,
            "spent" => self.spent = value.into_f64(Self::ENTITY, field)?,
            "creators" => {
                let n = value.into_i64(Self::ENTITY, field)?;
                self.creators = u32::try_from(n).map_err(|_| {
                    StoreError::Validation(format!("campaign.creators out of range: {n}"))
                })?;
            }
            "engagement" => self.engagement = value.into_f64(Self::ENTITY, field)?,
            "id" => {
                return Err(StoreError::Validation("campaign id is immutable".into()));
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
            let to: CampaignStatus = text.parse()?;
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
    fn test_status_parse_roundtrip() {
        for label in ["draft", "active", "paused", "completed"] {
            let status: CampaignStatus = label.parse().unwrap();
            assert_eq!(status.label(), label);
        }
        assert!("archived".parse::<CampaignStatus>().is_err());
    }

    #[test]
    fn test_transition_table() {
        use CampaignStatus::*;
        assert!(Draft.can_transition(Active));
        assert!(Active.can_transition(Paused));
        assert!(Active.can_transition(Completed));
        assert!(Paused.can_transition(Active));
        assert!(!Draft.can_transition(Completed));
        assert!(!Completed.can_transition(Active));
        assert!(!Paused.can_transition(Completed));
        assert!(Completed.can_transition(Completed));
    }

    #[test]
    fn test_draft_constructor() {
        let c = Campaign::draft("Holiday Special", "2024-12-01", "2024-12-31", 100_000.0).unwrap();
        assert!(!c.id.is_empty());
        assert_eq!(c.status, CampaignStatus::Draft);
        assert_eq!(c.spent, 0.0);
        assert_eq!(c.creators, 0);
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = Campaign::draft("X", "12/01/2024", "2024-12-31", 1.0).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_dynamic_get() {
        let c = Campaign::seeded(
            "1",
            "Summer Fashion Collection",
            CampaignStatus::Active,
            "2024-06-01",
            "2024-08-31",
            50_000.0,
            32_000.0,
            12,
            4.2,
        )
        .unwrap();
        assert_eq!(c.get("budget"), Some(Value::Float(50_000.0)));
        assert_eq!(c.get("creators"), Some(Value::Integer(12)));
        assert_eq!(c.get("start_date"), Some(Value::from("2024-06-01")));
        assert_eq!(c.get("nope"), None);
    }

    #[test]
    fn test_set_unknown_field() {
        let mut c = Campaign::draft("X", "2024-01-01", "2024-02-01", 1.0).unwrap();
        let err = c.set("niche", Value::from("tech")).unwrap_err();
        assert!(matches!(err, StoreError::FieldNotFound { .. }));
    }

    #[test]
    fn test_set_creators_range_checked() {
        let mut c = Campaign::draft("X", "2024-01-01", "2024-02-01", 1.0).unwrap();
        assert!(c.set("creators", Value::Integer(-1)).is_err());
        c.set("creators", Value::Integer(5)).unwrap();
        assert_eq!(c.creators, 5);
    }
}
