use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::parse_date;
use crate::core::{Record, Result, StoreError, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Creator,
    Brand,
    Agency,
    Admin,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Creator => "creator",
            Self::Brand => "brand",
            Self::Agency => "agency",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserRole {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "creator" => Ok(Self::Creator),
            "brand" => Ok(Self::Brand),
            "agency" => Ok(Self::Agency),
            "admin" => Ok(Self::Admin),
            other => Err(StoreError::Validation(format!("unknown user role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
    Pending,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Pending => "pending",
        }
    }

    /// Account workflow: active and suspended toggle freely,
    /// pending accounts can only be activated.
    pub fn can_transition(self, to: Self) -> bool {
        use UserStatus::*;
        if self == to {
            return true;
        }
        matches!(
            (self, to),
            (Active, Suspended) | (Suspended, Active) | (Pending, Active)
        )
    }

    /// The admin panel's one-click toggle between active and suspended.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Suspended,
            Self::Suspended => Self::Active,
            Self::Pending => Self::Pending,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            "pending" => Ok(Self::Pending),
            other => Err(StoreError::Validation(format!(
                "unknown user status '{other}'"
            ))),
        }
    }
}

/// Platform account row in the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub joined_at: NaiveDate,
    pub last_active: NaiveDate,
}

impl User {
    pub fn seeded(
        id: &str,
        name: &str,
        email: &str,
        role: UserRole,
        status: UserStatus,
        joined_at: &str,
        last_active: &str,
    ) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            joined_at: parse_date(Self::ENTITY, "joined_at", joined_at)?,
            last_active: parse_date(Self::ENTITY, "last_active", last_active)?,
        })
    }
}

impl Record for User {
    const ENTITY: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "role" => Some(self.role.label().to_string()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::from(self.id.as_str())),
            "name" => Some(Value::from(self.name.as_str())),
            "email" => Some(Value::from(self.email.as_str())),
            "role" => Some(Value::from(self.role.label())),
            "status" => Some(Value::from(self.status.label())),
            "joined_at" => Some(Value::Text(self.joined_at.to_string())),
            "last_active" => Some(Value::Text(self.last_active.to_string())),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "name" => self.name = value.into_text(Self::ENTITY, field)?,
            "email" => {
                let email = value.into_text(Self::ENTITY, field)?;
                if !email.contains('@') {
                    return Err(StoreError::Validation(format!("invalid email '{email}'")));
                }
                self.email = email;
            }
            "role" => self.role = value.into_text(Self::ENTITY, field)?.parse()?,
            "status" => self.status = value.into_text(Self::ENTITY, field)?.parse()?,
            "joined_at" => {
                self.joined_at =
                    parse_date(Self::ENTITY, field, &value.into_text(Self::ENTITY, field)?)?
            }
            "last_active" => {
                self.last_active =
                    parse_date(Self::ENTITY, field, &value.into_text(Self::ENTITY, field)?)?
            }
            "id" => {
                return Err(StoreError::Validation("user id is immutable".into()));
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
            let to: UserStatus = text.parse()?;
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
    fn test_status_toggle() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Suspended);
        assert_eq!(UserStatus::Suspended.toggled(), UserStatus::Active);
        assert_eq!(UserStatus::Pending.toggled(), UserStatus::Pending);
    }

    #[test]
    fn test_transition_table() {
        use UserStatus::*;
        assert!(Active.can_transition(Suspended));
        assert!(Suspended.can_transition(Active));
        assert!(Pending.can_transition(Active));
        assert!(!Pending.can_transition(Suspended));
        assert!(!Active.can_transition(Pending));
    }

    #[test]
    fn test_role_change_via_set() {
        let mut user = User::seeded(
            "1",
            "Sarah Johnson",
            "sarah@example.com",
            UserRole::Creator,
            UserStatus::Active,
            "2024-01-15",
            "2024-01-30",
        )
        .unwrap();
        user.set("role", Value::from("agency")).unwrap();
        assert_eq!(user.role, UserRole::Agency);

        let err = user.set("role", Value::from("superadmin")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_email_validation() {
        let mut user = User::seeded(
            "1",
            "A",
            "a@example.com",
            UserRole::Creator,
            UserStatus::Active,
            "2024-01-15",
            "2024-01-30",
        )
        .unwrap();
        assert!(user.set("email", Value::from("not-an-email")).is_err());
    }
}
