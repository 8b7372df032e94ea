use serde::{Deserialize, Serialize};

use crate::core::{Record, Result, StoreError, Value};

/// Creator profile card on the discovery grid.
///
/// Creators have no status workflow; the discovery view filters them by
/// the platform, category, and language facets plus free-text search over
/// name, handle, and bio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
    pub username: String,
    pub bio: String,
    pub followers: u64,
    pub engagement: f64,
    pub platform: String,
    pub category: String,
    pub language: String,
    pub average_views: u64,
    pub posts: u32,
    pub verified: bool,
}

impl Record for Creator {
    const ENTITY: &'static str = "creator";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.username, &self.bio, &self.category]
    }

    fn facet(&self, name: &str) -> Option<String> {
        match name {
            "platform" => Some(self.platform.clone()),
            "category" => Some(self.category.clone()),
            "language" => Some(self.language.clone()),
            _ => None,
        }
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::from(self.id.as_str())),
            "name" => Some(Value::from(self.name.as_str())),
            "username" => Some(Value::from(self.username.as_str())),
            "bio" => Some(Value::from(self.bio.as_str())),
            "followers" => Some(Value::Integer(self.followers as i64)),
            "engagement" => Some(Value::Float(self.engagement)),
            "platform" => Some(Value::from(self.platform.as_str())),
            "category" => Some(Value::from(self.category.as_str())),
            "language" => Some(Value::from(self.language.as_str())),
            "average_views" => Some(Value::Integer(self.average_views as i64)),
            "posts" => Some(Value::Integer(self.posts as i64)),
            "verified" => Some(Value::Boolean(self.verified)),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "name" => self.name = value.into_text(Self::ENTITY, field)?,
            "username" => self.username = value.into_text(Self::ENTITY, field)?,
            "bio" => self.bio = value.into_text(Self::ENTITY, field)?,
            "followers" => {
                let n = value.into_i64(Self::ENTITY, field)?;
                self.followers = u64::try_from(n).map_err(|_| {
                    StoreError::Validation(format!("creator.followers out of range: {n}"))
                })?;
            }
            "engagement" => self.engagement = value.into_f64(Self::ENTITY, field)?,
            "platform" => self.platform = value.into_text(Self::ENTITY, field)?,
            "category" => self.category = value.into_text(Self::ENTITY, field)?,
            "language" => self.language = value.into_text(Self::ENTITY, field)?,
            "average_views" => {
                let n = value.into_i64(Self::ENTITY, field)?;
                self.average_views = u64::try_from(n).map_err(|_| {
                    StoreError::Validation(format!("creator.average_views out of range: {n}"))
                })?;
            }
            "posts" => {
                let n = value.into_i64(Self::ENTITY, field)?;
                self.posts = u32::try_from(n).map_err(|_| {
                    StoreError::Validation(format!("creator.posts out of range: {n}"))
                })?;
            }
            "verified" => self.verified = value.into_bool(Self::ENTITY, field)?,
            "id" => {
                return Err(StoreError::Validation("creator id is immutable".into()));
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
}
