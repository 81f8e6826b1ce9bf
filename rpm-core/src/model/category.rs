//! Life categories and the roles they own.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{RpmError, RpmResult};
use crate::record::{Record, check_timestamp, lenient_id, new_id, require_text};
use crate::resource::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Personal,
    Professional,
}

/// A life category (e.g. Health, Career)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Category {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CategoryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_plans: Vec<String>,
    /// Embedded image, usually a data URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A role within a category. `category_id` points back at the owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Role {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub category_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub core_qualities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incantations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            id: String::new(),
            name: name.into(),
            kind: None,
            description: None,
            vision: None,
            purpose: None,
            resources: None,
            results: Vec::new(),
            action_plans: Vec::new(),
            image: None,
            roles: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Role {
            id: String::new(),
            category_id: String::new(),
            name: name.into(),
            purpose: None,
            description: None,
            core_qualities: Vec::new(),
            identity_statement: None,
            incantations: Vec::new(),
            image: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn validate(&self) -> RpmResult<()> {
        require_text("role name", &self.name)?;
        check_timestamp("createdAt", self.created_at.as_deref())?;
        check_timestamp("updatedAt", self.updated_at.as_deref())?;

        let mut seen = HashSet::new();
        for quality in &self.core_qualities {
            if !seen.insert(quality.as_str()) {
                return Err(RpmError::invalid(format!(
                    "duplicate core quality '{}' in role '{}'",
                    quality, self.name
                )));
            }
        }

        Ok(())
    }
}

impl Record for Category {
    const RESOURCE: Resource = Resource::Categories;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn validate(&self) -> RpmResult<()> {
        require_text("name", &self.name)?;
        check_timestamp("createdAt", self.created_at.as_deref())?;
        check_timestamp("updatedAt", self.updated_at.as_deref())?;

        let mut role_ids = HashSet::new();
        for role in &self.roles {
            role.validate()?;
            if !role.id.is_empty() && !role_ids.insert(role.id.as_str()) {
                return Err(RpmError::invalid(format!("duplicate role id '{}'", role.id)));
            }
        }

        Ok(())
    }

    fn normalize(&mut self) {
        for role in &mut self.roles {
            if role.id.is_empty() {
                role.id = new_id();
            }
            role.category_id = self.id.clone();
        }
    }
}
