//! User Session
//!
//! Minimal session view exposed to the frontend. The admin flag gates the
//! edit/delete/done actions on list rows; authentication itself is the host's
//! concern.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub is_admin: bool,
}

impl User {
    pub fn new(name: impl Into<String>, is_admin: bool) -> Self {
        Self {
            name: name.into(),
            is_admin,
        }
    }
}
