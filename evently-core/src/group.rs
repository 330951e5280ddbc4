use std::fmt;

use serde::{Deserialize, Serialize};

/// The group that owns or organizes an event.
///
/// Serializes as its bare name, so an event record carries `"owner": "CLIC"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
