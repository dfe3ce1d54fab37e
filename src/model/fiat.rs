use serde::{Deserialize, Serialize};

use super::Identified;

/// Fiat currency a sell route pays out in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fiat {
    pub id: u32,
    pub name: String,
    pub enable: bool,
}

impl Identified for Fiat {
    fn id(&self) -> u32 {
        self.id
    }

    fn unresolved(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            enable: false,
        }
    }
}
