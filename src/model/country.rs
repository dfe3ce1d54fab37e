use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: u32,
    pub symbol: String,
    pub name: String,
    pub enable: bool,
}
