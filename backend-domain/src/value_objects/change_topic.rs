// Change topic value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeTopic {
    Events,
    Tickets,
    Identity,
}

impl ChangeTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeTopic::Events => "events",
            ChangeTopic::Tickets => "tickets",
            ChangeTopic::Identity => "identity",
        }
    }
}

impl std::str::FromStr for ChangeTopic {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "events" => Ok(ChangeTopic::Events),
            "tickets" => Ok(ChangeTopic::Tickets),
            "identity" => Ok(ChangeTopic::Identity),
            other => Err(anyhow::anyhow!("unknown change topic '{}'", other)),
        }
    }
}
