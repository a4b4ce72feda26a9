// Query parameter entities

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventListQuery {
    pub category: Option<String>,
    pub city: Option<String>,
    pub search: Option<String>,
    pub available_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketListQuery {
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WriteQuery {
    pub wait_remote: Option<bool>,
}
