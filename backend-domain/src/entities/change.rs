// Change notice entity
// Broadcast after every local mutation

use serde::{Deserialize, Serialize};

use crate::value_objects::ChangeTopic;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNotice {
    pub topic: ChangeTopic,
    pub record_id: Option<String>,
    pub changed_at_ms: i64,
}
