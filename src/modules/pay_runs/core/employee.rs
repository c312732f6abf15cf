use serde::{Deserialize, Serialize};

pub const UNKNOWN_EMPLOYEE: &str = "Unknown Employee";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, async_graphql::SimpleObject)]
pub struct Employee {
    pub id: String,
    pub name: String,
}

/// Display name used in pay run descriptions, with a placeholder when the lookup missed.
pub fn display_name(employee: Option<&Employee>) -> &str {
    employee
        .map(|e| e.name.as_str())
        .unwrap_or(UNKNOWN_EMPLOYEE)
}
