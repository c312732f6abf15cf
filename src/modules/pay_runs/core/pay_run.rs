// The PayRun record and the closed sets that describe it.
//
// A PayRun is one payroll disbursement. Builders create it once as a draft, the submit use case
// moves it to submitted, and nothing else changes it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, async_graphql::Enum,
)]
#[serde(rename_all = "lowercase")]
pub enum PayRunType {
    Regular,
    #[serde(rename = "offcycle")]
    #[graphql(name = "OFFCYCLE")]
    OffCycle,
    #[serde(rename = "onetime")]
    #[graphql(name = "ONETIME")]
    OneTime,
}

impl PayRunType {
    pub fn as_str(self) -> &'static str {
        match self {
            PayRunType::Regular => "regular",
            PayRunType::OffCycle => "offcycle",
            PayRunType::OneTime => "onetime",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pay run type: {0}")]
pub struct UnknownPayRunType(pub String);

impl FromStr for PayRunType {
    type Err = UnknownPayRunType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(PayRunType::Regular),
            "offcycle" | "off-cycle" => Ok(PayRunType::OffCycle),
            "onetime" | "one-time" => Ok(PayRunType::OneTime),
            _ => Err(UnknownPayRunType(value.to_string())),
        }
    }
}

impl fmt::Display for PayRunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, async_graphql::Enum,
)]
#[serde(rename_all = "lowercase")]
pub enum PayRunStatus {
    Draft,
    Submitted,
}

/// Components a one-time payout can be issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OneTimeComponent {
    Bonus,
    Incentive,
    Arrears,
    Reimbursement,
}

impl OneTimeComponent {
    pub fn label(self) -> &'static str {
        match self {
            OneTimeComponent::Bonus => "Bonus",
            OneTimeComponent::Incentive => "Incentive",
            OneTimeComponent::Arrears => "Arrears",
            OneTimeComponent::Reimbursement => "Reimbursement",
        }
    }
}

impl FromStr for OneTimeComponent {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bonus" => Ok(OneTimeComponent::Bonus),
            "incentive" => Ok(OneTimeComponent::Incentive),
            "arrears" => Ok(OneTimeComponent::Arrears),
            "reimbursement" => Ok(OneTimeComponent::Reimbursement),
            _ => Err(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayRun {
    pub id: String,
    pub month: String,
    pub year: i32,
    pub status: PayRunStatus,
    #[serde(rename = "type")]
    pub pay_run_type: PayRunType,
    pub total_amount: f64,
    pub employee_count: u32,
    pub created_at: i64,
    pub payment_date: String,
    pub description: String,
    pub remarks: Option<String>,
    pub reason_type: String,
    pub employee_ids: Vec<String>,
    pub is_taxable: Option<bool>,
}
