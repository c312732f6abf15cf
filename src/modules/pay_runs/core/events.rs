// Root event enumeration for a pay run stream and its versioned payloads.
//
// Prefer additive changes. A breaking change gets a new version and a new variant; historical
// events keep their meaning.

pub mod v1 {
    pub mod pay_run_drafted;
    pub mod pay_run_submitted;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum PayRunEvent {
    PayRunDraftedV1(v1::pay_run_drafted::PayRunDraftedV1),
    PayRunSubmittedV1(v1::pay_run_submitted::PayRunSubmittedV1),
}
