use serde::{Deserialize, Serialize};

use crate::models::{FilingStatus, UsState};

/// The tax parameters of the household whose net worth is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    pub filing_status: FilingStatus,
    pub state: UsState,
}
