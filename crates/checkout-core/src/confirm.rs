//! Payment Confirmation
//!
//! Contract for the external capability that confirms a charge against the
//! payment-method data collected locally (card fields rendered by the
//! provider). The capability owns tokenization; this crate only sees its
//! structured answer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::wire::{ClientSecret, ConfirmResult};

/// Billing details attached to the payment method
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Locally collected payment-method data.
///
/// Raw card details never appear here: the provider's input widget keeps
/// them, and the confirmer pairs that widget with these details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodData {
    pub billing_details: BillingDetails,
}

impl PaymentMethodData {
    pub fn for_customer(name: Option<String>, email: Option<String>) -> Self {
        Self {
            billing_details: BillingDetails { name, email },
        }
    }
}

/// Payment confirmation capability
///
/// `Ok` carries the provider's verdict (error or intent status). `Err` means
/// the call never produced a verdict and is treated as a transport failure.
#[async_trait(?Send)]
pub trait PaymentConfirmer {
    async fn confirm(
        &self,
        secret: &ClientSecret,
        method: &PaymentMethodData,
    ) -> Result<ConfirmResult>;

    /// Provider name for logs
    fn name(&self) -> &str;
}
