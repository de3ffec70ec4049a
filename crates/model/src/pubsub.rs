use serde::{Deserialize, Serialize};

/// Subscription definition submitted to the message broker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionSpec {
    pub name: String,
    pub topic: String,
    pub subscription_id: String,
}
