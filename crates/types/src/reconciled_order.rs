use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{OrderRecord, OrderStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledOrder {
    #[serde(flatten)]
    pub order: OrderRecord,
    pub status: OrderStatus,
}

impl ReconciledOrder {
    pub fn new(order: OrderRecord, status: OrderStatus) -> Self {
        Self { order, status }
    }

    pub fn is_cancellable(&self) -> bool {
        self.status.is_cancellable()
    }
}

impl Deref for ReconciledOrder {
    type Target = OrderRecord;

    fn deref(&self) -> &Self::Target {
        &self.order
    }
}
