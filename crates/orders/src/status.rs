use types::{OffChainOrder, OrderStatus};

/// Derives the lifecycle status of one order from its order book match and
/// its on-chain registration.
///
/// Arms are evaluated top to bottom and the first match wins, so an order
/// that left the chain is reported `cancelled` unless the order book says it
/// was `fulfilled`.
pub fn derive_status(matched: Option<&OffChainOrder>, registered: bool) -> OrderStatus {
    match matched {
        Some(order) if !registered && order.status != "fulfilled" => OrderStatus::Cancelled,
        None if !registered => OrderStatus::Cancelled,
        Some(order) if order.status == "open" => OrderStatus::Posted,
        Some(order) => OrderStatus::from(order.status.as_str()),
        None => OrderStatus::Created,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::off_chain_order;

    #[test]
    fn unregistered_without_match_is_cancelled() {
        assert_eq!(derive_status(None, false), OrderStatus::Cancelled);
    }

    #[test]
    fn unregistered_match_is_cancelled_unless_fulfilled() {
        for status in ["open", "expired", "cancelled", "presignaturePending"] {
            let order = off_chain_order("0xdead", status);
            assert_eq!(derive_status(Some(&order), false), OrderStatus::Cancelled);
        }

        let order = off_chain_order("0xdead", "fulfilled");
        assert_eq!(derive_status(Some(&order), false), OrderStatus::Fulfilled);
    }

    #[test]
    fn registered_open_match_is_posted() {
        let order = off_chain_order("0xdead", "open");

        assert_eq!(derive_status(Some(&order), true), OrderStatus::Posted);
    }

    #[test]
    fn registered_match_takes_order_book_status() {
        let order = off_chain_order("0xdead", "fulfilled");
        assert_eq!(derive_status(Some(&order), true), OrderStatus::Fulfilled);

        let order = off_chain_order("0xdead", "expired");
        assert_eq!(derive_status(Some(&order), true), OrderStatus::Expired);

        let order = off_chain_order("0xdead", "presignaturePending");
        assert_eq!(
            derive_status(Some(&order), true).as_str(),
            "presignaturePending"
        );
    }

    #[test]
    fn registered_without_match_is_created() {
        assert_eq!(derive_status(None, true), OrderStatus::Created);
    }
}
