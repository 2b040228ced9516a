pub mod bigint;
mod cancel_transaction;
mod chain;
mod off_chain_order;
mod order;
mod order_status;
mod reconciled_order;
mod token;

pub use cancel_transaction::CancelTransaction;
pub use chain::{ChainId, UnsupportedChain};
pub use off_chain_order::OffChainOrder;
pub use order::{OrderRecord, StopLossParameters};
pub use order_status::OrderStatus;
pub use reconciled_order::ReconciledOrder;
pub use token::Token;
