//! Trade tape source port trait.

use crate::domain::error::GbceError;
use crate::domain::trade::Trade;

pub trait TradePort {
    /// All trades from the source, in recorded order.
    fn fetch_trades(&self) -> Result<Vec<Trade>, GbceError>;
}
