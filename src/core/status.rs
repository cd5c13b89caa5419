//! Stock status projection - current balances with low-stock flags.

use crate::{
    core::ledger,
    entities::{Item, item},
    errors::Result,
};
use sea_orm::{DatabaseConnection, QueryOrder, prelude::*};

/// One row of the status view: an item, its derived balance, and whether it
/// sits under its configured minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockStatus {
    /// The item being reported on
    pub item: item::Model,
    /// Current balance, folded from the ledger
    pub balance: i64,
    /// True when `balance < min_stock`
    pub is_low: bool,
}

/// Returns the status of every item, ordered by name, then size, then
/// category for stable display.
pub async fn status(db: &DatabaseConnection) -> Result<Vec<StockStatus>> {
    let items = Item::find()
        .order_by_asc(item::Column::Name)
        .order_by_asc(item::Column::Size)
        .order_by_asc(item::Column::Category)
        .all(db)
        .await?;

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let balance = ledger::current_balance(db, item.id).await?;
        let is_low = balance < item.min_stock;
        rows.push(StockStatus {
            item,
            balance,
            is_low,
        });
    }

    Ok(rows)
}
