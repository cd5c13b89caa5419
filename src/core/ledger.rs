//! Ledger engine - the sole writer of transaction rows.
//!
//! Each operation validates its quantity, resolves the item (and employee,
//! where one is involved), checks the derived balance where removal is
//! possible, and appends exactly one ledger row. The whole validate-then-write
//! sequence runs inside a single database transaction, so a failed check
//! leaves the ledger untouched and two concurrent operations cannot both pass
//! the non-negativity check against a stale balance. Balances are never stored:
//! the current quantity of an item is always the sum of its ledger deltas.

use crate::{
    core::{employee, item, item::ItemKey},
    entities::{Transaction, transaction},
    errors::{Error, Result},
};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, QuerySelect, Set, TransactionTrait, prelude::*,
};
use tracing::{debug, info};

/// The four kinds of stock movement the ledger records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Goods received into the warehouse
    StockIn,
    /// Goods handed to an employee
    Issue,
    /// Goods handed back by an employee
    Return,
    /// Stocktake correction
    Adjust,
}

impl TransactionKind {
    /// The string stored in the `kind` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StockIn => "stock_in",
            Self::Issue => "issue",
            Self::Return => "return",
            Self::Adjust => "adjust",
        }
    }
}

/// Computes the current balance of an item as the sum of its ledger deltas.
///
/// An item with no transactions has balance zero. Callable inside an open
/// database transaction so write paths see a consistent value.
pub async fn current_balance<C: ConnectionTrait>(db: &C, item_id: i64) -> Result<i64> {
    let sum: Option<Option<i64>> = Transaction::find()
        .select_only()
        .column_as(transaction::Column::Quantity.sum(), "balance")
        .filter(transaction::Column::ItemId.eq(item_id))
        .into_tuple()
        .one(db)
        .await?;

    Ok(sum.flatten().unwrap_or(0))
}

/// Records goods received into the warehouse.
///
/// The item is created on first reference, with `min_stock_if_new` as its
/// low-stock threshold. No balance check: stock-in only increases stock.
pub async fn stock_in(
    db: &DatabaseConnection,
    key: &ItemKey,
    quantity: i64,
    min_stock_if_new: i64,
    note: &str,
) -> Result<transaction::Model> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    let txn = db.begin().await?;

    let resolved = item::resolve_or_create(&txn, key, min_stock_if_new).await?;
    if resolved.was_created() {
        info!("Created item on first stock-in: {}", key);
    }
    let row = append(
        &txn,
        resolved.as_inner().id,
        None,
        TransactionKind::StockIn,
        quantity,
        note,
    )
    .await?;

    txn.commit().await?;
    debug!("Stocked in {} x {}", quantity, key);
    Ok(row)
}

/// Records goods issued to an employee.
///
/// The item must already exist; the employee is created on first reference.
/// Fails with [`Error::InsufficientStock`] when the issue would drive the
/// balance negative, writing nothing.
pub async fn issue(
    db: &DatabaseConnection,
    key: &ItemKey,
    employee_name: &str,
    quantity: i64,
    note: &str,
) -> Result<transaction::Model> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    let txn = db.begin().await?;

    let item = item::require_item(&txn, key).await?;
    let recipient = employee::resolve_or_create(&txn, employee_name).await?;
    if recipient.was_created() {
        info!("Created employee on first issue: {}", employee_name);
    }

    let balance = current_balance(&txn, item.id).await?;
    if balance - quantity < 0 {
        return Err(Error::InsufficientStock {
            available: balance,
            requested: quantity,
        });
    }

    let row = append(
        &txn,
        item.id,
        Some(recipient.as_inner().id),
        TransactionKind::Issue,
        -quantity,
        note,
    )
    .await?;

    txn.commit().await?;
    debug!("Issued {} x {} to {}", quantity, key, employee_name);
    Ok(row)
}

/// Records goods returned by an employee.
///
/// The item must already exist; the employee is created on first reference.
/// No balance check and no verification that the employee was ever issued the
/// goods: returned stock physically exists, and the system does not track
/// per-employee debt.
pub async fn return_stock(
    db: &DatabaseConnection,
    key: &ItemKey,
    employee_name: &str,
    quantity: i64,
    note: &str,
) -> Result<transaction::Model> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    let txn = db.begin().await?;

    let item = item::require_item(&txn, key).await?;
    let returner = employee::resolve_or_create(&txn, employee_name).await?;
    if returner.was_created() {
        info!("Created employee on first return: {}", employee_name);
    }

    let row = append(
        &txn,
        item.id,
        Some(returner.as_inner().id),
        TransactionKind::Return,
        quantity,
        note,
    )
    .await?;

    txn.commit().await?;
    debug!("Returned {} x {} from {}", quantity, key, employee_name);
    Ok(row)
}

/// Records a stocktake correction with a signed delta.
///
/// The item must already exist and the delta must be nonzero. A negative
/// delta fails with [`Error::InsufficientStock`] when it would drive the
/// balance negative.
pub async fn adjust(
    db: &DatabaseConnection,
    key: &ItemKey,
    delta: i64,
    note: &str,
) -> Result<transaction::Model> {
    if delta == 0 {
        return Err(Error::InvalidQuantity { quantity: delta });
    }

    let txn = db.begin().await?;

    let item = item::require_item(&txn, key).await?;

    if delta < 0 {
        let balance = current_balance(&txn, item.id).await?;
        if balance + delta < 0 {
            return Err(Error::InsufficientStock {
                available: balance,
                requested: -delta,
            });
        }
    }

    let row = append(&txn, item.id, None, TransactionKind::Adjust, delta, note).await?;

    txn.commit().await?;
    debug!("Adjusted {} by {}", key, delta);
    Ok(row)
}

/// Appends one immutable ledger row. Private: every write funnels through the
/// four public operations above.
async fn append<C: ConnectionTrait>(
    db: &C,
    item_id: i64,
    employee_id: Option<i64>,
    kind: TransactionKind,
    delta: i64,
    note: &str,
) -> Result<transaction::Model> {
    let model = transaction::ActiveModel {
        item_id: Set(item_id),
        employee_id: Set(employee_id),
        kind: Set(kind.as_str().to_string()),
        quantity: Set(delta),
        note: Set(note.to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}
