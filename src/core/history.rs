//! History query - filtered, chronologically ordered ledger listing.
//!
//! Entries come back oldest first, ties broken by insertion order (row id),
//! each joined with its item tuple and employee attribution. Filters match a
//! substring of the item name or of the employee name; the two are mutually
//! exclusive by construction of [`HistoryFilter`].

use crate::{
    entities::{Employee, Item, Transaction, employee, item, transaction},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, JoinType, QueryOrder, QuerySelect, prelude::*};

/// What to filter the ledger by. Substring matches are case-insensitive
/// (SQL `LIKE` semantics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryFilter {
    /// The full ledger
    All,
    /// Transactions whose item name contains the substring
    ItemName(String),
    /// Transactions whose employee name contains the substring; entries with
    /// no employee attribution never match
    Employee(String),
}

/// One ledger entry joined with its item and (optional) employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The ledger row
    pub transaction: transaction::Model,
    /// The item the movement applied to
    pub item: item::Model,
    /// The employee involved, for issue/return rows
    pub employee: Option<employee::Model>,
}

/// Returns ledger entries matching the filter, oldest first.
pub async fn history(
    db: &DatabaseConnection,
    filter: &HistoryFilter,
) -> Result<Vec<HistoryEntry>> {
    let mut select = Transaction::find()
        .find_also_related(Item)
        .order_by_asc(transaction::Column::CreatedAt)
        .order_by_asc(transaction::Column::Id);

    match filter {
        HistoryFilter::All => {}
        HistoryFilter::ItemName(needle) => {
            select = select.filter(item::Column::Name.contains(needle));
        }
        HistoryFilter::Employee(needle) => {
            select = select
                .join(JoinType::InnerJoin, transaction::Relation::Employee.def())
                .filter(employee::Column::Name.contains(needle));
        }
    }

    let rows = select.all(db).await?;

    let mut entries = Vec::with_capacity(rows.len());
    for (txn, maybe_item) in rows {
        // Every transaction carries an item foreign key; a missing join row
        // means the store lost referential integrity.
        let item = maybe_item
            .ok_or_else(|| Error::Database(format!("transaction {} has no item row", txn.id)))?;
        let employee = match txn.employee_id {
            Some(id) => Employee::find_by_id(id).one(db).await?,
            None => None,
        };
        entries.push(HistoryEntry {
            transaction: txn,
            item,
            employee,
        });
    }

    Ok(entries)
}
