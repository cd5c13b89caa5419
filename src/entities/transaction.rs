//! Transaction entity - One row of the append-only stock ledger.
//!
//! Each row records a signed quantity delta against an item, the kind of
//! movement (`"stock_in"`, `"issue"`, `"return"`, `"adjust"`), an optional
//! employee attribution, and a free-text note. Rows are never updated or
//! deleted; the current balance of an item is the sum of its deltas.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction; also the tie-breaker for
    /// chronological ordering
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the item this movement applies to
    pub item_id: i64,
    /// Employee attribution; set for issue/return, None for stock-in/adjust
    pub employee_id: Option<i64>,
    /// Movement kind: `"stock_in"`, `"issue"`, `"return"`, or `"adjust"`
    pub kind: String,
    /// Signed quantity delta (negative for issues, positive for stock-in and
    /// returns, either sign for adjustments)
    pub quantity: i64,
    /// Free-text note supplied by the operator
    pub note: String,
    /// When the movement was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction applies to one item
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id"
    )]
    Item,
    /// Each issue/return transaction references one employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
