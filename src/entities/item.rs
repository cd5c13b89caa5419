//! Item entity - Represents a distinct stock-keeping unit of uniform or gear.
//!
//! An item is identified by the tuple (name, size, category); a unique index on
//! that tuple is created at schema setup. Items are never deleted, only the
//! `min_stock` threshold can be reconfigured after creation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Style name (e.g., "Duty Shirt", "Patrol Jacket")
    pub name: String,
    /// Size designation (e.g., "L", "42"); may be empty for one-size gear
    pub size: String,
    /// Grouping such as "summer", "winter", or "equipment"; may be empty
    pub category: String,
    /// Minimum on-hand quantity before the item is flagged as low stock
    pub min_stock: i64,
}

/// Defines relationships between Item and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One item has many ledger transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
