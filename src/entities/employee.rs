//! Employee entity - Represents a staff member who can be issued gear.
//!
//! Employees are referenced by name from the issue and return flows and may be
//! created implicitly there. The badge number, when present, is unique and acts
//! as the upsert key for explicit registration.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Unique identifier for the employee
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name; not unique, lookups resolve the earliest match
    pub name: String,
    /// Job role (e.g., "guard", "shift lead"); may be empty
    pub role: String,
    /// Badge number, unique when present
    #[sea_orm(unique)]
    pub badge: Option<String>,
}

/// Defines relationships between Employee and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One employee appears on many issue/return transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
