//! Employee registry - explicit registration and resolve-or-create lookups.
//!
//! Explicit registration upserts on the badge number when one is given, so
//! re-registering a badge updates the name and role instead of failing. The
//! issue and return flows resolve employees by name and create them on first
//! reference.

use crate::{
    core::Resolved,
    entities::{Employee, employee},
    errors::{Error, Result},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, DatabaseConnection, QueryOrder, Set, prelude::*};

/// Registers an employee.
///
/// With a badge number this upserts: a second registration with the same badge
/// updates the name and role on the existing row. Without a badge it is a
/// plain insert; names are not unique.
pub async fn add_employee(
    db: &DatabaseConnection,
    name: &str,
    role: &str,
    badge: Option<String>,
) -> Result<employee::Model> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Config("employee name cannot be empty".to_string()));
    }

    let model = employee::ActiveModel {
        name: Set(name.to_string()),
        role: Set(role.trim().to_string()),
        badge: Set(badge.clone()),
        ..Default::default()
    };

    if badge.is_some() {
        Employee::insert(model)
            .on_conflict(
                OnConflict::column(employee::Column::Badge)
                    .update_columns([employee::Column::Name, employee::Column::Role])
                    .to_owned(),
            )
            .exec_with_returning(db)
            .await
            .map_err(Into::into)
    } else {
        model.insert(db).await.map_err(Into::into)
    }
}

/// Finds an employee by name. Names are not unique; the earliest-registered
/// match wins.
pub async fn find_employee_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<employee::Model>> {
    Employee::find()
        .filter(employee::Column::Name.eq(name))
        .order_by_asc(employee::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an employee by name, failing with [`Error::UnknownEmployee`] when
/// absent. For callers that must not create employees implicitly.
pub async fn require_employee<C: ConnectionTrait>(db: &C, name: &str) -> Result<employee::Model> {
    find_employee_by_name(db, name)
        .await?
        .ok_or_else(|| Error::UnknownEmployee {
            name: name.to_string(),
        })
}

/// Finds an employee by name, creating a bare record (no role, no badge) on
/// first reference. Only the issue and return flows go through here.
pub async fn resolve_or_create<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Resolved<employee::Model>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Config("employee name cannot be empty".to_string()));
    }

    if let Some(existing) = find_employee_by_name(db, name).await? {
        return Ok(Resolved::Existing(existing));
    }

    let model = employee::ActiveModel {
        name: Set(name.to_string()),
        role: Set(String::new()),
        badge: Set(None),
        ..Default::default()
    };
    let created = model.insert(db).await?;
    Ok(Resolved::Created(created))
}

/// Returns all employees ordered by name.
pub async fn list_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>> {
    Employee::find()
        .order_by_asc(employee::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}
