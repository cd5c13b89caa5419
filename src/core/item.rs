//! Item registry - lookup, listing, and tuple-keyed upsert of stock items.
//!
//! Items are keyed by the (name, size, category) tuple. Registering the same
//! tuple twice updates the minimum-stock threshold of the existing row instead
//! of creating a second item, so the transaction history stays attached to one
//! record.

use crate::{
    core::Resolved,
    entities::{Item, item},
    errors::{Error, Result},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, DatabaseConnection, QueryOrder, Set, prelude::*};
use std::fmt;

/// The identity tuple of an item: (name, size, category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemKey {
    /// Style name
    pub name: String,
    /// Size designation; may be empty
    pub size: String,
    /// Grouping category; may be empty
    pub category: String,
}

impl ItemKey {
    /// Builds a key, trimming surrounding whitespace from each component.
    pub fn new(
        name: impl Into<String>,
        size: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            size: size.into().trim().to_string(),
            category: category.into().trim().to_string(),
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.size, self.category)
    }
}

impl From<&item::Model> for ItemKey {
    fn from(model: &item::Model) -> Self {
        Self {
            name: model.name.clone(),
            size: model.size.clone(),
            category: model.category.clone(),
        }
    }
}

/// Registers an item or updates the minimum-stock threshold of an existing one.
///
/// Upserts on the identity tuple: inserting a tuple that already exists
/// rewrites `min_stock` on the existing row and returns it with its original
/// id, keeping all ledger history attached.
pub async fn add_item(
    db: &DatabaseConnection,
    key: &ItemKey,
    min_stock: i64,
) -> Result<item::Model> {
    if key.name.is_empty() {
        return Err(Error::Config("item name cannot be empty".to_string()));
    }
    if min_stock < 0 {
        return Err(Error::InvalidQuantity {
            quantity: min_stock,
        });
    }

    let model = item::ActiveModel {
        name: Set(key.name.clone()),
        size: Set(key.size.clone()),
        category: Set(key.category.clone()),
        min_stock: Set(min_stock),
        ..Default::default()
    };

    Item::insert(model)
        .on_conflict(
            OnConflict::columns([
                item::Column::Name,
                item::Column::Size,
                item::Column::Category,
            ])
            .update_column(item::Column::MinStock)
            .to_owned(),
        )
        .exec_with_returning(db)
        .await
        .map_err(Into::into)
}

/// Finds an item by its identity tuple, returning None if it was never
/// registered.
pub async fn find_item<C: ConnectionTrait>(db: &C, key: &ItemKey) -> Result<Option<item::Model>> {
    Item::find()
        .filter(item::Column::Name.eq(&key.name))
        .filter(item::Column::Size.eq(&key.size))
        .filter(item::Column::Category.eq(&key.category))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an item by its identity tuple, failing with [`Error::UnknownItem`]
/// if it was never registered. Used by the ledger paths that must not create
/// items implicitly.
pub async fn require_item<C: ConnectionTrait>(db: &C, key: &ItemKey) -> Result<item::Model> {
    find_item(db, key).await?.ok_or_else(|| Error::UnknownItem {
        name: key.name.clone(),
        size: key.size.clone(),
        category: key.category.clone(),
    })
}

/// Finds an item by its identity tuple, creating it with the given
/// minimum-stock threshold if absent. Only the stock-in path goes through
/// here; the tag tells the caller whether a new item was registered.
pub async fn resolve_or_create<C: ConnectionTrait>(
    db: &C,
    key: &ItemKey,
    min_stock_if_new: i64,
) -> Result<Resolved<item::Model>> {
    if key.name.is_empty() {
        return Err(Error::Config("item name cannot be empty".to_string()));
    }

    if let Some(existing) = find_item(db, key).await? {
        return Ok(Resolved::Existing(existing));
    }

    let model = item::ActiveModel {
        name: Set(key.name.clone()),
        size: Set(key.size.clone()),
        category: Set(key.category.clone()),
        min_stock: Set(min_stock_if_new.max(0)),
        ..Default::default()
    };
    let created = model.insert(db).await?;
    Ok(Resolved::Created(created))
}

/// Returns all items ordered by name, then size, then category.
pub async fn list_items(db: &DatabaseConnection) -> Result<Vec<item::Model>> {
    Item::find()
        .order_by_asc(item::Column::Name)
        .order_by_asc(item::Column::Size)
        .order_by_asc(item::Column::Category)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_add_item_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        // Empty name
        let result = add_item(&db, &ItemKey::new("", "L", "summer"), 5).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config(_)));

        // Whitespace-only name (trimmed by the key constructor)
        let result = add_item(&db, &ItemKey::new("   ", "L", "summer"), 5).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config(_)));

        // Negative minimum stock
        let result = add_item(&db, &ItemKey::new("Duty Shirt", "L", "summer"), -3).await;
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidQuantity { quantity: -3 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let item = add_item(&db, &ItemKey::new("Duty Shirt", "L", "summer"), 20).await?;

        assert_eq!(item.name, "Duty Shirt");
        assert_eq!(item.size, "L");
        assert_eq!(item.category, "summer");
        assert_eq!(item.min_stock, 20);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_same_tuple_updates_threshold() -> Result<()> {
        let db = setup_test_db().await?;
        let key = ItemKey::new("Duty Shirt", "L", "summer");

        let first = add_item(&db, &key, 20).await?;
        let second = add_item(&db, &key, 35).await?;

        // Same identity tuple resolves to the same row, threshold updated.
        assert_eq!(second.id, first.id);
        assert_eq!(second.min_stock, 35);

        let all = Item::find().all(&db).await?;
        assert_eq!(all.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_tuple_components_distinguish_items() -> Result<()> {
        let db = setup_test_db().await?;

        add_item(&db, &ItemKey::new("Duty Shirt", "L", "summer"), 0).await?;
        add_item(&db, &ItemKey::new("Duty Shirt", "M", "summer"), 0).await?;
        add_item(&db, &ItemKey::new("Duty Shirt", "L", "winter"), 0).await?;

        let all = Item::find().all(&db).await?;
        assert_eq!(all.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_find_item_integration() -> Result<()> {
        let db = setup_test_db().await?;
        let key = ItemKey::new("Patrol Jacket", "XL", "winter");

        let created = add_item(&db, &key, 10).await?;

        let found = find_item(&db, &key).await?;
        assert_eq!(found.unwrap().id, created.id);

        let not_found = find_item(&db, &ItemKey::new("Patrol Jacket", "S", "winter")).await?;
        assert!(not_found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_require_item_unknown() -> Result<()> {
        let db = setup_test_db().await?;

        let result = require_item(&db, &ItemKey::new("Ghost Vest", "M", "")).await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::UnknownItem { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_or_create_tags() -> Result<()> {
        let db = setup_test_db().await?;
        let key = ItemKey::new("Rain Poncho", "", "equipment");

        let first = resolve_or_create(&db, &key, 4).await?;
        assert!(first.was_created());
        assert_eq!(first.as_inner().min_stock, 4);

        let second = resolve_or_create(&db, &key, 99).await?;
        assert!(!second.was_created());
        // Existing threshold untouched by the resolve path.
        assert_eq!(second.into_inner().min_stock, 4);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_items_ordering() -> Result<()> {
        let db = setup_test_db().await?;

        add_item(&db, &ItemKey::new("Patrol Jacket", "M", "winter"), 0).await?;
        add_item(&db, &ItemKey::new("Duty Shirt", "M", "summer"), 0).await?;
        add_item(&db, &ItemKey::new("Duty Shirt", "L", "summer"), 0).await?;

        let items = list_items(&db).await?;
        let keys: Vec<(String, String)> = items
            .iter()
            .map(|i| (i.name.clone(), i.size.clone()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Duty Shirt".to_string(), "L".to_string()),
                ("Duty Shirt".to_string(), "M".to_string()),
                ("Patrol Jacket".to_string(), "M".to_string()),
            ]
        );

        Ok(())
    }
}
