use crate::DbError;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use std::collections::BTreeSet;

/// A row from the `vendor` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vendor {
    pub vendor_id: i64,
    pub name: String,
    pub info: String,
}

/// A row from the `menuItem` table.
///
/// `catagory` keeps the deployed schema's historical column spelling;
/// renaming the field would break row mapping against the live store.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuItem {
    pub menu_item_id: i64,
    pub vendor_id: i64,
    pub name: String,
    pub price: f64,
    pub catagory: String,
}

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: SqlitePool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetches every vendor row, in whatever order the store returns them.
    pub async fn all_vendors(&self) -> Result<Vec<Vendor>, DbError> {
        let vendors = sqlx::query_as::<_, Vendor>("SELECT vendor_id, name, info FROM vendor")
            .fetch_all(&self.pool)
            .await?;
        Ok(vendors)
    }

    /// Fetches the single vendor with the given id.
    ///
    /// Absence is a value, not an error: a vendor id that matches no row
    /// yields `Ok(None)` and the caller decides how to respond.
    pub async fn vendor_by_id(&self, vendor_id: i64) -> Result<Option<Vendor>, DbError> {
        let vendor = sqlx::query_as::<_, Vendor>(
            "SELECT vendor_id, name, info FROM vendor WHERE vendor_id = ?",
        )
        .bind(vendor_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vendor)
    }

    /// Fetches all menu items belonging to one vendor; may be empty.
    pub async fn menu_items_for_vendor(&self, vendor_id: i64) -> Result<Vec<MenuItem>, DbError> {
        let items = sqlx::query_as::<_, MenuItem>(
            "SELECT menu_item_id, vendor_id, name, price, catagory FROM menuItem WHERE vendor_id = ?",
        )
        .bind(vendor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}

/// Collects the distinct `catagory` labels among a vendor's fetched menu
/// items. Set semantics only: duplicates are eliminated and callers must not
/// rely on iteration order.
pub fn distinct_catagories(items: &[MenuItem]) -> BTreeSet<String> {
    items.iter().map(|item| item.catagory.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    // A single-connection in-memory pool; every connection would otherwise
    // see its own empty database.
    async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool should open");

        sqlx::query(
            "CREATE TABLE vendor (
                vendor_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                info TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .expect("vendor table should create");

        sqlx::query(
            "CREATE TABLE menuItem (
                menu_item_id INTEGER PRIMARY KEY,
                vendor_id INTEGER NOT NULL REFERENCES vendor(vendor_id),
                name TEXT NOT NULL,
                price REAL NOT NULL,
                catagory TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .expect("menuItem table should create");

        sqlx::query("INSERT INTO vendor (vendor_id, name, info) VALUES (1, 'Dumpling House', 'Handmade dumplings'), (2, 'Taco Cart', 'Street tacos')")
            .execute(&pool)
            .await
            .expect("vendors should insert");

        sqlx::query(
            "INSERT INTO menuItem (menu_item_id, vendor_id, name, price, catagory) VALUES
                (1, 1, 'Iced Tea', 2.5, 'Drinks'),
                (2, 1, 'Pork Dumplings', 8.0, 'Food'),
                (3, 1, 'Lemonade', 3.0, 'Drinks')",
        )
        .execute(&pool)
        .await
        .expect("menu items should insert");

        pool
    }

    #[tokio::test]
    async fn all_vendors_returns_every_row_once() {
        let repo = DbRepository::new(seeded_pool().await);
        let vendors = repo.all_vendors().await.expect("query should succeed");

        assert_eq!(vendors.len(), 2);
        let mut ids: Vec<i64> = vendors.iter().map(|v| v.vendor_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn vendor_by_id_finds_the_matching_row() {
        let repo = DbRepository::new(seeded_pool().await);
        let vendor = repo
            .vendor_by_id(1)
            .await
            .expect("query should succeed")
            .expect("vendor 1 exists");

        assert_eq!(vendor.vendor_id, 1);
        assert_eq!(vendor.name, "Dumpling House");
    }

    #[tokio::test]
    async fn vendor_by_id_missing_is_none() {
        let repo = DbRepository::new(seeded_pool().await);
        let vendor = repo.vendor_by_id(99).await.expect("query should succeed");
        assert!(vendor.is_none());
    }

    #[tokio::test]
    async fn menu_items_are_scoped_to_the_vendor() {
        let repo = DbRepository::new(seeded_pool().await);

        let items = repo
            .menu_items_for_vendor(1)
            .await
            .expect("query should succeed");
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item.vendor_id == 1));

        let empty = repo
            .menu_items_for_vendor(2)
            .await
            .expect("query should succeed");
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn category_set_from_fetched_items_deduplicates() {
        let repo = DbRepository::new(seeded_pool().await);
        let items = repo
            .menu_items_for_vendor(1)
            .await
            .expect("query should succeed");

        let catagories = distinct_catagories(&items);
        assert_eq!(catagories.len(), 2);
        assert!(catagories.contains("Drinks"));
        assert!(catagories.contains("Food"));
    }

    fn item(catagory: &str) -> MenuItem {
        MenuItem {
            menu_item_id: 0,
            vendor_id: 1,
            name: "item".to_string(),
            price: 1.0,
            catagory: catagory.to_string(),
        }
    }

    #[test]
    fn distinct_catagories_is_input_order_independent() {
        let forward = [item("Drinks"), item("Food"), item("Drinks")];
        let backward = [item("Drinks"), item("Drinks"), item("Food")];
        assert_eq!(
            distinct_catagories(&forward),
            distinct_catagories(&backward)
        );
        assert_eq!(distinct_catagories(&forward).len(), 2);
    }

    #[test]
    fn distinct_catagories_of_no_items_is_empty() {
        assert!(distinct_catagories(&[]).is_empty());
    }
}
