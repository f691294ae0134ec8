//! Bean queries. One function per statement; each statement names every
//! column it reads or returns, and the typed record decodes by column name.
//! Absence is `None`/empty, never an error; store faults propagate as-is.

use sqlx::PgPool;

use crate::database::models::{CoffeeBean, NewBean};

/// Owner id for beans created through the public catalog path.
pub const GLOBAL_CATALOG_USER_ID: i32 = 1;

const BEAN_COLUMNS: &str =
    "bean_id, user_id, name, origin, roast_level, image_url, price_per_kg, stock_quantity, description";

/// All beans in the catalog. Ordering is whatever the database returns.
pub async fn list_beans(pool: &PgPool) -> Result<Vec<CoffeeBean>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {} FROM coffee_beans", BEAN_COLUMNS))
        .fetch_all(pool)
        .await
}

/// Beans owned by one user.
pub async fn list_beans_for_user(
    pool: &PgPool,
    user_id: i32,
) -> Result<Vec<CoffeeBean>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {} FROM coffee_beans WHERE user_id = $1",
        BEAN_COLUMNS
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Insert into the global catalog, owner fixed to the system user.
pub async fn create_bean(pool: &PgPool, args: &NewBean) -> Result<Option<CoffeeBean>, sqlx::Error> {
    insert_bean(pool, GLOBAL_CATALOG_USER_ID, args).await
}

/// Insert a bean owned by the calling user.
pub async fn create_user_bean(
    pool: &PgPool,
    user_id: i32,
    args: &NewBean,
) -> Result<Option<CoffeeBean>, sqlx::Error> {
    insert_bean(pool, user_id, args).await
}

async fn insert_bean(
    pool: &PgPool,
    owner_id: i32,
    args: &NewBean,
) -> Result<Option<CoffeeBean>, sqlx::Error> {
    sqlx::query_as(&format!(
        "INSERT INTO coffee_beans (user_id, name, origin, roast_level, image_url, price_per_kg, stock_quantity, description) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING {}",
        BEAN_COLUMNS
    ))
    .bind(owner_id)
    .bind(&args.name)
    .bind(&args.origin)
    .bind(&args.roast_level)
    .bind(&args.image_url)
    .bind(args.price_per_kg)
    .bind(args.stock_quantity)
    .bind(&args.description)
    .fetch_optional(pool)
    .await
}

/// Delete at most one bean matched by both id and owner. A mismatch on
/// either column deletes nothing, and the caller is not told which case
/// occurred.
pub async fn delete_user_bean(
    pool: &PgPool,
    bean_id: i32,
    user_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM coffee_beans WHERE bean_id = $1 AND user_id = $2")
        .bind(bean_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}
