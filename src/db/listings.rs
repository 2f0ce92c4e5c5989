use crate::db::connection::Database;
use crate::domain::filter::ListingFilter;
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use rusqlite::params_from_iter;

/// Run the filter against the listings table and materialize every
/// matching row. Ordered by id so identical queries give identical
/// collections.
pub fn find_listings(db: &Database, filter: &ListingFilter) -> Result<Vec<Listing>, ServerError> {
    let (where_sql, binds) = filter.to_sql();

    let sql = format!(
        r#"
        SELECT
            id,        -- 0
            street,    -- 1
            status,    -- 2
            price,     -- 3
            bedrooms,  -- 4
            bathrooms, -- 5
            sq_ft,     -- 6
            lat,       -- 7
            lng        -- 8
        FROM listings
        {where_sql}
        ORDER BY id
        "#
    );

    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map(params_from_iter(binds), |row| {
                Ok(Listing {
                    id: row.get(0)?,
                    street: row.get(1)?,
                    status: row.get(2)?,
                    price: row.get(3)?,
                    bedrooms: row.get(4)?,
                    bathrooms: row.get(5)?,
                    sq_ft: row.get(6)?,
                    lat: row.get(7)?,
                    lng: row.get(8)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
        }

        Ok(results)
    })
}
