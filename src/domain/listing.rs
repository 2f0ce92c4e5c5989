use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};

/// Listing lifecycle status. The dataset only ever holds these three
/// values; anything else is a broken row and is rejected at decode time
/// rather than blowing up during presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Sold,
    Pending,
    Active,
}

impl Status {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "sold" => Ok(Status::Sold),
            "pending" => Ok(Status::Pending),
            "active" => Ok(Status::Active),
            other => Err(format!("unknown listing status: {other:?}")),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Sold => "sold",
            Status::Pending => "pending",
            Status::Active => "active",
        }
    }

    /// Map marker color, per the simplestyle "marker-color" convention.
    pub fn marker_color(&self) -> &'static str {
        match self {
            Status::Sold => "FF0000",
            Status::Pending => "FFFF00",
            Status::Active => "009900",
        }
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Status::parse(s).map_err(|msg| FromSqlError::Other(msg.into()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub street: String,
    pub status: Status,
    pub price: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub sq_ft: i64,
    pub lat: f64,
    pub lng: f64,
}
