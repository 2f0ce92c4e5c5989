// src/geojson.rs

use crate::domain::listing::Listing;
use serde_json::{json, Value};

/// One listing as a GeoJSON Feature. The property shape here is a wire
/// contract; field names and types must not drift.
pub fn feature(listing: &Listing) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [listing.lng, listing.lat]
        },
        "properties": {
            "id": listing.id.to_string(), // contract: id goes out as a string
            "price": listing.price,
            "street": listing.street,
            "bedrooms": listing.bedrooms,
            "bathrooms": listing.bathrooms,
            "sq_ft": listing.sq_ft,
            "status": listing.status.as_str(),
            "marker-color": listing.status.marker_color()
        }
    })
}

/// Wrap listings in a FeatureCollection. The pagination object (page +
/// links), when given, is merged into the top level; when pagination was
/// not requested those keys must not appear at all.
pub fn feature_collection(listings: &[Listing], pagination: Option<Value>) -> Value {
    let features: Vec<Value> = listings.iter().map(feature).collect();

    let mut collection = json!({
        "type": "FeatureCollection",
        "features": features
    });

    if let (Some(obj), Some(Value::Object(extra))) = (collection.as_object_mut(), pagination) {
        obj.extend(extra);
    }

    collection
}
