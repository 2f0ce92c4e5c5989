use crate::db::Database;
use crate::db::listings::find_listings;
use crate::domain::filter::ListingFilter;
use crate::errors::{ResultResp, ServerError};
use crate::geojson;
use crate::pagination::PageRequest;
use crate::responses::{json_response, text_response};
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => text_response("hello world!"),
        ("GET", "/listings") => get_listings(&req, db),
        _ => Err(ServerError::NotFound),
    }
}

/// GET /listings: filter → query → (optional) paginate → GeoJSON.
fn get_listings(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);

    let filter = ListingFilter::from_params(&params)?;
    let results = find_listings(db, &filter)?;

    let collection = match PageRequest::from_params(&params)? {
        Some(page_req) => {
            // Total before slicing feeds last_page; links come from the
            // request URL itself (origin form, path + query).
            let count = results.len();
            let page = page_req.slice(&results);
            let pagination = page_req.links(count, &req.uri().to_string());
            geojson::feature_collection(page, Some(pagination))
        }
        None => geojson::feature_collection(&results, None),
    };

    json_response(&collection)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
