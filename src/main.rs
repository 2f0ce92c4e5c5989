use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod db;
mod domain;
mod errors;
mod geojson;
mod pagination;
mod responses;
mod router;


fn main() {
    // Backing store location comes from the environment; fall back to a
    // local file for dev.
    let db_path =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "listings.sqlite3".to_string());
    let db = Database::new(db_path);

    // Apply schema before serving anything
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
