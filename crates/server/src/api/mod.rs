pub mod envelope;
pub mod fact_check;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
