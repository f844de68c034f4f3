mod handlers;
mod response;
mod routes;
mod views;

pub use routes::create_router;
