//! PostgreSQL access: connection pool and idempotent schema initialization.

mod pool;
mod schema;

pub use pool::connect;
pub use schema::init_schema;
