pub mod codec;
pub mod connection;
pub mod models;
pub mod repository;
pub mod seed;
pub mod store;

pub use connection::DocStore;
pub use models::*;
pub use repository::Repository;
pub use store::{DocumentStore, Filter, StoreError};
