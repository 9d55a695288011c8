//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method is a single
//! SQL statement on a pooled connection: acquire, execute, release.
//! Store errors are returned as-is; "not found" is `Ok(None)`, never an
//! error.

pub mod category_repo;
pub mod payment_method_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use payment_method_repo::PaymentMethodRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
