//! Startup seeding of default rows.
//!
//! Inserts the default users, payment methods, and categories when no row
//! of that entity type already has the same name. Each seed is a
//! lookup-by-name followed by a conditional insert, so re-running is safe.
//! The seed is not backed by a unique constraint: two processes seeding an
//! empty database at the same time can both insert a name. Known
//! limitation.

use sqlx::PgPool;

use crate::models::category::CreateCategory;
use crate::models::payment_method::CreatePaymentMethod;
use crate::models::user::CreateUser;
use crate::repositories::{CategoryRepo, PaymentMethodRepo, UserRepo};

/// Default user names.
const DEFAULT_USERS: [&str; 2] = ["Me", "Wife"];

/// Default payment method names.
const DEFAULT_PAYMENT_METHODS: [&str; 4] = ["Cash", "Visa Card", "MasterCard", "Debit Card"];

/// Default category names.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Grocery",
    "Mortgage",
    "Utilities",
    "Entertainment",
    "Dining",
    "Other",
];

/// Seed default users, payment methods, and categories.
///
/// Idempotent: each default name is inserted only when absent. Call after
/// [`crate::run_migrations`], before the server starts accepting requests.
pub async fn seed_defaults(pool: &PgPool) -> Result<(), sqlx::Error> {
    for name in DEFAULT_USERS {
        if UserRepo::find_by_name(pool, name).await?.is_none() {
            let user = UserRepo::create(
                pool,
                &CreateUser {
                    name: name.to_string(),
                },
            )
            .await?;
            tracing::info!(id = user.id, name, "Seeded default user");
        }
    }

    for name in DEFAULT_PAYMENT_METHODS {
        if PaymentMethodRepo::find_by_name(pool, name).await?.is_none() {
            let method = PaymentMethodRepo::create(
                pool,
                &CreatePaymentMethod {
                    name: name.to_string(),
                },
            )
            .await?;
            tracing::info!(id = method.id, name, "Seeded default payment method");
        }
    }

    for name in DEFAULT_CATEGORIES {
        if CategoryRepo::find_by_name(pool, name).await?.is_none() {
            let category = CategoryRepo::create(
                pool,
                &CreateCategory {
                    name: name.to_string(),
                },
            )
            .await?;
            tracing::info!(id = category.id, name, "Seeded default category");
        }
    }

    Ok(())
}
