use crate::db::{DbConnection, DbPool, establish_connection_pool};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;

pub mod errors;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url` and wrap it in a repository.
    pub fn open(database_url: &str) -> RepositoryResult<Self> {
        Ok(Self::new(establish_connection_pool(database_url)?))
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List every product in insertion order.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Retrieve the first product whose name contains `fragment`, ignoring case.
    fn find_product_by_name(&self, fragment: &str) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product and return it with its assigned identifier.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Overwrite the mutable fields of an existing product.
    ///
    /// Fails with [`RepositoryError::NotFound`] when the record is gone.
    fn save_product(&self, product: &Product) -> RepositoryResult<()>;
}
