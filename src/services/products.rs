use chrono::{DateTime, Utc};

use crate::domain::expiration::days_remaining;
use crate::domain::product::{Product, ProductSelector};
use crate::domain::types::ProductId;
use crate::forms::products::AddProductFormPayload;
use crate::repository::{ProductReader, ProductWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

/// Returns every stored product as-is, without refreshing cached day counts.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    repo.list_products().map_err(|e| {
        log::error!("Failed to list products: {e}");
        e.into()
    })
}

/// Resolves a product, recomputes its remaining days at `now` and persists
/// the value back onto the record.
///
/// The resolve and the save are separate store calls. A product deleted in
/// between surfaces as [`ServiceError::NotFound`], and concurrent refreshes of
/// the same record are last-write-wins.
pub fn find_product<R>(
    selector: ProductSelector,
    now: DateTime<Utc>,
    repo: &R,
) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter,
{
    let resolved = match &selector {
        ProductSelector::Id(id) => repo.get_product_by_id(*id),
        ProductSelector::Name(fragment) => repo.find_product_by_name(fragment),
    };

    let mut product = match resolved {
        Ok(Some(product)) => product,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to resolve product {selector:?}: {e}");
            return Err(e.into());
        }
    };

    product.days_expiration = Some(days_remaining(now, product.date_expiration.and_utc()));
    product.updated_at = now.naive_utc();

    match repo.save_product(&product) {
        Ok(()) => Ok(product),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to save product {}: {e}", product.id);
            Err(e.into())
        }
    }
}

/// Looks a product up by the raw identifier taken from a request path.
///
/// Identifiers that are not positive integers cannot exist and resolve to
/// [`ServiceError::NotFound`].
pub fn find_product_by_id<R>(raw_id: &str, now: DateTime<Utc>, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter,
{
    let id = raw_id
        .trim()
        .parse::<i32>()
        .ok()
        .and_then(|id| ProductId::new(id).ok())
        .ok_or(ServiceError::NotFound)?;

    find_product(ProductSelector::Id(id), now, repo)
}

/// Looks a product up by a case-insensitive name fragment.
pub fn find_product_by_name<R>(
    fragment: &str,
    now: DateTime<Utc>,
    repo: &R,
) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter,
{
    find_product(ProductSelector::Name(fragment.to_string()), now, repo)
}

/// Persists a new product with no cached day count.
pub fn create_product<R>(
    payload: AddProductFormPayload,
    now: DateTime<Utc>,
    repo: &R,
) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    let new_product = payload.into_new_product(now.naive_utc());
    repo.create_product(&new_product).map_err(|e| {
        log::error!("Failed to create product: {e}");
        e.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ExpirationDate, ProductName, ProductPrice};
    use crate::repository::test::TestRepository;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    }

    fn milk_payload(expires: DateTime<Utc>) -> AddProductFormPayload {
        AddProductFormPayload {
            name: ProductName::new("Milk").unwrap(),
            price: ProductPrice::new(2.5).unwrap(),
            date_expiration: ExpirationDate::from_naive(expires.naive_utc()),
        }
    }

    fn repo_with_milk() -> (TestRepository, Product) {
        let repo = TestRepository::default();
        let created =
            create_product(milk_payload(now() + Duration::days(5)), now(), &repo).unwrap();
        (repo, created)
    }

    #[test]
    fn created_products_have_no_cached_days() {
        let (repo, created) = repo_with_milk();
        assert_eq!(created.days_expiration, None);
        assert_eq!(repo.products()[0].days_expiration, None);
    }

    #[test]
    fn lookup_by_id_refreshes_and_persists_days() {
        let (repo, created) = repo_with_milk();

        let found = find_product(ProductSelector::Id(created.id), now(), &repo).unwrap();

        assert_eq!(found.days_expiration, Some(5));
        assert_eq!(repo.products()[0].days_expiration, Some(5));
        assert_eq!(repo.products()[0].updated_at, now().naive_utc());
    }

    #[test]
    fn lookup_by_lowercase_fragment_matches() {
        let (repo, created) = repo_with_milk();

        let found = find_product_by_name("mil", now(), &repo).unwrap();

        assert_eq!(found.id, created.id);
        assert_eq!(found.days_expiration, Some(5));
        assert_eq!(repo.products()[0].days_expiration, Some(5));
    }

    #[test]
    fn missing_id_is_not_found_and_mutates_nothing() {
        let (repo, _) = repo_with_milk();
        let before = repo.products();

        let err = find_product_by_id("999", now(), &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
        assert_eq!(repo.products(), before);
    }

    #[test]
    fn malformed_ids_are_not_found() {
        let (repo, _) = repo_with_milk();
        assert_eq!(
            find_product_by_id("abc", now(), &repo).unwrap_err(),
            ServiceError::NotFound
        );
        assert_eq!(
            find_product_by_id("0", now(), &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn unmatched_fragment_is_not_found() {
        let (repo, _) = repo_with_milk();
        assert_eq!(
            find_product_by_name("bread", now(), &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }

    #[test]
    fn lookups_within_one_day_are_idempotent() {
        let (repo, created) = repo_with_milk();

        let first = find_product(ProductSelector::Id(created.id), now(), &repo).unwrap();
        let second = find_product(
            ProductSelector::Id(created.id),
            now() + Duration::hours(3),
            &repo,
        )
        .unwrap();

        assert_eq!(first.days_expiration, second.days_expiration);
    }

    #[test]
    fn cached_days_drift_as_days_pass() {
        let (repo, created) = repo_with_milk();

        let later = find_product(
            ProductSelector::Id(created.id),
            now() + Duration::days(2),
            &repo,
        )
        .unwrap();

        assert_eq!(later.days_expiration, Some(3));
    }

    #[test]
    fn expired_products_get_negative_days() {
        let repo = TestRepository::default();
        let created =
            create_product(milk_payload(now() - Duration::days(3)), now(), &repo).unwrap();

        let found = find_product(ProductSelector::Id(created.id), now(), &repo).unwrap();

        assert_eq!(found.days_expiration, Some(-3));
    }

    #[test]
    fn list_does_not_refresh_cached_days() {
        let (repo, _) = repo_with_milk();
        let products = list_products(&repo).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].days_expiration, None);
    }

    #[test]
    fn store_failures_are_surfaced() {
        let repo = TestRepository::unavailable();
        let err = list_products(&repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::StoreUnavailable("connection refused".to_string())
        );
        let err = find_product_by_name("milk", now(), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::StoreUnavailable(_)));
    }

    /// Deletion between resolve and save surfaces as not found.
    struct VanishingRepository(TestRepository);

    impl ProductReader for VanishingRepository {
        fn list_products(&self) -> crate::repository::RepositoryResult<Vec<Product>> {
            self.0.list_products()
        }

        fn get_product_by_id(
            &self,
            id: ProductId,
        ) -> crate::repository::RepositoryResult<Option<Product>> {
            let found = self.0.get_product_by_id(id);
            self.0.remove(id);
            found
        }

        fn find_product_by_name(
            &self,
            fragment: &str,
        ) -> crate::repository::RepositoryResult<Option<Product>> {
            self.0.find_product_by_name(fragment)
        }
    }

    impl ProductWriter for VanishingRepository {
        fn create_product(
            &self,
            product: &crate::domain::product::NewProduct,
        ) -> crate::repository::RepositoryResult<Product> {
            self.0.create_product(product)
        }

        fn save_product(&self, product: &Product) -> crate::repository::RepositoryResult<()> {
            self.0.save_product(product)
        }
    }

    #[test]
    fn deletion_between_resolve_and_save_is_not_found() {
        let (repo, created) = repo_with_milk();
        let repo = VanishingRepository(repo);

        let err = find_product(ProductSelector::Id(created.id), now(), &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
    }
}
