use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, name_contains};
use crate::domain::types::ProductId;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct, ProductChangeset};
use crate::repository::{
    DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let items = products::table
            .order(products::id.asc())
            .select(DbProduct::as_select())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id.get()))
            .select(DbProduct::as_select())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }

    fn find_product_by_name(&self, fragment: &str) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        // SQLite LIKE folds ASCII only, so the match runs on loaded names.
        let fragment = fragment.to_lowercase();
        let matched_id = products::table
            .order(products::id.asc())
            .select((products::id, products::name))
            .load::<(i32, String)>(&mut conn)?
            .into_iter()
            .find(|(_, name)| name_contains(name, &fragment))
            .map(|(id, _)| id);

        let Some(matched_id) = matched_id else {
            return Ok(None);
        };

        let product = products::table
            .filter(products::id.eq(matched_id))
            .select(DbProduct::as_select())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let created = diesel::insert_into(products::table)
            .values(db_product)
            .returning(DbProduct::as_returning())
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn save_product(&self, product: &Product) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changeset = ProductChangeset::from(product);

        let affected = diesel::update(products::table.filter(products::id.eq(product.id.get())))
            .set(changeset)
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
