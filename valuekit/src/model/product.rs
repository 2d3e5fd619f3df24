//! Catalog records: products and order lines.
//!
//! Both types are thin wrappers over [`ValueRecord`], so equality, hashing,
//! copying, and serialization come from the record itself.

use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::core::error::RecordError;
use crate::core::field::{FieldKind, FieldValue};
use crate::core::record::ValueRecord;
use crate::core::schema::{FieldDef, RecordSchema};

pub const PRODUCT: &str = "Product";
pub const ORDER_ITEM: &str = "OrderItem";

/// `Product { name: text, price: float (mutable), on_sale: bool = false }`
pub fn product_schema() -> Result<Arc<RecordSchema>, RecordError> {
    static SCHEMA: OnceLock<Result<Arc<RecordSchema>, RecordError>> = OnceLock::new();
    SCHEMA
        .get_or_init(|| {
            RecordSchema::new(
                PRODUCT,
                vec![
                    FieldDef::new("name", FieldKind::Text),
                    FieldDef::new("price", FieldKind::Float).mutable(),
                    FieldDef::new("on_sale", FieldKind::Bool).with_default(false),
                ],
            )
        })
        .clone()
}

/// `OrderItem { product: record<Product>, quantity: int }`
pub fn order_item_schema() -> Result<Arc<RecordSchema>, RecordError> {
    static SCHEMA: OnceLock<Result<Arc<RecordSchema>, RecordError>> = OnceLock::new();
    SCHEMA
        .get_or_init(|| {
            let product = product_schema()?;
            RecordSchema::new(
                ORDER_ITEM,
                vec![
                    FieldDef::new("product", FieldKind::record(&product)),
                    FieldDef::new("quantity", FieldKind::Int),
                ],
            )
        })
        .clone()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Product(ValueRecord);

impl Product {
    /// Product that is not on sale.
    pub fn new(name: &str, price: f64) -> Result<Self, RecordError> {
        let record = ValueRecord::builder(&product_schema()?)
            .set("name", name)
            .set("price", price)
            .build()?;
        Ok(Self(record))
    }

    pub fn with_sale(name: &str, price: f64, on_sale: bool) -> Result<Self, RecordError> {
        let record = ValueRecord::new(
            &product_schema()?,
            vec![name.into(), price.into(), on_sale.into()],
        )?;
        Ok(Self(record))
    }

    pub fn name(&self) -> &str {
        self.parts().0
    }

    pub fn price(&self) -> f64 {
        self.parts().1
    }

    pub fn on_sale(&self) -> bool {
        self.parts().2
    }

    /// `(name, price, on_sale)` in declaration order.
    pub fn destructure(&self) -> (&str, f64, bool) {
        self.parts()
    }

    /// Copy with a new price; the name is shared with `self`.
    pub fn with_price(&self, price: f64) -> Result<Self, RecordError> {
        Ok(Self(self.0.copy_with([("price", price)])?))
    }

    /// Update the price in place. Returns the previous price.
    pub fn set_price(&mut self, price: f64) -> Result<f64, RecordError> {
        let previous = self.0.set("price", price)?;
        Ok(previous.as_float().unwrap_or(price))
    }

    pub fn record(&self) -> &ValueRecord {
        &self.0
    }

    fn parts(&self) -> (&str, f64, bool) {
        match self.0.values() {
            [
                FieldValue::Text(name),
                FieldValue::Float(price),
                FieldValue::Bool(on_sale),
            ] => (&**name, *price, *on_sale),
            other => unreachable!("product record holds {:?}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderItem(ValueRecord);

impl OrderItem {
    pub fn new(product: Product, quantity: i64) -> Result<Self, RecordError> {
        let record = ValueRecord::new(
            &order_item_schema()?,
            vec![product.0.into(), quantity.into()],
        )?;
        Ok(Self(record))
    }

    /// Shared handle to the product entity held by this line.
    pub fn product(&self) -> &Arc<ValueRecord> {
        self.parts().0
    }

    pub fn quantity(&self) -> i64 {
        self.parts().1
    }

    /// Shallow copy: the new line refers to the same product entity.
    pub fn copy(&self) -> Self {
        Self(self.0.clone())
    }

    pub fn with_quantity(&self, quantity: i64) -> Result<Self, RecordError> {
        Ok(Self(self.0.copy_with([("quantity", quantity)])?))
    }

    /// True if both lines point at the same product allocation.
    pub fn shares_product_with(&self, other: &OrderItem) -> bool {
        Arc::ptr_eq(self.product(), other.product())
    }

    pub fn record(&self) -> &ValueRecord {
        &self.0
    }

    fn parts(&self) -> (&Arc<ValueRecord>, i64) {
        match self.0.values() {
            [FieldValue::Record(product), FieldValue::Int(quantity)] => (product, *quantity),
            other => unreachable!("order item record holds {:?}", other),
        }
    }
}
