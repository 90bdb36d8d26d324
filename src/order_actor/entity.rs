//! Entity trait implementation for the Order domain type.
//!
//! The actor only checks the order's own fields. Whether the user exists is asked by
//! [`OrderClient`](crate::clients::OrderClient) before the request reaches the actor, so a
//! slow user service never holds up the actor's queue.

use crate::framework::ActorEntity;
use crate::model::{check_text, Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;

pub const MAX_PRODUCT_CHARS: usize = 100;

pub fn check_product(product: &str) -> Result<(), OrderError> {
    check_text("product", product, MAX_PRODUCT_CHARS).map_err(OrderError::ValidationError)
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> OrderId {
        self.id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            user_id: params.user_id,
            product: params.product,
        }
    }

    async fn on_create(params: &OrderCreate, _ctx: &()) -> Result<(), OrderError> {
        check_product(&params.product)
    }

    /// Only `product` can change. `user_id` is not checked again.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), OrderError> {
        if let Some(product) = update.product {
            check_product(&product)?;
            self.product = product;
        }
        Ok(())
    }
}
