//! Typed Food API over any [`HttpClient`] transport

use shared::{FoodId, FoodInput, FoodItem};

use crate::ClientResult;
use crate::client::HttpClient;

#[derive(Debug, Clone)]
pub struct FoodApi<C> {
    client: C,
}

impl<C: HttpClient> FoodApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying transport
    pub fn client(&self) -> &C {
        &self.client
    }

    /// POST /savefood
    pub async fn create_food(&self, input: &FoodInput) -> ClientResult<FoodItem> {
        tracing::debug!(name = ?input.name, "POST /savefood");
        self.client.post("/savefood", input).await
    }

    /// GET /getfood
    pub async fn list_food(&self) -> ClientResult<Vec<FoodItem>> {
        tracing::debug!("GET /getfood");
        self.client.get("/getfood").await
    }

    /// GET /food/{id}
    pub async fn get_food(&self, id: FoodId) -> ClientResult<FoodItem> {
        tracing::debug!(food_id = id, "GET /food/{{id}}");
        self.client.get(&format!("/food/{id}")).await
    }

    /// PUT /food/{id}
    pub async fn update_food(&self, id: FoodId, input: &FoodInput) -> ClientResult<FoodItem> {
        tracing::debug!(food_id = id, "PUT /food/{{id}}");
        self.client.put(&format!("/food/{id}"), input).await
    }

    /// DELETE /food/{id}
    pub async fn delete_food(&self, id: FoodId) -> ClientResult<bool> {
        tracing::debug!(food_id = id, "DELETE /food/{{id}}");
        self.client.delete(&format!("/food/{id}")).await
    }
}
