//! Catalog operations executed one request at a time

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::constants::PRODUCT_PATH;

/// A single catalog request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Create a product from a mapped payload
    CreateProduct {
        payload: Value,
    },
    /// Replace a product; the payload carries its `id`
    UpdateProduct {
        payload: Value,
    },
    /// Delete a product by numeric id
    DeleteProduct {
        id: i64,
    },
}

impl Operation {
    pub fn create_product(payload: Value) -> Self {
        Self::CreateProduct { payload }
    }

    pub fn update_product(payload: Value) -> Self {
        Self::UpdateProduct { payload }
    }

    pub fn delete_product(id: i64) -> Self {
        Self::DeleteProduct { id }
    }

    /// Get the HTTP method for this operation
    pub fn http_method(&self) -> &'static str {
        match self {
            Self::CreateProduct { .. } => "POST",
            Self::UpdateProduct { .. } => "PUT",
            Self::DeleteProduct { .. } => "DELETE",
        }
    }

    /// Get the operation type as a string
    pub fn operation_type(&self) -> &'static str {
        match self {
            Self::CreateProduct { .. } => "create",
            Self::UpdateProduct { .. } => "update",
            Self::DeleteProduct { .. } => "delete",
        }
    }

    /// Path relative to the service base URL
    pub fn path(&self) -> String {
        match self {
            Self::CreateProduct { .. } | Self::UpdateProduct { .. } => PRODUCT_PATH.to_string(),
            Self::DeleteProduct { id } => format!("{}/{}", PRODUCT_PATH, id),
        }
    }

    /// Request body, if the operation sends one
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::CreateProduct { payload } | Self::UpdateProduct { payload } => Some(payload),
            Self::DeleteProduct { .. } => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.http_method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_methods_and_paths() {
        let create = Operation::create_product(json!({"productCode": "A"}));
        assert_eq!(create.http_method(), "POST");
        assert_eq!(create.path(), "product");
        assert!(create.payload().is_some());

        let update = Operation::update_product(json!({"id": 5}));
        assert_eq!(update.http_method(), "PUT");
        assert_eq!(update.operation_type(), "update");

        let delete = Operation::delete_product(755);
        assert_eq!(delete.to_string(), "DELETE product/755");
        assert!(delete.payload().is_none());
    }
}
