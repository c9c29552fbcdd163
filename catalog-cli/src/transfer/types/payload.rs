//! Request body for the catalog's product create endpoint

use serde::{Deserialize, Serialize};

/// Parent product group for outbound SIM products
pub const DEFAULT_PARENT_ID: i64 = 561;
/// Unit of measure code ("Cái")
pub const DEFAULT_UOM: &str = "01";
/// Category for outbound SIM products
pub const DEFAULT_CATEGORY_ID: i64 = 101;
/// VAT percentage used when the sheet gives none
pub const DEFAULT_VAT: f64 = 10.0;

pub const DESCRIPTION_VI: &str = "Thời gian sử dụng là số ngày kể từ ngày kích hoạt";
pub const DESCRIPTION_EN: &str = "The usage period is the number of days from the activation date.";

/// Product create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub product_code: String,
    pub product_name: String,
    pub parent_id: i64,
    pub product_uom: String,
    pub check_quantity: i32,
    pub check_serial: i32,
    pub product_status: i32,
    pub product_description: String,
    pub product_category_id: i64,
    #[serde(rename = "productPriceDTOS")]
    pub product_price_dtos: [PriceEntry; 1],
    #[serde(rename = "productVatDTOS")]
    pub product_vat_dtos: [PriceEntry; 1],
    pub attribute_value_list: Vec<AttributeEntry>,
    pub product_description_en: String,
    pub id: Option<i64>,
    pub product_type: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pck_code: Option<String>,
}

impl Default for ProductPayload {
    fn default() -> Self {
        Self {
            product_code: String::new(),
            product_name: String::new(),
            parent_id: DEFAULT_PARENT_ID,
            product_uom: DEFAULT_UOM.to_string(),
            check_quantity: 1,
            check_serial: 1,
            product_status: 1,
            product_description: String::new(),
            product_category_id: DEFAULT_CATEGORY_ID,
            product_price_dtos: [PriceEntry::new(0.0)],
            product_vat_dtos: [PriceEntry::new(DEFAULT_VAT)],
            attribute_value_list: Vec::new(),
            product_description_en: String::new(),
            id: None,
            product_type: 1,
            pck_code: None,
        }
    }
}

impl ProductPayload {
    #[cfg(test)]
    pub fn price(&self) -> f64 {
        self.product_price_dtos[0].price
    }

    pub fn set_price(&mut self, price: f64) {
        self.product_price_dtos[0].price = price;
    }

    #[cfg(test)]
    pub fn vat(&self) -> f64 {
        self.product_vat_dtos[0].price
    }

    pub fn set_vat(&mut self, vat: f64) {
        self.product_vat_dtos[0].price = vat;
    }

    /// Attribute value by catalog attribute id
    #[cfg(test)]
    pub fn attribute(&self, attribute_id: u32) -> Option<&AttributeValue> {
        self.attribute_value_list
            .iter()
            .find(|a| a.product_category_attribute_id == attribute_id)
            .map(|a| &a.attribute_value)
    }
}

/// Price or VAT record; dates are always left open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub price: f64,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub id: Option<i64>,
}

impl PriceEntry {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            from_date: None,
            to_date: None,
            id: None,
        }
    }
}

/// One product characteristic in `attributeValueList`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeEntry {
    pub id: Option<i64>,
    pub product_category_attribute_id: u32,
    pub product_category_attribute_value_id: String,
    pub attribute_value: AttributeValue,
}

impl AttributeEntry {
    pub fn new(attribute_id: u32, value: AttributeValue) -> Self {
        Self {
            id: None,
            product_category_attribute_id: attribute_id,
            product_category_attribute_value_id: String::new(),
            attribute_value: value,
        }
    }
}

/// Attribute value on the wire: text, integer, or null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Int(i64),
    Text(String),
}

impl Default for AttributeValue {
    fn default() -> Self {
        AttributeValue::Text(String::new())
    }
}

impl AttributeValue {
    pub fn text(s: impl Into<String>) -> Self {
        AttributeValue::Text(s.into())
    }
}

impl From<Option<String>> for AttributeValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(AttributeValue::Null, AttributeValue::Text)
    }
}
