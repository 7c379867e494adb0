//! Request and response records
//!
//! All records serialize with camelCase keys. Inbound records default every
//! missing or `null` field to an empty value so partial payloads still parse.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// COUNTERPARTY RECORDS
// ============================================================================

/// A loyalty-program member as returned by counterparty search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterparty {
    /// Unique member identifier (UUID)
    pub id: String,
    /// Full name of the member
    pub name: String,
    /// Discount card number
    #[serde(default)]
    pub discount_card_number: String,
    /// Phone number, free-form
    #[serde(default)]
    pub phone: String,
    /// Email address
    #[serde(default)]
    pub email: String,
}

/// Search result wrapper: `{"rows": [...]}` in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyCollection {
    pub rows: Vec<Counterparty>,
}

impl From<Vec<Counterparty>> for CounterpartyCollection {
    fn from(rows: Vec<Counterparty>) -> Self {
        Self { rows }
    }
}

// ============================================================================
// DETAIL REQUEST
// ============================================================================

/// Deserializes `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reference to another entity: a link plus its identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

/// Retail store the balance is requested for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetailStoreRef {
    #[serde(deserialize_with = "null_as_default")]
    pub meta: EntityMeta,
    /// Display name of the point of sale
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Inbound payload of `POST /counterparty/detail`.
///
/// Only `retail_store.meta.id` and `meta.id` take part in the lookup; the
/// remaining fields are accepted and ignored. Use [`Self::from_json`] to parse
/// a request body: field names match case-insensitively and `null` stands for
/// an empty value, the way point-of-sale clients send them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct DetailedCounterpartyRequest {
    #[serde(rename(deserialize = "retailstore"), deserialize_with = "null_as_default")]
    pub retail_store: RetailStoreRef,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: EntityMeta,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename(deserialize = "discountcardnumber"), deserialize_with = "null_as_default")]
    pub discount_card_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

/// Lower-cases every object key so struct fields match regardless of case.
/// Keys that fold to the same name resolve in key order, so the all-lowercase
/// spelling wins.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), fold_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

impl DetailedCounterpartyRequest {
    /// Parses a request body. A top-level `null` yields an empty request.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        let request: Option<Self> = serde_json::from_value(fold_keys(value))?;
        Ok(request.unwrap_or_default())
    }

    /// Identifier of the retail store the request is scoped to.
    pub fn retail_store_id(&self) -> &str {
        &self.retail_store.meta.id
    }

    /// Identifier of the counterparty whose balance is requested.
    pub fn counterparty_id(&self) -> &str {
        &self.meta.id
    }
}

// ============================================================================
// DETAIL RESPONSE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusProgram {
    pub agent_bonus_balance: i64,
}

/// Response body of `POST /counterparty/detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedCounterpartyResponse {
    pub bonus_program: BonusProgram,
}

impl DetailedCounterpartyResponse {
    pub fn with_balance(agent_bonus_balance: i64) -> Self {
        Self {
            bonus_program: BonusProgram { agent_bonus_balance },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_request_accepts_identifiers_only() {
        let body = json!({
            "retailStore": { "meta": { "id": "store" } },
            "meta": { "id": "member" }
        });
        let request = DetailedCounterpartyRequest::from_json(body.to_string().as_bytes()).unwrap();

        assert_eq!(request.retail_store_id(), "store");
        assert_eq!(request.counterparty_id(), "member");
        assert!(request.meta.href.is_empty());
        assert!(request.name.is_empty());
    }

    #[test]
    fn test_detail_request_ignores_unknown_fields() {
        let body = json!({
            "retailStore": { "meta": { "href": "https://pos/store", "id": "store" }, "name": "Shop" },
            "meta": { "href": "https://pos/member", "id": "member" },
            "discountCardNumber": "1111",
            "bonusLevel": "gold"
        });
        let request = DetailedCounterpartyRequest::from_json(body.to_string().as_bytes()).unwrap();

        assert_eq!(request.retail_store.name, "Shop");
        assert_eq!(request.discount_card_number, "1111");
    }

    #[test]
    fn test_detail_request_null_is_empty() {
        let request = DetailedCounterpartyRequest::from_json(b"null").unwrap();
        assert_eq!(request, DetailedCounterpartyRequest::default());

        let request =
            DetailedCounterpartyRequest::from_json(br#"{"retailStore":null,"meta":null,"name":null}"#)
                .unwrap();
        assert_eq!(request, DetailedCounterpartyRequest::default());
    }

    #[test]
    fn test_detail_request_null_href() {
        let body = json!({
            "retailStore": { "meta": { "href": null, "id": "store" }, "name": null },
            "meta": { "href": null, "id": "member" },
            "phone": null
        });
        let request = DetailedCounterpartyRequest::from_json(body.to_string().as_bytes()).unwrap();
        assert_eq!(request.retail_store_id(), "store");
        assert_eq!(request.counterparty_id(), "member");
        assert!(request.phone.is_empty());
    }

    #[test]
    fn test_detail_request_keys_case_insensitive() {
        let body = br#"{"RETAILSTORE":{"META":{"ID":"store"}},"Meta":{"Id":"member"},"DiscountCardNumber":"1111"}"#;
        let request = DetailedCounterpartyRequest::from_json(body).unwrap();
        assert_eq!(request.retail_store_id(), "store");
        assert_eq!(request.counterparty_id(), "member");
        assert_eq!(request.discount_card_number, "1111");
    }

    #[test]
    fn test_detail_request_rejects_wrong_types() {
        assert!(DetailedCounterpartyRequest::from_json(b"not json").is_err());
        assert!(DetailedCounterpartyRequest::from_json(br#""text""#).is_err());
        assert!(DetailedCounterpartyRequest::from_json(br#"{"meta":{"id":5}}"#).is_err());
    }

    #[test]
    fn test_detail_request_serializes_camel_case() {
        let value = serde_json::to_value(DetailedCounterpartyRequest::default()).unwrap();
        assert!(value.get("retailStore").is_some());
        assert!(value.get("discountCardNumber").is_some());
    }

    #[test]
    fn test_detail_response_shape() {
        let value = serde_json::to_value(DetailedCounterpartyResponse::with_balance(50)).unwrap();
        assert_eq!(value, json!({ "bonusProgram": { "agentBonusBalance": 50 } }));
    }
}
