use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::TransactionError;

/// One producer-supplied audit record destined for a block.
///
/// A transaction is an ordered mapping from field name to JSON scalar.
/// Producers decide the fields; the only stable convention is some
/// identifying field such as a customer id, with arbitrary extra scalars
/// (risk level, retention action, alert message). Field order is preserved
/// as inserted, but does not affect the block hash.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Transaction {
    fields: Map<String, Value>,
}

impl Transaction {
    /// Validates that every field holds a scalar (string, number, boolean
    /// or null). Arrays and nested objects are rejected.
    pub fn new(fields: Map<String, Value>) -> Result<Self, TransactionError> {
        for (name, value) in &fields {
            match value {
                Value::Array(_) | Value::Object(_) => {
                    return Err(TransactionError::NonScalarField(name.clone()))
                }
                _ => {}
            }
        }
        Ok(Transaction { fields })
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields_of(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_new_transaction_scalars() {
        let tx = Transaction::new(fields_of(json!({
            "CustomerID": "42",
            "Risk_Level": "High",
            "Retention_Action": "Call",
            "Churn_Probability": 0.93,
            "Contacted": false,
        })));
        assert!(tx.is_ok());
    }

    #[test]
    fn test_new_transaction_rejects_array() {
        let tx = Transaction::new(fields_of(json!({
            "CustomerID": "42",
            "History": [1, 2, 3],
        })));
        assert_eq!(
            tx.unwrap_err(),
            TransactionError::NonScalarField("History".to_string())
        );
    }

    #[test]
    fn test_new_transaction_rejects_nested_object() {
        let tx = Transaction::new(fields_of(json!({
            "CustomerID": "42",
            "Details": {"plan": "gold"},
        })));
        assert!(tx.is_err());
    }

    #[test]
    fn test_field_access() {
        let tx = Transaction::new(fields_of(json!({
            "CustomerID": "42",
            "Risk_Level": "High",
        })))
        .unwrap();
        assert_eq!(tx.get("Risk_Level"), Some(&json!("High")));
        assert_eq!(tx.get("missing"), None);
        assert_eq!(tx.fields().len(), 2);
    }
}
