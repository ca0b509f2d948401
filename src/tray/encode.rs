//! Form encoding for Tray write endpoints.
//!
//! Tray expects nested resources as bracketed form keys, for example
//! `Customer[name]` and `Customer[CustomerAddress][0][city]`.

use serde_json::Value;

/// Flattens a JSON value into bracketed form fields under `root`.
///
/// Objects and arrays nest as `[key]` and `[index]`, nulls are skipped and
/// booleans are sent as `1` / `0`.
pub fn flatten_resource(root: &str, value: &Value) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    flatten_into(root.to_string(), value, &mut fields);
    fields
}

fn flatten_into(prefix: String, value: &Value, fields: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(format!("{}[{}]", prefix, key), nested, fields);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten_into(format!("{}[{}]", prefix, index), nested, fields);
            }
        }
        Value::Null => {}
        Value::Bool(flag) => fields.push((prefix, if *flag { "1" } else { "0" }.to_string())),
        Value::Number(number) => fields.push((prefix, number.to_string())),
        Value::String(text) => fields.push((prefix, text.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tray::model::{AddressRecord, CustomerRecord};

    #[test]
    fn flattens_customer_with_addresses() {
        let record = CustomerRecord {
            name: Some("Ana Souza".to_string()),
            email: Some("ana@example.com".to_string()),
            newsletter: Some(true),
            addresses: vec![
                AddressRecord {
                    city: Some("São Paulo".to_string()),
                    ..Default::default()
                },
                AddressRecord {
                    city: Some("Campinas".to_string()),
                    zip_code: Some("13000-000".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let fields = flatten_resource("Customer", &serde_json::to_value(&record).unwrap());

        assert!(fields.contains(&("Customer[name]".to_string(), "Ana Souza".to_string())));
        assert!(fields.contains(&("Customer[newsletter]".to_string(), "1".to_string())));
        assert!(fields.contains(&(
            "Customer[CustomerAddress][0][city]".to_string(),
            "São Paulo".to_string()
        )));
        assert!(fields.contains(&(
            "Customer[CustomerAddress][1][zip_code]".to_string(),
            "13000-000".to_string()
        )));
        assert!(!fields.iter().any(|(key, _)| key == "Customer[cpf]"));
    }

    #[test]
    fn skips_nulls() {
        let fields = flatten_resource("Customer", &serde_json::json!({ "name": null, "id": 3 }));

        assert_eq!(fields, vec![("Customer[id]".to_string(), "3".to_string())]);
    }
}
