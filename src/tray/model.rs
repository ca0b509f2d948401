//! Wire shapes of the Tray `customers` endpoints.
//!
//! Tray is loose with types: ids and numbers arrive as JSON strings or numbers,
//! `CustomerAddress` is an object for a single address and an array otherwise, and
//! most fields may be missing. The structs here accept all of that and expose
//! plain `Option<String>` fields.

use serde::{Deserialize, Serialize};

/// Query for one page of `GET /customers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCustomersParam {
    pub page: u32,
    pub limit: u32,
    /// Exact email filter.
    pub email: Option<String>,
}

impl ListCustomersParam {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            email: None,
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            page: 1,
            limit: 1,
            email: Some(email.into()),
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(email) = &self.email {
            query.push(("email".to_string(), email.clone()));
        }
        query
    }
}

/// `GET /customers` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerPage {
    #[serde(default)]
    pub paging: Option<Paging>,
    #[serde(rename = "Customers", default)]
    pub customers: Vec<CustomerEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paging {
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerEntry {
    #[serde(rename = "Customer")]
    pub customer: CustomerSummary,
}

/// Listing entry. Only the id is needed to fetch the full record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerSummary {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
}

/// `GET /customers/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDetail {
    #[serde(rename = "Customer")]
    pub customer: TrayCustomer,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrayCustomer {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub cpf: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub cnpj: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub last_visit: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub newsletter: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub registration_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub modified: Option<String>,
    #[serde(
        rename = "CustomerAddress",
        default,
        deserialize_with = "lenient::one_or_many"
    )]
    pub addresses: Vec<TrayAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrayAddress {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub customer_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub complement: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub neighborhood: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub zip_code: Option<String>,
}

impl TrayAddress {
    /// True when Tray only sent the address id, without any address data.
    pub fn is_bare_reference(&self) -> bool {
        self.id.is_some()
            && [
                &self.customer_id,
                &self.address,
                &self.number,
                &self.complement,
                &self.neighborhood,
                &self.city,
                &self.state,
                &self.zip_code,
            ]
            .iter()
            .all(|field| field.is_none())
    }
}

/// Body of `POST /customers` and `PUT /customers/{id}`.
///
/// Serialized to JSON first and then flattened into `Customer[...]` form keys.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<bool>,
    #[serde(rename = "CustomerAddress", skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<AddressRecord>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Acknowledgement returned by create, update and delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MutationResponse {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub code: Option<u64>,
}

pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accepts a string, number or boolean as a string. `null` and empty strings
    /// become `None`.
    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }

    /// Accepts a number or a numeric string.
    pub fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    /// Accepts a single object, an array of objects or `null`.
    pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
            Some(OneOrMany::Many(items)) => items,
            Some(OneOrMany::One(item)) => vec![item],
            None => Vec::new(),
        })
    }
}
