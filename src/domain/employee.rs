//! Employee - Staff Record Data

use serde::{Deserialize, Serialize};

/// An employee record as held by the remote collection.
///
/// `id` is assigned by the data store on insert, so a draft built from the
/// create form carries `None` and the field is omitted from the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique ID, server-assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Full name
    #[serde(default)]
    pub name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Mobile number
    #[serde(default)]
    pub mobile: String,
    /// Cumulative sales figure
    #[serde(default)]
    pub total_sales: f64,
    /// Salary
    #[serde(default)]
    pub salary: f64,
    /// Active / inactive flag
    #[serde(default)]
    pub status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let employee = Employee {
            id: Some(7),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            mobile: "555-0100".to_string(),
            total_sales: 1200.5,
            salary: 900.0,
            status: true,
        };

        let json = serde_json::to_value(&employee).expect("serialize");
        assert_eq!(json["totalSales"], 1200.5);
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn test_draft_without_id_omits_field() {
        let draft = Employee {
            name: "New Hire".to_string(),
            ..Employee::default()
        };

        let json = serde_json::to_value(&draft).expect("serialize");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let employee: Employee =
            serde_json::from_str(r#"{"id": 3, "name": "Bo"}"#).expect("deserialize");
        assert_eq!(employee.id, Some(3));
        assert_eq!(employee.name, "Bo");
        assert!(!employee.status);
    }
}
