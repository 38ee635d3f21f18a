//! Payload access: reading named hint lists off host-defined item payloads.

/// Read access to an item's named ordering-hint lists.
///
/// The collection orderer only ever needs this one capability from a payload:
/// given a field name, return the identifier list stored under it, or empty
/// when the field is missing. No reflection; hosts implement this for their
/// payload type (or use the built-in [`serde_json::Value`] impl).
pub trait HintSource<K> {
    fn hint_list(&self, field: &str) -> Vec<K>;
}

/// JSON-shaped payloads, the common registry format.
///
/// The field must hold an array; string elements are taken as-is, numbers by
/// their decimal rendering, anything else is skipped. A missing field or a
/// non-array value yields an empty list.
impl HintSource<String> for serde_json::Value {
    fn hint_list(&self, field: &str) -> Vec<String> {
        let Some(list) = self.get(field).and_then(serde_json::Value::as_array) else {
            return Vec::new();
        };
        list.iter()
            .filter_map(|element| match element {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect()
    }
}
