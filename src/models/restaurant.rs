use serde::{Deserialize, Serialize};

/// One entry of the listing endpoint. Owned by the server; the client only
/// holds a list of these for the duration of one render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// The server sends `""` as often as `null` for unset fields.
/// Only the empty string counts as unset; whitespace is a value.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Restaurant {
    pub fn cuisine(&self) -> Option<&str> {
        present(&self.cuisine)
    }

    pub fn address(&self) -> Option<&str> {
        present(&self.address)
    }

    pub fn photo(&self) -> Option<&str> {
        present(&self.photo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_may_be_missing_null_or_blank() {
        let list: Vec<Restaurant> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Akari"},
                {"id": 2, "name": "Bella", "cuisine": null, "address": "", "photo": "  "},
                {"id": 3, "name": "Chez", "cuisine": "French", "address": "1 Rue", "photo": "/m/c.jpg"}
            ]"#,
        )
        .unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list[0].cuisine(), None);
        assert_eq!(list[1].cuisine(), None);
        assert_eq!(list[1].address(), None);
        assert_eq!(list[1].photo(), Some("  "));
        assert_eq!(list[2].cuisine(), Some("French"));
        assert_eq!(list[2].address(), Some("1 Rue"));
        assert_eq!(list[2].photo(), Some("/m/c.jpg"));
    }

    #[test]
    fn only_empty_string_counts_as_missing() {
        let r: Restaurant = serde_json::from_str(
            r#"{"id": 4, "name": "Gap", "cuisine": " ", "address": "", "photo": null}"#,
        )
        .unwrap();
        assert_eq!(r.cuisine(), Some(" "));
        assert_eq!(r.address(), None);
        assert_eq!(r.photo(), None);
    }

    #[test]
    fn extra_server_fields_are_ignored() {
        let r: Restaurant = serde_json::from_str(
            r#"{"id": 9, "name": "Dosa Hut", "avg_rating": 4.5, "owner": 3}"#,
        )
        .unwrap();
        assert_eq!(r.id, 9);
        assert_eq!(r.name, "Dosa Hut");
    }
}
