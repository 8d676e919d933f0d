use serde::de::DeserializeOwned;

/// Parse an embedded seed array. A broken seed yields an empty list.
pub fn parse_seed<T: DeserializeOwned>(collection: &str, json: &str) -> Vec<T> {
    match serde_json::from_str::<Vec<T>>(json) {
        Ok(items) => items,
        Err(e) => {
            log::error!("{}: seed data is invalid: {}", collection, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
    }

    #[test]
    fn test_parse_seed() {
        let rows: Vec<Row> = parse_seed("rows", r#"[{"name":"a"},{"name":"b"}]"#);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "b");
    }

    #[test]
    fn test_broken_seed_is_empty() {
        let rows: Vec<Row> = parse_seed("rows", "[{");
        assert!(rows.is_empty());
    }
}
