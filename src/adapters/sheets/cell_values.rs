use serde_json::Value;

use crate::domain::sheets::Grid;

pub trait IntoGrid {
    fn into_grid(self) -> Grid;
}

impl IntoGrid for Vec<Vec<Value>> {
    fn into_grid(self) -> Grid {
        self.into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect()
    }
}

fn cell_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_grid_keeps_ragged_rows() {
        let values = vec![
            vec![json!("id"), json!("firstName")],
            vec![json!(3), json!("Sanne \"San\""), json!(null)],
            vec![],
        ];

        assert_eq!(
            values.into_grid(),
            vec![
                vec!["id".to_owned(), "firstName".to_owned()],
                vec!["3".to_owned(), "Sanne \"San\"".to_owned(), String::new()],
                vec![],
            ]
        );
    }

    #[test]
    fn test_into_grid_renders_scalars() {
        let values = vec![vec![json!(true), json!(2.5)]];
        assert_eq!(values.into_grid(), vec![vec!["true", "2.5"]]);
    }
}
