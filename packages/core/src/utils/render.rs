//! Indented plain-text rendering of JSON values.
//!
//! ```text
//! config:
//! + name: keel
//! + ports:
//!   - 0: 80
//!   - 1: 443
//! ```
//!
//! Object entries are marked `+`, array items `-` and labelled with their index.
//! Every line ends with a newline; a missing value renders as `null`.

use std::fmt::Write;

use serde_json::Value;

/// Render `value` as an indented block, labelled with `name` when given.
#[must_use]
pub fn render_json_to_string_block(name: Option<&str>, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return "null".to_owned();
    };
    let mut block = String::new();
    render_item(&mut block, name, value, 0, ' ');
    block
}

fn render_item(block: &mut String, key: Option<&str>, value: &Value, indentation: usize, mark: char) {
    if indentation > 1 {
        block.push_str(&" ".repeat(indentation - 2));
        block.push(mark);
        block.push(' ');
    } else {
        block.push_str(&" ".repeat(indentation));
    }
    if let Some(key) = key {
        block.push_str(key);
        block.push_str(": ");
    }
    match value {
        Value::Object(entries) => {
            block.push('\n');
            for (key, entry) in entries {
                render_item(block, Some(key), entry, indentation + 2, '+');
            }
        }
        Value::Array(items) => {
            block.push('\n');
            for (index, item) in items.iter().enumerate() {
                render_item(block, Some(&index.to_string()), item, indentation + 2, '-');
            }
        }
        Value::String(text) => {
            block.push_str(text);
            block.push('\n');
        }
        scalar => {
            // writing into a String cannot fail
            let _ = writeln!(block, "{scalar}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_block() {
        let value = json!({"name": "keel", "ports": [80, 443], "tls": {"on": false}});
        let expected = "config: \n+ name: keel\n+ ports: \n  - 0: 80\n  - 1: 443\n+ tls: \n  + on: false\n";
        assert_eq!(render_json_to_string_block(Some("config"), Some(&value)), expected);
    }

    #[test]
    fn test_scalars_and_missing() {
        assert_eq!(render_json_to_string_block(None, None), "null");
        assert_eq!(render_json_to_string_block(None, Some(&Value::Null)), "null\n");
        assert_eq!(render_json_to_string_block(Some("n"), Some(&json!(1.5))), "n: 1.5\n");
    }
}
