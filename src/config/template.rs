//! Placeholder substitution over YAML document trees

use serde_yaml::Value;

/// Replace every literal occurrence of `placeholder` inside string
/// scalars of `data` with `replacement`.
///
/// Mappings are recursed value-by-value (keys and insertion order are
/// preserved); strings get non-overlapping left-to-right substring
/// replacement; every other node, sequences included, passes through
/// unchanged. Placeholders inside sequence elements are therefore not
/// substituted.
pub fn replace_placeholder_in_config(data: Value, placeholder: &str, replacement: &str) -> Value {
    match data {
        Value::Mapping(mut map) => {
            for (_, value) in map.iter_mut() {
                let node = std::mem::replace(value, Value::Null);
                *value = replace_placeholder_in_config(node, placeholder, replacement);
            }
            Value::Mapping(map)
        }
        Value::String(s) => Value::String(s.replace(placeholder, replacement)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).expect("valid yaml")
    }

    #[test]
    fn replaces_in_nested_mappings() {
        let input = doc("app:\n  image: registry/app:{version}\n  tag: '{version}'\n");
        let out = replace_placeholder_in_config(input, "{version}", "1.0.0");
        assert_eq!(out, doc("app:\n  image: registry/app:1.0.0\n  tag: '1.0.0'\n"));
    }

    #[test]
    fn preserves_shape_and_non_string_scalars() {
        let input = doc("count: 3\nenabled: true\nmissing: null\nname: v{version}\n");
        let out = replace_placeholder_in_config(input, "{version}", "2.0");
        assert_eq!(out, doc("count: 3\nenabled: true\nmissing: null\nname: v2.0\n"));
    }

    #[test]
    fn preserves_key_order() {
        let input = doc("b: '{v}'\na: '{v}'\nc: '{v}'\n");
        let out = replace_placeholder_in_config(input, "{v}", "x");
        let keys: Vec<&str> = out
            .as_mapping()
            .expect("mapping")
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn replaces_multiple_occurrences_left_to_right() {
        let input = Value::String("{v}-{v}-{v}".to_string());
        let out = replace_placeholder_in_config(input, "{v}", "1");
        assert_eq!(out, Value::String("1-1-1".to_string()));
    }

    #[test]
    fn does_not_recurse_into_sequences() {
        let input = doc("images:\n  - app:{version}\n  - db:{version}\n");
        let out = replace_placeholder_in_config(input.clone(), "{version}", "1.0.0");
        // Sequence elements are out of scope for substitution.
        assert_eq!(out, input);
    }

    #[test]
    fn keys_are_not_substituted() {
        let input = doc("'{version}': '{version}'\n");
        let out = replace_placeholder_in_config(input, "{version}", "1.0.0");
        assert_eq!(out, doc("'{version}': 1.0.0\n"));
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let input = doc("version: '{version}'\n");
        let once = replace_placeholder_in_config(input, "{version}", "1.0.0");
        let twice = replace_placeholder_in_config(once.clone(), "{version}", "9.9.9");
        assert_eq!(once, twice);
    }
}
