use super::MdConfigError;
use toml::{Table, Value};

// Option extraction over raw options blocks. The original documents accept
// integers wherever a physical scalar is expected, so numbers widen to f64.

pub(crate) fn required_f64(
    options: &Table,
    object: &'static str,
    option: &'static str,
) -> Result<f64, MdConfigError> {
    optional_f64(options, object, option)?.ok_or(MdConfigError::MissingOption { object, option })
}

pub(crate) fn optional_f64(
    options: &Table,
    object: &'static str,
    option: &'static str,
) -> Result<Option<f64>, MdConfigError> {
    match options.get(option) {
        None => Ok(None),
        Some(Value::Integer(i)) => Ok(Some(*i as f64)),
        Some(Value::Float(f)) => Ok(Some(*f)),
        Some(_) => Err(MdConfigError::InvalidOption {
            object,
            option,
            expected: "a number",
        }),
    }
}

pub(crate) fn optional_i64(
    options: &Table,
    object: &'static str,
    option: &'static str,
) -> Result<Option<i64>, MdConfigError> {
    match options.get(option) {
        None => Ok(None),
        Some(Value::Integer(i)) => Ok(Some(*i)),
        Some(_) => Err(MdConfigError::InvalidOption {
            object,
            option,
            expected: "an integer",
        }),
    }
}

pub(crate) fn i64_or(
    options: &Table,
    object: &'static str,
    option: &'static str,
    default: i64,
) -> Result<i64, MdConfigError> {
    Ok(optional_i64(options, object, option)?.unwrap_or(default))
}

pub(crate) fn bool_or(
    options: &Table,
    object: &'static str,
    option: &'static str,
    default: bool,
) -> Result<bool, MdConfigError> {
    match options.get(option) {
        None => Ok(default),
        Some(Value::Boolean(b)) => Ok(*b),
        Some(_) => Err(MdConfigError::InvalidOption {
            object,
            option,
            expected: "a boolean",
        }),
    }
}

pub(crate) fn required_str<'a>(
    options: &'a Table,
    object: &'static str,
    option: &'static str,
) -> Result<&'a str, MdConfigError> {
    match options.get(option) {
        None => Err(MdConfigError::MissingOption { object, option }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(MdConfigError::InvalidOption {
            object,
            option,
            expected: "a string",
        }),
    }
}

pub(crate) fn optional_int_list(
    options: &Table,
    object: &'static str,
    option: &'static str,
) -> Result<Option<Vec<i64>>, MdConfigError> {
    match options.get(option) {
        None => Ok(None),
        Some(Value::Array(items)) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Integer(i) => values.push(*i),
                    _ => {
                        return Err(MdConfigError::InvalidOption {
                            object,
                            option,
                            expected: "an array of integers",
                        });
                    }
                }
            }
            Ok(Some(values))
        }
        Some(_) => Err(MdConfigError::InvalidOption {
            object,
            option,
            expected: "an array of integers",
        }),
    }
}

pub(crate) fn required_int_list(
    options: &Table,
    object: &'static str,
    option: &'static str,
) -> Result<Vec<i64>, MdConfigError> {
    optional_int_list(options, object, option)?
        .ok_or(MdConfigError::MissingOption { object, option })
}

pub(crate) fn required_pair_list(
    options: &Table,
    object: &'static str,
    option: &'static str,
) -> Result<Vec<(i64, i64)>, MdConfigError> {
    let invalid = MdConfigError::InvalidOption {
        object,
        option,
        expected: "an array of integer pairs",
    };
    match options.get(option) {
        None => Err(MdConfigError::MissingOption { object, option }),
        Some(Value::Array(items)) => {
            let mut pairs = Vec::with_capacity(items.len());
            for item in items {
                let pair = item.as_array().ok_or_else(|| invalid.clone())?;
                match pair.as_slice() {
                    [Value::Integer(a), Value::Integer(b)] => pairs.push((*a, *b)),
                    _ => return Err(invalid),
                }
            }
            Ok(pairs)
        }
        Some(_) => Err(invalid),
    }
}

pub(crate) fn required_f64_triple(
    options: &Table,
    object: &'static str,
    option: &'static str,
) -> Result<[f64; 3], MdConfigError> {
    let invalid = MdConfigError::InvalidOption {
        object,
        option,
        expected: "an array of three numbers",
    };
    match options.get(option) {
        None => Err(MdConfigError::MissingOption { object, option }),
        Some(Value::Array(items)) => {
            if items.len() != 3 {
                return Err(invalid);
            }
            let mut triple = [0.0; 3];
            for (slot, item) in triple.iter_mut().zip(items) {
                *slot = match item {
                    Value::Integer(i) => *i as f64,
                    Value::Float(f) => *f,
                    _ => return Err(invalid),
                };
            }
            Ok(triple)
        }
        Some(_) => Err(invalid),
    }
}

#[cfg(test)]
mod options_tests {
    use super::*;

    fn table(text: &str) -> Table {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn numbers_widen_from_integers() {
        let options = table("step_size = 2");
        assert_eq!(required_f64(&options, "obj", "step_size"), Ok(2.0));
    }

    #[test]
    fn missing_required_option_names_the_object() {
        let options = Table::new();
        assert_eq!(
            required_f64(&options, "LangevinIntegrator", "temperature"),
            Err(MdConfigError::MissingOption {
                object: "LangevinIntegrator",
                option: "temperature",
            })
        );
    }

    #[test]
    fn wrong_type_is_an_invalid_option() {
        let options = table("temperature = \"hot\"");
        assert!(matches!(
            required_f64(&options, "obj", "temperature"),
            Err(MdConfigError::InvalidOption { .. })
        ));
    }

    #[test]
    fn pair_list_parses_nested_arrays() {
        let options = table("pairs = [[0, 1], [4, 5]]");
        assert_eq!(
            required_pair_list(&options, "obj", "pairs"),
            Ok(vec![(0, 1), (4, 5)])
        );
    }

    #[test]
    fn triple_rejects_wrong_lengths() {
        let options = table("pressure = [1.0, 1.0]");
        assert!(matches!(
            required_f64_triple(&options, "obj", "pressure"),
            Err(MdConfigError::InvalidOption { .. })
        ));
    }
}
