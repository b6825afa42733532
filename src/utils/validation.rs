//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para la coerción permisiva de
//! entradas: enteros con prefijo numérico, "truthiness" de valores JSON y
//! comprobación de tipos en la frontera de persistencia.

use serde_json::Value;

use crate::utils::errors::{internal_error, AppResult};

/// Interpretar el prefijo entero de un string.
///
/// Acepta espacios iniciales y un signo opcional seguidos de dígitos; el
/// resto del texto se ignora (`"12abc"` → `Some(12)`). Un prefijo `0x`/`0X`
/// lee dígitos hexadecimales (`"0x1F"` → `Some(31)`). Sin dígitos, o con un
/// valor fuera de rango, devuelve `None`.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_len = rest
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Interpretar un identificador de path como id numérico de tabla.
pub fn parse_record_id(value: &str) -> Option<i32> {
    parse_int_prefix(value).and_then(|v| i32::try_from(v).ok())
}

/// Parámetro de paginación: valores ausentes, no numéricos o no positivos
/// caen al valor por defecto.
pub fn parse_positive_or(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(parse_int_prefix)
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// Un valor cuenta como presente salvo `null`, `false`, `""` y `0`.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Valor de texto obligatorio; `null` o ausente es un argumento faltante
pub fn expect_string(field: &str, value: Option<Value>) -> AppResult<String> {
    match value {
        Some(Value::String(s)) => Ok(s),
        None | Some(Value::Null) => Err(internal_error(format!(
            "Argument `{}` is missing.",
            field
        ))),
        Some(_) => Err(internal_error(format!(
            "Invalid value for argument `{}`. Expected String.",
            field
        ))),
    }
}

pub fn expect_number(field: &str, value: Option<Value>) -> AppResult<f64> {
    value.as_ref().and_then(Value::as_f64).ok_or_else(|| {
        internal_error(format!(
            "Invalid value for argument `{}`. Expected Float.",
            field
        ))
    })
}

/// Booleano opcional: `null` o ausente toma `default`
pub fn expect_bool_or(field: &str, value: Option<Value>, default: bool) -> AppResult<bool> {
    match value {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(b)) => Ok(b),
        Some(_) => Err(internal_error(format!(
            "Invalid value for argument `{}`. Expected Boolean.",
            field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  7"), Some(7));
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("+5"), Some(5));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("1.9"), Some(1));
    }

    #[test]
    fn test_parse_int_prefix_hex() {
        assert_eq!(parse_int_prefix("0x2"), Some(2));
        assert_eq!(parse_int_prefix("0X1f"), Some(31));
        assert_eq!(parse_int_prefix(" -0x10zz"), Some(-16));
        assert_eq!(parse_int_prefix("0x"), None);
        assert_eq!(parse_int_prefix("0xg"), None);
        assert_eq!(parse_int_prefix("0"), Some(0));
        assert_eq!(parse_positive_or(Some("0x2"), 1), 2);
    }

    #[test]
    fn test_expect_helpers() {
        use crate::utils::errors::AppError;

        assert_eq!(expect_string("name", Some(json!("Ana"))).unwrap(), "Ana");
        assert!(matches!(
            expect_string("name", Some(json!(5))),
            Err(AppError::Internal(msg)) if msg.contains("Expected String")
        ));
        assert!(matches!(
            expect_string("name", None),
            Err(AppError::Internal(msg)) if msg.contains("missing")
        ));
        assert_eq!(expect_number("distance", Some(json!(3))).unwrap(), 3.0);
        assert!(expect_number("distance", Some(json!("far"))).is_err());
        assert!(expect_bool_or("availability", None, true).unwrap());
        assert!(expect_bool_or("availability", Some(json!(null)), true).unwrap());
        assert!(!expect_bool_or("availability", Some(json!(false)), true).unwrap());
        assert!(expect_bool_or("availability", Some(json!("yes")), true).is_err());
    }

    #[test]
    fn test_parse_record_id_out_of_range() {
        assert_eq!(parse_record_id("99999"), Some(99999));
        assert_eq!(parse_record_id("99999999999"), None);
        assert_eq!(parse_record_id("not-a-number"), None);
    }

    #[test]
    fn test_parse_positive_or_defaults() {
        assert_eq!(parse_positive_or(None, 10), 10);
        assert_eq!(parse_positive_or(Some("x"), 10), 10);
        assert_eq!(parse_positive_or(Some("0"), 1), 1);
        assert_eq!(parse_positive_or(Some("-4"), 1), 1);
        assert_eq!(parse_positive_or(Some("3"), 1), 3);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(0.0))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(is_truthy(Some(&json!("Paris"))));
        assert!(is_truthy(Some(&json!(12.5))));
        assert!(is_truthy(Some(&json!("0"))));
        assert!(is_truthy(Some(&json!([]))));
    }
}
