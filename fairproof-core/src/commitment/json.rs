//! Number formatting compatible with the generator that published the
//! commitments. serde_json writes `2.0` for an integral double and refuses
//! non-finite values; the published hashes use `2` and `null`.

use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// Shortest round-trip decimal, plain notation for magnitudes in
/// `[1e-6, 1e21)`, exponent notation with an explicit sign otherwise.
pub fn js_number(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", value);
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

pub fn serialize_js_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let raw = RawValue::from_string(js_number(*value)).map_err(serde::ser::Error::custom)?;
    raw.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.9, "1.9")]
    #[case(2.0, "2")]
    #[case(-0.0, "0")]
    #[case(1.4249999999999998, "1.4249999999999998")]
    #[case(1.9999999999999998, "1.9999999999999998")]
    #[case(0.000001, "0.000001")]
    #[case(1.5e-7, "1.5e-7")]
    #[case(1e21, "1e+21")]
    #[case(123456789012345680000.0, "123456789012345680000")]
    #[case(-2.5, "-2.5")]
    #[case(f64::INFINITY, "null")]
    #[case(f64::NAN, "null")]
    fn test_js_number(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(js_number(value), expected);
    }

    #[test]
    fn test_serialize_inside_struct() {
        #[derive(Serialize)]
        struct Probe {
            #[serde(serialize_with = "serialize_js_number")]
            m: f64,
        }
        let json = serde_json::to_string(&Probe { m: 3.0 }).unwrap();
        assert_eq!(json, r#"{"m":3}"#);
        let json = serde_json::to_string(&Probe { m: f64::INFINITY }).unwrap();
        assert_eq!(json, r#"{"m":null}"#);
    }
}
