use serde_json::Number;
use crate::ir::Primitive;

/// Float iff the value has a non-zero fractional part.
///
/// The check runs on the parsed `f64`, so a literal written with a zero
/// fraction (`1.00`, `0.0`) comes out as Integer. Known limitation; renderers
/// that care must widen the type themselves.
pub fn classify_number(n: &Number) -> Primitive {
    match n.as_f64() {
        Some(f) if f.fract() != 0.0 => Primitive::Float,
        _ => Primitive::Integer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify(v: serde_json::Value) -> Primitive {
        classify_number(v.as_number().unwrap())
    }

    #[test]
    fn fractional_part_decides() {
        assert_eq!(classify(json!(2.5)), Primitive::Float);
        assert_eq!(classify(json!(-0.25)), Primitive::Float);
        assert_eq!(classify(json!(42)), Primitive::Integer);
        assert_eq!(classify(json!(-7)), Primitive::Integer);
        assert_eq!(classify(json!(u64::MAX)), Primitive::Integer);
    }

    #[test]
    fn zero_fraction_reads_as_integer() {
        let n: serde_json::Value = serde_json::from_str("1.00").unwrap();
        assert_eq!(classify(n), Primitive::Integer);
        let z: serde_json::Value = serde_json::from_str("0.00").unwrap();
        assert_eq!(classify(z), Primitive::Integer);
    }
}
