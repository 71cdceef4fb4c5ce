use matlens::scene::value::ParamValue;
use serde_json::json;

#[test]
fn test_classify_scalars() {
    assert_eq!(ParamValue::classify(&json!(3)), Some(ParamValue::Int(3)));
    assert_eq!(ParamValue::classify(&json!(0.5)), Some(ParamValue::Float(0.5)));
    assert_eq!(ParamValue::classify(&json!(true)), Some(ParamValue::Bool(true)));
    assert_eq!(
        ParamValue::classify(&json!("GGX")),
        Some(ParamValue::Text("GGX".to_string()))
    );
}

#[test]
fn test_classify_short_vectors() {
    assert_eq!(
        ParamValue::classify(&json!([0.8, 0.8, 0.8, 1.0])),
        Some(ParamValue::Vector(vec![0.8, 0.8, 0.8, 1.0]))
    );
    // Mixed ints and floats classify as a numeric vector
    assert_eq!(
        ParamValue::classify(&json!([1, 0, 0])),
        Some(ParamValue::Vector(vec![1.0, 0.0, 0.0]))
    );
}

#[test]
fn test_classify_rejects_undiffable_values() {
    // Longer than 4
    assert_eq!(ParamValue::classify(&json!([1.0, 2.0, 3.0, 4.0, 5.0])), None);
    // Non-numeric elements
    assert_eq!(ParamValue::classify(&json!(["a", "b"])), None);
    // Objects and nulls
    assert_eq!(ParamValue::classify(&json!({"name": "img.png"})), None);
    assert_eq!(ParamValue::classify(&json!(null)), None);
}

#[test]
fn test_matches_numeric_across_kinds() {
    // Int vs Float compares numerically
    assert!(ParamValue::Int(1).matches(&ParamValue::Float(1.0)));
    assert!(!ParamValue::Int(1).matches(&ParamValue::Float(1.5)));
}

#[test]
fn test_matches_vectors() {
    let baseline = ParamValue::Vector(vec![1.0, 0.0, 0.0, 1.0]);
    assert!(ParamValue::Vector(vec![1.0, 0.0, 0.0, 1.0]).matches(&baseline));
    assert!(!ParamValue::Vector(vec![1.0, 0.0, 0.0, 0.9]).matches(&baseline));
    // Shape mismatches are never equal
    assert!(!ParamValue::Vector(vec![1.0, 0.0, 0.0]).matches(&baseline));
    assert!(!ParamValue::Float(1.0).matches(&baseline));
    assert!(!ParamValue::Bool(true).matches(&ParamValue::Float(1.0)));
}

#[test]
fn test_display_formatting() {
    assert_eq!(ParamValue::Float(0.5).to_string(), "0.500");
    assert_eq!(ParamValue::Int(7).to_string(), "7");
    assert_eq!(ParamValue::Bool(false).to_string(), "false");
    assert_eq!(ParamValue::Text("FLAT".to_string()).to_string(), "FLAT");
    assert_eq!(
        ParamValue::Vector(vec![1.0, 0.0, 0.0, 0.9]).to_string(),
        "[1.000, 0.000, 0.000, 0.900]"
    );
}
