use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#00cc88")).unwrap();
    assert_eq!(c, Color::rgb(0x00, 0xcc, 0x88));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert_eq!(c.b, 255);
    assert_eq!(c.a, 128);
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 1.0, "g": 0.0, "b": 0.0})).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = serde_json::from_value(json!([0.0, 0.0, 1.0, 0.5])).unwrap();
    assert_eq!(c.b, 255);
    assert_eq!(c.a, 128);

    assert!(serde_json::from_value::<Color>(json!([0.0, 1.0])).is_err());
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#gg0000").is_err());
}

#[test]
fn serializes_back_to_hex() {
    let v = serde_json::to_value(Color::rgb(0xff, 0x00, 0x55)).unwrap();
    assert_eq!(v, json!("#ff0055"));
    let v = serde_json::to_value(Color::from_hex("#ff005580").unwrap()).unwrap();
    assert_eq!(v, json!("#ff005580"));
}
