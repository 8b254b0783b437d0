#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults() {
    let config = ControlsConfig::default();
    assert_eq!(config.corner_size, DEFAULT_CORNER_SIZE);
    assert_eq!(config.padding, 0.0);
    assert_eq!(config.corner_style, CornerStyle::Circle);
    assert_eq!(config.corner_color, 0x00EC_6C00);
    assert_eq!(config.corner_stroke_color, 0x00FF_FFFF);
    assert!(config.transparent_corners);
    assert!(config.has_borders);
    assert!(!config.centered_scaling);
    assert!(!config.scale_proportionally);
    assert_eq!(config.control_visible_list, HandlePosition::ALL.to_vec());
    assert!(config.validate().is_ok());
}

#[test]
fn empty_json_is_default() {
    assert_eq!(ControlsConfig::from_json("{}").unwrap(), ControlsConfig::default());
}

#[test]
fn json_uses_camel_case_names() {
    let config = ControlsConfig::from_json(
        r#"{
            "cornerSize": 20,
            "padding": 20,
            "cornerStyle": "square",
            "centeredScaling": true,
            "scaleProportionally": true,
            "hasBorders": false,
            "controlVisibleList": ["tl", "br"]
        }"#,
    )
    .unwrap();
    assert_eq!(config.corner_size, 20.0);
    assert_eq!(config.padding, 20.0);
    assert_eq!(config.corner_style, CornerStyle::Square);
    assert!(config.centered_scaling);
    assert!(config.scale_proportionally);
    assert!(!config.has_borders);
    assert!(config.is_visible(HandlePosition::Tl));
    assert!(config.is_visible(HandlePosition::Br));
    assert!(!config.is_visible(HandlePosition::Mr));
    assert_eq!(config.border_color, DEFAULT_ACCENT_COLOR);
}

#[test]
fn serializes_camel_case_names() {
    let value = serde_json::to_value(ControlsConfig::default()).unwrap();
    assert!(value.get("cornerSize").is_some());
    assert!(value.get("controlVisibleList").is_some());
    assert_eq!(value["cornerStyle"], "circle");
}

#[test]
fn negative_corner_size_rejected() {
    let err = ControlsConfig::from_json(r#"{ "cornerSize": -5 }"#).unwrap_err();
    assert!(matches!(err, ControlsError::InvalidConfig(_)));
    assert!(err.to_string().contains("corner size"));
}

#[test]
fn zero_corner_size_rejected() {
    let config = ControlsConfig { corner_size: 0.0, ..Default::default() };
    assert!(matches!(config.validate(), Err(ControlsError::InvalidConfig(_))));
}

#[test]
fn nan_corner_size_rejected() {
    let config = ControlsConfig { corner_size: f64::NAN, ..Default::default() };
    assert!(config.validate().is_err());
}

#[test]
fn negative_padding_rejected() {
    let err = ControlsConfig::from_json(r#"{ "padding": -1 }"#).unwrap_err();
    assert_eq!(err.error_code(), "E_INVALID_CONFIG");
    assert!(err.to_string().contains("padding"));
}

#[test]
fn infinite_padding_rejected() {
    let config = ControlsConfig { padding: f64::INFINITY, ..Default::default() };
    assert!(config.validate().is_err());
}

#[test]
fn zero_padding_accepted() {
    let config = ControlsConfig { padding: 0.0, ..Default::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn malformed_json_is_parse_error() {
    let err = ControlsConfig::from_json("{ cornerSize: 1").unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn unknown_handle_is_parse_error() {
    let err = ControlsConfig::from_json(r#"{ "controlVisibleList": ["tl", "rot"] }"#).unwrap_err();
    assert!(matches!(err, ControlsError::ConfigParse(_)));
}
