//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#fdf1ff").unwrap();
    assert_eq!(c, Color::from_rgba(253, 241, 255, 255));
}

#[test]
fn parse_hex_8_digit() {
    let c = parse_color("#00d4ff80").unwrap();
    assert_eq!(c, Color::from_rgba(0, 212, 255, 128));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#f00").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
}

#[test]
fn parse_rgb_without_alpha() {
    let c = parse_color("rgb(10, 20, 30)").unwrap();
    assert_eq!(c, Color::from_rgba(10, 20, 30, 255));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(0,212,255,0.12)").unwrap();
    // 0.12 * 255 = 30.6 -> 31
    assert_eq!(c.a, 31);
}

#[test]
fn parse_rgba_integer_alpha() {
    let c = parse_color("rgba(0,0,0,200)").unwrap();
    assert_eq!(c.a, 200);
}

#[test]
fn parse_rejects_out_of_range_channels() {
    assert!(parse_color("rgb(300,0,0)").is_err());
    assert!(parse_color("rgba(0,0,0,1.5)").is_err());
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse_color("white").is_err());
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("").is_err());
}

#[test]
fn parse_color_or_falls_back() {
    let fallback = Color::from_rgba(1, 2, 3, 255);
    assert_eq!(parse_color_or("nope", fallback), fallback);
    assert_eq!(
        parse_color_or("#ffffff", fallback),
        Color::from_rgba(255, 255, 255, 255)
    );
}

#[test]
fn validate_color_formats() {
    assert!(validate_color("#fff"));
    assert!(validate_color("#fdf1ff"));
    assert!(validate_color("rgba(1,2,3,0.5)"));
    assert!(!validate_color("rgb(256,0,0)"));
    assert!(!validate_color("fdf1ff"));
    assert!(!validate_color(""));
}
