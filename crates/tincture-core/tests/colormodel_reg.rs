//! Color model regression test
//!
//! Exercises RGB <-> HSL/HSV round trips over the whole RGB cube
//! and HEX parsing/formatting.

use tincture_core::{
    Color, Error, Hsl, Rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
};
use tincture_test::RegParams;

fn channel_diff(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

/// Grid over the RGB cube, including both extremes of every channel.
fn rgb_grid(step: usize) -> impl Iterator<Item = Rgb> {
    let axis: Vec<u8> = (0..=255u8).step_by(step).chain(std::iter::once(255)).collect();
    let axis2 = axis.clone();
    let axis3 = axis.clone();
    axis.into_iter().flat_map(move |r| {
        let axis3 = axis3.clone();
        axis2
            .clone()
            .into_iter()
            .flat_map(move |g| axis3.clone().into_iter().map(move |b| Rgb::new(r, g, b)))
    })
}

/// Every triple in the RGB cube.
fn rgb_cube() -> impl Iterator<Item = Rgb> {
    (0..=255u8).flat_map(|r| {
        (0..=255u8).flat_map(move |g| (0..=255u8).map(move |b| Rgb::new(r, g, b)))
    })
}

#[test]
fn colormodel_reg_hsl_round_trip() {
    let mut rp = RegParams::new("colormodel_hsl");

    let mut worst = 0u8;
    for rgb in rgb_cube() {
        let back = hsl_to_rgb(rgb_to_hsl(rgb.r, rgb.g, rgb.b));
        worst = worst.max(channel_diff(rgb, back));
    }
    rp.compare_values(0.0, f64::from(worst), 1.0);

    assert!(rp.cleanup());
}

#[test]
fn colormodel_reg_hsv_round_trip() {
    let mut rp = RegParams::new("colormodel_hsv");

    let mut worst = 0u8;
    for rgb in rgb_cube() {
        let back = hsv_to_rgb(rgb_to_hsv(rgb.r, rgb.g, rgb.b));
        worst = worst.max(channel_diff(rgb, back));
    }
    rp.compare_values(0.0, f64::from(worst), 1.0);

    assert!(rp.cleanup());
}

#[test]
fn colormodel_reg_hex_round_trip() {
    let mut rp = RegParams::new("colormodel_hex");

    for rgb in rgb_grid(17) {
        let hex = rgb_to_hex(rgb.r, rgb.g, rgb.b);
        let color = Color::from_hex(&hex).unwrap();
        rp.compare_strings(&hex, &color.hex());
        let back = hsl_to_rgb(color.hsl());
        rp.compare_values(0.0, f64::from(channel_diff(rgb, back)), 1.0);
    }

    assert!(rp.cleanup());
}

#[test]
fn colormodel_reg_hue_sectors() {
    let mut rp = RegParams::new("colormodel_hue");

    let cases = [
        ("#FF0000", 0.0),
        ("#FFFF00", 60.0),
        ("#00FF00", 120.0),
        ("#00FFFF", 180.0),
        ("#0000FF", 240.0),
        ("#FF00FF", 300.0),
        ("#808080", 0.0),
    ];
    for (hex, hue) in cases {
        let c = Color::from_hex(hex).unwrap();
        rp.compare_values(hue, c.hsl().h, 1e-9);
        rp.compare_values(hue, c.hsv().h, 1e-9);
    }

    assert!(rp.cleanup());
}

#[test]
fn colormodel_reg_constructed_forms_agree() {
    let mut rp = RegParams::new("colormodel_agree");

    for h in (0..360).step_by(15) {
        for s in [0.0, 35.0, 100.0] {
            for l in [10.0, 50.0, 90.0] {
                let c = Color::from_hsl(f64::from(h), s, l).unwrap();
                let via_hsv = hsv_to_rgb(c.hsv());
                rp.compare_values(0.0, f64::from(channel_diff(c.rgb(), via_hsv)), 1.0);
            }
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn colormodel_reg_invalid_input() {
    assert!(matches!(
        Color::from_hex("#12345G"),
        Err(Error::InvalidFormat(_))
    ));
    assert!(matches!(
        Hsl::new(-0.5, 10.0, 10.0),
        Err(Error::InvalidRange { what: "hue", .. })
    ));
    assert!(matches!(
        Color::from_hsv(10.0, 10.0, 100.5),
        Err(Error::InvalidRange { what: "value", .. })
    ));
}
