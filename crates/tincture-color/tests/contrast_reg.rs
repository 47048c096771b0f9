//! Contrast regression test
//!
//! Ratio bounds and symmetry over a color grid, plus the grays that sit
//! on either side of the AA and AAA thresholds against white.

use tincture_color::contrast::{ContrastRating, contrast_ratio, evaluate, relative_luminance};
use tincture_core::Color;
use tincture_test::RegParams;

fn grid() -> Vec<Color> {
    let axis = [0u8, 51, 102, 153, 204, 255];
    let mut colors = Vec::new();
    for r in axis {
        for g in axis {
            for b in axis {
                colors.push(Color::from_rgb(r, g, b));
            }
        }
    }
    colors
}

#[test]
fn contrast_reg_bounds_and_symmetry() {
    let mut rp = RegParams::new("contrast_bounds");

    let colors = grid();
    let mut out_of_range = 0;
    let mut asymmetric = 0;
    for a in &colors {
        for b in colors.iter().step_by(7) {
            let ab = contrast_ratio(a, b);
            let ba = contrast_ratio(b, a);
            if !(1.0..=21.0 + 1e-9).contains(&ab) {
                out_of_range += 1;
            }
            if (ab - ba).abs() > 1e-12 {
                asymmetric += 1;
            }
        }
        rp.compare_values(1.0, contrast_ratio(a, a), 1e-12);
    }
    rp.compare_values(0.0, f64::from(out_of_range), 0.0);
    rp.compare_values(0.0, f64::from(asymmetric), 0.0);

    assert!(rp.cleanup());
}

#[test]
fn contrast_reg_luminance_monotonic_in_gray() {
    let mut rp = RegParams::new("contrast_gray_luminance");

    let lums: Vec<f64> = (0..=255u8)
        .map(|v| relative_luminance(&Color::from_rgb(v, v, v)))
        .collect();
    let increasing = lums.windows(2).all(|w| w[1] > w[0]);
    rp.compare_values(1.0, if increasing { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, lums[0], 0.0);
    rp.compare_values(1.0, lums[255], 1e-12);

    assert!(rp.cleanup());
}

#[test]
fn contrast_reg_threshold_grays() {
    let mut rp = RegParams::new("contrast_thresholds");

    let white = Color::WHITE;
    let cases = [
        ("#000000", ContrastRating::Aaa),
        ("#595959", ContrastRating::Aaa),
        ("#767676", ContrastRating::Aa),
        ("#777777", ContrastRating::Fail),
        ("#FFFFFF", ContrastRating::Fail),
    ];
    for (hex, rating) in cases {
        let result = evaluate(&Color::from_hex(hex).unwrap(), &white);
        rp.compare_strings(&rating.to_string(), &result.rating.to_string());
        rp.compare_strings(rating.description(), result.description);
    }

    let aa = evaluate(&Color::from_hex("#767676").unwrap(), &white);
    rp.compare_values(4.54, aa.ratio, 0.01);
    let fail = evaluate(&Color::from_hex("#777777").unwrap(), &white);
    rp.compare_values(4.48, fail.ratio, 0.01);

    assert!(rp.cleanup());
}
