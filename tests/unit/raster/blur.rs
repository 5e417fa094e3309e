use super::*;

fn box_variance(radii: [u32; 3]) -> f64 {
    radii
        .iter()
        .map(|&r| {
            let w = f64::from(2 * r + 1);
            (w * w - 1.0) / 12.0
        })
        .sum()
}

#[test]
fn box_radii_match_known_sigmas() {
    assert_eq!(box_radii_for_sigma(3.0), [2, 2, 3]);
    assert_eq!(box_radii_for_sigma(25.0), [24, 24, 25]);
    assert_eq!(box_radii_for_sigma(1.0), [0, 0, 1]);
}

#[test]
fn box_radii_approximate_gaussian_variance() {
    for sigma in [7.5f32, 25.0, 40.0] {
        let var = box_variance(box_radii_for_sigma(sigma));
        let target = f64::from(sigma * sigma);
        assert!((var - target).abs() / target < 0.05, "sigma {sigma}: {var}");
    }
}

#[test]
fn box_radii_degenerate_sigma_is_identity() {
    assert_eq!(box_radii_for_sigma(0.0), [0, 0, 0]);
    assert_eq!(box_radii_for_sigma(-2.0), [0, 0, 0]);
    assert_eq!(box_radii_for_sigma(f32::NAN), [0, 0, 0]);
    assert_eq!(box_radii_for_sigma(0.1), [0, 0, 0]);
}

#[test]
fn blur_sigma_0_is_identity() {
    let mut buf = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    box_blur_rgba8_premul(&mut buf, 1, 2, 0.0).unwrap();
    assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (6u32, 4u32);
    let src = [0u8, 0, 0, 60].repeat((w * h) as usize);
    let mut buf = src.clone();
    box_blur_rgba8_premul(&mut buf, w, h, 25.0).unwrap();
    assert_eq!(buf, src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut buf = vec![0u8; (w * h * 4) as usize];
    let center = ((4 * w + 4) * 4) as usize;
    buf[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    box_blur_rgba8_premul(&mut buf, w, h, 1.0).unwrap();

    let nonzero = buf.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert_eq!(nonzero, 9);

    let sum_a: u32 = buf.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 8, "alpha sum {sum_a}");
}

#[test]
fn blur_is_mirror_symmetric() {
    let (w, h) = (15u32, 11u32);
    let mut buf = vec![0u8; (w * h * 4) as usize];
    for y in 3..8 {
        for x in 4..11 {
            let i = ((y * w + x) * 4) as usize;
            buf[i + 3] = 200;
        }
    }
    box_blur_rgba8_premul(&mut buf, w, h, 2.0).unwrap();

    let alpha = |x: u32, y: u32| buf[((y * w + x) * 4 + 3) as usize];
    for y in 0..h {
        for x in 0..w {
            assert_eq!(alpha(x, y), alpha(w - 1 - x, y), "at {x},{y}");
        }
    }
    assert!(alpha(2, 5) > 0);
    assert!(alpha(7, 5) > alpha(4, 5));
}

#[test]
fn blur_handles_lines_shorter_than_the_box() {
    let mut buf = vec![0u8, 0, 0, 255, 0, 0, 0, 0];
    box_blur_rgba8_premul(&mut buf, 2, 1, 25.0).unwrap();
    assert!(buf[3] > 0 && buf[7] > 0);
}

#[test]
fn blur_rejects_mismatched_length() {
    let mut buf = [0u8; 12];
    assert!(box_blur_rgba8_premul(&mut buf, 2, 2, 1.0).is_err());
}
