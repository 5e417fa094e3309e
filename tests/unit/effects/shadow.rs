use super::*;

fn size(w: u32, h: u32) -> Size {
    Size::new(w, h).unwrap()
}

#[test]
fn inner_shadow_matches_source_size() {
    let layer = inner_shadow(size(100, 50), 15, 3, 30).unwrap();
    assert_eq!((layer.width(), layer.height()), (100, 50));
}

#[test]
fn inner_shadow_is_black_and_translucent() {
    let layer = inner_shadow(size(80, 60), 15, 3, 30).unwrap();
    for px in layer.as_raw().chunks_exact(4) {
        assert!(px[3] <= 30, "alpha {} above intensity", px[3]);
        if px[3] > 0 {
            assert_eq!(&px[..3], &[0, 0, 0]);
        }
    }
}

#[test]
fn inner_shadow_center_is_clear() {
    let (w, h) = (100u32, 50u32);
    let band = 3u32;
    let layer = inner_shadow(size(w, h), 15, band, 30).unwrap();
    let margin = 4 * band;
    for y in margin..h - margin {
        for x in margin..w - margin {
            let a = layer.get(x, y)[3];
            assert!(a <= 1, "alpha {a} at {x},{y}");
        }
    }
}

#[test]
fn inner_shadow_band_is_dark_along_edges() {
    let layer = inner_shadow(size(100, 50), 15, 3, 30).unwrap();
    assert!(layer.get(50, 1)[3] > 5);
    assert!(layer.get(1, 25)[3] > 5);
    assert!(layer.get(98, 25)[3] > 5);
    assert!(layer.get(50, 48)[3] > 5);
}

#[test]
fn inner_shadow_without_interior_stays_dark() {
    let layer = inner_shadow(size(5, 5), 15, 3, 30).unwrap();
    assert_eq!(layer.size(), size(5, 5));
    assert!(layer.get(2, 2)[3] > 10);
}

#[test]
fn inner_shadow_at_twice_the_band_skips_the_cutout() {
    for (w, h) in [(6u32, 40u32), (40, 6), (1, 1)] {
        let layer = inner_shadow(size(w, h), 15, 3, 30).unwrap();
        assert_eq!((layer.width(), layer.height()), (w, h));
        assert!(layer.get(w / 2, h / 2)[3] > 0, "{w}x{h}");
    }
}

#[test]
fn outer_shadow_is_grown_by_expansion() {
    let layer = outer_shadow(size(100, 50), 15, 60, 25, 60).unwrap();
    assert_eq!((layer.width(), layer.height()), (220, 170));
}

#[test]
fn outer_shadow_fades_out_toward_its_border() {
    let layer = outer_shadow(size(100, 50), 15, 60, 25, 60).unwrap();
    let center = layer.get(110, 85)[3];
    let corner = layer.get(0, 0)[3];
    assert!(center > 20, "center alpha {center}");
    assert!(center <= 60);
    assert!(corner <= 1, "corner alpha {corner}");
    assert!(layer.get(30, 85)[3] < center);
}

#[test]
fn outer_shadow_without_blur_is_a_hard_silhouette() {
    let layer = outer_shadow(size(20, 20), 5, 4, 0, 60).unwrap();
    assert_eq!(layer.size(), size(28, 28));
    assert_eq!(layer.get(14, 14), [0, 0, 0, 60]);
    assert_eq!(layer.get(1, 14), [0, 0, 0, 0]);
    assert_eq!(layer.get(4, 4), [0, 0, 0, 0]);
}
