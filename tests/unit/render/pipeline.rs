use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> image::DynamicImage {
    image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(w, h, image::Rgba(px)))
}

fn unit_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_pipeline").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn composite_adds_padding_on_every_side() {
    for (w, h) in [(100u32, 50u32), (1, 1), (3, 200), (31, 31)] {
        let out = composite(&solid(w, h, [10, 200, 30, 255])).unwrap();
        assert_eq!((out.width(), out.height()), (w + 120, h + 120), "{w}x{h}");
    }
}

#[test]
fn composite_keeps_image_center_untouched() {
    let out = composite(&solid(100, 50, [255, 0, 0, 255])).unwrap();
    assert_eq!(out.get(110, 85), [255, 0, 0, 255]);
}

#[test]
fn composite_rounds_image_corners() {
    let out = composite(&solid(100, 50, [255, 0, 0, 255])).unwrap();
    let corner = out.get(60, 60);
    assert!(corner[3] < 40, "corner {corner:?}");
    assert_ne!(&corner[..3], &[255, 0, 0]);
}

#[test]
fn composite_leaves_padding_corner_transparent() {
    let out = composite(&solid(100, 50, [255, 255, 255, 255])).unwrap();
    assert_eq!(out.get(0, 0), [0, 0, 0, 0]);
}

#[test]
fn composite_draws_shadow_below_the_image() {
    let out = composite(&solid(100, 50, [255, 255, 255, 255])).unwrap();
    let below = out.get(110, 112);
    assert!(below[3] > 0, "shadow missing: {below:?}");
    assert_eq!(&below[..3], &[0, 0, 0]);
    // Offset down-right: more shadow below the image than above it.
    assert!(below[3] > out.get(110, 8)[3]);
}

#[test]
fn composite_darkens_image_edges() {
    let out = composite(&solid(100, 50, [200, 200, 200, 255])).unwrap();
    let edge = out.get(110, 61);
    assert_eq!(edge[3], 255);
    assert!(edge[0] < 200, "edge {edge:?}");
}

#[test]
fn composite_accepts_grayscale_sources() {
    let gray = image::DynamicImage::ImageLuma8(image::GrayImage::from_pixel(
        40,
        40,
        image::Luma([128]),
    ));
    let out = composite(&gray).unwrap();
    assert_eq!(out.get(80, 80), [128, 128, 128, 255]);
}

#[test]
fn composite_rejects_empty_sources() {
    let empty = image::DynamicImage::ImageRgba8(image::RgbaImage::new(0, 0));
    assert!(matches!(
        composite(&empty),
        Err(ShotframeError::Validation(_))
    ));
}

#[test]
fn composite_with_small_padding_still_fits() {
    let style = FrameStyle {
        padding: 10,
        ..FrameStyle::default()
    };
    let out = composite_with(&solid(20, 10, [1, 2, 3, 255]), &style).unwrap();
    assert_eq!((out.width(), out.height()), (40, 30));
}

#[test]
fn frame_canvas_matches_composite_of_the_same_pixels() {
    let img = solid(30, 20, [90, 20, 200, 255]);
    let canvas = Canvas::from_dynamic(&img).unwrap();
    let framed = frame_canvas(canvas, &FrameStyle::default()).unwrap();
    assert_eq!(framed, composite(&img).unwrap());
}

#[test]
fn output_path_normalizes_extension() {
    let out = output_path_for(Path::new("in/shot.JPEG"), Path::new("out")).unwrap();
    assert_eq!(out, Path::new("out").join("shot.png"));
    let out = output_path_for(Path::new("in/a.b.tiff"), Path::new("out")).unwrap();
    assert_eq!(out, Path::new("out").join("a.b.png"));
    assert!(output_path_for(Path::new(".."), Path::new("out")).is_err());
}

#[test]
fn process_file_writes_framed_png() {
    let dir = unit_dir("process_file");
    let input = dir.join("shot.jpg");
    image::RgbImage::from_pixel(100, 50, image::Rgb([40, 90, 160]))
        .save_with_format(&input, image::ImageFormat::Jpeg)
        .unwrap();

    let out = process_file(&input, &dir, &FrameStyle::default()).unwrap();
    assert_eq!(out, dir.join("shot.png"));

    let written = image::open(&out).unwrap();
    assert_eq!((written.width(), written.height()), (220, 170));
    assert_eq!(written.color(), image::ColorType::Rgba8);
}

#[test]
fn process_file_sniffs_format_from_contents() {
    let dir = unit_dir("process_misnamed");
    let input = dir.join("actually_png.jpg");
    image::RgbaImage::from_pixel(40, 30, image::Rgba([5, 6, 7, 255]))
        .save_with_format(&input, image::ImageFormat::Png)
        .unwrap();

    let out = process_file(&input, &dir, &FrameStyle::default()).unwrap();
    let written = image::open(&out).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (160, 150));
    assert_eq!(written.get_pixel(80, 75).0, [5, 6, 7, 255]);
}

#[test]
fn process_file_reports_corrupt_input() {
    let dir = unit_dir("process_corrupt");
    let input = dir.join("bad.png");
    std::fs::write(&input, b"\x89PNG\r\n\x1a\nnope").unwrap();

    let err = process_file(&input, &dir, &FrameStyle::default()).unwrap_err();
    assert!(err.display_chain().contains("bad.png"));
}
