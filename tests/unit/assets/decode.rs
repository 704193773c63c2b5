use std::io::Cursor;

use super::*;

fn encode(img: image::RgbaImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

#[test]
fn decode_png_premultiplies() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100, 50, 200, 128]).unwrap();
    let s = decode_image(&encode(img, image::ImageFormat::Png)).unwrap();
    assert_eq!((s.width(), s.height()), (1, 1));
    assert_eq!(
        s.pixel(0, 0),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
}

#[test]
fn decode_jpeg_is_opaque() {
    let rgb = image::RgbImage::from_pixel(6, 9, image::Rgb([30, 60, 90]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Jpeg)
        .unwrap();
    let s = decode_image(&buf).unwrap();
    assert_eq!((s.width(), s.height()), (6, 9));
    assert!(s.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn decode_garbage_fails() {
    assert!(decode_image(b"<html>not found</html>").is_err());
}

#[test]
fn load_image_file_reports_missing_path() {
    let err = load_image_file(Path::new("/definitely/missing/steam_icon.png")).unwrap_err();
    assert!(err.to_string().contains("steam_icon.png"));
}
