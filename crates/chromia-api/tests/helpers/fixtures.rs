//! Test fixtures: PNG images with known pixel content.

use axum_test::multipart::{MultipartForm, Part};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encoding");
    bytes
}

/// Single-color PNG.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    encode_png(&RgbImage::from_pixel(width, height, Rgb(rgb)))
}

/// 150x150 PNG whose left half is `left` and right half is `right`.
pub fn split_png(left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let image = RgbImage::from_fn(150, 150, |x, _| if x < 75 { Rgb(left) } else { Rgb(right) });
    encode_png(&image)
}

/// 150x150 PNG made of vertical stripes, one color per 10-pixel column band.
pub fn striped_png(colors: &[[u8; 3]]) -> Vec<u8> {
    let image = RgbImage::from_fn(150, 150, |x, _| {
        let band = (x / 10) as usize % colors.len();
        Rgb(colors[band])
    });
    encode_png(&image)
}

/// Multipart form carrying `data` as the `image` file field.
pub fn image_form(data: Vec<u8>, file_name: &str, mime_type: &str) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::from(data))
        .file_name(file_name.to_string())
        .mime_type(mime_type.to_string());
    MultipartForm::new().add_part("image", part)
}

pub fn png_form(data: Vec<u8>) -> MultipartForm {
    image_form(data, "photo.png", "image/png")
}
