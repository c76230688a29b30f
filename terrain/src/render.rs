use std::path::Path;
use std::str::FromStr;

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

use crate::error::{Result, TerrainError};
use crate::grid::HeightSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Gray,
    Terrain,
}

impl FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gray" | "grey" => Ok(Colormap::Gray),
            "terrain" => Ok(Colormap::Terrain),
            other => Err(format!("unknown colormap '{other}' (expected gray or terrain)")),
        }
    }
}

// Map `value` from [min, max] to [0, 255], rounding to the nearest level.
// A flat field (min == max) has no range to stretch and maps to 0.
pub fn remap(min: i64, max: i64, value: i64) -> u8 {
    if max <= min {
        return 0;
    }
    let scaled = (value - min) as f64 * 255.0 / (max - min) as f64;
    scaled.round().clamp(0.0, 255.0) as u8
}

// Image (width, height) for a snapshot; images are limited to u32 extents
fn image_dimensions(snap: &HeightSnapshot) -> Result<(u32, u32)> {
    match (u32::try_from(snap.width), u32::try_from(snap.height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(TerrainError::InvalidDimension {
            height: snap.height,
            width: snap.width,
        }),
    }
}

// Pixel (x, y) takes the height of grid cell (y, x)
pub fn to_gray_image(snap: &HeightSnapshot) -> Result<GrayImage> {
    let (width, height) = image_dimensions(snap)?;
    Ok(GrayImage::from_fn(width, height, |x, y| {
        Luma([remap(snap.min, snap.max, snap.get(y as usize, x as usize))])
    }))
}

// Same normalization, coloured from deep water up to snow
pub fn to_terrain_image(snap: &HeightSnapshot) -> Result<RgbImage> {
    let (width, height) = image_dimensions(snap)?;
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let level = remap(snap.min, snap.max, snap.get(y as usize, x as usize));
        let col: LinSrgb = gradient.get(level as f32 / 255.0);
        let rgb = col.into_format::<u8>();
        Rgb([rgb.red, rgb.green, rgb.blue])
    }))
}

pub fn render(snap: &HeightSnapshot, colormap: Colormap) -> Result<DynamicImage> {
    Ok(match colormap {
        Colormap::Gray => DynamicImage::ImageLuma8(to_gray_image(snap)?),
        Colormap::Terrain => DynamicImage::ImageRgb8(to_terrain_image(snap)?),
    })
}

pub fn save_png(img: &DynamicImage, path: impl AsRef<Path>) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
