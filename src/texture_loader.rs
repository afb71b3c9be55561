use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use raylib::prelude::*;
use tracing::debug;

use carousel::cards::{Orientation, card_extension, exif_orientation};

// --- Load Card Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {:?}", image_path))?;

    let extension = card_extension(image_path).unwrap_or_default();

    // EXIF orientation only works reliably for JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        Orientation::Normal
    };

    // Provide extension hint for loading from memory
    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to load image data for {:?}: {}", image_path, e))?;

    match orientation {
        Orientation::Rotate180 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Orientation::Rotate90Cw => image.rotate_cw(),
        Orientation::Rotate90Ccw => image.rotate_ccw(),
        Orientation::Normal => {}
    }
    if orientation != Orientation::Normal {
        debug!("Applied {:?} to {:?}", orientation, image_path.file_name().unwrap_or_default());
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {:?}: {}", image_path, e))?;

    // Unload the Image data from CPU memory
    drop(image);

    Ok(texture)
}
