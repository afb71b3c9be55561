use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use tracing::warn;

use crate::error::CarouselError;

const CARD_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Rotation to bake into a card image before display.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Orientation {
    #[default]
    Normal,
    Rotate180,
    Rotate90Cw,
    Rotate90Ccw,
}

impl Orientation {
    /// Maps an EXIF orientation tag. Flipped variants are shown unrotated.
    pub fn from_exif(value: u16) -> Self {
        match value {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90Cw,
            8 => Orientation::Rotate90Ccw,
            _ => Orientation::Normal,
        }
    }
}

/// Lowercased extension if the file is a supported card image.
pub fn card_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    CARD_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Lists the card images in `dir`, sorted by file name.
pub fn discover_cards(dir: &Path) -> Result<Vec<PathBuf>, CarouselError> {
    let read_dir_err = |source: std::io::Error| CarouselError::ReadDir { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && card_extension(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(CarouselError::NoCards(dir.to_path_buf()));
    }
    Ok(paths)
}

/// Reads the EXIF orientation of JPEG bytes. Missing or unreadable EXIF data
/// means no rotation.
pub fn exif_orientation(bytes: &[u8]) -> Orientation {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            warn!("Could not read EXIF data: {}", e);
            return Orientation::Normal;
        }
    };
    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|field| &field.value) {
        Some(Value::Short(values)) if !values.is_empty() => Orientation::from_exif(values[0]),
        _ => Orientation::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"fake image data").expect("failed to write test file");
    }

    #[test]
    fn discovers_supported_images_sorted_by_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["c.PNG", "a.jpg", "notes.txt", "b.jpeg", "d.webp"] {
            create_test_file(temp_dir.path(), name);
        }
        fs::create_dir(temp_dir.path().join("e.png")).expect("failed to create subdir");

        let cards = discover_cards(temp_dir.path()).expect("discovery should succeed");
        let names: Vec<_> = cards
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.jpeg", "c.PNG"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "readme.md");
        assert!(matches!(discover_cards(temp_dir.path()), Err(CarouselError::NoCards(_))));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing");
        assert!(matches!(discover_cards(&missing), Err(CarouselError::ReadDir { .. })));
    }

    #[test]
    fn orientation_from_exif_tag() {
        assert_eq!(Orientation::from_exif(1), Orientation::Normal);
        assert_eq!(Orientation::from_exif(3), Orientation::Rotate180);
        assert_eq!(Orientation::from_exif(6), Orientation::Rotate90Cw);
        assert_eq!(Orientation::from_exif(8), Orientation::Rotate90Ccw);
        assert_eq!(Orientation::from_exif(2), Orientation::Normal);
    }

    #[test]
    fn garbage_bytes_have_no_rotation() {
        assert_eq!(exif_orientation(b"not an image"), Orientation::Normal);
        assert_eq!(card_extension(Path::new("x.JPG")).as_deref(), Some("jpg"));
        assert_eq!(card_extension(Path::new("x")), None);
    }
}
