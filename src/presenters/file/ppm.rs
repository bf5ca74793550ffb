use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::write_ppm;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Writes frames as PPM files, creating missing parent directories.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        write_ppm(buffer, BufWriter::new(File::create(filepath)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_present_creates_directories_and_file() {
        let dir = std::env::temp_dir().join(format!("maze_ppm_{}", std::process::id()));
        let filepath = dir.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::new(PixelRect::from_size(3, 2).unwrap());

        PpmFilePresenter::new().present(&buffer, &filepath).unwrap();

        let written = fs::read(&filepath).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);

        fs::remove_dir_all(dir).unwrap();
    }
}
