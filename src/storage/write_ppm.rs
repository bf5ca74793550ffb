use std::io::Write;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary PPM image.
pub fn write_ppm(buffer: &PixelBuffer, mut writer: impl Write) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // P6: binary RGB, then width height max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_header_precedes_raw_pixels() {
        let pixel_rect = PixelRect::from_size(2, 1).unwrap();
        let buffer = PixelBuffer::from_data(pixel_rect, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let mut out = Vec::new();

        write_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(out, expected);
    }
}
