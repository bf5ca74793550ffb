use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

/// Bytes per pixel: packed 8-bit RGB.
pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.width() as usize * pixel_rect.height() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of pixel rect {}x{}",
        .pixel.x,
        .pixel.y,
        .pixel_rect.width(),
        .pixel_rect.height()
    )]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    /// Copies the pixels into an RGBA frame such as a `pixels` surface buffer,
    /// with alpha set to opaque.
    pub fn write_rgba(&self, frame: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected = self.buffer.len() / BYTES_PER_PIXEL * 4;

        if frame.len() != expected {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: expected,
                buffer_size: frame.len(),
            });
        }

        for (src, dst) in self
            .buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(frame.chunks_exact_mut(4))
        {
            dst[..BYTES_PER_PIXEL].copy_from_slice(src);
            dst[3] = 255;
        }

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Ok((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::from_size(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let pixel_rect = create_pixel_rect(10, 10);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(pixel_rect, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }), Ok(Colour::new(0, 255, 0)));
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Ok(Colour::new(0, 0, 255)));
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let pixel_rect = create_pixel_rect(2, 2);
        let result = PixelBuffer::from_data(pixel_rect, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_write_rgba_adds_opaque_alpha() {
        let pixel_rect = create_pixel_rect(2, 1);
        let buffer = PixelBuffer::from_data(pixel_rect, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let mut frame = vec![0; 8];

        buffer.write_rgba(&mut frame).unwrap();

        assert_eq!(frame, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_write_rgba_rejects_wrong_frame_size() {
        let buffer = PixelBuffer::new(create_pixel_rect(2, 2));
        let mut frame = vec![0; 12];

        assert_eq!(
            buffer.write_rgba(&mut frame),
            Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: 16,
                buffer_size: 12
            })
        );
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(2, 2);
        let buffer = PixelBuffer::new(pixel_rect);
        let pixel = Point { x: 2, y: 0 };

        assert_eq!(
            buffer.pixel(pixel),
            Err(PixelBufferError::PixelOutsideBounds { pixel, pixel_rect })
        );
    }
}
