use std::io::Cursor;

use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgb8;
use crate::foundation::error::{ChartError, ChartResult};
use crate::foundation::math::{
    flatten_premul_to_rgb8, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place,
};
use crate::render::backend::FrameRGBA;

/// JPEG quality used for every lossy encode.
pub const JPEG_QUALITY: u8 = 95;

/// Output image encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageEncoding {
    /// Lossless RGBA.
    #[default]
    Png,
    /// Lossy RGB at [`JPEG_QUALITY`]; alpha is flattened onto the chart background.
    #[serde(alias = "jpg")]
    Jpeg,
}

impl ImageEncoding {
    /// MIME type served for this encoding.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageEncoding::Png => "image/png",
            ImageEncoding::Jpeg => "image/jpeg",
        }
    }

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageEncoding::Png => "png",
            ImageEncoding::Jpeg => "jpg",
        }
    }

    /// Map a file extension back to an encoding (case-insensitive, `jpeg` accepted).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageEncoding::Png),
            "jpg" | "jpeg" => Some(ImageEncoding::Jpeg),
            _ => None,
        }
    }
}

impl std::str::FromStr for ImageEncoding {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim()).ok_or_else(|| {
            ChartError::validation(format!("unsupported image format \"{s}\" (png or jpeg)"))
        })
    }
}

impl std::fmt::Display for ImageEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ImageEncoding::Png => "png",
            ImageEncoding::Jpeg => "jpeg",
        })
    }
}

/// Serialize a rendered frame.
///
/// JPEG has no alpha plane, so translucent pixels are composited over `background` first.
pub fn encode_frame(
    frame: &FrameRGBA,
    encoding: ImageEncoding,
    background: Rgb8,
) -> ChartResult<Vec<u8>> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(ChartError::encoding(format!(
            "frame buffer has {} bytes, expected {expected} for {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut buf = Vec::new();
    match encoding {
        ImageEncoding::Png => {
            let mut straight = frame.data.clone();
            if frame.premultiplied {
                unpremultiply_rgba8_in_place(&mut straight);
            }
            let img = image::RgbaImage::from_raw(frame.width, frame.height, straight)
                .ok_or_else(|| ChartError::encoding("invalid rgba buffer size"))?;
            image::DynamicImage::ImageRgba8(img)
                .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
                .map_err(|e| ChartError::encoding(format!("encode png: {e}")))?;
        }
        ImageEncoding::Jpeg => {
            let mut premul = frame.data.clone();
            if !frame.premultiplied {
                premultiply_rgba8_in_place(&mut premul);
            }
            let rgb = flatten_premul_to_rgb8(&premul, background);
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
            image::ImageEncoder::write_image(
                encoder,
                &rgb,
                frame.width,
                frame.height,
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| ChartError::encoding(format!("encode jpeg: {e}")))?;
        }
    }
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/format.rs"]
mod tests;
