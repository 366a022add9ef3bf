use crate::AssetError;
use image::imageops::FilterType;
use std::path::Path;

const BYTES_PER_PIXEL: usize = 4;
const FALLBACK_SIZE: u32 = 64;

/// Decoded RGBA8 image, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, AssetError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(AssetError::TextureSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode a PNG or JPEG file into RGBA8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!("decoded {} ({width}x{height})", path.display());
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Load `path`, substituting a checkerboard when it can't be read.
    pub fn load_or_fallback(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(texture) => texture,
            Err(e) => {
                tracing::warn!("{e}; using fallback checkerboard");
                Self::checkerboard(FALLBACK_SIZE)
            }
        }
    }

    /// Magenta/black checkerboard in 8-pixel cells.
    pub fn checkerboard(size: u32) -> Self {
        let size = size.max(1);
        let pixels = (0..size)
            .flat_map(|y| (0..size).map(move |x| ((x / 8) + (y / 8)) % 2 == 0))
            .flat_map(|lit| if lit { [255, 0, 255, 255] } else { [0, 0, 0, 255] })
            .collect();
        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    /// Downscale so neither side exceeds `max_dimension`, keeping the aspect
    /// ratio. Textures already within the limit are returned unchanged.
    pub fn fit_within(self, max_dimension: u32) -> Self {
        let max_dimension = max_dimension.max(1);
        let longest = self.width.max(self.height);
        if longest <= max_dimension {
            return self;
        }

        let scale = f64::from(max_dimension) / f64::from(longest);
        let shrink =
            |side: u32| ((f64::from(side) * scale).round() as u32).clamp(1, max_dimension);
        let (width, height) = (shrink(self.width), shrink(self.height));
        tracing::warn!(
            "texture {}x{} exceeds {max_dimension}px limit, downscaling to {width}x{height}",
            self.width,
            self.height
        );

        let Some(source) = image::RgbaImage::from_raw(self.width, self.height, self.pixels) else {
            tracing::warn!("texture data is truncated; using fallback checkerboard");
            return Self::checkerboard(max_dimension.min(FALLBACK_SIZE));
        };
        let resized = image::imageops::resize(&source, width, height, FilterType::Triangle);
        Self {
            width,
            height,
            pixels: resized.into_raw(),
        }
    }

    /// Bytes in one row of pixels.
    pub fn row_bytes(&self) -> u32 {
        self.width * BYTES_PER_PIXEL as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_is_rejected() {
        let err = TextureData::from_rgba8(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            AssetError::TextureSize {
                expected: 16,
                actual: 15,
                ..
            }
        ));
        assert!(TextureData::from_rgba8(0, 4, vec![]).is_err());
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let tex = TextureData::checkerboard(16);
        assert_eq!(tex.pixels.len(), 16 * 16 * 4);
        assert_eq!(tex.row_bytes(), 64);
        assert_eq!(&tex.pixels[..4], &[255, 0, 255, 255]);
        let second_cell = 8 * 4;
        assert_eq!(&tex.pixels[second_cell..second_cell + 4], &[0, 0, 0, 255]);
    }

    #[test]
    fn load_decodes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.png");
        image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let tex = TextureData::load(&path).unwrap();
        assert_eq!((tex.width, tex.height), (4, 2));
        assert_eq!(&tex.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = TextureData::load("no/such/sunBlock.jpg").unwrap_err();
        assert!(err.to_string().contains("sunBlock.jpg"));
    }

    #[test]
    fn missing_file_falls_back() {
        let tex = TextureData::load_or_fallback("no/such/earthBlock.jpg");
        assert_eq!((tex.width, tex.height), (64, 64));
    }

    #[test]
    fn oversized_texture_is_downscaled_to_limit() {
        let pixels = [10, 20, 30, 255].repeat(64 * 16);
        let tex = TextureData::from_rgba8(64, 16, pixels).unwrap();

        let fitted = tex.fit_within(32);
        assert_eq!((fitted.width, fitted.height), (32, 8));
        assert_eq!(fitted.pixels.len(), 32 * 8 * 4);
        for (got, want) in fitted.pixels[..4].iter().zip([10u8, 20, 30, 255]) {
            assert!(got.abs_diff(want) <= 1);
        }
    }

    #[test]
    fn texture_within_limit_is_unchanged() {
        let tex = TextureData::checkerboard(16);
        assert_eq!(tex.clone().fit_within(16), tex);

        let tall = TextureData::from_rgba8(1, 40, vec![255; 40 * 4]).unwrap();
        let fitted = tall.fit_within(8);
        assert_eq!((fitted.width, fitted.height), (1, 8));
    }
}
