//! QR code rendering to PNG

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{DynamicImage, ImageFormat, RgbImage};
use qrcode::QrCode;

use crate::constants::{DEFAULT_BORDER_MODULES, DEFAULT_MODULE_SIZE, MAX_IMAGE_SIDE};
use crate::{Error, Result};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const PINK: Rgb = Rgb([255, 192, 203]);

    /// Parse `#rrggbb`, `rrggbb` or one of `black`, `white`, `pink`.
    pub fn from_hex(value: &str) -> Result<Self> {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            "pink" => return Ok(Self::PINK),
            _ => {}
        }

        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidInput(format!("invalid color: {}", value)));
        }

        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| Error::InvalidInput(format!("invalid color: {}", value)))?;
        }
        Ok(Self(rgb))
    }
}

impl std::str::FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Visual parameters for a rendered QR image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrStyle {
    /// Pixels per module side
    pub module_size: u32,
    /// Quiet zone width, in modules
    pub border_modules: u32,
    pub foreground: Rgb,
    pub background: Rgb,
}

impl QrStyle {
    /// Pink on white, used for images saved by the CLI.
    pub fn cli_default() -> Self {
        Self {
            foreground: Rgb::PINK,
            ..Self::default()
        }
    }
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            module_size: DEFAULT_MODULE_SIZE,
            border_modules: DEFAULT_BORDER_MODULES,
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
        }
    }
}

/// Encode `text` as a QR code and serialize it as PNG bytes.
///
/// Picks the smallest symbol version that fits at error correction level M.
/// Text beyond the largest symbol's capacity fails with [`Error::QrEncoding`].
/// Styles whose image would exceed [`MAX_IMAGE_SIDE`] pixels are rejected.
pub fn encode_png(text: &str, style: &QrStyle) -> Result<Vec<u8>> {
    if style.module_size == 0 {
        return Err(Error::InvalidInput("module size must be at least 1".to_string()));
    }

    let code = QrCode::new(text.as_bytes()).map_err(|e| Error::QrEncoding(e.to_string()))?;
    let image = render(&code, style)?;

    let mut png = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| Error::Image(e.to_string()))?;

    tracing::debug!("encoded {} bytes of text into {} byte PNG", text.len(), png.len());
    Ok(png)
}

/// Same as [`encode_png`], base64 encoded for inline embedding.
pub fn encode_png_base64(text: &str, style: &QrStyle) -> Result<String> {
    encode_png(text, style).map(|png| BASE64.encode(png))
}

/// Wrap base64 PNG data as a `data:` URI usable in an `<img src>`.
pub fn png_data_uri(png_base64: &str) -> String {
    format!("data:image/png;base64,{}", png_base64)
}

/// Side length in pixels, or `None` on overflow or past [`MAX_IMAGE_SIDE`].
fn image_side(modules: u32, style: &QrStyle) -> Option<u32> {
    style
        .border_modules
        .checked_mul(2)?
        .checked_add(modules)?
        .checked_mul(style.module_size)
        .filter(|side| *side <= MAX_IMAGE_SIDE)
}

fn render(code: &QrCode, style: &QrStyle) -> Result<RgbImage> {
    let modules = code.width() as u32;
    let side = image_side(modules, style).ok_or_else(|| {
        Error::InvalidInput(format!(
            "QR image would exceed {} pixels per side (module size {}, border {})",
            MAX_IMAGE_SIDE, style.module_size, style.border_modules
        ))
    })?;

    let symbol = code
        .render::<image::Rgb<u8>>()
        .dark_color(image::Rgb(style.foreground.0))
        .light_color(image::Rgb(style.background.0))
        .module_dimensions(style.module_size, style.module_size)
        .quiet_zone(false)
        .build();

    // qrcode only knows a fixed 4-module quiet zone, so pad to the requested border.
    let offset = i64::from(style.border_modules * style.module_size);
    let mut image = RgbImage::from_pixel(side, side, image::Rgb(style.background.0));
    image::imageops::replace(&mut image, &symbol, offset, offset);
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn decode(png: &[u8]) -> RgbImage {
        image::load_from_memory_with_format(png, ImageFormat::Png)
            .unwrap()
            .to_rgb8()
    }

    #[test]
    fn test_png_dimensions_and_colors() {
        let text = "upi://pay?pa=a%40b&cu=INR";
        let style = QrStyle::default();
        let png = encode_png(text, &style).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));

        let modules = QrCode::new(text.as_bytes()).unwrap().width() as u32;
        let image = decode(&png);
        assert_eq!(image.width(), (modules + 8) * 10);
        assert_eq!(image.height(), image.width());

        // Quiet zone is background, the finder pattern corner is foreground.
        assert_eq!(image.get_pixel(0, 0).0, Rgb::WHITE.0);
        assert_eq!(image.get_pixel(40, 40).0, Rgb::BLACK.0);
    }

    #[test]
    fn test_custom_style() {
        let style = QrStyle {
            module_size: 3,
            border_modules: 1,
            foreground: Rgb::PINK,
            background: Rgb([1, 2, 3]),
        };
        let image = decode(&encode_png("hello", &style).unwrap());

        let modules = QrCode::new(b"hello").unwrap().width() as u32;
        assert_eq!(image.width(), (modules + 2) * 3);
        assert_eq!(image.get_pixel(0, 0).0, [1, 2, 3]);
        assert_eq!(image.get_pixel(3, 3).0, Rgb::PINK.0);
    }

    #[test]
    fn test_deterministic() {
        let style = QrStyle::cli_default();
        let a = encode_png("upi://pay?pa=x%40y", &style).unwrap();
        let b = encode_png("upi://pay?pa=x%40y", &style).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_too_long_for_qr() {
        let text = "a".repeat(4000);
        let result = encode_png(&text, &QrStyle::default());
        assert!(matches!(result, Err(Error::QrEncoding(_))));
    }

    #[test]
    fn test_oversized_style_rejected() {
        for (module_size, border_modules) in [(10, 3_000_000_000), (u32::MAX, 4), (2000, 4), (1, 10_000)] {
            let style = QrStyle {
                module_size,
                border_modules,
                ..QrStyle::default()
            };
            let result = encode_png("x", &style);
            assert!(
                matches!(result, Err(Error::InvalidInput(_))),
                "module size {} border {}",
                module_size,
                border_modules
            );
        }
    }

    #[test]
    fn test_largest_symbol_fits_default_style() {
        // version 40 is 177 modules
        assert_eq!(image_side(177, &QrStyle::default()), Some((177 + 8) * 10));
    }

    #[test]
    fn test_zero_module_size_rejected() {
        let style = QrStyle {
            module_size: 0,
            ..QrStyle::default()
        };
        assert!(matches!(encode_png("x", &style), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_base64_data_uri() {
        let b64 = encode_png_base64("upi://pay?pa=a%40b", &QrStyle::default()).unwrap();
        let png = BASE64.decode(&b64).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));

        let uri = png_data_uri(&b64);
        assert!(uri.starts_with("data:image/png;base64,iVBOR"));
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!(Rgb::from_hex("#ffc0cb").unwrap(), Rgb::PINK);
        assert_eq!(Rgb::from_hex("000000").unwrap(), Rgb::BLACK);
        assert_eq!("White".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("chartreuse").is_err());
        assert!(Rgb::from_hex("+1+2+3").is_err());
        assert!(Rgb::from_hex("#-1-2-3").is_err());
    }
}
