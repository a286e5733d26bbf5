//! QR code display in the terminal.

use qrcode::types::QrError;
use qrcode::{Color, QrCode};

/// Render a QR code for the terminal.
///
/// Uses Unicode block characters for compact display where
/// each character represents 2 vertical modules.
pub fn render_qr_code(data: &str) -> Result<String, QrError> {
    let code = QrCode::new(data.as_bytes())?;
    let colors = code.to_colors();
    let width = code.width();

    let dark = |i: usize| colors.get(i).map(|c| *c == Color::Dark).unwrap_or(false);
    let quiet = "  ";
    let mut out = String::new();

    // Top quiet zone
    out.push_str(&format!("{}{}\n", quiet, " ".repeat(width + 4)));

    for y in (0..colors.len()).step_by(width * 2) {
        out.push_str(quiet);
        out.push_str("  ");
        for x in 0..width {
            let ch = match (dark(y + x), dark(y + width + x)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            };
            out.push(ch);
        }
        out.push_str("  \n");
    }

    // Bottom quiet zone
    out.push_str(&format!("{}{}\n", quiet, " ".repeat(width + 4)));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_modules_per_row() {
        let rendered = render_qr_code("upi://pay?pa=a%40b&cu=INR").unwrap();
        let width = QrCode::new(b"upi://pay?pa=a%40b&cu=INR").unwrap().width();

        // quiet zones plus one text row per two module rows
        assert_eq!(rendered.lines().count(), 2 + width.div_ceil(2));
        assert!(rendered.contains('█'));
    }
}
