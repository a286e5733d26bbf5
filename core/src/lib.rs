//! UPI QR Core - payment URI builder and QR encoder
//!
//! This library builds canonical `upi://pay` URIs from payment fields and
//! renders them as PNG QR codes. The CLI and web front ends are thin
//! wrappers around these two operations.

pub mod constants;
pub mod qr;
pub mod uri;

mod error;

pub use error::{Error, Result};

// Re-export key types for convenience
pub use qr::{encode_png, encode_png_base64, png_data_uri, QrStyle, Rgb};
pub use uri::{build_upi_uri, qr_file_name, PaymentRequest};
