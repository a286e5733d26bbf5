//! UI utilities for terminal output.

mod banner;
mod qr;

pub use banner::{print_banner, write_app_links};
pub use qr::render_qr_code;
