//! Centralized constants
//!
//! URI keys, defaults and file naming live here so the builder, the CLI and
//! the web form agree on them.

/// Scheme and path prefix of every payment URI
pub const UPI_PAY_PREFIX: &str = "upi://pay?";

/// Payee address query key
pub const KEY_PAYEE_ADDRESS: &str = "pa";

/// Payee name query key
pub const KEY_PAYEE_NAME: &str = "pn";

/// Amount query key
pub const KEY_AMOUNT: &str = "am";

/// Transaction note query key
pub const KEY_TRANSACTION_NOTE: &str = "tn";

/// Currency query key
pub const KEY_CURRENCY: &str = "cu";

/// Currency used when the caller does not override it
pub const DEFAULT_CURRENCY: &str = "INR";

/// Suffix appended to the sanitized payee address for saved QR images
pub const QR_FILE_SUFFIX: &str = "_upi_qr.png";

/// Pixel size of one QR module
pub const DEFAULT_MODULE_SIZE: u32 = 10;

/// Quiet zone width in modules
pub const DEFAULT_BORDER_MODULES: u32 = 4;

/// Default bind host for the web form
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port for the web form
pub const DEFAULT_PORT: u16 = 5000;

/// Largest accepted QR image side, in pixels
pub const MAX_IMAGE_SIDE: u32 = 8192;
