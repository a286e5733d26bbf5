//! UPI payment URI construction and parsing

use crate::constants::{
    DEFAULT_CURRENCY, KEY_AMOUNT, KEY_CURRENCY, KEY_PAYEE_ADDRESS, KEY_PAYEE_NAME,
    KEY_TRANSACTION_NOTE, QR_FILE_SUFFIX, UPI_PAY_PREFIX,
};
use crate::{Error, Result};

/// Payment fields encoded into a `upi://pay` URI.
///
/// The payee address is required and never blank. Every other field is
/// optional; `Some("")` is treated the same as `None` when the URI is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    payee_address: String,
    payee_name: Option<String>,
    amount: Option<String>,
    transaction_note: Option<String>,
    currency: Option<String>,
}

impl PaymentRequest {
    /// Start a request for the given payee address with the default currency.
    ///
    /// Fails with [`Error::InvalidInput`] if the address is empty or only
    /// whitespace. The address is stored as given; callers trim user input.
    pub fn new(payee_address: impl Into<String>) -> Result<Self> {
        let payee_address = payee_address.into();
        if payee_address.trim().is_empty() {
            return Err(Error::InvalidInput("payee address (pa) is required".to_string()));
        }

        Ok(Self {
            payee_address,
            payee_name: None,
            amount: None,
            transaction_note: None,
            currency: Some(DEFAULT_CURRENCY.to_string()),
        })
    }

    pub fn with_payee_name(mut self, payee_name: impl Into<String>) -> Self {
        self.payee_name = Some(payee_name.into());
        self
    }

    /// Amount as decimal text. Not parsed or range checked.
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_transaction_note(mut self, note: impl Into<String>) -> Self {
        self.transaction_note = Some(note.into());
        self
    }

    /// Override the currency. `None` drops the `cu` parameter entirely.
    pub fn with_currency(mut self, currency: Option<String>) -> Self {
        self.currency = currency;
        self
    }

    pub fn payee_address(&self) -> &str {
        &self.payee_address
    }

    pub fn payee_name(&self) -> Option<&str> {
        self.payee_name.as_deref()
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn transaction_note(&self) -> Option<&str> {
        self.transaction_note.as_deref()
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Encode as a `upi://pay?` URI.
    ///
    /// Parameters always appear in the order `pa`, `pn`, `am`, `tn`, `cu`,
    /// skipping absent or empty values.
    pub fn to_uri(&self) -> String {
        let optional = [
            (KEY_PAYEE_NAME, self.payee_name()),
            (KEY_AMOUNT, self.amount()),
            (KEY_TRANSACTION_NOTE, self.transaction_note()),
            (KEY_CURRENCY, self.currency()),
        ];

        let mut params = vec![(KEY_PAYEE_ADDRESS, self.payee_address.as_str())];
        params.extend(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v))),
        );

        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode_query_value(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}{}", UPI_PAY_PREFIX, query)
    }

    /// Parse a `upi://pay?` URI back into a request.
    ///
    /// Unknown keys are ignored. A URI without `cu` yields no currency.
    pub fn from_uri(uri: &str) -> Result<Self> {
        let query = uri
            .strip_prefix(UPI_PAY_PREFIX)
            .ok_or_else(|| Error::InvalidInput("invalid scheme".to_string()))?;

        let mut payee_address = None;
        let mut payee_name = None;
        let mut amount = None;
        let mut transaction_note = None;
        let mut currency = None;

        for part in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| Error::InvalidInput(format!("invalid param: {}", part)))?;
            let value = decode_query_value(value)?;

            match key {
                KEY_PAYEE_ADDRESS => payee_address = Some(value),
                KEY_PAYEE_NAME => payee_name = Some(value),
                KEY_AMOUNT => amount = Some(value),
                KEY_TRANSACTION_NOTE => transaction_note = Some(value),
                KEY_CURRENCY => currency = Some(value),
                _ => {}
            }
        }

        let payee_address =
            payee_address.ok_or_else(|| Error::InvalidInput("missing pa".to_string()))?;

        Ok(Self {
            payee_name,
            amount,
            transaction_note,
            currency,
            ..Self::new(payee_address)?
        })
    }
}

/// Build a UPI URI from positional fields.
///
/// `None` for `currency` means the default `INR`; `Some("")` omits it.
pub fn build_upi_uri(
    payee_address: &str,
    payee_name: Option<&str>,
    amount: Option<&str>,
    transaction_note: Option<&str>,
    currency: Option<&str>,
) -> Result<String> {
    let mut request = PaymentRequest::new(payee_address)?;
    if let Some(name) = payee_name {
        request = request.with_payee_name(name);
    }
    if let Some(amount) = amount {
        request = request.with_amount(amount);
    }
    if let Some(note) = transaction_note {
        request = request.with_transaction_note(note);
    }
    if let Some(currency) = currency {
        request = request.with_currency(Some(currency.to_string()));
    }

    Ok(request.to_uri())
}

/// File name for a saved QR image, e.g. `merchant_bank_upi_qr.png`.
///
/// Path separators are replaced too, so the name never leaves its directory.
pub fn qr_file_name(payee_address: &str) -> String {
    let stem: String = payee_address
        .chars()
        .map(|c| match c {
            '@' | '/' | '\\' => '_',
            _ => c,
        })
        .collect();
    format!("{}{}", stem, QR_FILE_SUFFIX)
}

/// Form-style percent-encoding: unreserved bytes pass through, space
/// becomes `+`, everything else becomes uppercase `%XX`.
pub fn encode_query_value(value: &str) -> String {
    // Every '%' in the output starts an escape, so "%20" only matches encoded spaces.
    urlencoding::encode(value).replace("%20", "+")
}

/// Inverse of [`encode_query_value`].
fn decode_query_value(value: &str) -> Result<String> {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|v| v.into_owned())
        .map_err(|_| Error::InvalidInput(format!("invalid percent-encoding: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_request_uri() {
        let uri = build_upi_uri(
            "merchant@bank",
            Some("Merchant Name"),
            Some("150.50"),
            Some("Order 42"),
            None,
        )
        .unwrap();

        assert_eq!(
            uri,
            "upi://pay?pa=merchant%40bank&pn=Merchant+Name&am=150.50&tn=Order+42&cu=INR"
        );
    }

    #[test]
    fn test_address_only_uri() {
        let uri = build_upi_uri("a@b", None, None, None, None).unwrap();
        assert_eq!(uri, "upi://pay?pa=a%40b&cu=INR");
    }

    #[test]
    fn test_blank_address_refused() {
        for pa in ["", "   ", "\t\n"] {
            let result = build_upi_uri(pa, Some("Name"), None, None, None);
            assert!(matches!(result, Err(Error::InvalidInput(_))), "accepted {:?}", pa);
        }
    }

    #[test]
    fn test_parameter_order_is_fixed() {
        let expected = ["pa", "pn", "am", "tn", "cu"];

        for mask in 0u8..8 {
            let pn = (mask & 1 != 0).then_some("Name");
            let am = (mask & 2 != 0).then_some("10");
            let tn = (mask & 4 != 0).then_some("Note");

            let uri = build_upi_uri("x@y", pn, am, tn, None).unwrap();
            assert!(uri.starts_with("upi://pay?pa="));

            let keys: Vec<&str> = uri
                .strip_prefix(UPI_PAY_PREFIX)
                .unwrap()
                .split('&')
                .map(|p| p.split_once('=').unwrap().0)
                .collect();

            let wanted: Vec<&str> = expected
                .iter()
                .copied()
                .filter(|k| match *k {
                    "pn" => pn.is_some(),
                    "am" => am.is_some(),
                    "tn" => tn.is_some(),
                    _ => true,
                })
                .collect();
            assert_eq!(keys, wanted, "mask {}", mask);
        }
    }

    #[test]
    fn test_empty_optional_values_are_omitted() {
        let uri = build_upi_uri("a@b", Some(""), Some(""), Some(""), Some("")).unwrap();
        assert_eq!(uri, "upi://pay?pa=a%40b");
    }

    #[test]
    fn test_currency_override() {
        let uri = build_upi_uri("a@b", None, Some("5"), None, Some("USD")).unwrap();
        assert_eq!(uri, "upi://pay?pa=a%40b&am=5&cu=USD");

        let request = PaymentRequest::new("a@b").unwrap().with_currency(None);
        assert_eq!(request.to_uri(), "upi://pay?pa=a%40b");
    }

    #[test]
    fn test_form_style_encoding() {
        assert_eq!(encode_query_value("a b"), "a+b");
        assert_eq!(encode_query_value("a+b"), "a%2Bb");
        assert_eq!(encode_query_value("50%"), "50%25");
        assert_eq!(encode_query_value("%20"), "%2520");
        assert_eq!(encode_query_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query_value("-_.~"), "-_.~");
        assert_eq!(encode_query_value("₹"), "%E2%82%B9");
    }

    #[test]
    fn test_encoded_values_decode_to_original() {
        for value in ["Merchant Name", "a+b c", "100%  sure", "chai & samosa", "₹ 20/-", " "] {
            let encoded = encode_query_value(value);
            assert!(!encoded.contains(' '));
            assert_eq!(decode_query_value(&encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_from_uri() {
        let uri = "upi://pay?pa=merchant%40bank&pn=Merchant+Name&am=150.50&tn=Order+42&cu=INR";
        let request = PaymentRequest::from_uri(uri).unwrap();

        assert_eq!(request.payee_address(), "merchant@bank");
        assert_eq!(request.payee_name(), Some("Merchant Name"));
        assert_eq!(request.amount(), Some("150.50"));
        assert_eq!(request.transaction_note(), Some("Order 42"));
        assert_eq!(request.currency(), Some("INR"));
        assert_eq!(request.to_uri(), uri);
    }

    #[test]
    fn test_from_uri_rejects_bad_input() {
        assert!(PaymentRequest::from_uri("https://example.com?pa=a").is_err());
        assert!(PaymentRequest::from_uri("upi://pay?pn=Name").is_err());
        assert!(PaymentRequest::from_uri("upi://pay?pa").is_err());
        assert!(PaymentRequest::from_uri("upi://pay?pa=+").is_err());
    }

    #[test]
    fn test_from_uri_without_currency() {
        let request = PaymentRequest::from_uri("upi://pay?pa=a%40b&x=1").unwrap();
        assert_eq!(request.currency(), None);
        assert_eq!(request.to_uri(), "upi://pay?pa=a%40b");
    }

    #[test]
    fn test_qr_file_name() {
        assert_eq!(qr_file_name("merchant@bank"), "merchant_bank_upi_qr.png");
        assert_eq!(qr_file_name("plain"), "plain_upi_qr.png");
        assert_eq!(qr_file_name("../x@y"), ".._x_y_upi_qr.png");
        assert_eq!(qr_file_name("..\\..\\x@y"), ".._.._x_y_upi_qr.png");
        assert!(!qr_file_name("/etc/passwd@x").contains('/'));
    }
}
