//! HTML pages for the web form.

use upiqr_core::png_data_uri;

const STYLE: &str = "body{font-family:sans-serif;max-width:32rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:.75rem}input{width:100%;padding:.4rem}\
.error{color:#b00020}code{word-break:break-all}";

/// Input form, optionally with an error message above it.
pub fn index_page(error: Option<&str>) -> String {
    let error = error
        .map(|e| format!("<p class=\"error\">{}</p>\n", escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>UPI QR Generator</title><style>{style}</style></head>
<body>
<h1>UPI QR Generator</h1>
{error}<form method="post" action="/generate">
<label>UPI ID (pa) <input name="pa" required></label>
<label>Payee name (pn) <input name="pn"></label>
<label>Amount (am) <input name="am"></label>
<label>Transaction note (tn) <input name="tn"></label>
<p><button type="submit">Generate QR</button></p>
</form>
</body>
</html>
"#,
        style = STYLE,
        error = error,
    )
}

/// Result page with the URI and its QR code inlined.
pub fn result_page(uri: &str, qr_b64: &str, pa: &str) -> String {
    let uri = escape_html(uri);
    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>UPI QR for {pa}</title><style>{style}</style></head>
<body>
<h1>Pay {pa}</h1>
<p><img alt="UPI QR code" src="{qr_src}"></p>
<p>URI: <code>{uri}</code></p>
<p><a href="{uri}">Open in UPI app</a> · <a href="/">Generate another</a></p>
</body>
</html>
"#,
        style = STYLE,
        pa = escape_html(pa),
        qr_src = png_data_uri(qr_b64),
        uri = uri,
    )
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
