//! Inspect command implementation.

use std::io::{self, Write};

use clap::Args;
use upiqr_core::PaymentRequest;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// UPI URI to decode, e.g. upi://pay?pa=merchant%40bank&cu=INR
    pub uri: String,
}

/// Display the decoded fields of a UPI URI.
pub fn show_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let request = PaymentRequest::from_uri(args.uri.trim())?;
    write_fields(&mut io::stdout(), &request)?;
    Ok(())
}

fn write_fields<W: Write>(out: &mut W, request: &PaymentRequest) -> io::Result<()> {
    let field = |value: Option<&str>| value.unwrap_or("-").to_string();

    writeln!(out, "\n\x1b[1mUPI Payment Request\x1b[0m")?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "\x1b[1mPayee (pa):\x1b[0m    {}", request.payee_address())?;
    writeln!(out, "\x1b[1mName (pn):\x1b[0m     {}", field(request.payee_name()))?;
    writeln!(out, "\x1b[1mAmount (am):\x1b[0m   {}", field(request.amount()))?;
    writeln!(out, "\x1b[1mNote (tn):\x1b[0m     {}", field(request.transaction_note()))?;
    writeln!(out, "\x1b[1mCurrency (cu):\x1b[0m {}", field(request.currency()))?;
    writeln!(out, "\n\x1b[2mCanonical: {}\x1b[0m\n", request.to_uri())?;
    Ok(())
}
