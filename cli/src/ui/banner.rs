//! Banner and footer printing.

use std::io::{self, Write};

/// Print the application banner.
pub fn print_banner() {
    println!("\n\x1b[1;36m╔══════════════════════════════════════╗\x1b[0m");
    println!("\x1b[1;36m║\x1b[0m            \x1b[1mUPI QR\x1b[0m                    \x1b[1;36m║\x1b[0m");
    println!("\x1b[1;36m║\x1b[0m   Payment links you can scan to pay  \x1b[1;36m║\x1b[0m");
    println!("\x1b[1;36m╚══════════════════════════════════════╝\x1b[0m\n");
}

/// Write the official UPI app links and usage notes.
pub fn write_app_links<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nOfficial app/web links:")?;
    writeln!(out, "- Google Pay: https://pay.google.com")?;
    writeln!(out, "- Paytm: https://paytm.com")?;
    writeln!(out, "- PhonePe: https://www.phonepe.com")?;

    writeln!(out, "\nNotes:")?;
    writeln!(
        out,
        "- The generated UPI URI uses the standard 'upi://pay' scheme and should be accepted by most UPI apps."
    )?;
    writeln!(out, "- You can scan the saved QR code with any UPI app to pay.")?;
    Ok(())
}
