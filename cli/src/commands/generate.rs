//! Generate command implementation.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use upiqr_core::{encode_png, qr_file_name, PaymentRequest, QrStyle, Rgb};

use crate::opener::{open_best_effort, Opener, SystemOpener};
use crate::prompt::{non_blank, Prompter, TerminalPrompter};
use crate::ui::{render_qr_code, write_app_links};

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// UPI ID (pa)
    #[arg(long)]
    pub pa: Option<String>,

    /// Payee name (pn)
    #[arg(long)]
    pub pn: Option<String>,

    /// Amount (am)
    #[arg(long)]
    pub am: Option<String>,

    /// Transaction note (tn)
    #[arg(long)]
    pub tn: Option<String>,

    /// Open the generated QR image after creating
    #[arg(long)]
    pub open: bool,

    /// Also print the QR code in the terminal
    #[arg(long)]
    pub terminal: bool,

    /// QR foreground color (#rrggbb or black/white/pink) [default: pink]
    #[arg(long)]
    pub fg: Option<Rgb>,

    /// QR background color [default: white]
    #[arg(long)]
    pub bg: Option<Rgb>,

    /// Pixels per QR module [default: 10]
    #[arg(long)]
    pub module_size: Option<u32>,

    /// Quiet zone width in modules [default: 4]
    #[arg(long)]
    pub border: Option<u32>,

    /// Directory to save the PNG in [default: .]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

impl GenerateArgs {
    fn style(&self) -> QrStyle {
        let defaults = QrStyle::cli_default();
        QrStyle {
            module_size: self.module_size.unwrap_or(defaults.module_size),
            border_modules: self.border.unwrap_or(defaults.border_modules),
            foreground: self.fg.unwrap_or(defaults.foreground),
            background: self.bg.unwrap_or(defaults.background),
        }
    }

    fn out_dir(&self) -> &Path {
        self.out_dir.as_deref().unwrap_or(Path::new("."))
    }
}

/// Payment fields gathered from flags or prompts.
#[derive(Debug, PartialEq, Eq)]
struct Fields {
    pa: String,
    pn: Option<String>,
    am: Option<String>,
    tn: Option<String>,
}

impl Fields {
    fn into_request(self) -> upiqr_core::Result<PaymentRequest> {
        let mut request = PaymentRequest::new(self.pa)?;
        if let Some(pn) = self.pn {
            request = request.with_payee_name(pn);
        }
        if let Some(am) = self.am {
            request = request.with_amount(am);
        }
        if let Some(tn) = self.tn {
            request = request.with_transaction_note(tn);
        }
        Ok(request)
    }
}

/// Run the generate flow against the real terminal.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let mut output = io::stdout();

    generate(args, &TerminalPrompter, &mut output, &SystemOpener)?;
    Ok(())
}

/// Build the URI, save the QR image and offer to open both.
///
/// Returns the saved image path, or `None` when no UPI ID was given.
fn generate<W: Write>(
    args: &GenerateArgs,
    prompter: &dyn Prompter,
    out: &mut W,
    opener: &dyn Opener,
) -> anyhow::Result<Option<PathBuf>> {
    let Some(fields) = collect_fields(args, prompter)? else {
        writeln!(out, "UPI ID is required. Exiting.")?;
        return Ok(None);
    };

    let request = fields.into_request()?;
    let uri = request.to_uri();
    writeln!(out, "\nGenerated UPI URI:")?;
    writeln!(out, "{}", uri)?;

    let path = args.out_dir().join(qr_file_name(request.payee_address()));
    let png = encode_png(&uri, &args.style())
        .with_context(|| format!("failed to encode QR code for {}", uri))?;
    fs::write(&path, png).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("saved QR code to {}", path.display());
    writeln!(out, "Saved QR code to {}", path.display())?;

    if args.terminal {
        writeln!(out)?;
        write!(out, "{}", render_qr_code(&uri)?)?;
    }

    // A UPI app registered for the scheme may pick this up.
    if prompter.confirm("Open UPI URI now (this may open a UPI app on your device)?") {
        if let Err(e) = open_best_effort(opener, &uri) {
            writeln!(out, "Could not open UPI URI: {}", e)?;
        }
    }

    if args.open {
        if let Err(e) = open_best_effort(opener, &path.to_string_lossy()) {
            writeln!(out, "Could not open image: {}", e)?;
        }
    }

    write_app_links(out)?;
    Ok(Some(path))
}

/// Take fields from flags when `--pa` is given, otherwise prompt for them.
fn collect_fields(args: &GenerateArgs, prompter: &dyn Prompter) -> io::Result<Option<Fields>> {
    let flag = |value: &Option<String>| value.as_deref().and_then(non_blank);

    if let Some(pa) = flag(&args.pa) {
        return Ok(Some(Fields {
            pa,
            pn: flag(&args.pn),
            am: flag(&args.am),
            tn: flag(&args.tn),
        }));
    }

    let Some(pa) = prompter.text("Enter UPI ID (pa)")? else {
        return Ok(None);
    };

    Ok(Some(Fields {
        pa,
        pn: prompter.text("Payee name (optional)")?,
        am: prompter.text("Amount (optional)")?,
        tn: prompter.text("Transaction note (optional)")?,
    }))
}
