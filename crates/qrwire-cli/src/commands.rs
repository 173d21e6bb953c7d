use super::args::Cli;
use super::handlers;
use anyhow::Result;
use is_terminal::IsTerminal;
use qrwire_schemes::Scheme;

pub fn run(cli: Cli) -> Result<()> {
    let enable_color = !cli.no_color && std::io::stdout().is_terminal();

    if cli.list {
        return handlers::list::handle(cli.format);
    }

    let Some(name) = cli.scheme.as_deref() else {
        show_guidance();
        return Ok(());
    };

    let scheme = Scheme::lookup(name)
        .map_err(|e| anyhow::anyhow!("{} (run 'qrwire --list' to see supported schemes)", e))?;

    handlers::generate::handle(scheme, &cli, enable_color)
}

fn show_guidance() {
    println!("qrwire - QR codes for contacts, events, WiFi and links\n");

    println!("Get started:");
    println!("  qrwire --type wifi                # Prompt for a network, draw the code");
    println!("  qrwire --type vcard --save card   # Save a contact card as card.png");
    println!("  qrwire --type url --print         # Print the payload text only\n");

    println!("Supported schemes:");
    println!("  qrwire --list\n");

    println!("For all flags:");
    println!("  qrwire --help");
}
