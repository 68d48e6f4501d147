use clap::Parser;
use jogkit::cli::Cli;
use jogkit::console::{parse_line, Console, ConsoleCommand};
use jogkit::{init_logging, WriterTransport, BUILD_DATE, VERSION};
use std::io::BufRead;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = cli.load_config()?;
    tracing::info!("jogkit {} built {}", VERSION, BUILD_DATE);

    let transport = WriterTransport::new(std::io::stdout());
    let mut console = Console::new(&config, transport)?;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{:#}", e);
                continue;
            }
        };
        if command == ConsoleCommand::Quit {
            break;
        }
        match console.execute(command) {
            Ok(Some(reply)) => eprintln!("{}", reply),
            Ok(None) => {}
            Err(e) => tracing::error!("{:#}", e),
        }
    }

    Ok(())
}
