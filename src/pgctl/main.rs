use clap::Parser;
use colored::*;
use pgctl::api::PgctlApi;
use pgctl::commands::{CmdMessage, CmdResult, Context, MessageLevel};
use pgctl::error::Result;
use pgctl::instance::{self, Instance};
use pgctl::runner::DockerRunner;
use std::io::{self, BufRead, Write};

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = instance::project_root();
    let inst = Instance::resolve(cli.instance.as_deref(), &root);
    let runner = DockerRunner::new(&inst);
    let api = PgctlApi::new(Context::new(inst), runner);

    let result = match cli.command {
        Commands::Setup => {
            println!(
                "{}",
                format!(
                    "Setting up PostgreSQL development environment (instance: {})",
                    api.instance().name()
                )
                .bold()
            );
            api.setup()?
        }
        Commands::Start => {
            println!("{}", "Starting PostgreSQL...".dimmed());
            api.start()?
        }
        Commands::Stop => {
            println!("{}", "Stopping PostgreSQL...".dimmed());
            api.stop()?
        }
        Commands::Restart => {
            println!("{}", "Restarting PostgreSQL...".dimmed());
            api.restart()?
        }
        Commands::Destroy => {
            let confirmation = prompt_destroy_confirmation()?;
            api.destroy(&confirmation)?
        }
        Commands::Status => api.status()?,
        Commands::Logs => {
            println!("{}", "Streaming PostgreSQL logs (Ctrl+C to exit)...".dimmed());
            api.logs()?
        }
        Commands::Psql => {
            println!(
                "{}",
                format!("Connecting to instance '{}'...", api.instance().name()).dimmed()
            );
            api.psql()?
        }
        Commands::Info => api.info()?,
        Commands::ConfigGen => api.config_gen()?,
        Commands::ConfigDisplay => api.config_display()?,
    };

    print_result(&result);
    Ok(())
}

// The CLI layer is the only place that touches the terminal; the
// confirmation is read here and handed to the command as plain data.
fn prompt_destroy_confirmation() -> Result<String> {
    print!(
        "{}",
        "This will DELETE ALL DATA. Type 'yes' to confirm: ".yellow().bold()
    );
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn print_result(result: &CmdResult) {
    if let Some(output) = &result.output {
        println!("{}", output);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
