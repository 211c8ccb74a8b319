use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};
use log::{error, info};
use rowdb::cli::Cli;
use rowdb::input::InputBuffer;
use rowdb::{InputError, Outcome, Table, process_line};

fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
}

fn print_prompt(prompt: &str) -> io::Result<()> {
    print!("{prompt}");
    io::stdout().flush()
}

fn open_input(cli: &Cli) -> Result<Box<dyn BufRead>, InputError> {
    match &cli.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| InputError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Drives the table until `.exit` or until input runs out. The table is
/// dropped on every return path.
fn run(cli: &Cli) -> Result<(), InputError> {
    let mut input_buffer = InputBuffer::new(open_input(cli)?);
    let mut table = Table::new();

    loop {
        print_prompt(&cli.prompt)?;
        let line = input_buffer.read_input()?;

        match process_line(&mut table, line) {
            Ok(Outcome::Exit) => {
                info!("exit requested with {} rows", table.num_rows());
                return Ok(());
            }
            Ok(Outcome::Inserted) => println!("Executed."),
            Ok(Outcome::Rows(rows)) => {
                for row in rows {
                    println!("{row}");
                }
                println!("Executed.");
            }
            Err(e) => println!("{e}"),
        }
    }
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            println!("Error reading input.");
            ExitCode::FAILURE
        }
    }
}
