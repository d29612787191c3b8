use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use tinyc::mach;

/// Tiny-C compiler and virtual machine.
#[derive(Parser)]
#[command(name = "tinyc", version)]
struct Cli {
    /// Source file to compile and run.
    path: PathBuf,
    /// Value stack capacity.
    #[arg(long, default_value_t = mach::DEFAULT_STACK_SIZE)]
    stack_size: usize,
    /// Print the compiled instruction list before running.
    #[arg(short, long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();
    let source = match std::fs::read_to_string(&cli.path) {
        Ok(source) => source,
        Err(e) => fail(&format!("{}: {}", cli.path.display(), e)),
    };
    let mut runtime = match mach::compile(&source, cli.stack_size) {
        Ok(runtime) => runtime,
        Err(e) => fail(&e.to_string()),
    };
    if cli.list {
        for (address, op) in runtime.code().iter().enumerate() {
            println!("{:>4} {}", address, op);
        }
    }
    if let Err(e) = runtime.run() {
        fail(&e.to_string());
    }
    for (index, value) in runtime.variables().iter().enumerate() {
        if value != 0 {
            println!("{} = {}", (b'a' + index as u8) as char, value);
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", ansi_term::Colour::Red.paint(message));
    exit(1)
}
