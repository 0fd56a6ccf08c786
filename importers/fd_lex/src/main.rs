//! `fd-lex` CLI.

use fd_lex::{init_tracing, parse_args, run, Command, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Ok(Command::Lex(config)) => config,
        Err(e) => {
            eprintln!("error: {e}");
            if e.wants_usage() {
                eprintln!();
                eprintln!("{USAGE}");
            }
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(&config, &mut stdout) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
