//! Wildland binary: argument handling and game startup.

use wildland::build_info;
use wildland::core::day_cycle::Game;
use wildland::interface::ConsoleInterface;

fn print_help() {
    println!("Wildland - Terminal-Based Survival Adventure\n");
    println!("Usage: wildland [OPTION]\n");
    println!("Options:");
    println!("  -v, --version    Print version information and exit");
    println!("  -h, --help       Print this help and exit");
    println!("\nRun with no arguments to start a new game.");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "wildland {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return;
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            other => {
                eprintln!("unknown argument: {other}");
                eprintln!("try 'wildland --help'");
                std::process::exit(2);
            }
        }
    }

    let mut rng = rand::thread_rng();
    let mut game = Game::create(ConsoleInterface::new());
    game.run(&mut rng);
}
