use clap_markdown::help_markdown;
use isoclock::cli::Cli;

fn main() {
    println!("# isoclock CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `isoclock` command-line interface.");
    println!();

    println!("{}", help_markdown::<Cli>());
}
