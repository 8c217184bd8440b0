use colored::Colorize;
use json2class::cli;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    json2class::logging::init(command_line_interface.verbose);
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
