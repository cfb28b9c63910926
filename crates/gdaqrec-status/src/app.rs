use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("gdaqrec-status")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report whether GDAQRec is recording")
        .long_about("Polls ~/.GDAQRec_timestamp every half second. Prints the file's contents while it exists and 'not recording' otherwise. Runs until interrupted.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
}
