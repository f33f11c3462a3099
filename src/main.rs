use structopt::StructOpt;

use ataxx::cli::commands::Command;
use ataxx::cli::Ataxx;

fn main() {
    env_logger::init();
    Ataxx::from_args().execute();
}
