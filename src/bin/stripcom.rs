use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;

use peep::stripper::strip_comments;

fn main() {
    let opts = Opt::from_args();
    if let Err(e) = run(&opts) {
        eprintln!("stripcom: {}", e);
        std::process::exit(1);
    }
}

fn run(opts: &Opt) -> Result<()> {
    let src = std::fs::read_to_string(&opts.path)?;
    println!("{}", strip_comments(&src));
    Ok(())
}

#[derive(Debug, StructOpt)]
struct Opt {
    path: PathBuf,
}
