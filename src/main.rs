use std::{fs::File, io::Write};

use anyhow::Result;

use peep::emitter::indent::indent;
use peep::line::parse_program;
use peep::optimizer::jump_elimination::eliminate_dead_jumps;
use peep::optimizer::push_pop::collapse_push_pop;

const INPUT_PATH: &str = "input/out.S";
const OUTPUT_PATH: &str = "input/out_optimized.S";

fn main() {
    if let Err(e) = run() {
        eprintln!("peep: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let src = std::fs::read_to_string(INPUT_PATH)?;

    let lines = parse_program(&src);
    let lines = collapse_push_pop(&lines);
    let lines = eliminate_dead_jumps(&lines);

    let mut f = File::create(OUTPUT_PATH)?;

    for line in indent(&lines) {
        writeln!(f, "{}", line)?;
    }

    Ok(())
}
