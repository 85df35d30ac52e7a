//! colormix CLI tool
//!
//! Blends the colors listed in a file (plus any given on the command line)
//! and prints the result as RGBA, hex and HSL.

use colormix::cli;

fn main() -> anyhow::Result<()> {
    cli::main()
}
