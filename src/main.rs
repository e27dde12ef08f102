use anyhow::Result;

fn main() -> Result<()> {
    numguess::cli::run_cli()
}
