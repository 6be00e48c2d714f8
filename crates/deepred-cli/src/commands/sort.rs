use crate::cli::SortArgs;
use crate::error::Result;
use deepred::workflows;
use tracing::info;

pub fn run(args: SortArgs) -> Result<()> {
    info!("Sorting {:?} into {:?}", &args.input, &args.output);
    let rows = workflows::sort::run(&args.input, &args.output)?;
    println!("✓ {} rows sorted and written to: {}", rows, args.output.display());
    Ok(())
}
