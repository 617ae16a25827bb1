use ffi_sample::{initialize, logger, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_logger();

    // must stay the first thing written to stdout
    initialize(&mut std::io::stdout().lock())?;

    run(&mut std::io::stdout(), bridge::call_c_function)?;

    Ok(())
}
