use std::process;

fn main() {
    if let Err(err) = saffron_prerender::run() {
        // Print the main error message
        eprintln!("ERROR: {}", err);

        // If available, print the error chain to provide more context
        let mut source = err.source();
        if source.is_some() {
            eprintln!("\nError details:");
            while let Some(err) = source {
                eprintln!("  - {}", err);
                source = err.source();
            }

            eprintln!("\nTroubleshooting tips:");
            eprintln!("  - Check that the output directory is writable");
            eprintln!("  - Check SAFFRON_* variables in your .env file");
        }

        process::exit(1);
    }
}
