mod args;

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let args = args::parse();

    match everbank_simplifi::transform(&args.input_file, &args.output_file, &args.date) {
        Ok(summary) => {
            log::info!(
                "kept {} of {} rows since {}",
                summary.written(),
                summary.read(),
                args.date
            );
            println!(
                "Successfully transformed {} to {}",
                args.input_file.display(),
                args.output_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
