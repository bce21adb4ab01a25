use std::{env, fs, path::PathBuf, process::ExitCode};
use veiled_prover::bench_vectors::some_valid_proofs;

// Usage: gen_vectors [OUT_PATH]   (stdout when no path is given)
fn main() -> ExitCode {
    let json = match some_valid_proofs() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("vector generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match env::args_os().nth(1).map(PathBuf::from) {
        Some(dst) => {
            if let Err(e) = fs::write(&dst, json) {
                eprintln!("write {}: {e}", dst.display());
                return ExitCode::FAILURE;
            }
            eprintln!("Wrote {}", dst.display());
        }
        None => println!("{json}"),
    }
    ExitCode::SUCCESS
}
