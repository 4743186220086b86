use float12::Step;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Reads the whole input file, or stdin when no file is given.
pub fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Writes `data` to the output file, or stdout when no file is given.
pub fn write_output(output: Option<&PathBuf>, data: &[u8]) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, data),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()
        }
    }
}

/// Runs a streaming driver to completion, logging each checkpoint.
pub fn drive<T>(label: &str, mut step: impl FnMut() -> Step<T>) -> T {
    let mut checkpoints = 0usize;
    loop {
        match step() {
            Step::Suspended(progress) => {
                checkpoints += 1;
                log::debug!("{}: {}", label, progress);
            }
            Step::Done(output) => {
                log::info!("{}: finished after {} checkpoints", label, checkpoints);
                return output;
            }
        }
    }
}
