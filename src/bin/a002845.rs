//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Console driver: prints `a(n)` for successive `n`, one line per term, with
//! wall-clock and resident-memory columns. This binary is the only part of
//! the crate that knows about wall-clock time or process memory; the core
//! (`a002845::Enumerator`) has no notion of either.

use clap::Parser;
use std::time::Instant;
use sysinfo::{Pid, ProcessRefreshKind, System};

use a002845::Enumerator;

/// Prints successive terms of OEIS A002845.
#[derive(Parser, Debug)]
#[command(name = "a002845", about = "Enumerate OEIS A002845")]
struct Args {
    /// First index to print (n >= 1).
    #[arg(long, default_value_t = 1)]
    start: i64,

    /// Number of terms to print. Omit to run until interrupted.
    #[arg(long)]
    count: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.start < 1 {
        eprintln!("error: --start must be >= 1");
        std::process::exit(1);
    }

    let mut system = System::new();
    let pid = Pid::from_u32(std::process::id());

    let mut enumerator = Enumerator::new();
    let start = Instant::now();

    let mut n = args.start;
    let mut printed: u64 = 0;
    loop {
        if let Some(count) = args.count {
            if printed >= count {
                break;
            }
        }

        let term = match enumerator.a(n) {
            Ok(term) => term,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        };

        let elapsed = format_elapsed(start.elapsed());
        let memory_mb = sample_resident_memory_mb(&mut system, pid);

        println!("a({n}) = {term} {elapsed} {memory_mb:>12.2}");
        log::debug!("computed a({n}) = {term}, cache now covers sizes 1..={n}");

        n += 1;
        printed += 1;
    }
}

/// Formats a duration as `h:mm:ss.ff`.
fn format_elapsed(elapsed: std::time::Duration) -> String {
    let total_hundredths = elapsed.as_millis() / 10;
    let hundredths = total_hundredths % 100;
    let total_seconds = total_hundredths / 100;
    let seconds = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;
    format!("{hours}:{minutes:02}:{seconds:02}.{hundredths:02}")
}

/// Samples this process's resident set size, in mebibytes, as the closest
/// available analogue to "force a collection and report steady-state
/// memory" for a runtime with no tracing garbage collector.
fn sample_resident_memory_mb(system: &mut System, pid: Pid) -> f64 {
    system.refresh_process_specifics(pid, ProcessRefreshKind::new().with_memory());
    match system.process(pid) {
        Some(process) => process.memory() as f64 / (1024.0 * 1024.0),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(0)), "0:00:00.00");
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "0:00:01.23");
        assert_eq!(
            format_elapsed(Duration::from_secs(3 * 3600 + 61)),
            "3:01:01.00"
        );
    }
}
