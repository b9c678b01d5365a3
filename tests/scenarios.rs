//! Runs the interpreter over real input files, the way the binary does.

use std::fs::File;
use std::io::{BufReader, Write};
use std::process::Command;

use pretty_assertions::assert_eq;

use dial::dial::{Dial, DIAL_SIZE};
use dial::interpreter::{Counters, Interpreter};

fn run_file(contents: &str) -> Counters {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();

    let handle = File::open(file.path()).unwrap();
    Interpreter::new()
        .execute(&mut BufReader::new(handle))
        .unwrap()
}

#[test]
fn empty_file() {
    assert_eq!(Counters::default(), run_file(""));
}

#[test]
fn sample_file() {
    let input = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";
    assert_eq!(
        Counters {
            zero_landings: 3,
            total_crossings: 6,
        },
        run_file(input)
    );
}

#[test]
fn crlf_and_blank_lines() {
    let input = "R50\r\n\r\n\r\nL100\r\nR\r\nr200\r\n";
    // R50 lands on 0; L100 from 0 goes a full lap; r200 goes two more.
    assert_eq!(
        Counters {
            zero_landings: 3,
            total_crossings: 4,
        },
        run_file(input)
    );
}

#[test]
fn malformed_lines_do_not_count() {
    let clean = run_file("R50\nL20\nR20\n");
    let noisy = run_file("R50\nRabc\nL20\nZ20\nL-3\nR20\n");
    assert_eq!(clean, noisy);
}

#[test]
fn position_stays_in_range() {
    let mut inter = Interpreter::with_dial(Dial::new());
    for (i, n) in [3u64, 97, 1000, 1, 250, 99, 100, 4321].iter().enumerate() {
        let line = if i % 2 == 0 { format!("L{n}") } else { format!("R{n}") };
        inter.execute_line(&line).unwrap();
        assert!((0..DIAL_SIZE).contains(&inter.dial().position()));
    }
}

#[test]
fn binary_prints_both_answers() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("input-2025.txt"), "R50\nL60\nRabc\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dial"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        "Part 1 Answer: 1\nPart 2 Answer: 1\n",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("Rabc"));
}

#[test]
fn binary_fails_without_input() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dial"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not open 'input-2025.txt'"));
}
