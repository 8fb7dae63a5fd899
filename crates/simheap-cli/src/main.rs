//! Console driver for the simheap demonstrations.
//!
//! Runs three demonstrations in order: a scalar lifecycle, null-handle
//! discipline after release, and an interactive array lifecycle. Errors
//! that a demonstration deliberately provokes are caught and printed as
//! part of its output; any other arena error aborts the process.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use simheap::prelude::*;

fn main() -> ExitCode {
    println!("simheap - manual allocation with checked handles");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let demos: [(&str, fn(&mut dyn BufRead) -> Result<(), AllocError>); 3] = [
        ("scalar lifecycle", demo_scalar),
        ("null-handle discipline", demo_null_discipline),
        ("array lifecycle", demo_array),
    ];

    for (name, demo) in demos {
        println!("\n--- {name} ---");
        if let Err(err) = demo(&mut input) {
            eprintln!("demonstration '{name}' aborted: {err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Allocate one `char`, write `'F'`, read it back, release.
fn demo_scalar(_input: &mut dyn BufRead) -> Result<(), AllocError> {
    let mut arena: ManualArena<char> = ManualArena::new();

    let mut h = arena.allocate_scalar();
    println!("allocated one char: {h}");

    arena.write(&h, 'F')?;
    println!("value read back: {}", arena.read(&h)?);

    h = arena.release(h)?;
    println!("released; handle adopted as {h}");
    Ok(())
}

/// Show that an adopted null handle refuses further use.
fn demo_null_discipline(_input: &mut dyn BufRead) -> Result<(), AllocError> {
    let mut arena: ManualArena<i64> = ManualArena::new();

    let mut h = arena.allocate_scalar();
    arena.write(&h, 25)?;
    println!("handle: {h}, value: {}", arena.read(&h)?);

    h = arena.release(h)?;
    println!("released; handle adopted as {h}");

    // The refusal is the point of this demonstration.
    match arena.read(&h) {
        Err(err) => println!("read through the null handle refused: {err}"),
        Ok(v) => println!("unexpected read of freed storage: {v}"),
    }
    match arena.release(h) {
        Err(err) => println!("second release refused: {err}"),
        Ok(_) => println!("unexpected second release succeeded"),
    }
    Ok(())
}

/// Prompt for a size and per-element values, traverse twice, release.
fn demo_array(input: &mut dyn BufRead) -> Result<(), AllocError> {
    let mut arena: ManualArena<i64> = ManualArena::new();

    let size = prompt_i64(input, "Enter size for array (e.g. 3): ");
    let h = arena.allocate_array(size)?;
    println!("allocated: {h}");

    for i in 0..size {
        let value = prompt_i64(input, &format!("Enter value {i}: "));
        arena.write_at(&h, i, value)?;
    }

    println!("elements by index:");
    for i in 0..size {
        println!("  [{i}] = {}", arena.read_at(&h, i)?);
    }

    println!("elements by cursor:");
    for value in arena.iter(&h)? {
        println!("  {value}");
    }

    let stale = h;
    let h = arena.release(h)?;
    println!("released; handle adopted as {h}");
    println!(
        "arena: {} live, {} freed, {} bytes",
        arena.live_count(),
        arena.freed_count(),
        arena.memory_bytes()
    );

    // A retained copy of the old handle is a dangling reference; the
    // arena refuses it.
    match arena.read_at(&stale, 0) {
        Err(err) => println!("read through the stale copy refused: {err}"),
        Ok(v) => println!("unexpected read of freed storage: {v}"),
    }
    Ok(())
}

/// Prompt until the user supplies a parseable integer.
///
/// End of input is treated as a request to stop the program.
fn prompt_i64(input: &mut dyn BufRead, prompt: &str) -> i64 {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                eprintln!("\ninput closed, exiting");
                std::process::exit(1);
            }
            Ok(_) => {}
        }
        match line.trim().parse() {
            Ok(value) => return value,
            Err(_) => println!("not an integer: {:?}", line.trim()),
        }
    }
}
