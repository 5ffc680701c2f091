use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use serde::Serialize;

use fraq::Fraction;

#[derive(Debug, Serialize)]
struct DemoReport {
    left: Fraction,
    right: Fraction,
    sum: Fraction,
    difference: Fraction,
    product: Fraction,
    quotient: Fraction,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut json = false;
    let mut animate = true;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "--json" => json = true,
            "--no-delay" => animate = false,
            other => {
                eprintln!("unknown argument: {other}");
                print_help();
                return Ok(());
            }
        }
    }

    let left = Fraction::new(1, 2)?;
    let right = Fraction::new(3, 4)?;

    let report = DemoReport {
        left,
        right,
        sum: left.checked_add(right)?,
        difference: left.checked_sub(right)?,
        product: left.checked_mul(right)?,
        quotient: left.checked_div(right)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("======================================");
    println!("          magical fractions           ");
    println!("======================================");
    println!("fraction: {left}");
    println!("fraction: {right}");
    println!("--------------------------------------");
    calculating(animate)?;
    println!("sum:        {}", report.sum);
    println!("difference: {}", report.difference);
    println!("product:    {}", report.product);
    println!("quotient:   {}", report.quotient);
    println!("======================================");
    Ok(())
}

fn calculating(animate: bool) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "calculating ")?;
    out.flush()?;
    for _ in 0..5 {
        if animate {
            thread::sleep(Duration::from_millis(300));
        }
        write!(out, ".")?;
        out.flush()?;
    }
    writeln!(out, " done")?;
    Ok(())
}

fn print_help() {
    println!("fraq - bounded fraction arithmetic demo");
    println!();
    println!("usage: fraq [--json] [--no-delay]");
    println!("  --json      print the results as JSON");
    println!("  --no-delay  skip the cosmetic calculation delay");
}
