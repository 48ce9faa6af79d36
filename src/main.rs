extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate polyform;

use clap::{App, Arg, ArgMatches, SubCommand};
use polyform::{DoubleSubscriptedArray, Polynomial, Term};
use std::error::Error;
use std::io::{self, Write};
use std::process;

/// Prints the sum, difference and product of two fixed polynomials.
fn poly_demo() -> io::Result<()> {
    let p1 = Polynomial::from_terms(vec![Term::new(2., 4), Term::new(-3., 2), Term::new(5., 0)]);
    let p2 = Polynomial::from_terms(vec![Term::new(3., 3), Term::new(1., 2), Term::new(2., 0)]);
    info!("p1 = {}, p2 = {}", p1, p2);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write!(out, "Sum: ")?;
    (&p1 + &p2).write_to(&mut out)?;
    write!(out, "Difference: ")?;
    (&p1 - &p2).write_to(&mut out)?;
    write!(out, "Product: ")?;
    (&p1 * &p2).write_to(&mut out)
}

/// Fills an array with `a(i, j) = i + j` and prints it.
fn array_demo(rows: isize, columns: isize) -> Result<(), Box<dyn Error>> {
    let mut array = DoubleSubscriptedArray::new(rows, columns)?;
    for i in 0..rows {
        for j in 0..columns {
            *array.get_mut(i, j)? = (i + j) as i32;
        }
    }

    let stdout = io::stdout();
    write!(stdout.lock(), "{}", array)?;
    Ok(())
}

fn parse_dimension(matches: &ArgMatches, name: &str) -> Result<isize, Box<dyn Error>> {
    let value = matches.value_of(name).unwrap_or("0");
    value
        .parse::<isize>()
        .map_err(|e| format!("Invalid value '{}' for --{}: {}", value, name, e).into())
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    match matches.subcommand() {
        ("poly", _) => poly_demo()?,
        ("array", Some(sub)) => {
            array_demo(parse_dimension(sub, "rows")?, parse_dimension(sub, "columns")?)?
        }
        _ => {
            poly_demo()?;
            array_demo(3, 4)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("polyform")
        .version("0.1.0")
        .author("Ben Ruijl <benruyl@gmail.com>")
        .about("Term-list polynomial arithmetic and checked 2D arrays")
        .subcommand(
            SubCommand::with_name("poly")
                .about("Prints the sum, difference and product of two sample polynomials"),
        )
        .subcommand(
            SubCommand::with_name("array")
                .about("Fills an array with the sum of its subscripts and prints it")
                .arg(
                    Arg::with_name("rows")
                        .short("r")
                        .long("rows")
                        .value_name("N")
                        .help("Number of rows")
                        .default_value("3")
                        .allow_hyphen_values(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("columns")
                        .short("c")
                        .long("columns")
                        .value_name("M")
                        .help("Number of columns")
                        .default_value("4")
                        .allow_hyphen_values(true)
                        .takes_value(true),
                ),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        process::exit(1);
    }
}
