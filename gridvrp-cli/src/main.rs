//! A command line interface to a synthetic *Capacitated Vehicle Routing Problem with Time
//! Windows* generator and solver.
//!
//! ## Usage
//!
//! Generate and solve the default instance of 100 orders and 20 vehicles:
//!
//!     gridvrp-cli
//!
//! A reproducible run with grouped orders, writing the plan to a file:
//!
//!     gridvrp-cli --deterministic --same-vehicle-costs -o plan.txt
//!
//! A bounded search over a dumped instance:
//!
//!     gridvrp-cli --search-params '{"timeLimitMs":1000,"logSearch":true}' --dump-instance instance.json
//!
//! For more details, simply run
//!
//!     gridvrp-cli --help

mod args;

use self::args::*;

mod report;

use self::report::*;

use gridvrp_core::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let options = get_run_options(&matches).unwrap_or_else(|err| {
        eprintln!("cannot read arguments: '{err}'");
        process::exit(1);
    });

    if let Err(err) = run(options) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(options: RunOptions) -> GenericResult<()> {
    let environment =
        Environment { use_deterministic_seed: options.use_deterministic_seed, ..Environment::default() };

    let instance = generate_instance(&options.instance, &options.params, &environment)?;

    if let Some(path) = options.dump_instance.as_deref() {
        let file = create_file(path, "instance dump");
        let mut writer = create_write_buffer(Some(file));
        serde_json::to_writer_pretty(&mut writer, &instance)?;
        writer.flush()?;
    }

    let model = configure_routing_model(&instance, &options.instance, &options.params)?;
    let solver = BestInsertionSolver::new(environment.logger.clone());

    match solver.solve(&model, &options.search)? {
        Some(assignment) => {
            let out_file = options.out_solution.as_deref().map(|path| create_file(path, "out solution"));
            let mut writer = create_write_buffer(out_file);
            write_plan(&mut writer, &model, &assignment)?;
            writer.flush()?;
        }
        None => println!("no solution found"),
    }

    Ok(())
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}
