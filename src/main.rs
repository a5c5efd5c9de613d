use base32::{cli, configuration::Configuration, configuration::Format, error::Error, logger::Logger, report};
use std::{
    io::{self, Read, Write},
    process,
};

fn fail(format: Format, error: &Error, code: i32) -> ! {
    match format {
        Format::Text => eprintln!("base32: {}", error),
        Format::Json => println!("{}", report::error_to_json(error)),
    }
    process::exit(code);
}

fn main() {
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(error) => fail(Format::Text, &error, 2),
    };
    let logger = Logger::new(configuration.verbose());

    let mut input = Vec::new();
    if let Err(error) = io::stdin().lock().read_to_end(&mut input) {
        fail(configuration.format(), &Error::from(error), 1);
    }
    logger.log(format!("Read {} bytes from stdin", input.len()));

    let output = match cli::run(&configuration, &logger, &input) {
        Ok(output) => output,
        Err(error) => fail(configuration.format(), &error, 1),
    };

    let mut stdout = io::stdout().lock();
    if let Err(error) = stdout.write_all(&output).and_then(|_| stdout.flush()) {
        fail(configuration.format(), &Error::from(error), 1);
    }
}
