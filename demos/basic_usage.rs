//! Basic usage walkthrough
//!
//! Demonstrates the logging facade and the network helpers.
//!
//! Run with: cargo run --example basic_usage

use std::io;
use xutil::logger::{field, Branch, Enabler, Level, Logger, Options};
use xutil::netutil::{available_port, is_intranet_ipv4, local_ipv4, Scope};
use xutil::{info, warn};

fn main() {
    // Single-sink logger: JSON records to stdout, info and above. The
    // constructor also installs this logger as the process-wide global.
    let logger = Logger::new(
        io::stdout(),
        Level::Info,
        Options::new().caller(true).name("demo"),
    );

    logger.debug("hidden below the threshold");
    logger.info("service starting");
    info!(logger, "listening on port {}", 8080);
    logger.log(
        Level::Warn,
        "cache miss rate high",
        vec![field::float64("rate", 0.37), field::string("cache", "sessions")],
    );

    // Tree logger: errors to stderr, everything up to warn to stdout.
    let logger = Logger::new_tree(
        vec![
            Branch::new(io::stderr(), Enabler::at_least(Level::Error)),
            Branch::new(io::stdout(), Enabler::at_most(Level::Warn)),
        ],
        Options::new().name("routed"),
    );
    logger.info("this line goes to stdout");
    logger.error("this line goes to stderr");
    warn!(logger, "disk usage at {}%", 91);

    // Network helpers.
    println!("10.1.2.3 intranet? {}", is_intranet_ipv4("10.1.2.3"));
    println!("8.8.8.8 intranet?  {}", is_intranet_ipv4("8.8.8.8"));

    match local_ipv4(Scope::Intranet) {
        Ok(Some(addr)) => println!("local intranet address: {}", addr),
        Ok(None) => println!("no intranet address found"),
        Err(err) => println!("interface enumeration failed: {}", err),
    }

    match available_port() {
        Ok(port) => println!("free ephemeral port: {}", port),
        Err(err) => println!("port probe failed: {}", err),
    }
}
