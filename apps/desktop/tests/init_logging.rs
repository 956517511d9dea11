use foodpacker::domain::config::LoggingConfig;
use foodpacker_desktop::init_logging;
use foodpacker_logger::LoggerError;

#[test]
fn default_logging_is_console_only_and_installs_once() {
    let logger = init_logging("foodpacker-desktop", &LoggingConfig::default())
        .expect("default logging config should initialize");
    assert!(logger.guard().is_none(), "no directory means no file worker");

    let quiet = LoggingConfig { level: "warn".to_owned(), ..LoggingConfig::default() };
    let err = init_logging("foodpacker-desktop-again", &quiet).expect_err("subscriber already set");
    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");

    let loud = LoggingConfig { level: "shouting".to_owned(), ..LoggingConfig::default() };
    let err = init_logging("foodpacker-desktop-bad", &loud).expect_err("unknown level");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
