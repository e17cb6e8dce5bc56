use log::LevelFilter;
use salvo::{init_logging, level_from};

#[test]
fn test_level_from_env_value() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" WARN ")), LevelFilter::Warn);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
    assert_eq!(level_from(Some("chatty")), LevelFilter::Info);
}

#[test]
fn test_init_logging_twice_is_harmless() {
    init_logging();
    init_logging();
    log::info!("logger installed");
}
