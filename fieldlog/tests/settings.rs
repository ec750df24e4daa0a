use fieldlog::{Environment, Settings};
use log::LevelFilter;

// Only test in this binary, so no other test observes the variables.
#[test]
fn test_settings_load_from_environment() {
    unsafe {
        std::env::set_var("FIELDLOG_ENV", "production");
        std::env::set_var("FIELDLOG_LEVEL", "warn");
    }
    let settings = Settings::load().unwrap();
    assert_eq!(settings.ENV, "production");
    assert_eq!(settings.environment(), Environment::Production);
    assert_eq!(settings.level(), LevelFilter::Warn);

    unsafe {
        std::env::remove_var("FIELDLOG_ENV");
        std::env::remove_var("FIELDLOG_LEVEL");
    }
    let settings = Settings::load().unwrap();
    assert_eq!(settings.ENV, "");
    assert_eq!(settings.LEVEL, "debug");
    assert_eq!(settings.environment(), Environment::Unknown);
    assert_eq!(settings.level(), LevelFilter::Debug);
}
