fn main() {
    // Only emit ESP-IDF link args when building the firmware proper.
    // Host-target builds (tests, fuzzing) have no ESP-IDF environment.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}
