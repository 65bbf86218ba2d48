// Application Configuration
// Sticky sidebar defaults compiled from config.yaml at build time
// Modify the defaults section of config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}
