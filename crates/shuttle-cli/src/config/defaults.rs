/// Compiled-in fallbacks for settings the configuration file may omit.
///
/// These mirror the constants a driver-side installation would otherwise
/// hardcode: where the engine lives, and the total charge of each QM
/// region (a single neutral region unless configured otherwise).
pub struct DefaultsConfig {
    pub engine_path: &'static str,
    pub region_charges: Vec<i64>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            engine_path: "/usr/local/bin/xtb",
            region_charges: vec![0],
        }
    }
}
