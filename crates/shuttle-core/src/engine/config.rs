use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Region charge table must not be empty")]
    EmptyChargeTable,
}

/// Runtime configuration of the bridge.
///
/// Constructed once at process start and passed by reference into the
/// workflow; never stored globally, so the pipeline stays testable with
/// injected fake configurations.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Absolute path of the external engine executable.
    pub engine_path: PathBuf,
    /// Total charge of each independent QM region, indexed by region id.
    ///
    /// The driver treats each QM region independently and runs it in its
    /// own numbered scratch directory; that number indexes this table.
    pub region_charges: Vec<i64>,
}

impl BridgeConfig {
    /// Bounds-checked lookup of the total charge of a QM region.
    pub fn region_charge(&self, region: usize) -> Option<i64> {
        self.region_charges.get(region).copied()
    }
}

#[derive(Default)]
pub struct BridgeConfigBuilder {
    engine_path: Option<PathBuf>,
    region_charges: Option<Vec<i64>>,
}

impl BridgeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine_path(mut self, path: PathBuf) -> Self {
        self.engine_path = Some(path);
        self
    }

    pub fn region_charges(mut self, charges: Vec<i64>) -> Self {
        self.region_charges = Some(charges);
        self
    }

    pub fn build(self) -> Result<BridgeConfig, ConfigError> {
        let engine_path = self
            .engine_path
            .ok_or(ConfigError::MissingParameter("engine_path"))?;
        let region_charges = self
            .region_charges
            .ok_or(ConfigError::MissingParameter("region_charges"))?;
        if region_charges.is_empty() {
            return Err(ConfigError::EmptyChargeTable);
        }
        Ok(BridgeConfig {
            engine_path,
            region_charges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_complete_config() {
        let config = BridgeConfigBuilder::new()
            .engine_path(PathBuf::from("/opt/xtb/bin/xtb"))
            .region_charges(vec![0, -1])
            .build()
            .unwrap();
        assert_eq!(config.engine_path, PathBuf::from("/opt/xtb/bin/xtb"));
        assert_eq!(config.region_charges, vec![0, -1]);
    }

    #[test]
    fn builder_reports_missing_parameters() {
        let err = BridgeConfigBuilder::new()
            .region_charges(vec![0])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("engine_path"));

        let err = BridgeConfigBuilder::new()
            .engine_path(PathBuf::from("/opt/xtb/bin/xtb"))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("region_charges"));
    }

    #[test]
    fn empty_charge_table_is_rejected() {
        let err = BridgeConfigBuilder::new()
            .engine_path(PathBuf::from("/opt/xtb/bin/xtb"))
            .region_charges(vec![])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyChargeTable);
    }

    #[test]
    fn region_charge_lookup_is_bounds_checked() {
        let config = BridgeConfigBuilder::new()
            .engine_path(PathBuf::from("/opt/xtb/bin/xtb"))
            .region_charges(vec![0, -1, 2])
            .build()
            .unwrap();
        assert_eq!(config.region_charge(1), Some(-1));
        assert_eq!(config.region_charge(2), Some(2));
        assert_eq!(config.region_charge(3), None);
    }
}
