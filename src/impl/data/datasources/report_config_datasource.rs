use ron::from_str;

use crate::{domain::entities::report_config::ReportConfig, errors::ParseError};

pub(crate) trait ReportConfigDatasource {
    fn from_string(&self, s: &str) -> Result<ReportConfig, ParseError>;
}

pub(crate) struct ReportConfigDatasourceImpl;

impl ReportConfigDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ReportConfigDatasource for ReportConfigDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<ReportConfig, ParseError> {
        // An absent document means default preferences, not an error.
        if s.trim().is_empty() {
            return Ok(ReportConfig::default());
        }
        from_str(s).map_err(|e| ParseError::InvalidRon {
            ron_type: "ReportConfig",
            source: e,
        })
    }
}
