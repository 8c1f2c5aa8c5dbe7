use std::path::PathBuf;

use serde::Serialize;

pub const DEFAULT_NAMESPACE: &str = "http://example.org/cine#";
pub const DEFAULT_RESOURCE_BASE: &str = "http://example.org/pelicula/";
pub const DEFAULT_RDF_FILE: &str = "cine_colombia_actual.rdf";
pub const DEFAULT_MAX_COL_WIDTH: usize = 40;
pub const DEFAULT_EMPTY_MARKER: &str = "(sin resultados)";

/// 超长单元格的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// 截断并追加 "..."
    #[default]
    Truncate,
    /// 按空格折行，一行数据可占多行输出
    Wrap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub max_col_width: usize,
    pub empty_marker: String,
    pub overflow: Overflow,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_col_width: DEFAULT_MAX_COL_WIDTH,
            empty_marker: DEFAULT_EMPTY_MARKER.to_string(),
            overflow: Overflow::Truncate,
        }
    }
}

impl RenderConfig {
    pub fn with_max_col_width(mut self, width: usize) -> Self {
        self.max_col_width = width;
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub namespace: String,
    pub resource_base: String,
    pub rdf_file: PathBuf,
    pub render: RenderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            resource_base: DEFAULT_RESOURCE_BASE.to_string(),
            rdf_file: PathBuf::from(DEFAULT_RDF_FILE),
            render: RenderConfig::default(),
        }
    }
}
