pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod format;
pub mod queries;

use std::io::Write;

use tracing::{error, info};

use crate::catalog::build_graph;
use crate::config::AppConfig;
use crate::database::{CineGraph, QueryEngine, ResultSet};
use crate::error::{CineError, Result};
use crate::format::TableRenderer;
use crate::queries::demo_queries;

pub use config::{Overflow, RenderConfig};

// 执行一条查询并输出表格；查询失败只记日志，返回 false
pub fn print_query<E, W>(
    engine: &E,
    title: &str,
    sparql: &str,
    renderer: &TableRenderer,
    out: &mut W,
) -> Result<bool>
where
    E: QueryEngine + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "--- {title} ---")?;
    let ok = match engine.run(sparql) {
        Ok(results) => {
            writeln!(out, "{}", renderer.render_result_set(&results))?;
            true
        }
        Err(e) => {
            error!(query = title, error = %e, "SPARQL query failed");
            false
        }
    };
    writeln!(out)?;
    Ok(ok)
}

/// 构建 -> 保存 -> 重新加载 -> 依次执行示例查询。
///
/// 返回失败的查询数量；保存或加载失败时直接返回错误。
pub fn run_demo<W: Write + ?Sized>(config: &AppConfig, out: &mut W) -> Result<usize> {
    writeln!(out, "=== SISTEMA DE GESTIÓN CINE COLOMBIA ===\n")?;

    let graph = build_graph(config)?;
    let count = graph.save(&config.rdf_file)?;
    writeln!(out, "✓ Base de datos RDF guardada en: {}", config.rdf_file.display())?;
    writeln!(out, "✓ Total de triples creados: {count}\n")?;

    let loaded = CineGraph::load(&config.rdf_file)?;
    writeln!(out, "✓ Base de datos RDF cargada exitosamente")?;
    writeln!(out, "=== EJECUCIÓN DE CONSULTAS SPARQL ===\n")?;

    let renderer = TableRenderer::new(config.render.clone());
    let mut failed = 0;
    for query in demo_queries(&config.namespace) {
        if !print_query(&loaded, query.title, &query.sparql, &renderer, out)? {
            failed += 1;
        }
    }

    info!(failed, "demo queries finished");
    Ok(failed)
}

// 文件不存在时先生成示例数据
pub fn load_or_build(config: &AppConfig) -> Result<CineGraph> {
    match CineGraph::load(&config.rdf_file) {
        Err(CineError::FileNotFound(path)) => {
            info!(path = %path.display(), "RDF file missing, generating listing");
            build_graph(config)?.save(&config.rdf_file)?;
            CineGraph::load(&config.rdf_file)
        }
        other => other,
    }
}

pub fn run_query(config: &AppConfig, sparql: &str) -> Result<ResultSet> {
    load_or_build(config)?.run(sparql)
}
