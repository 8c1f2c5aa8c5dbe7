use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use oxigraph::io::RdfFormat;
use oxigraph::model::{GraphName, GraphNameRef, Literal, NamedNode, Quad, Term};
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CineError, Result};

/// 列名 -> 值，缺失或 None 表示未绑定
pub type Row = BTreeMap<String, Option<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }
}

/// 查询能力：渲染层只关心结果的形状
pub trait QueryEngine {
    fn run(&self, query: &str) -> Result<ResultSet>;
}

pub struct CineGraph {
    store: Store,
}

impl CineGraph {
    pub fn new() -> Result<Self> {
        Ok(Self {
            store: Store::new()?,
        })
    }

    pub fn insert_literal(&self, subject: &str, predicate: &str, object: Literal) -> Result<()> {
        let quad = Quad::new(
            named_node(subject)?,
            named_node(predicate)?,
            object,
            GraphName::DefaultGraph,
        );
        self.store.insert(&quad)?;
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.store.len()?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.store.is_empty()?)
    }

    // 以 RDF/XML 写出默认图，返回三元组数量
    pub fn save(&self, path: &Path) -> Result<usize> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        let mut writer =
            self.store
                .dump_graph_to_writer(GraphNameRef::DefaultGraph, RdfFormat::RdfXml, writer)?;
        writer.flush()?;

        let count = self.len()?;
        info!(path = %path.display(), triples = count, "RDF graph saved");
        Ok(count)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CineError::FileNotFound(path.to_path_buf()));
        }
        let graph = Self::new()?;
        let reader = BufReader::new(File::open(path)?);
        graph.store.load_from_reader(RdfFormat::RdfXml, reader)?;

        info!(path = %path.display(), triples = graph.len()?, "RDF graph loaded");
        Ok(graph)
    }
}

impl QueryEngine for CineGraph {
    fn run(&self, query: &str) -> Result<ResultSet> {
        let QueryResults::Solutions(solutions) = self.store.query(query)? else {
            return Err(CineError::UnsupportedQuery);
        };

        let columns: Vec<String> = solutions
            .variables()
            .iter()
            .map(|v| v.as_str().to_string())
            .collect();
        let mut results = ResultSet::new(columns);

        for solution in solutions {
            let solution = solution?;
            let row: Row = results
                .columns
                .iter()
                .map(|col| (col.clone(), solution.get(col.as_str()).map(term_text)))
                .collect();
            results.rows.push(row);
        }

        debug!(
            columns = results.columns.len(),
            rows = results.rows.len(),
            "query evaluated"
        );
        Ok(results)
    }
}

// 字面量取词法形式，不带类型和引号；IRI 取裸字符串
fn term_text(term: &Term) -> String {
    match term {
        Term::Literal(lit) => lit.value().to_string(),
        Term::NamedNode(node) => node.as_str().to_string(),
        other => other.to_string(),
    }
}

fn named_node(iri: &str) -> Result<NamedNode> {
    NamedNode::new(iri).map_err(|e| CineError::InvalidIri {
        iri: iri.to_string(),
        message: e.to_string(),
    })
}
