use std::sync::LazyLock;

use regex::Regex;

use crate::config::{Overflow, RenderConfig};
use crate::database::{ResultSet, Row};

const ELLIPSIS: &str = "...";

// 已知变量名 -> 表头，命中时原样输出
const LABEL_OVERRIDES: &[(&str, &str)] = &[
    ("tituloEspanol", "tituloEspanol"),
    ("titulo", "titulo"),
    ("estreno", "estreno"),
    ("duracion", "duracion"),
    ("genero", "genero"),
    ("clasificacion", "clasificacion"),
    ("preventa", "preventa"),
    ("formato", "formato"),
    ("duracionPromedio", "duracionPromedio"),
    ("totalPeliculas", "totalPeliculas"),
];

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("numeric pattern"));

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel case pattern"));

/// 截断、定宽之后的中间表，每次渲染生成一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTable {
    pub labels: Vec<String>,
    pub widths: Vec<usize>,
    /// 行 -> 列 -> 片段（截断模式下每个单元格只有一个片段）
    pub rows: Vec<Vec<Vec<String>>>,
}

impl DisplayTable {
    pub fn build(columns: &[String], rows: &[Row], config: &RenderConfig) -> Self {
        let max_width = config.max_col_width;
        let labels: Vec<String> = columns.iter().map(|c| nice_label(c)).collect();
        let mut widths: Vec<usize> = labels
            .iter()
            .map(|l| l.chars().count().min(max_width))
            .collect();

        let rows: Vec<Vec<Vec<String>>> = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(i, col)| {
                        // 缺失列与未绑定值都按空串处理
                        let value = row.get(col).and_then(|v| v.as_deref()).unwrap_or("");
                        let segments = match config.overflow {
                            Overflow::Truncate => vec![truncate(value, max_width)],
                            Overflow::Wrap => wrap_to_lines(value, max_width),
                        };
                        for seg in &segments {
                            widths[i] = widths[i].max(seg.chars().count());
                        }
                        segments
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            labels,
            widths,
            rows,
        }
    }

    fn separator(&self) -> String {
        let mut line = String::from("+");
        for &w in &self.widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    }

    fn header(&self) -> String {
        let mut line = String::from("|");
        for (label, &w) in self.labels.iter().zip(&self.widths) {
            line.push(' ');
            line.push_str(&center(label, w));
            line.push_str(" |");
        }
        line
    }

    fn data_lines(&self, row: &[Vec<String>]) -> Vec<String> {
        let height = row.iter().map(|c| c.len()).max().unwrap_or(1).max(1);
        (0..height)
            .map(|n| {
                let mut line = String::from("|");
                for (cell, &w) in row.iter().zip(&self.widths) {
                    let seg = cell.get(n).map(String::as_str).unwrap_or("");
                    line.push(' ');
                    line.push_str(&format_cell(seg, w, is_numeric(seg)));
                    line.push_str(" |");
                }
                line
            })
            .collect()
    }

    pub fn to_lines(&self) -> Vec<String> {
        let sep = self.separator();
        let mut lines = vec![sep.clone(), self.header(), sep.clone()];
        for row in &self.rows {
            lines.extend(self.data_lines(row));
        }
        lines.push(sep);
        lines
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    config: RenderConfig,
}

impl TableRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, columns: &[String], rows: &[Row]) -> String {
        if rows.is_empty() {
            return self.config.empty_marker.clone();
        }
        DisplayTable::build(columns, rows, &self.config)
            .to_lines()
            .join("\n")
    }

    pub fn render_result_set(&self, results: &ResultSet) -> String {
        self.render(&results.columns, &results.rows)
    }
}

pub fn nice_label(var: &str) -> String {
    if var.is_empty() {
        return String::new();
    }
    if let Some((_, label)) = LABEL_OVERRIDES.iter().find(|(name, _)| *name == var) {
        return label.to_string();
    }
    CAMEL_BOUNDARY
        .replace_all(var, "$1 $2")
        .replace('_', " ")
}

pub fn is_numeric(s: &str) -> bool {
    NUMERIC.is_match(s)
}

pub fn truncate(value: &str, max_width: usize) -> String {
    if value.chars().count() <= max_width {
        return value.to_string();
    }
    if max_width < ELLIPSIS.len() {
        return value.chars().take(max_width).collect();
    }
    let mut out: String = value.chars().take(max_width - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// 按最后一个不超过 `max_width` 的空格折行，找不到空格时硬折
pub fn wrap_to_lines(value: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut remaining = value.to_string();

    while !remaining.is_empty() {
        let chars: Vec<char> = remaining.chars().collect();
        if chars.len() <= max_width {
            lines.push(remaining);
            break;
        }
        let break_pos = match chars[..=max_width].iter().rposition(|&c| c == ' ') {
            Some(pos) if pos > 0 => pos,
            _ => max_width,
        };
        lines.push(chars[..break_pos].iter().collect());
        remaining = chars[break_pos..]
            .iter()
            .collect::<String>()
            .trim()
            .to_string();
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn center(s: &str, width: usize) -> String {
    if s.chars().count() >= width {
        return s.chars().take(width).collect();
    }
    // 奇数填充时多出的一格放在右边
    format!("{:^width$}", s, width = width)
}

fn format_cell(s: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{:>width$}", s, width = width)
    } else {
        format!("{:<width$}", s, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect()
    }

    fn renderer() -> TableRenderer {
        TableRenderer::default()
    }

    #[test]
    fn single_title_table() {
        let out = renderer().render(&cols(&["titulo"]), &[row(&[("titulo", "Tron: Ares")])]);
        let expected = "\
+------------+
|   titulo   |
+------------+
| Tron: Ares |
+------------+";
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_rows_yield_marker_line() {
        let out = renderer().render(&cols(&["titulo"]), &[]);
        assert_eq!(out, "(sin resultados)");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn numbers_right_text_left() {
        let out = renderer().render(
            &cols(&["duracion", "genero"]),
            &[row(&[("duracion", "119"), ("genero", "Acción")])],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[3], "|      119 | Acción |");
    }

    #[test]
    fn long_values_truncated_with_ellipsis() {
        let long = "x".repeat(45);
        let table = DisplayTable::build(
            &cols(&["titulo"]),
            &[row(&[("titulo", &long)])],
            &RenderConfig::default(),
        );
        let cell = &table.rows[0][0][0];
        assert_eq!(cell.chars().count(), 40);
        assert!(cell.ends_with("..."));
        assert_eq!(table.widths, vec![40]);
    }

    #[test]
    fn line_count_and_equal_widths() {
        let rows = vec![
            row(&[("tituloEspanol", "Los Ilusionistas 3"), ("duracion", "112")]),
            row(&[("tituloEspanol", "Seventeen World Tour [NEW_] In Japan: Live Viewing")]),
            row(&[("tituloEspanol", "Un Buen Ladrón"), ("duracion", "126")]),
        ];
        let out = renderer().render(&cols(&["tituloEspanol", "duracion"]), &rows);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4 + rows.len());

        let table = DisplayTable::build(
            &cols(&["tituloEspanol", "duracion"]),
            &rows,
            &RenderConfig::default(),
        );
        let expected_len = 1 + table.widths.iter().map(|w| w + 3).sum::<usize>();
        for line in &lines {
            assert_eq!(line.chars().count(), expected_len);
        }
    }

    #[test]
    fn rendering_is_repeatable() {
        let columns = cols(&["genero", "duracionPromedio"]);
        let rows = vec![row(&[("genero", "Musical"), ("duracionPromedio", "118")])];
        assert_eq!(renderer().render(&columns, &rows), renderer().render(&columns, &rows));
    }

    #[test]
    fn missing_and_unbound_cells_are_blank() {
        let mut unbound = Row::new();
        unbound.insert("duracion".to_string(), None);
        let out = renderer().render(&cols(&["duracion"]), &[unbound, Row::new()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[3], "|          |");
        assert_eq!(lines[4], "|          |");
    }

    #[test]
    fn undeclared_keys_are_ignored() {
        let out = renderer().render(
            &cols(&["genero"]),
            &[row(&[("genero", "Terror"), ("estado", "En cartelera")])],
        );
        assert!(!out.contains("En cartelera"));
    }

    #[test]
    fn zero_columns_give_bare_frame() {
        let out = renderer().render(&[], &[Row::new()]);
        assert_eq!(out, "+\n|\n+\n|\n+");
    }

    #[test]
    fn headers_centered_extra_space_right() {
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("abcd", 6), " abcd ");
        assert_eq!(center("abcdefgh", 4), "abcd");
    }

    #[test]
    fn labels_use_overrides_then_readability() {
        assert_eq!(nice_label("tituloEspanol"), "tituloEspanol");
        assert_eq!(nice_label("fechaDeEstreno"), "fecha De Estreno");
        assert_eq!(nice_label("total_salas"), "total salas");
        assert_eq!(nice_label(""), "");
    }

    #[test]
    fn numeric_detection() {
        assert!(is_numeric("119"));
        assert!(is_numeric("-3"));
        assert!(is_numeric("127.5"));
        assert!(!is_numeric("127."));
        assert!(!is_numeric("2025-11-06"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("Acción"));
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Animación", 40), "Animación");
        assert_eq!(truncate("Animación", 6), "Ani...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn wrap_breaks_on_last_space() {
        assert_eq!(
            wrap_to_lines("Seventeen World Tour In Japan", 12),
            vec!["Seventeen", "World Tour", "In Japan"]
        );
        assert_eq!(wrap_to_lines("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_to_lines("", 4), vec![""]);
    }

    #[test]
    fn wrap_mode_spans_physical_lines() {
        let config = RenderConfig::default()
            .with_max_col_width(10)
            .with_overflow(Overflow::Wrap);
        let out = TableRenderer::new(config).render(
            &cols(&["titulo", "duracion"]),
            &[row(&[("titulo", "Wicked: Por Siempre"), ("duracion", "138")])],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3], "| Wicked: |      138 |");
        assert_eq!(lines[4], "| Por     |          |");
        assert_eq!(lines[5], "| Siempre |          |");
        assert_eq!(lines[6].len(), lines[0].len());
    }
}
