#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoQuery {
    pub title: &'static str,
    pub sparql: String,
}

const XSD_PREFIX: &str = "PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>\n";

// (标题, 是否需要 xsd 前缀, 查询体)
const DEMO_QUERIES: &[(&str, bool, &str)] = &[
    (
        "1. PELÍCULAS EN CARTELERA",
        false,
        "SELECT ?tituloEspanol ?estreno ?duracion WHERE {
    ?pelicula cine:tituloEspanol ?tituloEspanol .
    ?pelicula cine:estreno ?estreno .
    ?pelicula cine:duracion ?duracion .
    ?pelicula cine:estado \"En cartelera\" .
} ORDER BY ?estreno",
    ),
    (
        "2. PREVENTAS",
        false,
        "SELECT ?tituloEspanol ?estreno ?formato WHERE {
    ?pelicula cine:tituloEspanol ?tituloEspanol .
    ?pelicula cine:preventa true .
    ?pelicula cine:estreno ?estreno .
    ?pelicula cine:formato ?formato .
} ORDER BY ?estreno",
    ),
    (
        "3. >2 HORAS",
        false,
        "SELECT ?tituloEspanol ?duracion ?genero WHERE {
    ?pelicula cine:tituloEspanol ?tituloEspanol .
    ?pelicula cine:duracion ?duracion .
    ?pelicula cine:genero ?genero .
    FILTER (?duracion > 120)
} ORDER BY DESC(?duracion)",
    ),
    (
        "4. POR CLASIFICACIÓN",
        false,
        "SELECT ?tituloEspanol ?clasificacion ?genero WHERE {
    ?pelicula cine:tituloEspanol ?tituloEspanol .
    ?pelicula cine:clasificacion ?clasificacion .
    ?pelicula cine:genero ?genero .
} ORDER BY ?clasificacion",
    ),
    (
        "5. CONCIERTOS Y EVENTOS",
        false,
        "SELECT ?tituloEspanol ?duracion ?estreno WHERE {
    ?pelicula cine:tituloEspanol ?tituloEspanol .
    ?pelicula cine:genero ?genero .
    ?pelicula cine:duracion ?duracion .
    ?pelicula cine:estreno ?estreno .
    FILTER (?genero = \"Concierto\" || ?genero = \"Documental\")
}",
    ),
    (
        "6. ESTRENOS NOV 2025",
        true,
        "SELECT ?tituloEspanol ?estreno ?genero WHERE {
    ?pelicula cine:tituloEspanol ?tituloEspanol .
    ?pelicula cine:estreno ?estreno .
    ?pelicula cine:genero ?genero .
    FILTER (?estreno >= \"2025-11-01\"^^xsd:date && ?estreno <= \"2025-11-30\"^^xsd:date)
} ORDER BY ?estreno",
    ),
    (
        "7. FAMILIA/ANIMACIÓN",
        false,
        "SELECT ?tituloEspanol ?clasificacion ?duracion WHERE {
    ?pelicula cine:tituloEspanol ?tituloEspanol .
    ?pelicula cine:genero ?genero .
    ?pelicula cine:clasificacion ?clasificacion .
    ?pelicula cine:duracion ?duracion .
    FILTER (?genero = \"Familiar\" || ?genero = \"Animación\")
}",
    ),
    (
        "8. DURACIÓN PROMEDIO POR GÉNERO",
        false,
        "SELECT ?genero (AVG(?duracion) AS ?duracionPromedio) (COUNT(?pelicula) AS ?totalPeliculas) WHERE {
    ?pelicula cine:genero ?genero .
    ?pelicula cine:duracion ?duracion .
    FILTER (?duracion > 0)
} GROUP BY ?genero ORDER BY DESC(?duracionPromedio)",
    ),
    (
        "9. TERROR / SUSPENSO",
        false,
        "SELECT ?tituloEspanol ?clasificacion ?duracion WHERE {
    ?pelicula cine:tituloEspanol ?tituloEspanol .
    ?pelicula cine:genero ?genero .
    ?pelicula cine:clasificacion ?clasificacion .
    ?pelicula cine:duracion ?duracion .
    FILTER (?genero = \"Terror\" || ?genero = \"Suspenso\" || ?genero = \"Thriller\")
}",
    ),
    (
        "10. PRÓXIMOS ESTRENOS",
        true,
        "SELECT ?tituloEspanol ?estreno ?formato WHERE {
    ?pelicula cine:tituloEspanol ?tituloEspanol .
    ?pelicula cine:estreno ?estreno .
    ?pelicula cine:formato ?formato .
    FILTER (?estreno > \"2025-11-13\"^^xsd:date)
} ORDER BY ?estreno",
    ),
];

pub fn demo_queries(ns: &str) -> Vec<DemoQuery> {
    DEMO_QUERIES
        .iter()
        .map(|&(title, needs_xsd, body)| {
            let mut sparql = format!("PREFIX cine: <{ns}>\n");
            if needs_xsd {
                sparql.push_str(XSD_PREFIX);
            }
            sparql.push_str(body);
            DemoQuery { title, sparql }
        })
        .collect()
}
