use oxigraph::model::Literal;
use oxigraph::model::vocab::xsd;
use tracing::debug;

use crate::config::AppConfig;
use crate::database::CineGraph;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub spanish_title: String,
    /// 多个类型用 ", " 分隔
    pub genre: String,
    /// 0 表示未知，不写入图
    pub duration_minutes: u32,
    pub rating: String,
    pub release_date: String,
    pub status: String,
    pub presale: bool,
    pub format: String,
}

impl Movie {
    #[allow(clippy::too_many_arguments)]
    fn listing(
        id: &str,
        title: &str,
        spanish_title: &str,
        genre: &str,
        duration_minutes: u32,
        rating: &str,
        release_date: &str,
        presale: bool,
        format: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            spanish_title: spanish_title.to_string(),
            genre: genre.to_string(),
            duration_minutes,
            rating: rating.to_string(),
            release_date: release_date.to_string(),
            status: "En cartelera".to_string(),
            presale,
            format: format.to_string(),
        }
    }

    pub fn genres(&self) -> Vec<&str> {
        self.genre.split(", ").collect()
    }
}

pub fn movies() -> Vec<Movie> {
    vec![
        Movie::listing("1", "Now You See Me: Now You Don't", "Los Ilusionistas 3", "Thriller", 112, "Mayores de 12 años", "2025-11-13", true, "Estreno"),
        Movie::listing("2", "Wicked: for Good", "Wicked: Por Siempre", "Musical", 138, "Mayores de 12 años", "2025-11-20", true, "Preventa"),
        Movie::listing("3", "Seventeen World Tour [NEW_] In Japan: Live Viewing", "Seventeen World Tour [NEW_] In Japan: Live Viewing", "Concierto", 225, "Por confirmar", "2025-11-29", true, "Estreno"),
        Movie::listing("4", "Predator: Badlands", "Depredador: Tierras Salvajes", "Acción", 0, "Mayores de 12 años", "2025-11-06", false, "Estreno"),
        Movie::listing("5", "Twice One in a Million", "Twice One in a Million", "Documental", 121, "Mayores de 7 años", "2025-11-06", true, "Estreno"),
        Movie::listing("6", "Grand Prix of Europe", "El Gran Premio: A Toda Velocidad", "Animación", 98, "Para todo el Público", "2025-11-06", false, "Estreno"),
        Movie::listing("7", "Roofman", "Un Buen Ladrón", "Comedia", 126, "Mayores de 12 años", "2025-11-06", false, "Estreno"),
        Movie::listing("8", "Dollhouse", "Dollhouse: Muñeca Maldita", "Terror", 109, "Exclusiva para Mayores de 15 años", "2025-11-06", true, "Preventa"),
        Movie::listing("9", "Rebbeca: Becky G", "Rebbeca: Becky G", "Musical", 98, "Mayores de 12 años", "2025-12-10", true, "Preventa"),
        Movie::listing("10", "Tron: Ares", "Tron: Ares", "Acción", 119, "Mayores de 7 años", "2025-10-09", false, "Estreno"),
    ]
}

pub fn add_movie(graph: &CineGraph, ns: &str, resource_base: &str, movie: &Movie) -> Result<()> {
    let subject = format!("{resource_base}{}", movie.id);
    let prop = |name: &str| format!("{ns}{name}");

    graph.insert_literal(&subject, &prop("titulo"), Literal::new_simple_literal(&movie.title))?;
    graph.insert_literal(
        &subject,
        &prop("tituloEspanol"),
        Literal::new_simple_literal(&movie.spanish_title),
    )?;
    for genre in movie.genres() {
        graph.insert_literal(&subject, &prop("genero"), Literal::new_simple_literal(genre))?;
    }
    if movie.duration_minutes > 0 {
        graph.insert_literal(
            &subject,
            &prop("duracion"),
            Literal::from(i64::from(movie.duration_minutes)),
        )?;
    }
    graph.insert_literal(
        &subject,
        &prop("clasificacion"),
        Literal::new_simple_literal(&movie.rating),
    )?;
    graph.insert_literal(
        &subject,
        &prop("estreno"),
        Literal::new_typed_literal(&movie.release_date, xsd::DATE),
    )?;
    graph.insert_literal(&subject, &prop("estado"), Literal::new_simple_literal(&movie.status))?;
    graph.insert_literal(&subject, &prop("preventa"), Literal::from(movie.presale))?;
    graph.insert_literal(&subject, &prop("formato"), Literal::new_simple_literal(&movie.format))?;

    debug!(subject = %subject, title = %movie.title, "movie added");
    Ok(())
}

pub fn build_graph(config: &AppConfig) -> Result<CineGraph> {
    let graph = CineGraph::new()?;
    for movie in movies() {
        add_movie(&graph, &config.namespace, &config.resource_base, &movie)?;
    }
    Ok(graph)
}
