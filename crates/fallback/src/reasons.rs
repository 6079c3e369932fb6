//! Reason sentences for locally computed recommendations.

use catalog::Movie;

/// Placeholder replaced by the genre phrase in every template
pub const GENRE_PLACEHOLDER: &str = "{genre}";

/// Default templates, picked by `movie.id % len`
pub const REASON_TEMPLATES: &[&str] = &[
    "Basado en tu interes por el {genre}, esta pelicula comparte la misma intensidad narrativa.",
    "Tu gusto por el {genre} encaja perfectamente con el estilo de esta obra maestra.",
    "Como fan del {genre}, encontraras aqui una experiencia cinematografica que te atrapara.",
    "Tus selecciones revelan afinidad por el {genre}. Esta pelicula lleva ese genero a otro nivel.",
    "Detectamos tu pasion por el {genre}. Esta es una joya imperdible del genero.",
];

/// Word used when a movie has no genres at all
const NO_GENRE: &str = "cine";

/// Lowercase phrase naming why `movie` fits the selection.
///
/// Uses up to two of the movie's genres that are among `top_genres`,
/// else its first genre.
pub fn genre_phrase(movie: &Movie, top_genres: &[&str]) -> String {
    let matching: Vec<&str> = movie
        .genres
        .iter()
        .map(String::as_str)
        .filter(|genre| top_genres.contains(genre))
        .take(2)
        .collect();

    if !matching.is_empty() {
        return matching.join(" y ").to_lowercase();
    }

    movie
        .genres
        .first()
        .map(|genre| genre.to_lowercase())
        .unwrap_or_else(|| NO_GENRE.to_string())
}

/// Fill the template selected by the movie id
pub fn build_reason(templates: &[&str], movie: &Movie, top_genres: &[&str]) -> String {
    let templates = if templates.is_empty() {
        REASON_TEMPLATES
    } else {
        templates
    };
    let template = templates[(movie.id % templates.len() as u64) as usize];
    template.replace(GENRE_PLACEHOLDER, &genre_phrase(movie, top_genres))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::DEFAULT_POSTER;

    fn movie(id: u64, genres: &[&str]) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            year: 2000,
            rating: 7.0,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            poster: DEFAULT_POSTER.to_string(),
            overview: String::new(),
        }
    }

    #[test]
    fn test_phrase_uses_matching_genres() {
        let m = movie(1, &["Accion", "Drama", "Ciencia Ficcion"]);
        let top = ["Ciencia Ficcion", "Drama", "Accion"];

        // movie order, capped at two
        assert_eq!(genre_phrase(&m, &top), "accion y drama");
    }

    #[test]
    fn test_phrase_falls_back_to_first_genre() {
        let m = movie(1, &["Animacion", "Familia"]);
        assert_eq!(genre_phrase(&m, &["Drama"]), "animacion");
    }

    #[test]
    fn test_phrase_without_genres() {
        assert_eq!(genre_phrase(&movie(1, &[]), &["Drama"]), "cine");
    }

    #[test]
    fn test_template_rotation_by_id() {
        let top = ["Drama"];
        let reason = build_reason(REASON_TEMPLATES, &movie(1124, &["Drama"]), &top);
        assert_eq!(
            reason,
            "Detectamos tu pasion por el drama. Esta es una joya imperdible del genero."
        );

        let reason = build_reason(REASON_TEMPLATES, &movie(10, &["Drama"]), &top);
        assert!(reason.starts_with("Basado en tu interes por el drama"));
    }

    #[test]
    fn test_custom_templates() {
        let templates = ["A {genre}", "B {genre}"];
        assert_eq!(build_reason(&templates, &movie(3, &["Horror"]), &[]), "B horror");
        assert!(build_reason(&[], &movie(3, &["Horror"]), &[]).contains("horror"));
    }
}
