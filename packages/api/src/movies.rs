//! Movie catalog service. Read-only.

use store::Movie;

use crate::client::{ApiClient, Service};
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let url = self.url(Service::Movie, "/api/movies");
        let movies: Vec<Movie> = self.get(&url).await?.into_json()?;
        tracing::debug!(count = movies.len(), "fetched movies");
        Ok(movies)
    }

    pub async fn get_movie(&self, id: u64) -> Result<Movie, ApiError> {
        let url = self.url(Service::Movie, &format!("/api/movies/{id}"));
        self.get(&url).await?.into_json()
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ApiResponse;
    use store::Movie;

    #[test]
    fn test_catalog_payload_decodes_with_defaults() {
        let body = ApiResponse::Json(serde_json::json!([
            {"id": 1, "title": "Heat", "ticketPrice": 250.0, "posterUrl": "/p/heat.jpg"},
            {"id": 2, "title": "Arrival"}
        ]));
        let movies: Vec<Movie> = body.into_json().unwrap();
        assert_eq!(movies[0].poster_url.as_deref(), Some("/p/heat.jpg"));
        assert_eq!(movies[1].ticket_price, 299.0);
    }
}
