//! Where raw places come from.

use std::future::Future;

use nogi_core::PlaceQuery;
use nogi_places::{PlacesClient, PlacesError, RawPlace};

/// A one-shot place search.
pub trait PlaceSource: Send + Sync {
    fn search(
        &self,
        query: &PlaceQuery,
    ) -> impl Future<Output = Result<Vec<RawPlace>, PlacesError>> + Send;
}

impl PlaceSource for PlacesClient {
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<RawPlace>, PlacesError> {
        PlacesClient::search(self, query).await
    }
}
