use crate::{
    spotify::{ApiError, PAGE_SIZE, SpotifyClient},
    types::{Playlist, PlaylistTracksResponse, SearchResponse, Track},
};

impl SpotifyClient {
    /// Searches playlists matching `query`, first page only.
    pub async fn search_playlists(&self, query: &str) -> Result<Vec<Playlist>, ApiError> {
        let response: SearchResponse = self.search(query, "playlist").await?;
        Ok(response
            .playlists
            .map(|page| page.items.into_iter().flatten().collect())
            .unwrap_or_default())
    }

    /// Searches tracks matching `query`, first page only.
    pub async fn search_tracks(&self, query: &str) -> Result<Vec<Track>, ApiError> {
        let response: SearchResponse = self.search(query, "track").await?;
        Ok(response
            .tracks
            .map(|page| page.items.into_iter().flatten().collect())
            .unwrap_or_default())
    }

    /// Fetches the first page of a playlist's tracks. Local files and
    /// removed tracks come back as `null` and are skipped.
    pub async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, ApiError> {
        let request = self
            .get(&format!("/playlists/{}/tracks", playlist_id))
            .query(&[("limit", PAGE_SIZE)]);
        let response: PlaylistTracksResponse = self.send_json(request).await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| item.track)
            .collect())
    }

    async fn search(&self, query: &str, kind: &str) -> Result<SearchResponse, ApiError> {
        let limit = PAGE_SIZE.to_string();
        let request = self
            .get("/search")
            .query(&[("q", query), ("type", kind), ("limit", limit.as_str())]);
        self.send_json(request).await
    }
}
