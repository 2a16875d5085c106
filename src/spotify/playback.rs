use crate::{
    spotify::{ApiError, SpotifyClient},
    types::{Device, DevicesResponse, PlayRequest},
};

impl SpotifyClient {
    /// Starts or resumes playback. An empty request resumes the current
    /// context.
    pub async fn play(&self, device_id: Option<&str>, request: &PlayRequest) -> Result<(), ApiError> {
        let mut builder = self.put("/me/player/play").json(request);
        if let Some(device_id) = device_id {
            builder = builder.query(&[("device_id", device_id)]);
        }
        self.send_empty(builder).await
    }

    pub async fn pause(&self, device_id: Option<&str>) -> Result<(), ApiError> {
        let mut builder = self.put("/me/player/pause");
        if let Some(device_id) = device_id {
            builder = builder.query(&[("device_id", device_id)]);
        }
        // Spotify wants a body length on PUT even without payload.
        self.send_empty(builder.header(reqwest::header::CONTENT_LENGTH, 0))
            .await
    }

    pub async fn devices(&self) -> Result<Vec<Device>, ApiError> {
        let response: DevicesResponse = self.send_json(self.get("/me/player/devices")).await?;
        Ok(response.devices)
    }
}
