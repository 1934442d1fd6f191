// Device location collaborator
//
// The app only ever wants one position, once, at startup, to center the
// interactive map. Everything else works fine without it.
use async_trait::async_trait;
use tacotrail_core::models::Coord;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    Unavailable(String),
}

/// Contract consumed from whatever location service the platform has
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    async fn current_position(&self) -> Result<Coord, LocationError>;
}

/// Ask for permission, then for a position. One shot, no retry.
pub async fn query_position(provider: &dyn LocationProvider) -> Result<Coord, LocationError> {
    match provider.request_permission().await {
        PermissionStatus::Granted => {
            let position = provider.current_position().await?;
            debug!("Got device position: {}", position);
            Ok(position)
        }
        PermissionStatus::Denied => Err(LocationError::PermissionDenied),
    }
}

/// A stand-in GPS pinned to one coordinate, for demos and tests
pub struct FixedLocation {
    position: Coord,
}

impl FixedLocation {
    pub fn new(position: Coord) -> Self {
        Self { position }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_position(&self) -> Result<Coord, LocationError> {
        Ok(self.position)
    }
}

/// No location service at all - permission is always denied
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Denied
    }

    async fn current_position(&self) -> Result<Coord, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_location_grants_and_reports() {
        let provider = FixedLocation::new(Coord::new(35.0456, -85.3097));
        assert_eq!(provider.request_permission().await, PermissionStatus::Granted);

        let position = query_position(&provider).await.unwrap();
        assert_eq!(position, Coord::new(35.0456, -85.3097));
    }

    #[tokio::test]
    async fn test_no_location_denies() {
        let provider = NoLocation;
        let err = query_position(&provider).await.unwrap_err();
        assert!(matches!(err, LocationError::PermissionDenied));
    }

    #[tokio::test]
    async fn test_denied_permission_short_circuits() {
        let mut provider = MockLocationProvider::new();
        provider
            .expect_request_permission()
            .times(1)
            .returning(|| PermissionStatus::Denied);
        // current_position must never be called after a denial
        provider.expect_current_position().times(0);

        let err = query_position(&provider).await.unwrap_err();
        assert!(matches!(err, LocationError::PermissionDenied));
    }
}
