use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    UserInputMissing,
    TransportFailure,
    MalformedResponse,
    PlaybackFailure,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("no image selected")]
    UserInputMissing,
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("audio playback failed: {0}")]
    Playback(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::UserInputMissing => ErrorKind::UserInputMissing,
            ClientError::Status { .. } | ClientError::Network(_) => ErrorKind::TransportFailure,
            ClientError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            ClientError::Playback(_) => ErrorKind::PlaybackFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_network_errors_are_transport_failures() {
        let status = ClientError::Status { status: 502, body: "bad gateway".into() };
        assert_eq!(status.kind(), ErrorKind::TransportFailure);
        assert_eq!(ClientError::Network("offline".into()).kind(), ErrorKind::TransportFailure);
        assert_eq!(status.to_string(), "server responded with status 502: bad gateway");
    }

    #[test]
    fn kind_names_match_variants() {
        assert_eq!(ErrorKind::PlaybackFailure.to_string(), "PlaybackFailure");
        assert_eq!(
            ClientError::MalformedResponse("eof".into()).kind().to_string(),
            "MalformedResponse"
        );
    }
}
