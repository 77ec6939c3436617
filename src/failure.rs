use eyre::Report;

#[derive(Debug, thiserror::Error)]
#[error("Notion API request failure: {source}")]
pub struct Error {
    kind: ErrorKind,
    source: Report,
}

#[derive(Debug)]
enum ErrorKind {
    Communication,
    Decode,
    InvalidInput,
}

impl Error {
    pub(crate) fn communication(err: ureq::Transport) -> Self {
        Self {
            kind: ErrorKind::Communication,
            source: Report::new(err),
        }
    }

    pub(crate) fn decode(err: impl Into<Report>) -> Self {
        Self {
            kind: ErrorKind::Decode,
            source: err.into(),
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            source: Report::msg(message.into()),
        }
    }

    pub fn is_communication(&self) -> bool {
        matches!(self.kind, ErrorKind::Communication)
    }

    pub fn is_decode(&self) -> bool {
        matches!(self.kind, ErrorKind::Decode)
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidInput)
    }
}
