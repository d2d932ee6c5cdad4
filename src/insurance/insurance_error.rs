use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsuranceError {
    #[error("insurance lookup not configured")]
    NotConfigured,
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Rate service returned HTTP {0}")]
    Status(u16),
    #[error("Malformed rate response: {0}")]
    Decode(String),
    #[error("Rate service reported errors: {}", .0.join("; "))]
    Api(Vec<String>),
}
