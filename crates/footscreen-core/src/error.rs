use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: String },
}
