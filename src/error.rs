use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseInputMethodError {
    #[error("unknown input method `{0}` (expected `telex` or `vni`)")]
    Unknown(String),
}
