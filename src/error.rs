use birb_material_core::PatchError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse configuration: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("failed to apply transaction: {0}")]
    Patch(#[from] PatchError),

    /// The host has been dropped and no longer receives transactions.
    #[error("host has disconnected")]
    Disconnected,
}
