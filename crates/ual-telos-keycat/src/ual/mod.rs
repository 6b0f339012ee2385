/*
[INPUT]:  Host framework contract definitions
[OUTPUT]: Authenticator/User traits and the host error taxonomy
[POS]:    Host contract layer - the interface this adapter plugs into
[UPDATE]: When the host lifecycle or user capability set changes
*/

pub mod error;
pub mod traits;

pub use error::{Result, UalError, UalErrorKind};
pub use traits::{
    Authenticator,
    ButtonStyle,
    SignTransactionConfig,
    SignTransactionResponse,
    User,
};
