pub mod registro;
pub mod session;
pub mod user;

pub use registro::{RegistroData, RegistroInput};
pub use session::{AuthPayload, RenewPayload, SessionRecord, TokenStatus};
pub use user::{Profile, UserSnapshot, UserType};
