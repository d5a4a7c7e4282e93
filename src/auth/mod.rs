pub mod classify;

pub use classify::{ErrorKind, LOGIN_ERRORS, REGISTRO_ERRORS};
