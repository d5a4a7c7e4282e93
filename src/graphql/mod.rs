pub mod envelope;
pub mod operations;

pub use envelope::{GraphQLError, GraphQLRequest, GraphQLResponse};
