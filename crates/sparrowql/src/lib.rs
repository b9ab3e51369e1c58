pub use sparrowql_core::*;
