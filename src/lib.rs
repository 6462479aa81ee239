pub mod benchmarks;
pub mod cli;
pub mod ctx;
pub mod engine;
pub mod io;
pub mod pipeline;
pub mod schema;
pub mod store;
