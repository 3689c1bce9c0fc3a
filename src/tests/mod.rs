pub mod common;
mod cli_request;
