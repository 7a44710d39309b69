mod error;
mod helpers;
mod request_builder;
