// Public API tests for the contacts client against a local mock server

mod contacts;
mod context;
mod errors;
mod helpers;
