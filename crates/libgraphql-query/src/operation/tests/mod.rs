mod arguments_tests;
mod connection_tests;
