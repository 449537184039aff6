mod expressions_tests;
mod modules_tests;
mod statements_tests;
mod types_tests;
