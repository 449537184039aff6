mod limits_tests;
mod missing_tests;
mod unexpected_tests;
