mod constraints_tests;
mod ddl_tests;
mod dml_tests;
mod expressions_tests;
mod literals_tests;
mod select_tests;
