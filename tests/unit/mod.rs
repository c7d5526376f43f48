/// Unit test suite entry point

mod command_tests;
