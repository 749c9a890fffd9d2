mod connection_convention_tests;
