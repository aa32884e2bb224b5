mod connection_string_test;
