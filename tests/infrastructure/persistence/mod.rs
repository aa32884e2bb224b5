mod memory_repository_test;
