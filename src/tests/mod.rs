mod rust_api_tests;
