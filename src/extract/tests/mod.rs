mod extract_unit_tests;
