mod html_extract_tests;
