mod song_parser_tests;
