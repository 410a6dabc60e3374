mod tests_lexer;
mod tests_lexer_proptest;
