mod tests_analysis;
mod tests_hover;
mod tests_references;
mod tests_semantic_tokens;
