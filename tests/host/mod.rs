mod tests_regions;
