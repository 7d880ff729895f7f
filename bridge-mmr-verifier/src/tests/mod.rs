mod test_random;
