mod test_error;
mod test_operations;
