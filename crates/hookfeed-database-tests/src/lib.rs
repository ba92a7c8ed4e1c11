mod testcase;

#[cfg(test)]
mod event;

pub use testcase::db_test_case;
