//! a008: грузы, рейсы и мастер создания груза

pub mod ui;
