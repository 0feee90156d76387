pub mod multiline;
