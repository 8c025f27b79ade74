// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Single expression: literal, const or var
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! row {
    // Table row shorthand: anything Display → Vec<String>
    ($($cell:expr),* $(,)?) => {
        ::std::vec![$( ::std::string::ToString::to_string(&$cell) ),*]
    };
}
